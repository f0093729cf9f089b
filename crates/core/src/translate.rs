//! Translation seam for language-based name variations.
//!
//! The `translation` rules need to turn an English organization or department
//! name into the language advertised by the linked contact point. Translation
//! is an external capability: the engine only depends on the [`Translate`]
//! trait, and any failure degrades to a `no_change` variation at the rule
//! level. The bundled [`GlossaryTranslator`] covers the vocabulary the
//! generator emits from a static glossary, so the default pipeline needs no
//! network access.

/// Error type for translation attempts.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("unsupported target language: '{0}'")]
    UnsupportedLanguage(String),
    #[error("no translation available for '{0}'")]
    MissingTerm(String),
}

/// Translates English text into a target language identified by its
/// two-letter code.
pub trait Translate {
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslateError>;
}

/// English-to-`{nl, de, et}` healthcare terms. Word-level lookups are
/// case-insensitive on the English side.
const GLOSSARY: &[(&str, &str, &str, &str)] = &[
    // (english, nl, de, et)
    ("healthcare", "gezondheidszorg", "Gesundheitswesen", "tervishoid"),
    ("health", "gezondheid", "Gesundheit", "tervis"),
    ("hospital", "ziekenhuis", "Krankenhaus", "haigla"),
    ("clinic", "kliniek", "Klinik", "kliinik"),
    ("center", "centrum", "Zentrum", "keskus"),
    ("emergency", "spoedeisende hulp", "Notaufnahme", "erakorraline"),
    ("surgical", "chirurgie", "Chirurgie", "kirurgia"),
    ("surgery", "chirurgie", "Chirurgie", "kirurgia"),
    ("pediatric", "kindergeneeskunde", "Kinderheilkunde", "pediaatria"),
    ("psychiatric", "psychiatrie", "Psychiatrie", "psühhiaatria"),
    ("pathology", "pathologie", "Pathologie", "patoloogia"),
    ("pharmacy", "apotheek", "Apotheke", "apteek"),
    ("nursing", "verpleging", "Pflege", "õendus"),
    ("dentistry", "tandheelkunde", "Zahnmedizin", "hambaravi"),
    ("dermatology", "dermatologie", "Dermatologie", "dermatoloogia"),
    ("laboratory", "laboratorium", "Labor", "labor"),
    ("radiography", "radiologie", "Radiologie", "radiograafia"),
    ("cardiovascular", "cardiovasculair", "Herz-Kreislauf", "kardiovaskulaarne"),
    ("neurologic", "neurologie", "Neurologie", "neuroloogia"),
    ("oncologic", "oncologie", "Onkologie", "onkoloogia"),
    ("obstetric", "verloskunde", "Geburtshilfe", "sünnitusabi"),
    ("geriatric", "ouderengeneeskunde", "Geriatrie", "geriaatria"),
    ("infectious", "infectieziekten", "Infektiologie", "nakkushaigused"),
    ("respiratory", "ademhaling", "Atemwege", "hingamisteede"),
    ("community", "gemeenschap", "Gemeinde", "kogukond"),
    ("public", "openbaar", "öffentlich", "avalik"),
    ("primary", "eerstelijns", "Grundversorgung", "esmatasandi"),
    ("care", "zorg", "Pflege", "hooldus"),
    ("zorg", "zorg", "Pflege", "hooldus"),
    ("gesundheitszentrum", "gezondheidscentrum", "Gesundheitszentrum", "tervisekeskus"),
    ("tervisekeskus", "gezondheidscentrum", "Gesundheitszentrum", "tervisekeskus"),
];

/// Static glossary-backed [`Translate`] implementation.
///
/// Translates word by word. Words absent from the glossary (company stems,
/// surnames) are kept verbatim; the attempt only fails when *no* word of the
/// input could be translated, since the output would then equal the input and
/// carry no signal for a deduplication benchmark.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlossaryTranslator;

impl GlossaryTranslator {
    pub fn new() -> Self {
        Self
    }

    fn column(target_language: &str) -> Result<usize, TranslateError> {
        match target_language {
            "nl" => Ok(1),
            "de" => Ok(2),
            "et" => Ok(3),
            other => Err(TranslateError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl Translate for GlossaryTranslator {
    fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslateError> {
        let column = Self::column(target_language)?;
        let mut translated_any = false;

        let words: Vec<String> = text
            .split_whitespace()
            .map(|word| {
                let key = word.trim_matches(|c: char| !c.is_alphanumeric());
                let entry = GLOSSARY
                    .iter()
                    .find(|(english, _, _, _)| english.eq_ignore_ascii_case(key));
                match entry {
                    Some(row) => {
                        translated_any = true;
                        let translation = match column {
                            1 => row.1,
                            2 => row.2,
                            _ => row.3,
                        };
                        word.replacen(key, translation, 1)
                    }
                    None => word.to_string(),
                }
            })
            .collect();

        if !translated_any {
            return Err(TranslateError::MissingTerm(text.to_string()));
        }
        Ok(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_known_terms() {
        let translator = GlossaryTranslator::new();
        let result = translator.translate("Emergency", "nl").unwrap();
        assert_eq!(result, "spoedeisende hulp");
    }

    #[test]
    fn test_keeps_unknown_words() {
        let translator = GlossaryTranslator::new();
        let result = translator.translate("Jansen Healthcare", "de").unwrap();
        assert_eq!(result, "Jansen Gesundheitswesen");
    }

    #[test]
    fn test_rejects_unsupported_language() {
        let translator = GlossaryTranslator::new();
        let result = translator.translate("Emergency", "fr");
        assert!(matches!(result, Err(TranslateError::UnsupportedLanguage(_))));
    }

    #[test]
    fn test_fails_when_nothing_translates() {
        let translator = GlossaryTranslator::new();
        let result = translator.translate("Jansen & Zonen", "nl");
        assert!(matches!(result, Err(TranslateError::MissingTerm(_))));
    }
}
