//! Variation rules for [`HealthcareOrganization`] records.

use super::typo::{typo_once, SCRAMBLE_OPS};
use super::{translation_targets, Catalog, FieldChange, Rule};
use crate::config::NoiseTier;
use crate::data;
use crate::translate::Translate;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::sync::Arc;
use synthmd_types::{ContactPoint, HealthcareOrganization};

/// Builds the organization-name catalog.
///
/// Country suffixes appended by the generator (` Zorg`,
/// ` Gesundheitszentrum`, ` Tervisekeskus`, ` Healthcare`) are preserved by
/// the abbreviation and typo rules. The `translation` rule joins the
/// organization's contact point against `contact_points` to find its target
/// language and delegates to `translator`; any failure along that path keeps
/// the name unchanged.
pub fn organization_catalog(
    contact_points: &[ContactPoint],
    translator: Arc<dyn Translate>,
) -> Catalog<HealthcareOrganization> {
    let targets = Arc::new(translation_targets(contact_points));

    Catalog::new(vec![
        Rule::new(
            "name_abbreviation",
            NoiseTier::High,
            |organization: &HealthcareOrganization| {
                let (stem, _) = data::split_organization_suffix(&organization.name);
                data::find_replacement(data::ORGANIZATION_ABBREVIATIONS, stem).is_some()
            },
            |organization, _rng| {
                let (stem, suffix) = data::split_organization_suffix(&organization.name);
                let (term, short) =
                    data::find_replacement(data::ORGANIZATION_ABBREVIATIONS, stem)?;
                let varied = format!("{}{}", stem.replacen(term, short, 1), suffix);
                Some(FieldChange {
                    field: "healthcareOrganizationName",
                    original: organization.name.clone(),
                    varied,
                })
            },
        ),
        Rule::new(
            "name_typo",
            NoiseTier::Low,
            |organization: &HealthcareOrganization| {
                let (stem, _) = data::split_organization_suffix(&organization.name);
                stem.split_whitespace().any(|word| word.chars().count() > 2)
            },
            |organization, rng| {
                let (stem, suffix) = data::split_organization_suffix(&organization.name);
                let corrupted = corrupt_one_word(stem, rng)?;
                Some(FieldChange {
                    field: "healthcareOrganizationName",
                    original: organization.name.clone(),
                    varied: format!("{corrupted}{suffix}"),
                })
            },
        ),
        Rule::new(
            "alternative_naming",
            NoiseTier::High,
            |organization: &HealthcareOrganization| {
                data::find_replacement(data::ORGANIZATION_SYNONYMS, &organization.name).is_some()
            },
            |organization, _rng| {
                let (term, synonym) =
                    data::find_replacement(data::ORGANIZATION_SYNONYMS, &organization.name)?;
                Some(FieldChange {
                    field: "healthcareOrganizationName",
                    original: organization.name.clone(),
                    varied: organization.name.replacen(term, synonym, 1),
                })
            },
        ),
        translation_rule(targets, translator),
    ])
}

fn translation_rule(
    targets: Arc<HashMap<String, String>>,
    translator: Arc<dyn Translate>,
) -> Rule<HealthcareOrganization> {
    let applies_targets = Arc::clone(&targets);
    Rule::new(
        "translation",
        NoiseTier::High,
        move |organization: &HealthcareOrganization| {
            applies_targets.contains_key(&organization.contact_point)
        },
        move |organization, _rng| {
            let target = targets.get(&organization.contact_point)?;
            let varied = match translator.translate(&organization.name, target) {
                Ok(varied) => varied,
                Err(error) => {
                    tracing::debug!(
                        organization = %organization.identifier,
                        %error,
                        "translation unavailable, keeping name unchanged"
                    );
                    return None;
                }
            };
            if varied == organization.name {
                return None;
            }
            Some(FieldChange {
                field: "healthcareOrganizationName",
                original: organization.name.clone(),
                varied,
            })
        },
    )
}

/// Applies one character-level edit to a random word longer than two
/// characters, leaving the other words intact.
pub(super) fn corrupt_one_word(text: &str, rng: &mut ChaCha8Rng) -> Option<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let candidates: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.chars().count() > 2)
        .map(|(index, _)| index)
        .collect();
    let target = *candidates.choose(rng)?;
    let corrupted = typo_once(tokens[target], SCRAMBLE_OPS, rng)?;

    let mut varied: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
    varied[target] = corrupted;
    Some(varied.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::GlossaryTranslator;
    use rand::SeedableRng;
    use synthmd_types::LanguageList;

    fn contact(identifier: &str, languages: &[&str]) -> ContactPoint {
        ContactPoint {
            identifier: identifier.into(),
            contact_type: "General Inquiries".into(),
            phone: "+31 30 1234567".into(),
            email: "info@healthcare.org".into(),
            available_language: LanguageList::new(
                languages.iter().map(|s| s.to_string()).collect(),
            ),
            fax: String::new(),
        }
    }

    fn organization(name: &str, contact_point: &str) -> HealthcareOrganization {
        HealthcareOrganization {
            identifier: "o1".into(),
            name: name.into(),
            address: "a1".into(),
            contact_point: contact_point.into(),
        }
    }

    fn catalog_with(languages: &[&str]) -> Catalog<HealthcareOrganization> {
        let contacts = vec![contact("c1", languages)];
        organization_catalog(&contacts, Arc::new(GlossaryTranslator::new()))
    }

    #[test]
    fn test_abbreviation_preserves_suffix() {
        let catalog = catalog_with(&["nl", "en"]);
        let rule = catalog.rule("name_abbreviation").unwrap();
        let organization = organization("Jansen Hospital Zorg", "c1");
        assert!(rule.applies(&organization));

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let change = rule.apply(&organization, &mut rng).unwrap();
        assert_eq!(change.varied, "Jansen Hosp Zorg");
    }

    #[test]
    fn test_typo_preserves_suffix() {
        let catalog = catalog_with(&["nl"]);
        let rule = catalog.rule("name_typo").unwrap();
        let organization = organization("Jansen Zorg", "c1");
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let change = rule.apply(&organization, &mut rng).unwrap();
        assert!(change.varied.ends_with(" Zorg"));
        assert_ne!(change.varied, change.original);
    }

    #[test]
    fn test_alternative_naming_uses_synonym_table() {
        let catalog = catalog_with(&["nl"]);
        let rule = catalog.rule("alternative_naming").unwrap();
        let organization = organization("Jansen Zorg", "c1");
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let change = rule.apply(&organization, &mut rng).unwrap();
        assert_eq!(change.varied, "Jansen Zorgcentrum");
    }

    #[test]
    fn test_translation_joins_contact_point() {
        let catalog = catalog_with(&["de", "en"]);
        let rule = catalog.rule("translation").unwrap();
        let organization = organization("Huber Healthcare", "c1");
        assert!(rule.applies(&organization));

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let change = rule.apply(&organization, &mut rng).unwrap();
        assert_eq!(change.varied, "Huber Gesundheitswesen");
    }

    #[test]
    fn test_translation_not_applicable_without_join() {
        let catalog = catalog_with(&["de"]);
        let rule = catalog.rule("translation").unwrap();
        // Dangling contact reference: the join fails, the rule stays off.
        let organization = organization("Huber Healthcare", "missing");
        assert!(!rule.applies(&organization));
    }

    #[test]
    fn test_translation_failure_degrades_to_none() {
        let catalog = catalog_with(&["de"]);
        let rule = catalog.rule("translation").unwrap();
        // Nothing in the glossary matches, so translation errors out.
        let organization = organization("Jansen & Zonen", "c1");
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(rule.apply(&organization, &mut rng), None);
    }

    #[test]
    fn test_english_only_contact_yields_no_target() {
        let catalog = catalog_with(&["en"]);
        let rule = catalog.rule("translation").unwrap();
        let organization = organization("Huber Healthcare", "c1");
        assert!(!rule.applies(&organization));
    }
}
