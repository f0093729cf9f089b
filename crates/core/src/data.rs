//! Static lookup tables backing the variation catalogs.
//!
//! Every table the rules consult lives here as immutable data, keyed by
//! canonical term, so that no rule implementation carries its own literal
//! table and the same table can serve several entity kinds.

/// ISO 3166-1 alpha-2 codes the generator emits, with their full English
/// names. `country_expansion` only fires for codes listed here.
pub const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("NL", "Netherlands"),
    ("AT", "Austria"),
    ("EE", "Estonia"),
    ("DE", "Germany"),
    ("BE", "Belgium"),
];

/// Returns the full English name for a supported country code.
pub fn country_name(code: &str) -> Option<&'static str> {
    lookup(COUNTRY_NAMES, code)
}

/// Organization name suffixes the generator appends per country. Abbreviation
/// and typo rules must leave a recognized suffix untouched.
pub const ORGANIZATION_SUFFIXES: &[&str] = &[
    " Zorg",
    " Gesundheitszentrum",
    " Tervisekeskus",
    " Healthcare",
];

/// Splits a recognized suffix off an organization name.
///
/// Returns the stem and the suffix (empty when the name carries none).
pub fn split_organization_suffix(name: &str) -> (&str, &str) {
    for suffix in ORGANIZATION_SUFFIXES {
        if let Some(stem) = name.strip_suffix(suffix) {
            return (stem, suffix);
        }
    }
    (name, "")
}

/// Short forms for full terms appearing in organization names.
pub const ORGANIZATION_ABBREVIATIONS: &[(&str, &str)] = &[
    ("& Zonen", "& Zn."),
    ("Medical Center", "Med Ctr"),
    ("Hospital", "Hosp"),
    ("Clinic", "Clin"),
    ("University", "Univ"),
    ("International", "Intl"),
    ("Group", "Grp"),
    ("Brothers", "Bros"),
    ("Company", "Co."),
    ("Partners", "Ptnrs"),
];

/// Synonym phrases for terms appearing in organization names.
pub const ORGANIZATION_SYNONYMS: &[(&str, &str)] = &[
    ("Zorg", "Zorgcentrum"),
    ("Gesundheitszentrum", "Gesundheitsdienst"),
    ("Tervisekeskus", "Terviseteenused"),
    ("Healthcare", "Health Services"),
    ("Hospital", "Medical Center"),
    ("Clinic", "Medical Practice"),
];

/// Short forms for medical department names.
pub const DEPARTMENT_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Anesthesia", "Anesth Dept"),
    ("Cardiovascular", "Cardio"),
    ("Community Health", "Comm Health"),
    ("Dentistry", "Dental"),
    ("Dermatology", "Derm"),
    ("Emergency", "ER"),
    ("Endocrine", "Endo"),
    ("Gastroenterologic", "GI"),
    ("Gynecologic", "GYN"),
    ("Hematologic", "Hema"),
    ("Infectious", "ID"),
    ("Laboratory", "Lab"),
    ("Musculoskeletal", "MSK"),
    ("Neurologic", "Neuro"),
    ("Obstetric", "OB"),
    ("Oncologic", "Onc"),
    ("Optometric", "Opt"),
    ("Otolaryngologic", "ENT"),
    ("Pathology", "Path"),
    ("Pediatric", "Peds"),
    ("Psychiatric", "Psych"),
    ("Pulmonary", "Pulm"),
    ("Radiography", "Radiology"),
    ("Respiratory", "Resp"),
    ("Surgical", "Surgery"),
];

/// Alternative phrasings for department names.
pub const DEPARTMENT_SYNONYMS: &[(&str, &str)] = &[
    ("Emergency", "Accident & Emergency"),
    ("Radiography", "Medical Imaging"),
    ("Obstetric", "Maternity"),
    ("Pediatric", "Children's Medicine"),
    ("Primary Care", "General Practice"),
    ("Laboratory Science", "Clinical Laboratory"),
    ("Musculoskeletal", "Orthopedics"),
    ("Diet Nutrition", "Dietetics"),
];

/// Finds the first `(term, replacement)` pair whose term occurs in `text`.
pub fn find_replacement<'t>(
    table: &'t [(&'t str, &'t str)],
    text: &str,
) -> Option<(&'t str, &'t str)> {
    table
        .iter()
        .find(|(term, _)| text.contains(term))
        .copied()
}

fn lookup<'t>(table: &'t [(&'t str, &'t str)], key: &str) -> Option<&'t str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_expansion_table() {
        assert_eq!(country_name("NL"), Some("Netherlands"));
        assert_eq!(country_name("AT"), Some("Austria"));
        assert_eq!(country_name("XX"), None);
    }

    #[test]
    fn test_split_organization_suffix() {
        assert_eq!(
            split_organization_suffix("Jansen Zorg"),
            ("Jansen", " Zorg")
        );
        assert_eq!(
            split_organization_suffix("Huber Gesundheitszentrum"),
            ("Huber", " Gesundheitszentrum")
        );
        assert_eq!(split_organization_suffix("Plain Name"), ("Plain Name", ""));
    }

    #[test]
    fn test_find_replacement_first_match() {
        let hit = find_replacement(DEPARTMENT_ABBREVIATIONS, "Pediatric Emergency");
        // Table order decides which term matches first.
        assert_eq!(hit, Some(("Emergency", "ER")));
    }

    #[test]
    fn test_find_replacement_no_match() {
        assert_eq!(find_replacement(DEPARTMENT_ABBREVIATIONS, "Midwifery"), None);
    }
}
