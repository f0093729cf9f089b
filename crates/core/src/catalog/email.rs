//! Variation rules for the email fields of [`HealthcarePersonnel`] and
//! [`ContactPoint`] records.

use super::typo::{typo_once, SCRAMBLE_OPS};
use super::{Catalog, FieldChange, Rule};
use crate::config::NoiseTier;
use rand_chacha::ChaCha8Rng;
use synthmd_types::{ContactPoint, HealthcarePersonnel};

/// Builds the personnel email catalog. Personnel carry no language
/// information, so only the character-corruption rule exists here.
pub fn personnel_email_catalog() -> Catalog<HealthcarePersonnel> {
    Catalog::new(vec![Rule::new(
        "email_typo",
        NoiseTier::Low,
        |personnel: &HealthcarePersonnel| has_corruptible_local_part(&personnel.email),
        |personnel, rng| {
            let varied = corrupt_local_part(&personnel.email, rng)?;
            Some(FieldChange {
                field: "email",
                original: personnel.email.clone(),
                varied,
            })
        },
    )])
}

/// Builds the contact-point email catalog.
///
/// - `email_typo`: one character-level edit inside the local part; the
///   domain stays untouched so the address still resolves to the right
///   organization when eyeballed.
/// - `email_domain_change`: replaces the top-level domain with the contact
///   point's primary language code (`info@healthcare.org` ->
///   `info@healthcare.nl`).
pub fn contact_point_email_catalog() -> Catalog<ContactPoint> {
    Catalog::new(vec![
        Rule::new(
            "email_typo",
            NoiseTier::Low,
            |contact: &ContactPoint| has_corruptible_local_part(&contact.email),
            |contact, rng| {
                let varied = corrupt_local_part(&contact.email, rng)?;
                Some(FieldChange {
                    field: "email",
                    original: contact.email.clone(),
                    varied,
                })
            },
        ),
        Rule::new(
            "email_domain_change",
            NoiseTier::High,
            |contact: &ContactPoint| {
                contact.available_language.primary().is_some() && splittable_tld(&contact.email)
            },
            |contact, _rng| {
                let language = contact.available_language.primary()?;
                let dot = contact.email.rfind('.')?;
                let varied = format!("{}.{}", &contact.email[..dot], language);
                if varied == contact.email {
                    return None;
                }
                Some(FieldChange {
                    field: "email",
                    original: contact.email.clone(),
                    varied,
                })
            },
        ),
    ])
}

fn has_corruptible_local_part(email: &str) -> bool {
    email
        .split_once('@')
        .map_or(false, |(local, _)| local.chars().count() > 3)
}

fn splittable_tld(email: &str) -> bool {
    match email.split_once('@') {
        Some((_, domain)) => domain.rfind('.').map_or(false, |dot| dot + 1 < domain.len()),
        None => false,
    }
}

fn corrupt_local_part(email: &str, rng: &mut ChaCha8Rng) -> Option<String> {
    let (local, domain) = email.split_once('@')?;
    let corrupted = typo_once(local, SCRAMBLE_OPS, rng)?;
    Some(format!("{corrupted}@{domain}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use synthmd_types::LanguageList;

    fn personnel(email: &str) -> HealthcarePersonnel {
        HealthcarePersonnel {
            identifier: "hp1".into(),
            institution: "o1".into(),
            department: "d1".into(),
            job_title: "Nurse".into(),
            email: email.into(),
        }
    }

    fn contact(email: &str, languages: &[&str]) -> ContactPoint {
        ContactPoint {
            identifier: "c1".into(),
            contact_type: "General Inquiries".into(),
            phone: "+31 30 1234567".into(),
            email: email.into(),
            available_language: LanguageList::new(
                languages.iter().map(|s| s.to_string()).collect(),
            ),
            fax: String::new(),
        }
    }

    #[test]
    fn test_personnel_typo_keeps_domain() {
        let catalog = personnel_email_catalog();
        let rule = catalog.rule("email_typo").unwrap();
        let mut applied = 0;
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let Some(change) = rule.apply(&personnel("anna.muller@healthcare.org"), &mut rng)
            else {
                continue;
            };
            applied += 1;
            assert!(change.varied.ends_with("@healthcare.org"));
            assert_ne!(change.varied, change.original);
        }
        assert!(applied > 0);
    }

    #[test]
    fn test_personnel_short_local_part_not_applicable() {
        let catalog = personnel_email_catalog();
        assert!(catalog
            .applicable(&personnel("ab@healthcare.org"), None)
            .is_empty());
    }

    #[test]
    fn test_personnel_catalog_has_no_domain_rule() {
        let catalog = personnel_email_catalog();
        assert!(catalog.rule("email_domain_change").is_none());
    }

    #[test]
    fn test_domain_change_concrete_scenario() {
        let catalog = contact_point_email_catalog();
        let rule = catalog.rule("email_domain_change").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let change = rule
            .apply(&contact("info@healthcare.org", &["nl", "en"]), &mut rng)
            .unwrap();
        assert_eq!(change.varied, "info@healthcare.nl");
    }

    #[test]
    fn test_domain_change_needs_language_and_tld() {
        let catalog = contact_point_email_catalog();
        let rule = catalog.rule("email_domain_change").unwrap();
        assert!(!rule.applies(&contact("info@healthcare.org", &[])));
        assert!(!rule.applies(&contact("info@healthcare", &["nl"])));
    }

    #[test]
    fn test_domain_change_identity_degrades_to_none() {
        let catalog = contact_point_email_catalog();
        let rule = catalog.rule("email_domain_change").unwrap();
        // The TLD already matches the primary language.
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            rule.apply(&contact("info@healthcare.nl", &["nl"]), &mut rng),
            None
        );
    }

    #[test]
    fn test_contact_typo_changes_local_part_only() {
        let catalog = contact_point_email_catalog();
        let rule = catalog.rule("email_typo").unwrap();
        let mut applied = 0;
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let entity = contact("appointments@dept.healthcare.org", &["et"]);
            let Some(change) = rule.apply(&entity, &mut rng) else {
                continue;
            };
            applied += 1;
            assert!(change.varied.ends_with("@dept.healthcare.org"));
            assert_ne!(change.varied, change.original);
        }
        assert!(applied > 0);
    }
}
