//! Variation rules for [`ServiceDepartment`] records.

use super::organization::corrupt_one_word;
use super::{translation_targets, Catalog, FieldChange, Rule};
use crate::config::NoiseTier;
use crate::data;
use crate::translate::Translate;
use std::sync::Arc;
use synthmd_types::{ContactPoint, ServiceDepartment};

/// Builds the department-name catalog: clinical abbreviation, character
/// corruption, synonym phrasing, and contact-point-driven translation.
pub fn department_catalog(
    contact_points: &[ContactPoint],
    translator: Arc<dyn Translate>,
) -> Catalog<ServiceDepartment> {
    let targets = Arc::new(translation_targets(contact_points));
    let applies_targets = Arc::clone(&targets);

    Catalog::new(vec![
        Rule::new(
            "department_abbreviation",
            NoiseTier::High,
            |department: &ServiceDepartment| {
                data::find_replacement(data::DEPARTMENT_ABBREVIATIONS, &department.name).is_some()
            },
            |department, _rng| {
                let (term, short) =
                    data::find_replacement(data::DEPARTMENT_ABBREVIATIONS, &department.name)?;
                Some(FieldChange {
                    field: "serviceDepartmentName",
                    original: department.name.clone(),
                    varied: department.name.replacen(term, short, 1),
                })
            },
        ),
        Rule::new(
            "name_typo",
            NoiseTier::Low,
            |department: &ServiceDepartment| {
                department
                    .name
                    .split_whitespace()
                    .any(|word| word.chars().count() > 2)
            },
            |department, rng| {
                let corrupted = corrupt_one_word(&department.name, rng)?;
                Some(FieldChange {
                    field: "serviceDepartmentName",
                    original: department.name.clone(),
                    varied: corrupted,
                })
            },
        ),
        Rule::new(
            "alternative_naming",
            NoiseTier::High,
            |department: &ServiceDepartment| {
                data::find_replacement(data::DEPARTMENT_SYNONYMS, &department.name).is_some()
            },
            |department, _rng| {
                let (term, synonym) =
                    data::find_replacement(data::DEPARTMENT_SYNONYMS, &department.name)?;
                Some(FieldChange {
                    field: "serviceDepartmentName",
                    original: department.name.clone(),
                    varied: department.name.replacen(term, synonym, 1),
                })
            },
        ),
        Rule::new(
            "translation",
            NoiseTier::High,
            move |department: &ServiceDepartment| {
                applies_targets.contains_key(&department.contact_point)
            },
            move |department, _rng| {
                let target = targets.get(&department.contact_point)?;
                let varied = match translator.translate(&department.name, target) {
                    Ok(varied) => varied,
                    Err(error) => {
                        tracing::debug!(
                            department = %department.identifier,
                            %error,
                            "translation unavailable, keeping name unchanged"
                        );
                        return None;
                    }
                };
                if varied == department.name {
                    return None;
                }
                Some(FieldChange {
                    field: "serviceDepartmentName",
                    original: department.name.clone(),
                    varied,
                })
            },
        ),
    ])
}
