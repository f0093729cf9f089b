//! Variation rules for [`Person`] records: name perturbations and the
//! date-of-birth transcription error.

use super::typo::{typo_once, NAME_OPS};
use super::{Catalog, FieldChange, Rule};
use crate::config::NoiseTier;
use rand::seq::SliceRandom;
use synthmd_types::Person;

/// Builds the person-name catalog.
///
/// - `name_swap`: reverses the token order (`First Last` -> `Last First`).
/// - `abbreviated_first_name`: replaces the first token with its initial.
/// - `name_typo`: one character-level edit inside a token longer than two
///   characters.
pub fn person_name_catalog() -> Catalog<Person> {
    Catalog::new(vec![
        Rule::new(
            "name_swap",
            NoiseTier::High,
            |person: &Person| person.person_name.split_whitespace().count() >= 2,
            |person, _rng| {
                let mut tokens: Vec<&str> = person.person_name.split_whitespace().collect();
                tokens.reverse();
                let varied = tokens.join(" ");
                if varied == person.person_name {
                    return None;
                }
                Some(FieldChange {
                    field: "personName",
                    original: person.person_name.clone(),
                    varied,
                })
            },
        ),
        Rule::new(
            "abbreviated_first_name",
            NoiseTier::High,
            |person: &Person| person.person_name.split_whitespace().count() >= 2,
            |person, _rng| {
                let mut tokens: Vec<String> = person
                    .person_name
                    .split_whitespace()
                    .map(str::to_string)
                    .collect();
                let initial = tokens.first()?.chars().next()?;
                tokens[0] = format!("{initial}.");
                Some(FieldChange {
                    field: "personName",
                    original: person.person_name.clone(),
                    varied: tokens.join(" "),
                })
            },
        ),
        Rule::new(
            "name_typo",
            NoiseTier::Low,
            |person: &Person| {
                person
                    .person_name
                    .split_whitespace()
                    .any(|token| token.chars().count() > 2)
            },
            |person, rng| {
                let tokens: Vec<&str> = person.person_name.split_whitespace().collect();
                let candidates: Vec<usize> = tokens
                    .iter()
                    .enumerate()
                    .filter(|(_, token)| token.chars().count() > 2)
                    .map(|(index, _)| index)
                    .collect();
                let target = *candidates.choose(rng)?;
                let corrupted = typo_once(tokens[target], NAME_OPS, rng)?;

                let mut varied_tokens: Vec<String> =
                    tokens.iter().map(|token| token.to_string()).collect();
                varied_tokens[target] = corrupted;
                Some(FieldChange {
                    field: "personName",
                    original: person.person_name.clone(),
                    varied: varied_tokens.join(" "),
                })
            },
        ),
    ])
}

/// Builds the date-of-birth catalog.
///
/// `date_format_variation` swaps the month and day components of an ISO
/// `YYYY-MM-DD` string. The swap deliberately may produce a date that is not
/// a valid calendar date (a day of 13 or more lands in the month position);
/// this models a transcription error and is kept as-is rather than repaired,
/// matching what real dirty data looks like to a deduplication benchmark.
pub fn person_dob_catalog() -> Catalog<Person> {
    Catalog::new(vec![Rule::new(
        "date_format_variation",
        NoiseTier::Low,
        |person: &Person| split_iso_date(&person.birth_date).is_some(),
        |person, _rng| {
            let (year, month, day) = split_iso_date(&person.birth_date)?;
            let varied = format!("{year}-{day:0>2}-{month:0>2}");
            if varied == person.birth_date {
                return None;
            }
            Some(FieldChange {
                field: "birthDate",
                original: person.birth_date.clone(),
                varied,
            })
        },
    )])
}

/// Splits `YYYY-MM-DD` into its components. Purely structural: components
/// must be numeric with a four-digit year, but no calendar validation is
/// done here.
fn split_iso_date(value: &str) -> Option<(&str, &str, &str)> {
    let mut parts = value.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if year.len() != 4 || !numeric(year) || !numeric(month) || !numeric(day) {
        return None;
    }
    if month.len() > 2 || day.len() > 2 {
        return None;
    }
    Some((year, month, day))
}
