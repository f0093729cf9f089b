//! Variation rules for [`Address`] records.

use super::typo::{typo_once, SCRAMBLE_OPS};
use super::{Catalog, FieldChange, Rule};
use crate::config::NoiseTier;
use crate::data;
use rand::seq::SliceRandom;
use synthmd_types::Address;

const HOUSE_SUFFIXES: &[&str] = &["A", "B", "C"];

/// Builds the address catalog.
///
/// - `house_number_suffix`: appends A/B/C to a trailing numeric token of the
///   street text, modelling building subdivision.
/// - `city_typo`: one character-level edit inside the city name.
/// - `country_expansion`: replaces a supported ISO code with the full
///   English country name.
/// - `postal_format`: toggles the space separator inside the postal code.
pub fn address_catalog() -> Catalog<Address> {
    Catalog::new(vec![
        Rule::new(
            "house_number_suffix",
            NoiseTier::High,
            |address: &Address| !address.text.trim().is_empty(),
            |address, rng| {
                let tokens: Vec<&str> = address.text.split_whitespace().collect();
                let last = *tokens.last()?;
                if last.is_empty() || !last.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let suffix = *HOUSE_SUFFIXES.choose(rng)?;
                let varied = format!("{}{}", address.text.trim_end(), suffix);
                Some(FieldChange {
                    field: "text",
                    original: address.text.clone(),
                    varied,
                })
            },
        ),
        Rule::new(
            "city_typo",
            NoiseTier::Low,
            |address: &Address| address.city.chars().count() > 3,
            |address, rng| {
                let varied = typo_once(&address.city, SCRAMBLE_OPS, rng)?;
                Some(FieldChange {
                    field: "city",
                    original: address.city.clone(),
                    varied,
                })
            },
        ),
        Rule::new(
            "country_expansion",
            NoiseTier::High,
            |address: &Address| data::country_name(&address.country).is_some(),
            |address, _rng| {
                let name = data::country_name(&address.country)?;
                Some(FieldChange {
                    field: "country",
                    original: address.country.clone(),
                    varied: name.to_string(),
                })
            },
        ),
        Rule::new(
            "postal_format",
            NoiseTier::Low,
            |address: &Address| !address.postal_code.trim().is_empty(),
            |address, _rng| {
                let varied = toggle_postal_space(&address.postal_code)?;
                Some(FieldChange {
                    field: "postalCode",
                    original: address.postal_code.clone(),
                    varied,
                })
            },
        ),
    ])
}

/// Removes the space separator when present, otherwise inserts one at the
/// digit-to-letter boundary (`3511AB` -> `3511 AB`). Codes with neither a
/// space nor a boundary (all-digit Austrian/Estonian codes) yield `None`.
fn toggle_postal_space(postal_code: &str) -> Option<String> {
    if postal_code.contains(' ') {
        return Some(postal_code.replace(' ', ""));
    }
    let boundary = postal_code
        .char_indices()
        .zip(postal_code.chars().skip(1))
        .find(|((_, current), next)| current.is_ascii_digit() && next.is_ascii_alphabetic())
        .map(|((index, current), _)| index + current.len_utf8())?;
    let (head, tail) = postal_code.split_at(boundary);
    Some(format!("{head} {tail}"))
}
