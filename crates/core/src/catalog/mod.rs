//! Variation catalogs: named, entity-kind-specific perturbation rules.
//!
//! A [`Rule`] pairs an applicability predicate with an apply function that
//! computes a single-field change. Rules never mutate the entity they are
//! given; the selector (see [`crate::variate`]) writes the change into a deep
//! copy. An apply function may return `None` when it turns out it cannot
//! produce a change (malformed field value, failed translation, missing
//! join), in which case the selector degrades to `no_change` instead of
//! erroring.

mod address;
mod department;
mod email;
mod organization;
mod person;
mod typo;

pub use address::address_catalog;
pub use department::department_catalog;
pub use email::{contact_point_email_catalog, personnel_email_catalog};
pub use organization::organization_catalog;
pub use person::{person_dob_catalog, person_name_catalog};

use crate::config::NoiseTier;
use rand_chacha::ChaCha8Rng;

/// The single-field change computed by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    /// CSV column name of the mutated field.
    pub field: &'static str,
    pub original: String,
    pub varied: String,
}

type AppliesFn<E> = Box<dyn Fn(&E) -> bool>;
type ApplyFn<E> = Box<dyn Fn(&E, &mut ChaCha8Rng) -> Option<FieldChange>>;

/// A named perturbation rule for one entity kind.
pub struct Rule<E> {
    name: &'static str,
    tier: NoiseTier,
    applies: AppliesFn<E>,
    apply: ApplyFn<E>,
}

impl<E> Rule<E> {
    pub fn new(
        name: &'static str,
        tier: NoiseTier,
        applies: impl Fn(&E) -> bool + 'static,
        apply: impl Fn(&E, &mut ChaCha8Rng) -> Option<FieldChange> + 'static,
    ) -> Self {
        Self {
            name,
            tier,
            applies: Box::new(applies),
            apply: Box::new(apply),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn tier(&self) -> NoiseTier {
        self.tier
    }

    pub fn applies(&self, entity: &E) -> bool {
        (self.applies)(entity)
    }

    pub fn apply(&self, entity: &E, rng: &mut ChaCha8Rng) -> Option<FieldChange> {
        (self.apply)(entity, rng)
    }
}

impl<E> std::fmt::Debug for Rule<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("tier", &self.tier)
            .finish()
    }
}

/// The rule set for one entity kind.
#[derive(Debug)]
pub struct Catalog<E> {
    rules: Vec<Rule<E>>,
}

impl<E> Catalog<E> {
    pub fn new(rules: Vec<Rule<E>>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule<E>] {
        &self.rules
    }

    /// Looks a rule up by name. Mainly for tests that force one rule.
    pub fn rule(&self, name: &str) -> Option<&Rule<E>> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// Returns the rules whose predicate holds for `entity`, optionally
    /// restricted to the rules eligible under `noise`.
    pub fn applicable(&self, entity: &E, noise: Option<NoiseTier>) -> Vec<&Rule<E>> {
        self.rules
            .iter()
            .filter(|rule| noise.map_or(true, |tier| rule.tier <= tier))
            .filter(|rule| rule.applies(entity))
            .collect()
    }
}

/// Resolves the translation target language per contact point.
///
/// The target is the first advertised language of the contact point; English
/// is skipped since the names are already English. Contact points without a
/// usable target are absent from the map, which makes the `translation`
/// rules inapplicable for entities linked to them (including entities whose
/// contact reference does not resolve at all).
pub(crate) fn translation_targets(
    contact_points: &[synthmd_types::ContactPoint],
) -> std::collections::HashMap<String, String> {
    contact_points
        .iter()
        .filter_map(|contact| {
            let target = contact
                .available_language
                .languages()
                .iter()
                .find(|language| *language != "en")?;
            Some((contact.identifier.clone(), target.clone()))
        })
        .collect()
}
