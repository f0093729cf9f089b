//! Selection and application of a single variation per duplicate.

use crate::catalog::Catalog;
use crate::config::NoiseTier;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use synthmd_types::Record;

/// Registered variation type when no rule could change the entity.
pub const NO_CHANGE: &str = "no_change";

/// What happened to one duplicate, for the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariationRecord {
    pub variation_type: String,
    pub field_name: String,
    pub original_value: String,
    pub varied_value: String,
}

impl VariationRecord {
    fn no_change() -> Self {
        Self {
            variation_type: NO_CHANGE.to_string(),
            field_name: String::new(),
            original_value: String::new(),
            varied_value: String::new(),
        }
    }
}

/// Clones `entity` and applies exactly one variation drawn uniformly from
/// the catalog's applicable rules.
///
/// When no rule is applicable, or the chosen rule cannot produce a change
/// after all, the clone comes back content-identical and the record reads
/// `no_change`. That degenerate duplicate is still a useful benchmark case
/// (an exact copy under a fresh identifier), so it is a value here, never an
/// error. The clone keeps the original's identifier; the caller re-identifies
/// it.
pub fn apply_one_variation<E: Record>(
    entity: &E,
    catalog: &Catalog<E>,
    noise: Option<NoiseTier>,
    rng: &mut ChaCha8Rng,
) -> (E, VariationRecord) {
    let mut duplicate = entity.clone();
    let applicable = catalog.applicable(entity, noise);
    let Some(rule) = applicable.choose(rng) else {
        return (duplicate, VariationRecord::no_change());
    };
    let Some(change) = rule.apply(entity, rng) else {
        tracing::debug!(
            rule = rule.name(),
            entity = entity.identifier(),
            "applicable rule produced no change"
        );
        return (duplicate, VariationRecord::no_change());
    };

    duplicate.set_field(change.field, &change.varied);
    let record = VariationRecord {
        variation_type: rule.name().to_string(),
        field_name: change.field.to_string(),
        original_value: change.original,
        varied_value: change.varied,
    };
    (duplicate, record)
}
