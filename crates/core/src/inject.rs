//! Duplicate injection over one table at a time.

use crate::catalog::Catalog;
use crate::config::NoiseTier;
use crate::error::{EngineError, EngineResult};
use crate::registry::DuplicateRegistry;
use crate::variate::apply_one_variation;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use synthmd_ident::IdentityAllocator;
use synthmd_types::Record;

/// Runs injection passes over the dataset's tables, sharing one RNG, one
/// identity allocator, and one registry across passes so identifiers and
/// labels stay consistent dataset-wide.
pub struct Injector<'a> {
    rng: &'a mut ChaCha8Rng,
    allocator: &'a mut IdentityAllocator,
    registry: &'a mut DuplicateRegistry,
}

impl<'a> Injector<'a> {
    pub fn new(
        rng: &'a mut ChaCha8Rng,
        allocator: &'a mut IdentityAllocator,
        registry: &'a mut DuplicateRegistry,
    ) -> Self {
        Self {
            rng,
            allocator,
            registry,
        }
    }

    /// Injects duplicates into one table and returns it extended.
    ///
    /// Exactly `floor(len * rate)` originals are sampled without
    /// replacement; each yields one duplicate carrying a single varied field
    /// (or `no_change`), appended after the originals. Person-kind tables
    /// get deterministic identifiers derived from the original's id; when a
    /// second pass over the same original would mint an identifier already
    /// present in the table, the duplicate falls back to a random
    /// identifier so the table stays free of identifier collisions.
    pub fn inject<E: Record>(
        &mut self,
        mut entities: Vec<E>,
        catalog: &Catalog<E>,
        rate: f64,
        noise: Option<NoiseTier>,
    ) -> EngineResult<Vec<E>> {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(EngineError::InvalidConfiguration(format!(
                "variation rate must be within [0, 1], got {rate}"
            )));
        }
        let count = (entities.len() as f64 * rate).floor() as usize;
        tracing::info!(
            table = E::KIND.as_str(),
            originals = entities.len(),
            duplicates = count,
            "injecting duplicates"
        );
        if count == 0 {
            return Ok(entities);
        }

        let mut seen: HashSet<String> = entities
            .iter()
            .map(|entity| entity.identifier().to_string())
            .collect();
        let sampled = rand::seq::index::sample(self.rng, entities.len(), count);

        let mut duplicates = Vec::with_capacity(count);
        for index in sampled.iter() {
            let original = &entities[index];
            let (mut duplicate, variation) =
                apply_one_variation(original, catalog, noise, self.rng);

            let id = self.allocate::<E>(original.identifier(), &seen);
            seen.insert(id.clone());
            duplicate.set_identifier(id.clone());
            self.registry.register(
                original.identifier().to_string(),
                id,
                E::KIND,
                variation,
            );
            duplicates.push(duplicate);
        }
        entities.extend(duplicates);
        Ok(entities)
    }

    fn allocate<E: Record>(&mut self, original_id: &str, seen: &HashSet<String>) -> String {
        if E::KIND.uses_deterministic_identity() {
            let id = self
                .allocator
                .allocate_deterministic(original_id, E::KIND.identity_namespace())
                .to_string();
            if !seen.contains(&id) {
                return id;
            }
            tracing::debug!(
                original = original_id,
                "derived identifier already present, allocating randomly"
            );
        }
        self.allocator.allocate_random(self.rng).to_string()
    }
}

/// Blanks the named content fields on every entity, logging and skipping
/// field names the record type does not carry.
pub fn scrub_fields<E: Record>(entities: &mut [E], fields: &[String]) {
    for field in fields {
        if !E::content_fields().contains(&field.as_str()) {
            tracing::warn!(
                table = E::KIND.as_str(),
                field = field.as_str(),
                "unknown scrub field, skipping"
            );
            continue;
        }
        for entity in entities.iter_mut() {
            entity.set_field(field, "");
        }
    }
}
