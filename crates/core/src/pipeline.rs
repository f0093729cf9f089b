//! End-to-end duplicate injection over a full dataset.

use crate::catalog::{
    address_catalog, contact_point_email_catalog, department_catalog, organization_catalog,
    person_dob_catalog, person_name_catalog, personnel_email_catalog,
};
use crate::config::PipelineConfig;
use crate::error::EngineResult;
use crate::inject::{scrub_fields, Injector};
use crate::registry::DuplicateRegistry;
use crate::tables::Dataset;
use crate::translate::Translate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use synthmd_ident::IdentityAllocator;
use synthmd_types::EntityKind;

/// The injected dataset with its labels.
#[derive(Debug)]
pub struct PipelineOutput {
    pub dataset: Dataset,
    pub registry: DuplicateRegistry,
}

/// Runs the scrub pre-pass and all injection passes over `dataset`.
///
/// Passes run in a fixed order (addresses, organizations, departments,
/// person names, dates of birth, personnel emails, contact-point emails)
/// and share one seeded RNG, one identity allocator and one registry, so a
/// run is fully determined by the dataset and the configuration.
///
/// The organization and department catalogs join against the contact points
/// as they stand before injection; duplicates added to the contact-point
/// table later in the run never become translation targets of the same run.
pub fn inject_all(
    mut dataset: Dataset,
    config: &PipelineConfig,
    translator: Arc<dyn Translate>,
) -> EngineResult<PipelineOutput> {
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut allocator = IdentityAllocator::new();
    let mut registry = DuplicateRegistry::new();

    if let Some(scrub) = &config.scrub {
        scrub_fields(&mut dataset.addresses, scrub.fields_for(EntityKind::Address));
        scrub_fields(
            &mut dataset.organizations,
            scrub.fields_for(EntityKind::HealthcareOrganization),
        );
        scrub_fields(
            &mut dataset.departments,
            scrub.fields_for(EntityKind::ServiceDepartment),
        );
        scrub_fields(
            &mut dataset.contact_points,
            scrub.fields_for(EntityKind::ContactPoint),
        );
        scrub_fields(&mut dataset.persons, scrub.fields_for(EntityKind::Person));
        scrub_fields(
            &mut dataset.personnel,
            scrub.fields_for(EntityKind::HealthcarePersonnel),
        );
        tracing::info!("scrub pre-pass applied");
    }

    let organization_rules =
        organization_catalog(&dataset.contact_points, Arc::clone(&translator));
    let department_rules = department_catalog(&dataset.contact_points, translator);

    let rate = config.variation_rate;
    let noise = config.noise;
    let mut injector = Injector::new(&mut rng, &mut allocator, &mut registry);

    dataset.addresses = injector.inject(dataset.addresses, &address_catalog(), rate, noise)?;
    dataset.organizations =
        injector.inject(dataset.organizations, &organization_rules, rate, noise)?;
    dataset.departments =
        injector.inject(dataset.departments, &department_rules, rate, noise)?;
    dataset.persons = injector.inject(dataset.persons, &person_name_catalog(), rate, noise)?;
    dataset.persons = injector.inject(dataset.persons, &person_dob_catalog(), rate, noise)?;
    dataset.personnel =
        injector.inject(dataset.personnel, &personnel_email_catalog(), rate, noise)?;
    dataset.contact_points = injector.inject(
        dataset.contact_points,
        &contact_point_email_catalog(),
        rate,
        noise,
    )?;

    tracing::info!(duplicates = registry.len(), "injection finished");
    Ok(PipelineOutput { dataset, registry })
}
