//! CSV persistence for the six entity tables.
//!
//! Each kind lives in its own file (`Address.csv`, `Person.csv`, ...) with a
//! header row, UTF-8 encoded. Column names match the serde renames on the
//! record types, so the files are interchangeable with datasets produced by
//! other tooling in the same format.

use crate::error::{EngineError, EngineResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use synthmd_types::{
    Address, ContactPoint, EntityKind, HealthcareOrganization, HealthcarePersonnel, Person,
    Record, ServiceDepartment,
};

/// Reads one table from `dir`, named after the record kind.
pub fn read_table<E: Record + DeserializeOwned>(dir: &Path) -> EngineResult<Vec<E>> {
    let path = dir.join(E::KIND.csv_file_name());
    let mut reader = csv::Reader::from_path(&path).map_err(|source| EngineError::TableRead {
        path: path.clone(),
        source,
    })?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        let entity: E = row.map_err(|source| EngineError::TableRead {
            path: path.clone(),
            source,
        })?;
        rows.push(entity);
    }
    tracing::debug!(table = E::KIND.as_str(), rows = rows.len(), "table loaded");
    Ok(rows)
}

/// Writes one table into `dir`, named after the record kind.
pub fn write_table<E: Record + Serialize>(dir: &Path, rows: &[E]) -> EngineResult<()> {
    let path = dir.join(E::KIND.csv_file_name());
    let mut writer = csv::Writer::from_path(&path).map_err(|source| EngineError::TableWrite {
        path: path.clone(),
        source,
    })?;
    for row in rows {
        writer.serialize(row).map_err(|source| EngineError::TableWrite {
            path: path.clone(),
            source,
        })?;
    }
    writer.flush().map_err(|e| EngineError::TableWrite {
        path,
        source: e.into(),
    })?;
    Ok(())
}

/// The six entity tables of one synthetic master-data set.
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    pub addresses: Vec<Address>,
    pub organizations: Vec<HealthcareOrganization>,
    pub departments: Vec<ServiceDepartment>,
    pub contact_points: Vec<ContactPoint>,
    pub persons: Vec<Person>,
    pub personnel: Vec<HealthcarePersonnel>,
}

impl Dataset {
    /// Loads all six tables from `dir`. Every file must exist.
    pub fn load_dir(dir: &Path) -> EngineResult<Self> {
        Ok(Self {
            addresses: read_table(dir)?,
            organizations: read_table(dir)?,
            departments: read_table(dir)?,
            contact_points: read_table(dir)?,
            persons: read_table(dir)?,
            personnel: read_table(dir)?,
        })
    }

    /// Writes all six tables into `dir`, creating it if needed.
    pub fn store_dir(&self, dir: &Path) -> EngineResult<()> {
        std::fs::create_dir_all(dir).map_err(EngineError::OutputDirCreation)?;
        write_table(dir, &self.addresses)?;
        write_table(dir, &self.organizations)?;
        write_table(dir, &self.departments)?;
        write_table(dir, &self.contact_points)?;
        write_table(dir, &self.persons)?;
        write_table(dir, &self.personnel)?;
        tracing::info!(dir = %dir.display(), "dataset stored");
        Ok(())
    }

    /// Row counts per kind, in pipeline order.
    pub fn counts(&self) -> [(EntityKind, usize); 6] {
        [
            (EntityKind::Address, self.addresses.len()),
            (EntityKind::HealthcareOrganization, self.organizations.len()),
            (EntityKind::ServiceDepartment, self.departments.len()),
            (EntityKind::ContactPoint, self.contact_points.len()),
            (EntityKind::Person, self.persons.len()),
            (EntityKind::HealthcarePersonnel, self.personnel.len()),
        ]
    }

    /// Returns the relationship references that do not resolve to a row in
    /// the referenced table. Empty means the dataset is referentially intact.
    pub fn dangling_references(&self) -> Vec<(EntityKind, String, String)> {
        let address_ids: HashSet<&str> =
            self.addresses.iter().map(|a| a.identifier.as_str()).collect();
        let contact_ids: HashSet<&str> = self
            .contact_points
            .iter()
            .map(|c| c.identifier.as_str())
            .collect();
        let organization_ids: HashSet<&str> = self
            .organizations
            .iter()
            .map(|o| o.identifier.as_str())
            .collect();
        let department_ids: HashSet<&str> = self
            .departments
            .iter()
            .map(|d| d.identifier.as_str())
            .collect();

        let mut dangling = Vec::new();
        let mut check = |kind: EntityKind, owner: &str, field: &str, target: &str, ids: &HashSet<&str>| {
            if !ids.contains(target) {
                dangling.push((kind, owner.to_string(), format!("{field}={target}")));
            }
        };

        for organization in &self.organizations {
            check(
                EntityKind::HealthcareOrganization,
                &organization.identifier,
                "address",
                &organization.address,
                &address_ids,
            );
            check(
                EntityKind::HealthcareOrganization,
                &organization.identifier,
                "contactPoint",
                &organization.contact_point,
                &contact_ids,
            );
        }
        for department in &self.departments {
            check(
                EntityKind::ServiceDepartment,
                &department.identifier,
                "address",
                &department.address,
                &address_ids,
            );
            check(
                EntityKind::ServiceDepartment,
                &department.identifier,
                "isPartOf",
                &department.is_part_of,
                &organization_ids,
            );
            check(
                EntityKind::ServiceDepartment,
                &department.identifier,
                "contactPoint",
                &department.contact_point,
                &contact_ids,
            );
        }
        for personnel in &self.personnel {
            check(
                EntityKind::HealthcarePersonnel,
                &personnel.identifier,
                "institution",
                &personnel.institution,
                &organization_ids,
            );
            check(
                EntityKind::HealthcarePersonnel,
                &personnel.identifier,
                "department",
                &personnel.department,
                &department_ids,
            );
        }
        dangling
    }
}
