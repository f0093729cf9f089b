use crate::TypesError;
use std::fmt;
use std::str::FromStr;

/// The closed set of entity kinds participating in the pipeline.
///
/// The `as_str` labels double as registry tags and as the base name of the
/// per-kind CSV file (`Address.csv`, `Person.csv`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EntityKind {
    Address,
    HealthcareOrganization,
    ServiceDepartment,
    ContactPoint,
    Person,
    HealthcarePersonnel,
}

impl EntityKind {
    /// All kinds, in the order the pipeline processes them.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Address,
        EntityKind::HealthcareOrganization,
        EntityKind::ServiceDepartment,
        EntityKind::ContactPoint,
        EntityKind::Person,
        EntityKind::HealthcarePersonnel,
    ];

    /// Returns the canonical label used in registry entries and file names.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Address => "Address",
            EntityKind::HealthcareOrganization => "HealthcareOrganization",
            EntityKind::ServiceDepartment => "ServiceDepartment",
            EntityKind::ContactPoint => "ContactPoint",
            EntityKind::Person => "Person",
            EntityKind::HealthcarePersonnel => "HealthcarePersonnel",
        }
    }

    /// Returns the namespace label used for deterministic identifier
    /// derivation.
    ///
    /// Person and HealthcarePersonnel rows describing the same individual are
    /// linked by a shared identifier, so both kinds derive duplicate
    /// identifiers in the `Person` namespace. A duplicate of the personnel row
    /// therefore carries the same identifier as a duplicate of the matching
    /// person row, keeping the cross-table identity intact after variation.
    pub fn identity_namespace(self) -> &'static str {
        match self {
            EntityKind::Person | EntityKind::HealthcarePersonnel => "Person",
            other => other.as_str(),
        }
    }

    /// Returns true if duplicates of this kind must use deterministic
    /// identifier allocation rather than random allocation.
    pub fn uses_deterministic_identity(self) -> bool {
        matches!(
            self,
            EntityKind::Person | EntityKind::HealthcarePersonnel
        )
    }

    /// Returns the CSV file name for this kind, e.g. `Address.csv`.
    pub fn csv_file_name(self) -> String {
        format!("{}.csv", self.as_str())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Address" => Ok(EntityKind::Address),
            "HealthcareOrganization" => Ok(EntityKind::HealthcareOrganization),
            "ServiceDepartment" => Ok(EntityKind::ServiceDepartment),
            "ContactPoint" => Ok(EntityKind::ContactPoint),
            "Person" => Ok(EntityKind::Person),
            "HealthcarePersonnel" => Ok(EntityKind::HealthcarePersonnel),
            other => Err(TypesError::UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for kind in EntityKind::ALL {
            let parsed: EntityKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = "Practitioner".parse::<EntityKind>();
        assert!(result.is_err());
    }

    #[test]
    fn test_person_and_personnel_share_identity_namespace() {
        assert_eq!(
            EntityKind::Person.identity_namespace(),
            EntityKind::HealthcarePersonnel.identity_namespace()
        );
        assert!(EntityKind::Person.uses_deterministic_identity());
        assert!(EntityKind::HealthcarePersonnel.uses_deterministic_identity());
        assert!(!EntityKind::Address.uses_deterministic_identity());
    }

    #[test]
    fn test_csv_file_name() {
        assert_eq!(EntityKind::Address.csv_file_name(), "Address.csv");
        assert_eq!(
            EntityKind::HealthcarePersonnel.csv_file_name(),
            "HealthcarePersonnel.csv"
        );
    }
}
