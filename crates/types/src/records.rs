use crate::{EntityKind, LanguageList};
use serde::{Deserialize, Serialize};

/// Name-based access to a record's content fields.
///
/// Content fields are the mutable payload of a record: everything except the
/// identifier and the relationship fields (`address`, `contactPoint`,
/// `isPartOf`, `institution`, `department`). The variation engine only ever
/// rewrites content fields, so relationship fields are deliberately not
/// reachable through [`Record::set_field`]; referential integrity of a
/// dataset cannot be broken by a variation rule or by the field-deletion
/// pre-pass.
///
/// Field names are the CSV column names (`postalCode`, `personName`, ...).
pub trait Record: Clone {
    /// The entity kind of this record type.
    const KIND: EntityKind;

    /// Returns the record's identifier.
    fn identifier(&self) -> &str;

    /// Replaces the record's identifier.
    fn set_identifier(&mut self, identifier: String);

    /// Returns the current value of a content field, rendered as a string.
    ///
    /// Returns `None` for unknown field names and for non-content fields.
    fn field(&self, name: &str) -> Option<String>;

    /// Overwrites a content field from its string rendering.
    ///
    /// Returns `false` (and leaves the record untouched) for unknown field
    /// names and for non-content fields.
    fn set_field(&mut self, name: &str, value: &str) -> bool;

    /// The content field names of this record type, in column order.
    fn content_fields() -> &'static [&'static str];
}

/// A postal address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub identifier: String,
    /// Street text, e.g. `Hoofdstraat 12`.
    pub text: String,
    pub city: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

impl Record for Address {
    const KIND: EntityKind = EntityKind::Address;

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn set_identifier(&mut self, identifier: String) {
        self.identifier = identifier;
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "text" => Some(self.text.clone()),
            "city" => Some(self.city.clone()),
            "postalCode" => Some(self.postal_code.clone()),
            "country" => Some(self.country.clone()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            "text" => self.text = value.to_string(),
            "city" => self.city = value.to_string(),
            "postalCode" => self.postal_code = value.to_string(),
            "country" => self.country = value.to_string(),
            _ => return false,
        }
        true
    }

    fn content_fields() -> &'static [&'static str] {
        &["text", "city", "postalCode", "country"]
    }
}

/// A healthcare organization. `address` and `contactPoint` hold identifiers
/// of the linked [`Address`] and [`ContactPoint`] records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthcareOrganization {
    pub identifier: String,
    #[serde(rename = "healthcareOrganizationName")]
    pub name: String,
    pub address: String,
    #[serde(rename = "contactPoint")]
    pub contact_point: String,
}

impl Record for HealthcareOrganization {
    const KIND: EntityKind = EntityKind::HealthcareOrganization;

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn set_identifier(&mut self, identifier: String) {
        self.identifier = identifier;
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "healthcareOrganizationName" => Some(self.name.clone()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            "healthcareOrganizationName" => self.name = value.to_string(),
            _ => return false,
        }
        true
    }

    fn content_fields() -> &'static [&'static str] {
        &["healthcareOrganizationName"]
    }
}

/// A service department within an organization. `isPartOf` links to the
/// owning [`HealthcareOrganization`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDepartment {
    pub identifier: String,
    #[serde(rename = "serviceDepartmentName")]
    pub name: String,
    pub address: String,
    #[serde(rename = "isPartOf")]
    pub is_part_of: String,
    #[serde(rename = "contactPoint")]
    pub contact_point: String,
}

impl Record for ServiceDepartment {
    const KIND: EntityKind = EntityKind::ServiceDepartment;

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn set_identifier(&mut self, identifier: String) {
        self.identifier = identifier;
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "serviceDepartmentName" => Some(self.name.clone()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            "serviceDepartmentName" => self.name = value.to_string(),
            _ => return false,
        }
        true
    }

    fn content_fields() -> &'static [&'static str] {
        &["serviceDepartmentName"]
    }
}

/// A contact point for an organization or department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactPoint {
    pub identifier: String,
    #[serde(rename = "contactType")]
    pub contact_type: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "availableLanguage")]
    pub available_language: LanguageList,
    pub fax: String,
}

impl Record for ContactPoint {
    const KIND: EntityKind = EntityKind::ContactPoint;

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn set_identifier(&mut self, identifier: String) {
        self.identifier = identifier;
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "contactType" => Some(self.contact_type.clone()),
            "phone" => Some(self.phone.clone()),
            "email" => Some(self.email.clone()),
            "availableLanguage" => Some(self.available_language.to_string()),
            "fax" => Some(self.fax.clone()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            "contactType" => self.contact_type = value.to_string(),
            "phone" => self.phone = value.to_string(),
            "email" => self.email = value.to_string(),
            "availableLanguage" => self.available_language = LanguageList::parse(value),
            "fax" => self.fax = value.to_string(),
            _ => return false,
        }
        true
    }

    fn content_fields() -> &'static [&'static str] {
        &["contactType", "phone", "email", "availableLanguage", "fax"]
    }
}

/// A natural person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub identifier: String,
    #[serde(rename = "personName")]
    pub person_name: String,
    /// ISO 8601 date (`YYYY-MM-DD`).
    #[serde(rename = "birthDate")]
    pub birth_date: String,
    pub gender: String,
    #[serde(rename = "knowsLanguage")]
    pub knows_language: String,
}

impl Record for Person {
    const KIND: EntityKind = EntityKind::Person;

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn set_identifier(&mut self, identifier: String) {
        self.identifier = identifier;
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "personName" => Some(self.person_name.clone()),
            "birthDate" => Some(self.birth_date.clone()),
            "gender" => Some(self.gender.clone()),
            "knowsLanguage" => Some(self.knows_language.clone()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            "personName" => self.person_name = value.to_string(),
            "birthDate" => self.birth_date = value.to_string(),
            "gender" => self.gender = value.to_string(),
            "knowsLanguage" => self.knows_language = value.to_string(),
            _ => return false,
        }
        true
    }

    fn content_fields() -> &'static [&'static str] {
        &["personName", "birthDate", "gender", "knowsLanguage"]
    }
}

/// The employment record of a person at an organization.
///
/// Shares its identifier with the matching [`Person`] record; `institution`
/// and `department` link to the employing organization and department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthcarePersonnel {
    pub identifier: String,
    pub institution: String,
    pub department: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    pub email: String,
}

impl Record for HealthcarePersonnel {
    const KIND: EntityKind = EntityKind::HealthcarePersonnel;

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn set_identifier(&mut self, identifier: String) {
        self.identifier = identifier;
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "jobTitle" => Some(self.job_title.clone()),
            "email" => Some(self.email.clone()),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            "jobTitle" => self.job_title = value.to_string(),
            "email" => self.email = value.to_string(),
            _ => return false,
        }
        true
    }

    fn content_fields() -> &'static [&'static str] {
        &["jobTitle", "email"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_address() -> Address {
        Address {
            identifier: "a1".into(),
            text: "Main St 12".into(),
            city: "Utrecht".into(),
            postal_code: "3511 AB".into(),
            country: "NL".into(),
        }
    }

    #[test]
    fn test_field_access_by_column_name() {
        let address = sample_address();
        assert_eq!(address.field("postalCode").as_deref(), Some("3511 AB"));
        assert_eq!(address.field("country").as_deref(), Some("NL"));
        assert_eq!(address.field("identifier"), None);
    }

    #[test]
    fn test_set_field_rejects_relationship_fields() {
        let mut organization = HealthcareOrganization {
            identifier: "o1".into(),
            name: "Jansen Zorg".into(),
            address: "a1".into(),
            contact_point: "c1".into(),
        };
        assert!(!organization.set_field("address", "a2"));
        assert!(!organization.set_field("contactPoint", "c2"));
        assert_eq!(organization.address, "a1");
        assert!(organization.set_field("healthcareOrganizationName", "Jansen Zorggroep"));
        assert_eq!(organization.name, "Jansen Zorggroep");
    }

    #[test]
    fn test_content_fields_cover_field_accessors() {
        let address = sample_address();
        for name in Address::content_fields() {
            assert!(address.field(name).is_some(), "missing accessor for {name}");
        }
    }

    #[test]
    fn test_contact_point_language_field_round_trip() {
        let mut contact = ContactPoint {
            identifier: "c1".into(),
            contact_type: "Appointments".into(),
            phone: "+31 30 1234567".into(),
            email: "info@healthcare.org".into(),
            available_language: LanguageList::new(vec!["nl".into(), "en".into()]),
            fax: "+31 30 7654321".into(),
        };
        assert_eq!(
            contact.field("availableLanguage").as_deref(),
            Some("['nl', 'en']")
        );
        assert!(contact.set_field("availableLanguage", "['et', 'ru']"));
        assert_eq!(contact.available_language.languages(), ["et", "ru"]);
    }
}
