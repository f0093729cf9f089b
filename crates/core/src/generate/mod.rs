//! Seeded generation of a base synthetic master-data set.
//!
//! The generator builds the six tables top-down: organizations with their
//! addresses and contact points, departments with related addresses,
//! personnel with a linked person row. All randomness flows through the
//! generator's RNG, so equal seeds produce equal datasets.

mod pools;

pub use pools::{
    country_pool, job_titles_for, CountryPool, DEPARTMENT_CONTACT_TYPES, MEDICAL_DEPARTMENTS,
    ORGANIZATION_CONTACT_TYPES,
};

use crate::config::GeneratorConfig;
use crate::error::EngineResult;
use crate::tables::Dataset;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use rand_chacha::ChaCha8Rng;
use synthmd_ident::EntityId;
use synthmd_types::{
    Address, ContactPoint, HealthcareOrganization, HealthcarePersonnel, LanguageList, Person,
    ServiceDepartment,
};

/// Descriptor words that sometimes appear between the company stem and the
/// country suffix, so abbreviation-sensitive names occur in the data.
const ORGANIZATION_DESCRIPTORS: &[&str] = &["", "Hospital", "Clinic", "Medical Center", "Group"];

const GENDERS: &[&str] = &["Male", "Female", "Other"];
const PERSON_LANGUAGES: &[&str] = &["nl", "de", "et"];

pub struct Generator<'a> {
    rng: &'a mut ChaCha8Rng,
}

impl<'a> Generator<'a> {
    pub fn new(rng: &'a mut ChaCha8Rng) -> Self {
        Self { rng }
    }

    /// Generates a full dataset for `config`.
    pub fn generate(&mut self, config: &GeneratorConfig) -> EngineResult<Dataset> {
        config.validate()?;
        let mut dataset = Dataset::default();

        for _ in 0..config.organizations {
            let pool = *[&pools::NETHERLANDS, &pools::AUSTRIA, &pools::ESTONIA]
                .choose(self.rng)
                .unwrap_or(&&pools::NETHERLANDS);
            self.generate_organization(pool, config, &mut dataset);
        }

        tracing::info!(
            organizations = dataset.organizations.len(),
            departments = dataset.departments.len(),
            persons = dataset.persons.len(),
            "dataset generated"
        );
        Ok(dataset)
    }

    fn generate_organization(
        &mut self,
        pool: &'static CountryPool,
        config: &GeneratorConfig,
        dataset: &mut Dataset,
    ) {
        let address = self.generate_address(pool);
        let name = self.organization_name(pool);
        let contact = self.contact_point(pool, &name, None);
        let organization = HealthcareOrganization {
            identifier: self.mint_id(),
            name: name.clone(),
            address: address.identifier.clone(),
            contact_point: contact.identifier.clone(),
        };
        dataset.addresses.push(address);
        dataset.contact_points.push(contact);

        let (min_depts, max_depts) = config.departments_per_org;
        let department_count = self.rng.gen_range(min_depts..=max_depts);
        let mut departments = Vec::with_capacity(department_count);
        for _ in 0..department_count {
            departments.push(self.generate_department(pool, &organization, dataset));
        }

        // Two staff members per department first, then fill up to the
        // organization's target headcount.
        let (min_staff, max_staff) = config.personnel_per_org;
        let target = self.rng.gen_range(min_staff..=max_staff);
        let mut headcount = 0;
        for department in &departments {
            for _ in 0..2 {
                self.generate_staff_member(pool, &organization, department, dataset);
                headcount += 1;
            }
        }
        while headcount < target {
            let department = departments
                .choose(self.rng)
                .cloned()
                .unwrap_or_else(|| departments[0].clone());
            self.generate_staff_member(pool, &organization, &department, dataset);
            headcount += 1;
        }

        dataset.departments.extend(departments);
        dataset.organizations.push(organization);
    }

    fn generate_department(
        &mut self,
        pool: &'static CountryPool,
        organization: &HealthcareOrganization,
        dataset: &mut Dataset,
    ) -> ServiceDepartment {
        let name = self.choose(MEDICAL_DEPARTMENTS).to_string();
        let parent = dataset
            .addresses
            .iter()
            .find(|a| a.identifier == organization.address)
            .cloned();
        let address = match parent {
            Some(parent) => self.related_address(&parent),
            None => self.generate_address(pool),
        };
        let contact = self.contact_point(pool, &organization.name, Some(&name));
        let department = ServiceDepartment {
            identifier: self.mint_id(),
            name,
            address: address.identifier.clone(),
            is_part_of: organization.identifier.clone(),
            contact_point: contact.identifier.clone(),
        };
        dataset.addresses.push(address);
        dataset.contact_points.push(contact);
        department
    }

    /// Creates a person and the personnel row describing their employment.
    /// Both rows share one identifier; that link is what makes the pair
    /// describe the same individual.
    fn generate_staff_member(
        &mut self,
        pool: &'static CountryPool,
        organization: &HealthcareOrganization,
        department: &ServiceDepartment,
        dataset: &mut Dataset,
    ) {
        let person_name = format!(
            "{} {}",
            self.choose(pool.first_names),
            self.choose(pool.surnames)
        );
        let email_local: String = person_name
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '.' | '\''))
            .collect();
        let identifier = self.mint_id();

        let person = Person {
            identifier: identifier.clone(),
            person_name,
            birth_date: self.birth_date(),
            gender: self.choose(GENDERS).to_string(),
            knows_language: self.choose(PERSON_LANGUAGES).to_string(),
        };
        let personnel = HealthcarePersonnel {
            identifier,
            institution: organization.identifier.clone(),
            department: department.identifier.clone(),
            job_title: self.choose(job_titles_for(&department.name)).to_string(),
            email: format!("{email_local}@healthcare.org"),
        };
        dataset.persons.push(person);
        dataset.personnel.push(personnel);
    }

    fn generate_address(&mut self, pool: &'static CountryPool) -> Address {
        let street = format!(
            "{} {}",
            self.choose(pool.streets),
            self.rng.gen_range(1..=150)
        );
        Address {
            identifier: self.mint_id(),
            text: street,
            city: self.choose(pool.cities).to_string(),
            postal_code: self.postal_code(pool.code),
            country: pool.code.to_string(),
        }
    }

    /// A department address in the same building block as its organization:
    /// same city and postal code, different house number.
    fn related_address(&mut self, parent: &Address) -> Address {
        let tokens: Vec<&str> = parent.text.split_whitespace().collect();
        let text = match tokens.split_last() {
            Some((last, street)) if last.bytes().all(|b| b.is_ascii_digit()) => {
                format!("{} {}", street.join(" "), self.rng.gen_range(1..=150))
            }
            _ => format!("{}, Suite {}", parent.text, self.rng.gen_range(100..=999)),
        };
        Address {
            identifier: self.mint_id(),
            text,
            city: parent.city.clone(),
            postal_code: parent.postal_code.clone(),
            country: parent.country.clone(),
        }
    }

    fn postal_code(&mut self, country: &str) -> String {
        match country {
            "NL" => {
                let digits = self.rng.gen_range(1000..=9999);
                let letters: String = (0..2)
                    .map(|_| char::from(b'A' + self.rng.gen_range(0..26)))
                    .collect();
                format!("{digits} {letters}")
            }
            "AT" => self.rng.gen_range(1000..=9999).to_string(),
            _ => self.rng.gen_range(10000..=99999).to_string(),
        }
    }

    fn organization_name(&mut self, pool: &'static CountryPool) -> String {
        let stem = self.choose(pool.company_stems);
        let descriptor = self.choose(ORGANIZATION_DESCRIPTORS);
        if descriptor.is_empty() {
            format!("{stem}{}", pool.organization_suffix)
        } else {
            format!("{stem} {descriptor}{}", pool.organization_suffix)
        }
    }

    fn contact_point(
        &mut self,
        pool: &'static CountryPool,
        organization_name: &str,
        department_name: Option<&str>,
    ) -> ContactPoint {
        let mut languages = vec![pool.language.to_string()];
        if self.rng.gen_bool(0.5) {
            languages.push("en".to_string());
        }

        let organization_first: String = organization_name
            .split_whitespace()
            .next()
            .unwrap_or("contact")
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        let (contact_type, email) = match department_name {
            Some(department) => {
                let department_first = department.split_whitespace().next().unwrap_or("dept");
                (
                    self.choose(DEPARTMENT_CONTACT_TYPES),
                    format!("{organization_first}.{department_first}@dept.healthcare.org"),
                )
            }
            None => (
                self.choose(ORGANIZATION_CONTACT_TYPES),
                format!("{organization_first}@healthcare.org"),
            ),
        };

        ContactPoint {
            identifier: self.mint_id(),
            contact_type: contact_type.to_string(),
            phone: self.phone_number(pool),
            email,
            available_language: LanguageList::new(languages),
            fax: self.phone_number(pool),
        }
    }

    fn phone_number(&mut self, pool: &'static CountryPool) -> String {
        format!(
            "{} {} {:07}",
            pool.phone_prefix,
            self.rng.gen_range(10..100),
            self.rng.gen_range(1_000_000..10_000_000)
        )
    }

    fn birth_date(&mut self) -> String {
        // Working-age staff, roughly 25 to 65 at generation time.
        let year = self.rng.gen_range(1961..=2001);
        let month = self.rng.gen_range(1..=12);
        let day = self.rng.gen_range(1..=28);
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_default()
            .format("%Y-%m-%d")
            .to_string()
    }

    fn choose<T: Copy>(&mut self, pool: &[T]) -> T {
        pool[self.rng.gen_range(0..pool.len())]
    }

    fn mint_id(&mut self) -> String {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        EntityId::from_random_bytes(bytes).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use synthmd_ident::EntityId as Id;

    fn small_config() -> GeneratorConfig {
        GeneratorConfig {
            organizations: 4,
            departments_per_org: (2, 3),
            personnel_per_org: (5, 8),
        }
    }

    fn generate(seed: u64) -> Dataset {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Generator::new(&mut rng).generate(&small_config()).unwrap()
    }

    #[test]
    fn test_counts_respect_config() {
        let dataset = generate(1);
        assert_eq!(dataset.organizations.len(), 4);
        assert!(dataset.departments.len() >= 8 && dataset.departments.len() <= 12);
        // One address and one contact point per organization and department.
        assert_eq!(
            dataset.addresses.len(),
            dataset.organizations.len() + dataset.departments.len()
        );
        assert_eq!(dataset.addresses.len(), dataset.contact_points.len());
        assert_eq!(dataset.persons.len(), dataset.personnel.len());
    }

    #[test]
    fn test_referential_integrity() {
        let dataset = generate(2);
        assert!(dataset.dangling_references().is_empty());
    }

    #[test]
    fn test_person_and_personnel_share_identifier() {
        let dataset = generate(3);
        let person_ids: HashSet<&str> = dataset
            .persons
            .iter()
            .map(|p| p.identifier.as_str())
            .collect();
        for personnel in &dataset.personnel {
            assert!(person_ids.contains(personnel.identifier.as_str()));
        }
    }

    #[test]
    fn test_each_department_has_two_staff_members() {
        let dataset = generate(4);
        for department in &dataset.departments {
            let staff = dataset
                .personnel
                .iter()
                .filter(|p| p.department == department.identifier)
                .count();
            assert!(staff >= 2, "{} has {staff}", department.name);
        }
    }

    #[test]
    fn test_identifiers_are_canonical_and_unique() {
        let dataset = generate(5);
        let mut ids = HashSet::new();
        for address in &dataset.addresses {
            assert!(Id::is_canonical(&address.identifier));
            assert!(ids.insert(address.identifier.clone()));
        }
        for organization in &dataset.organizations {
            assert!(Id::is_canonical(&organization.identifier));
            assert!(ids.insert(organization.identifier.clone()));
        }
    }

    #[test]
    fn test_postal_code_formats_match_country() {
        let dataset = generate(6);
        for address in &dataset.addresses {
            match address.country.as_str() {
                "NL" => assert!(
                    address.postal_code.len() == 7 && address.postal_code.as_bytes()[4] == b' ',
                    "bad NL code {}",
                    address.postal_code
                ),
                "AT" => assert_eq!(address.postal_code.len(), 4),
                "EE" => assert_eq!(address.postal_code.len(), 5),
                other => panic!("unexpected country {other}"),
            }
        }
    }

    #[test]
    fn test_birth_dates_are_valid_iso() {
        let dataset = generate(7);
        for person in &dataset.persons {
            assert!(NaiveDate::parse_from_str(&person.birth_date, "%Y-%m-%d").is_ok());
        }
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let first = generate(42);
        let second = generate(42);
        assert_eq!(first.addresses, second.addresses);
        assert_eq!(first.persons, second.persons);
        assert_eq!(first.contact_points, second.contact_points);
    }

    #[test]
    fn test_department_email_carries_both_stems() {
        let dataset = generate(8);
        for department in &dataset.departments {
            let contact = dataset
                .contact_points
                .iter()
                .find(|c| c.identifier == department.contact_point)
                .unwrap();
            assert!(contact.email.ends_with("@dept.healthcare.org"));
            assert!(contact.email.contains('.'));
        }
    }
}
