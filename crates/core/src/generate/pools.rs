//! Static sampling pools for the base generator.
//!
//! The pools replace an external fake-data service: enough per-country
//! material that a generated dataset reads plausibly Dutch, Austrian or
//! Estonian, small enough to audit at a glance.

/// Supported countries, as ISO 3166-1 alpha-2 codes.
pub const COUNTRIES: &[&str] = &["NL", "AT", "EE"];

pub struct CountryPool {
    pub code: &'static str,
    pub cities: &'static [&'static str],
    pub streets: &'static [&'static str],
    pub first_names: &'static [&'static str],
    pub surnames: &'static [&'static str],
    pub company_stems: &'static [&'static str],
    /// Suffix appended to organization names, leading space included.
    pub organization_suffix: &'static str,
    /// Local language code, listed first in contact-point languages.
    pub language: &'static str,
    /// International dialing prefix for phone and fax numbers.
    pub phone_prefix: &'static str,
}

pub const NETHERLANDS: CountryPool = CountryPool {
    code: "NL",
    cities: &[
        "Amsterdam", "Rotterdam", "Utrecht", "Eindhoven", "Groningen", "Tilburg", "Almere",
        "Breda", "Nijmegen", "Haarlem",
    ],
    streets: &[
        "Hoofdstraat", "Kerkstraat", "Dorpsstraat", "Molenweg", "Stationsweg", "Beukenlaan",
        "Wilhelminastraat", "Julianalaan", "Emmastraat", "Lindenlaan",
    ],
    first_names: &[
        "Daan", "Sanne", "Lars", "Fleur", "Bram", "Lotte", "Sven", "Anouk", "Thijs", "Femke",
    ],
    surnames: &[
        "de Jong", "Jansen", "de Vries", "van den Berg", "Bakker", "Visser", "Smit", "Meijer",
        "Mulder", "Bos",
    ],
    company_stems: &[
        "Jansen", "Hollandia", "Rijnland", "Amstel", "Zuiderzee", "Veluwe", "Batavia", "Oranje",
    ],
    organization_suffix: " Zorg",
    language: "nl",
    phone_prefix: "+31",
};

pub const AUSTRIA: CountryPool = CountryPool {
    code: "AT",
    cities: &[
        "Wien", "Graz", "Linz", "Salzburg", "Innsbruck", "Klagenfurt", "Villach", "Wels",
        "Sankt Polten", "Dornbirn",
    ],
    streets: &[
        "Hauptstrasse", "Bahnhofstrasse", "Kirchengasse", "Schlossallee", "Ringstrasse",
        "Mozartgasse", "Lindenweg", "Bergstrasse", "Marktplatz", "Feldgasse",
    ],
    first_names: &[
        "Lukas", "Anna", "Maximilian", "Sophie", "Felix", "Lena", "Jakob", "Marie", "Tobias",
        "Johanna",
    ],
    surnames: &[
        "Gruber", "Huber", "Bauer", "Wagner", "Steiner", "Moser", "Mayer", "Hofer", "Leitner",
        "Berger",
    ],
    company_stems: &[
        "Huber", "Alpenland", "Donau", "Steiermark", "Tirolia", "Wienerwald", "Habsburg",
        "Salzkammer",
    ],
    organization_suffix: " Gesundheitszentrum",
    language: "de",
    phone_prefix: "+43",
};

pub const ESTONIA: CountryPool = CountryPool {
    code: "EE",
    cities: &[
        "Tallinn", "Tartu", "Narva", "Parnu", "Kohtla-Jarve", "Viljandi", "Rakvere", "Maardu",
        "Kuressaare", "Sillamae",
    ],
    streets: &[
        "Pikk", "Vabaduse", "Metsa", "Jarve", "Kooli", "Aia", "Paju", "Kase", "Tamme", "Niidu",
    ],
    first_names: &[
        "Rasmus", "Liis", "Kristjan", "Maarja", "Martin", "Kadri", "Oliver", "Triin", "Karl",
        "Helena",
    ],
    surnames: &[
        "Tamm", "Saar", "Sepp", "Magi", "Kask", "Kukk", "Rebane", "Ilves", "Parn", "Koppel",
    ],
    company_stems: &[
        "Tamm", "Baltika", "Piirissaar", "Kalev", "Viru", "Hansa", "Livonia", "Saaremaa",
    ],
    organization_suffix: " Tervisekeskus",
    language: "et",
    phone_prefix: "+372",
};

/// Returns the pool for a supported country code.
pub fn country_pool(code: &str) -> Option<&'static CountryPool> {
    match code {
        "NL" => Some(&NETHERLANDS),
        "AT" => Some(&AUSTRIA),
        "EE" => Some(&ESTONIA),
        _ => None,
    }
}

/// Clinical department names a department draws its name from.
pub const MEDICAL_DEPARTMENTS: &[&str] = &[
    "Anesthesia",
    "Cardiovascular",
    "Community Health",
    "Dentistry",
    "Dermatology",
    "Diet Nutrition",
    "Emergency",
    "Endocrine",
    "Gastroenterologic",
    "Genetic",
    "Geriatric",
    "Gynecologic",
    "Hematologic",
    "Infectious",
    "Laboratory Science",
    "Midwifery",
    "Musculoskeletal",
    "Neurologic",
    "Nursing",
    "Obstetric",
    "Oncologic",
    "Optometric",
    "Otolaryngologic",
    "Pathology",
    "Pediatric",
    "Pharmacy Specialty",
    "Physiotherapy",
    "Plastic Surgery",
    "Podiatric",
    "Primary Care",
    "Psychiatric",
    "Public Health",
    "Pulmonary",
    "Radiography",
    "Renal",
    "Respiratory Therapy",
    "Rheumatologic",
    "Speech Pathology",
    "Surgical",
    "Toxicologic",
    "Urologic",
];

/// Job titles appropriate to each department.
pub const DEPARTMENT_JOB_TITLES: &[(&str, &[&str])] = &[
    ("Anesthesia", &["Anesthesiologist", "Anesthesiology Nurse", "Anesthesiology Assistant"]),
    ("Cardiovascular", &["Cardiologist", "Cardiovascular Surgeon", "Cardiac Nurse", "EKG Technician"]),
    ("Community Health", &["Public Health Nurse", "Community Health Worker", "Health Educator"]),
    ("Dentistry", &["Dentist", "Dental Hygienist", "Orthodontist", "Dental Assistant"]),
    ("Dermatology", &["Dermatologist", "Dermatology Nurse", "Skin Care Specialist"]),
    ("Diet Nutrition", &["Dietitian", "Nutritionist", "Diet Technician", "Nutrition Counselor"]),
    ("Emergency", &["Emergency Physician", "ER Nurse", "Trauma Surgeon", "Emergency Medical Technician"]),
    ("Endocrine", &["Endocrinologist", "Diabetes Educator", "Endocrine Nurse"]),
    ("Gastroenterologic", &["Gastroenterologist", "GI Nurse", "GI Technician"]),
    ("Genetic", &["Geneticist", "Genetic Counselor", "Clinical Genetics Specialist"]),
    ("Geriatric", &["Geriatrician", "Gerontology Nurse", "Elderly Care Specialist"]),
    ("Gynecologic", &["Gynecologist", "Women's Health Nurse", "Obstetrics Technician"]),
    ("Hematologic", &["Hematologist", "Blood Bank Technologist", "Hematology Nurse"]),
    ("Infectious", &["Infectious Disease Specialist", "Epidemiologist", "Infection Control Nurse"]),
    ("Laboratory Science", &["Lab Technician", "Medical Laboratory Scientist", "Pathologist"]),
    ("Midwifery", &["Midwife", "Obstetric Nurse", "Doula"]),
    ("Musculoskeletal", &["Orthopedic Surgeon", "Physical Therapist", "Orthopedic Nurse"]),
    ("Neurologic", &["Neurologist", "Neurosurgeon", "Neurological Nurse", "EEG Technician"]),
    ("Nursing", &["Registered Nurse", "Nurse Practitioner", "Licensed Practical Nurse", "Nurse Manager"]),
    ("Obstetric", &["Obstetrician", "Labor & Delivery Nurse", "Neonatal Nurse"]),
    ("Oncologic", &["Oncologist", "Radiation Therapist", "Oncology Nurse"]),
    ("Optometric", &["Optometrist", "Ophthalmologist", "Optician", "Vision Therapist"]),
    ("Otolaryngologic", &["Otolaryngologist", "ENT Specialist", "Audiologist"]),
    ("Pathology", &["Pathologist", "Histology Technician", "Cytotechnologist", "Morgue Attendant"]),
    ("Pediatric", &["Pediatrician", "Pediatric Nurse", "Child Life Specialist", "School Nurse"]),
    ("Pharmacy Specialty", &["Pharmacist", "Pharmacy Technician", "Clinical Pharmacologist"]),
    ("Physiotherapy", &["Physiotherapist", "Physical Therapy Assistant", "Rehabilitation Specialist"]),
    ("Plastic Surgery", &["Plastic Surgeon", "Cosmetic Surgery Nurse", "Reconstructive Specialist"]),
    ("Podiatric", &["Podiatrist", "Foot Care Nurse", "Orthotic Specialist"]),
    ("Primary Care", &["Family Physician", "General Practitioner", "Primary Care Nurse", "Medical Assistant"]),
    ("Psychiatric", &["Psychiatrist", "Psychologist", "Mental Health Nurse", "Therapist"]),
    ("Public Health", &["Epidemiologist", "Public Health Officer", "Community Outreach Specialist"]),
    ("Pulmonary", &["Pulmonologist", "Respiratory Therapist", "Lung Function Technician"]),
    ("Radiography", &["Radiologist", "X-Ray Technician", "MRI Technologist", "CT Scan Technician"]),
    ("Renal", &["Nephrologist", "Dialysis Nurse", "Renal Dietitian"]),
    ("Respiratory Therapy", &["Respiratory Therapist", "Pulmonary Function Technologist", "Sleep Technician"]),
    ("Rheumatologic", &["Rheumatologist", "Arthritis Specialist", "Rheumatology Nurse"]),
    ("Speech Pathology", &["Speech Pathologist", "Speech Therapist", "Communication Disorders Specialist"]),
    ("Surgical", &["Surgeon", "Surgical Nurse", "Anesthesia Assistant", "Surgical Technologist"]),
    ("Toxicologic", &["Toxicologist", "Poison Control Specialist", "Environmental Health Officer"]),
    ("Urologic", &["Urologist", "Urology Nurse", "Urodynamics Technician"]),
];

/// Fallback titles for departments absent from the job-title table.
pub const GENERIC_JOB_TITLES: &[&str] = &["Healthcare Specialist", "Medical Professional"];

/// Returns the job titles for a department name.
pub fn job_titles_for(department: &str) -> &'static [&'static str] {
    DEPARTMENT_JOB_TITLES
        .iter()
        .find(|(name, _)| *name == department)
        .map(|(_, titles)| *titles)
        .unwrap_or(GENERIC_JOB_TITLES)
}

/// Contact types for organization-level contact points.
pub const ORGANIZATION_CONTACT_TYPES: &[&str] = &[
    "General Inquiries",
    "Patient Services",
    "Media Relations",
    "Administrative",
    "Billing",
];

/// Contact types for department-level contact points.
pub const DEPARTMENT_CONTACT_TYPES: &[&str] =
    &["Appointments", "Information", "Emergency", "Staff", "Referrals"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_department_has_job_titles() {
        for department in MEDICAL_DEPARTMENTS {
            assert!(!job_titles_for(department).is_empty());
        }
    }

    #[test]
    fn test_unknown_department_falls_back() {
        assert_eq!(job_titles_for("Astrology"), GENERIC_JOB_TITLES);
    }

    #[test]
    fn test_country_pools_resolve() {
        for code in COUNTRIES {
            let pool = country_pool(code).unwrap();
            assert_eq!(pool.code, *code);
            assert!(!pool.cities.is_empty());
        }
        assert!(country_pool("FR").is_none());
    }
}
