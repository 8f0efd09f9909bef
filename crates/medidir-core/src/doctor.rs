use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_HOSPITAL: &str = "Apollo 24|7 Virtual Clinic";
pub const DEFAULT_LANGUAGE: &str = "English";

/// A doctor profile, the single record type served by the directory.
///
/// Optional fields carry their defaults through serde so that a record
/// deserialized from a sparse document ends up identical to one built
/// through [`DoctorBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub qualification: String,
    pub experience: i64,
    #[serde(default = "default_hospital")]
    pub hospital: String,
    pub location: String,
    pub consultation_fee: f64,
    #[serde(default)]
    pub availability: BTreeMap<String, String>,
    #[serde(default)]
    pub is_doctor: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_true")]
    pub available_for_online_consult: bool,
    #[serde(default = "default_true")]
    pub available_for_hospital_visit: bool,
    pub created_at: Timestamp,
}

fn default_hospital() -> String {
    DEFAULT_HOSPITAL.to_string()
}

fn default_languages() -> Vec<String> {
    vec![DEFAULT_LANGUAGE.to_string()]
}

fn default_true() -> bool {
    true
}

impl Doctor {
    /// Starts a builder from the six required fields. Everything else
    /// defaults per the record contract and can be overridden with the
    /// `with_*` setters.
    pub fn builder(
        name: impl Into<String>,
        specialty: impl Into<String>,
        qualification: impl Into<String>,
        experience: i64,
        location: impl Into<String>,
        consultation_fee: f64,
    ) -> DoctorBuilder {
        DoctorBuilder {
            name: name.into(),
            specialty: specialty.into(),
            qualification: qualification.into(),
            experience,
            location: location.into(),
            consultation_fee,
            hospital: None,
            availability: BTreeMap::new(),
            is_doctor: false,
            profile_image: None,
            languages: None,
            available_for_online_consult: true,
            available_for_hospital_visit: true,
        }
    }

    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}

/// Builder applying the construction-time defaults: hospital falls back to
/// [`DEFAULT_HOSPITAL`], languages to `["English"]`, both availability flags
/// to `true`, `is_doctor` to `false`, and the availability map to empty.
#[derive(Debug, Clone)]
pub struct DoctorBuilder {
    name: String,
    specialty: String,
    qualification: String,
    experience: i64,
    location: String,
    consultation_fee: f64,
    hospital: Option<String>,
    availability: BTreeMap<String, String>,
    is_doctor: bool,
    profile_image: Option<String>,
    languages: Option<Vec<String>>,
    available_for_online_consult: bool,
    available_for_hospital_visit: bool,
}

impl DoctorBuilder {
    #[must_use]
    pub fn with_hospital(mut self, hospital: impl Into<String>) -> Self {
        self.hospital = Some(hospital.into());
        self
    }

    /// Adds one availability entry (day or slot name to an hours string).
    #[must_use]
    pub fn with_slot(mut self, day: impl Into<String>, hours: impl Into<String>) -> Self {
        self.availability.insert(day.into(), hours.into());
        self
    }

    #[must_use]
    pub fn with_is_doctor(mut self, is_doctor: bool) -> Self {
        self.is_doctor = is_doctor;
        self
    }

    #[must_use]
    pub fn with_profile_image(mut self, url: impl Into<String>) -> Self {
        self.profile_image = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = Some(languages.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_online_consult(mut self, available: bool) -> Self {
        self.available_for_online_consult = available;
        self
    }

    #[must_use]
    pub fn with_hospital_visit(mut self, available: bool) -> Self {
        self.available_for_hospital_visit = available;
        self
    }

    /// Finalizes the record: trims text fields, fills defaults, assigns a
    /// fresh id and creation timestamp. An empty languages list counts as
    /// omitted so the record never carries one.
    pub fn build(self) -> Doctor {
        let hospital = self
            .hospital
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(default_hospital);
        let languages = match self.languages {
            Some(langs) if !langs.is_empty() => langs,
            _ => default_languages(),
        };
        let profile_image = self
            .profile_image
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Doctor {
            id: crate::id::generate_id(),
            name: self.name.trim().to_string(),
            specialty: self.specialty.trim().to_string(),
            qualification: self.qualification.trim().to_string(),
            experience: self.experience,
            hospital,
            location: self.location.trim().to_string(),
            consultation_fee: self.consultation_fee,
            availability: self.availability,
            is_doctor: self.is_doctor,
            profile_image,
            languages,
            available_for_online_consult: self.available_for_online_consult,
            available_for_hospital_visit: self.available_for_hospital_visit,
            created_at: crate::time::now_utc(),
        }
    }
}
