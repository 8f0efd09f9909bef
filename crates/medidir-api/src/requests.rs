use crate::error::ApiError;
use medidir_core::Doctor;
use medidir_storage::DoctorQuery;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;

fn filled_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn apply_text(target: &mut String, value: Option<String>) {
    if let Some(v) = value {
        let trimmed = v.trim();
        if !trimmed.is_empty() {
            *target = trimmed.to_string();
        }
    }
}

fn parse_number<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw?.trim().parse().ok()
}

/// Payload for the create endpoint.
///
/// Every field is optional at the wire level; required-field checking
/// happens in [`CreateDoctorRequest::missing_fields`], which treats falsy
/// values as absent: a missing key, JSON null, empty or whitespace-only
/// text, and numeric zero all count as missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateDoctorRequest {
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub qualification: Option<String>,
    pub experience: Option<i64>,
    pub hospital: Option<String>,
    pub location: Option<String>,
    pub consultation_fee: Option<f64>,
    pub availability: Option<BTreeMap<String, String>>,
    pub is_doctor: Option<bool>,
    pub profile_image: Option<String>,
    pub languages: Option<Vec<String>>,
    pub available_for_online_consult: Option<bool>,
    pub available_for_hospital_visit: Option<bool>,
}

impl CreateDoctorRequest {
    /// Names of the required fields this payload fails to fill, in payload
    /// (camelCase) form.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !filled_text(&self.name) {
            missing.push("name");
        }
        if !filled_text(&self.specialty) {
            missing.push("specialty");
        }
        if !filled_text(&self.qualification) {
            missing.push("qualification");
        }
        if !self.experience.is_some_and(|e| e != 0) {
            missing.push("experience");
        }
        if !filled_text(&self.location) {
            missing.push("location");
        }
        if !self.consultation_fee.is_some_and(|f| f != 0.0) {
            missing.push("consultationFee");
        }
        missing
    }

    /// Validates the payload and builds the record, applying the
    /// construction-time defaults. The availability flags default to true
    /// unless the payload carries an explicit `false`.
    pub fn into_doctor(self) -> Result<Doctor, ApiError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ApiError::missing_fields(&missing));
        }

        let mut builder = Doctor::builder(
            self.name.unwrap_or_default(),
            self.specialty.unwrap_or_default(),
            self.qualification.unwrap_or_default(),
            self.experience.unwrap_or_default(),
            self.location.unwrap_or_default(),
            self.consultation_fee.unwrap_or_default(),
        );
        if let Some(hospital) = self.hospital {
            builder = builder.with_hospital(hospital);
        }
        if let Some(availability) = self.availability {
            for (day, hours) in availability {
                builder = builder.with_slot(day, hours);
            }
        }
        if let Some(is_doctor) = self.is_doctor {
            builder = builder.with_is_doctor(is_doctor);
        }
        if let Some(url) = self.profile_image {
            builder = builder.with_profile_image(url);
        }
        if let Some(languages) = self.languages {
            builder = builder.with_languages(languages);
        }
        if let Some(flag) = self.available_for_online_consult {
            builder = builder.with_online_consult(flag);
        }
        if let Some(flag) = self.available_for_hospital_visit {
            builder = builder.with_hospital_visit(flag);
        }
        Ok(builder.build())
    }
}

/// Payload for the partial-update endpoint.
///
/// Presence semantics differ by field class and are part of the endpoint's
/// contract:
/// - boolean fields apply whenever the key is supplied, so an explicit
///   `false` is honored;
/// - text and numeric fields apply only when truthy, so an explicit empty
///   string or `0` is silently ignored;
/// - `availability` and `languages` replace the previous value wholesale
///   whenever supplied.
///
/// `id` and `createdAt` are immutable; the shape simply has no slot for
/// them, so payload keys for either are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateDoctorRequest {
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub qualification: Option<String>,
    pub experience: Option<i64>,
    pub hospital: Option<String>,
    pub location: Option<String>,
    pub consultation_fee: Option<f64>,
    pub availability: Option<BTreeMap<String, String>>,
    pub is_doctor: Option<bool>,
    pub profile_image: Option<String>,
    pub languages: Option<Vec<String>>,
    pub available_for_online_consult: Option<bool>,
    pub available_for_hospital_visit: Option<bool>,
}

impl UpdateDoctorRequest {
    /// Applies the present fields onto the record, leaving the rest
    /// untouched.
    pub fn apply(self, doctor: &mut Doctor) {
        apply_text(&mut doctor.name, self.name);
        apply_text(&mut doctor.specialty, self.specialty);
        apply_text(&mut doctor.qualification, self.qualification);
        apply_text(&mut doctor.hospital, self.hospital);
        apply_text(&mut doctor.location, self.location);

        if let Some(url) = self.profile_image {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                doctor.profile_image = Some(trimmed.to_string());
            }
        }
        if let Some(experience) = self.experience.filter(|e| *e != 0) {
            doctor.experience = experience;
        }
        if let Some(fee) = self.consultation_fee.filter(|f| *f != 0.0) {
            doctor.consultation_fee = fee;
        }

        if let Some(is_doctor) = self.is_doctor {
            doctor.is_doctor = is_doctor;
        }
        if let Some(flag) = self.available_for_online_consult {
            doctor.available_for_online_consult = flag;
        }
        if let Some(flag) = self.available_for_hospital_visit {
            doctor.available_for_hospital_visit = flag;
        }

        if let Some(availability) = self.availability {
            doctor.availability = availability;
        }
        if let Some(languages) = self.languages {
            doctor.languages = languages;
        }
    }
}

/// Query parameters accepted by the listing endpoint.
///
/// Everything arrives as a string. Blank values impose no restriction,
/// numeric values that fail to parse are ignored, and the availability
/// flags restrict only on the literal value `"true"`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DoctorListQuery {
    pub specialty: Option<String>,
    pub min_experience: Option<String>,
    pub max_fee: Option<String>,
    pub language: Option<String>,
    pub online_consult: Option<String>,
    pub hospital_visit: Option<String>,
}

impl DoctorListQuery {
    pub fn into_query(self) -> DoctorQuery {
        let mut query = DoctorQuery::new();
        if let Some(specialty) = self.specialty.filter(|v| !v.trim().is_empty()) {
            query = query.with_specialty(specialty);
        }
        if let Some(years) = parse_number::<i64>(self.min_experience.as_deref()) {
            query = query.with_min_experience(years);
        }
        if let Some(fee) = parse_number::<f64>(self.max_fee.as_deref()) {
            query = query.with_max_fee(fee);
        }
        if let Some(language) = self.language.filter(|v| !v.trim().is_empty()) {
            query = query.with_language(language);
        }
        if self.online_consult.as_deref() == Some("true") {
            query = query.online_consult_only();
        }
        if self.hospital_visit.as_deref() == Some("true") {
            query = query.hospital_visit_only();
        }
        query
    }
}
