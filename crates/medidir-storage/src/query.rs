//! Listing query semantics shared by every storage backend.

use medidir_core::Doctor;
use std::cmp::Ordering;

/// Filter set for the doctor listing.
///
/// All constraints combine with logical AND; an empty query matches every
/// record. The flag restrictions are one-directional: they narrow the result
/// to records where the corresponding availability flag is `true`, and
/// impose nothing when unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorQuery {
    /// Case-insensitive substring match against the specialty.
    pub specialty: Option<String>,
    /// Inclusive lower bound on years of experience.
    pub min_experience: Option<i64>,
    /// Inclusive upper bound on the consultation fee.
    pub max_fee: Option<f64>,
    /// Exact membership test against the languages sequence.
    pub language: Option<String>,
    /// Restrict to records available for online consultation.
    pub online_consult_only: bool,
    /// Restrict to records available for hospital visits.
    pub hospital_visit_only: bool,
}

impl DoctorQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    #[must_use]
    pub fn with_min_experience(mut self, years: i64) -> Self {
        self.min_experience = Some(years);
        self
    }

    #[must_use]
    pub fn with_max_fee(mut self, fee: f64) -> Self {
        self.max_fee = Some(fee);
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn online_consult_only(mut self) -> Self {
        self.online_consult_only = true;
        self
    }

    #[must_use]
    pub fn hospital_visit_only(mut self) -> Self {
        self.hospital_visit_only = true;
        self
    }

    /// Returns `true` when no constraint is set.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.specialty.is_none()
            && self.min_experience.is_none()
            && self.max_fee.is_none()
            && self.language.is_none()
            && !self.online_consult_only
            && !self.hospital_visit_only
    }

    /// Check if a record matches every constraint in this query.
    pub fn matches(&self, doctor: &Doctor) -> bool {
        self.matches_specialty(doctor)
            && self.matches_experience(doctor)
            && self.matches_fee(doctor)
            && self.matches_language(doctor)
            && self.matches_flags(doctor)
    }

    fn matches_specialty(&self, doctor: &Doctor) -> bool {
        match &self.specialty {
            Some(needle) => doctor
                .specialty
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        }
    }

    fn matches_experience(&self, doctor: &Doctor) -> bool {
        match self.min_experience {
            Some(min) => doctor.experience >= min,
            None => true,
        }
    }

    fn matches_fee(&self, doctor: &Doctor) -> bool {
        match self.max_fee {
            Some(max) => doctor.consultation_fee <= max,
            None => true,
        }
    }

    fn matches_language(&self, doctor: &Doctor) -> bool {
        match &self.language {
            Some(language) => doctor.speaks(language),
            None => true,
        }
    }

    fn matches_flags(&self, doctor: &Doctor) -> bool {
        (!self.online_consult_only || doctor.available_for_online_consult)
            && (!self.hospital_visit_only || doctor.available_for_hospital_visit)
    }
}

/// Presentation order for listings: verified profiles first (`is_doctor`
/// descending), then years of experience descending. Equal records compare
/// as equal so a stable sort keeps them in storage order.
pub fn listing_order(a: &Doctor, b: &Doctor) -> Ordering {
    b.is_doctor
        .cmp(&a.is_doctor)
        .then(b.experience.cmp(&a.experience))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(specialty: &str, experience: i64, fee: f64) -> Doctor {
        Doctor::builder("Dr. Test", specialty, "MBBS", experience, "Delhi", fee).build()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = DoctorQuery::new();
        assert!(query.is_unfiltered());
        assert!(query.matches(&doctor("Cardiologist", 5, 400.0)));
        assert!(query.matches(&doctor("", 0, 0.0)));
    }

    #[test]
    fn test_specialty_is_case_insensitive_substring() {
        let record = doctor("Senior General Physician", 8, 350.0);

        assert!(DoctorQuery::new()
            .with_specialty("general physician")
            .matches(&record));
        assert!(DoctorQuery::new().with_specialty("GENERAL").matches(&record));
        assert!(DoctorQuery::new().with_specialty("physi").matches(&record));
        assert!(!DoctorQuery::new()
            .with_specialty("dermatologist")
            .matches(&record));
    }

    #[test]
    fn test_min_experience_is_inclusive() {
        let query = DoctorQuery::new().with_min_experience(8);
        assert!(query.matches(&doctor("GP", 9, 100.0)));
        assert!(query.matches(&doctor("GP", 8, 100.0)));
        assert!(!query.matches(&doctor("GP", 7, 100.0)));
    }

    #[test]
    fn test_max_fee_is_inclusive() {
        let query = DoctorQuery::new().with_max_fee(500.0);
        assert!(query.matches(&doctor("GP", 5, 499.0)));
        assert!(query.matches(&doctor("GP", 5, 500.0)));
        assert!(!query.matches(&doctor("GP", 5, 501.0)));
    }

    #[test]
    fn test_language_is_exact_membership() {
        let record = Doctor::builder("Dr. L", "GP", "MBBS", 5, "Kochi", 200.0)
            .with_languages(["English", "Malayalam"])
            .build();

        assert!(DoctorQuery::new().with_language("Malayalam").matches(&record));
        assert!(!DoctorQuery::new().with_language("malayalam").matches(&record));
        assert!(!DoctorQuery::new().with_language("Hindi").matches(&record));
    }

    #[test]
    fn test_flag_restrictions_are_one_directional() {
        let online_only = Doctor::builder("Dr. O", "GP", "MBBS", 5, "Delhi", 200.0)
            .with_hospital_visit(false)
            .build();

        assert!(DoctorQuery::new().online_consult_only().matches(&online_only));
        assert!(!DoctorQuery::new().hospital_visit_only().matches(&online_only));
        // No restriction when the flag is unset, whatever the record says.
        assert!(DoctorQuery::new().matches(&online_only));
    }

    #[test]
    fn test_filters_combine_with_and() {
        let record = Doctor::builder("Dr. A", "General Physician", "MBBS", 10, "Delhi", 450.0)
            .with_languages(["English", "Hindi"])
            .build();

        let all_match = DoctorQuery::new()
            .with_specialty("general")
            .with_min_experience(10)
            .with_max_fee(450.0)
            .with_language("Hindi")
            .online_consult_only();
        assert!(all_match.matches(&record));

        // One failing constraint rejects the record even if the rest pass.
        let one_fails = DoctorQuery::new()
            .with_specialty("general")
            .with_min_experience(11);
        assert!(!one_fails.matches(&record));
    }

    #[test]
    fn test_listing_order_puts_verified_first() {
        let verified = Doctor::builder("Dr. V", "GP", "MBBS", 2, "Delhi", 100.0)
            .with_is_doctor(true)
            .build();
        let unverified = doctor("GP", 30, 100.0);

        assert_eq!(listing_order(&verified, &unverified), Ordering::Less);
        assert_eq!(listing_order(&unverified, &verified), Ordering::Greater);
    }

    #[test]
    fn test_listing_order_falls_back_to_experience_desc() {
        let senior = doctor("GP", 20, 100.0);
        let junior = doctor("GP", 3, 100.0);

        assert_eq!(listing_order(&senior, &junior), Ordering::Less);
        assert_eq!(listing_order(&junior, &senior), Ordering::Greater);
    }

    #[test]
    fn test_listing_order_ties_compare_equal() {
        let a = doctor("GP", 7, 100.0);
        let b = doctor("Dermatologist", 7, 900.0);
        assert_eq!(listing_order(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_sorted_listing_matches_contract() {
        let mut doctors = vec![
            doctor("A", 6, 1.0),
            {
                let mut d = doctor("B", 8, 1.0);
                d.is_doctor = true;
                d
            },
            doctor("C", 10, 1.0),
            {
                let mut d = doctor("D", 15, 1.0);
                d.is_doctor = true;
                d
            },
        ];
        doctors.sort_by(listing_order);

        let order: Vec<_> = doctors.iter().map(|d| d.specialty.as_str()).collect();
        assert_eq!(order, vec!["D", "B", "C", "A"]);
    }
}
