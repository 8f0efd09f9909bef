use crate::doctor::Doctor;

/// The fixed sample profiles inserted by the reset/seed operation.
///
/// Two of the five carry a specialty containing "General Physician"; the
/// experience values straddle common filter boundaries so a freshly seeded
/// directory exercises every listing filter.
pub fn seed_doctors() -> Vec<Doctor> {
    vec![
        Doctor::builder(
            "Dr. Priya Sharma",
            "General Physician",
            "MBBS, MD (General Medicine)",
            12,
            "Delhi",
            499.0,
        )
        .with_is_doctor(true)
        .with_languages(["English", "Hindi"])
        .with_profile_image("https://images.apollo247.in/doctors/dr-priya-sharma.jpg")
        .with_hospital_visit(false)
        .with_slot("monday", "10:00-13:00")
        .with_slot("wednesday", "15:00-18:00")
        .build(),
        Doctor::builder(
            "Dr. Arjun Menon",
            "Senior General Physician",
            "MBBS, DNB (Family Medicine)",
            8,
            "Bengaluru",
            350.0,
        )
        .with_is_doctor(true)
        .with_languages(["English", "Malayalam", "Hindi"])
        .with_slot("tuesday", "09:00-12:00")
        .build(),
        Doctor::builder(
            "Dr. Kavitha Reddy",
            "Dermatologist",
            "MBBS, MD (Dermatology)",
            15,
            "Hyderabad",
            700.0,
        )
        .with_hospital("Apollo Hospitals Jubilee Hills")
        .with_is_doctor(true)
        .with_languages(["English", "Telugu"])
        .with_profile_image("https://images.apollo247.in/doctors/dr-kavitha-reddy.jpg")
        .with_online_consult(false)
        .with_slot("thursday", "11:00-14:00")
        .with_slot("saturday", "10:00-13:00")
        .build(),
        Doctor::builder(
            "Dr. Rohan Kulkarni",
            "Cardiologist",
            "MBBS, MD, DM (Cardiology)",
            6,
            "Pune",
            900.0,
        )
        .with_hospital("Apollo Clinic Viman Nagar")
        .with_languages(["English", "Marathi", "Hindi"])
        .build(),
        Doctor::builder(
            "Dr. Ananya Iyer",
            "Paediatrician",
            "MBBS, DCH",
            10,
            "Chennai",
            600.0,
        )
        .with_languages(["English", "Tamil"])
        .with_hospital_visit(false)
        .with_slot("friday", "16:00-19:00")
        .build(),
    ]
}
