/// Record identifiers are opaque UUID v4 strings assigned at creation.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_unique() {
        let first = generate_id();
        let second = generate_id();
        assert_ne!(first, second);
    }

    #[test]
    fn test_generate_id_parses_as_uuid() {
        let id = generate_id();
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }
}
