//! Common validation utilities.

use validator::ValidationError;

/// Maximum length of a resolution note.
const MAX_RESOLUTION_NOTE_LENGTH: usize = 2000;

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates that a text field is not blank after trimming.
pub fn validate_non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Field must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Validates a resolution note: non-blank and within the length cap.
pub fn validate_resolution_note(note: &str) -> Result<(), ValidationError> {
    validate_non_blank(note)?;
    if note.chars().count() > MAX_RESOLUTION_NOTE_LENGTH {
        let mut err = ValidationError::new("resolution_note_length");
        err.message = Some("Resolution note must be at most 2000 characters".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Latitude tests
    #[test]
    fn test_validate_latitude() {
        assert!(validate_latitude(0.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.1).is_err());
        assert!(validate_latitude(-90.1).is_err());
    }

    #[test]
    fn test_validate_latitude_error_message() {
        let err = validate_latitude(100.0).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Latitude must be between -90 and 90"
        );
    }

    // Longitude tests
    #[test]
    fn test_validate_longitude() {
        assert!(validate_longitude(0.0).is_ok());
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.1).is_err());
        assert!(validate_longitude(-180.1).is_err());
    }

    #[test]
    fn test_validate_longitude_city_coordinates() {
        // Pimpri-Chinchwad sits around 18.6N, 73.8E
        assert!(validate_latitude(18.6298).is_ok());
        assert!(validate_longitude(73.7997).is_ok());
    }

    // Non-blank tests
    #[test]
    fn test_validate_non_blank() {
        assert!(validate_non_blank("ok").is_ok());
        assert!(validate_non_blank("").is_err());
        assert!(validate_non_blank("   ").is_err());
        assert!(validate_non_blank("\t\n").is_err());
    }

    // Resolution note tests
    #[test]
    fn test_validate_resolution_note() {
        assert!(validate_resolution_note("Cleared the obstruction").is_ok());
        assert!(validate_resolution_note("").is_err());
    }

    #[test]
    fn test_validate_resolution_note_length_cap() {
        let long = "x".repeat(2000);
        assert!(validate_resolution_note(&long).is_ok());

        let too_long = "x".repeat(2001);
        let err = validate_resolution_note(&too_long).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Resolution note must be at most 2000 characters"
        );
    }
}
