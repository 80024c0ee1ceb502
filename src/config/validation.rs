use crate::constants::MIN_AUTO_ADVANCE_MS;
use crate::error::AppError;

/// Validates configuration values that serde cannot reject on its own.
pub fn validate_config(
    auto_advance_ms: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if auto_advance_ms < MIN_AUTO_ADVANCE_MS {
        return Err(AppError::config_error(format!(
            "auto_advance_ms must be at least {MIN_AUTO_ADVANCE_MS} (got {auto_advance_ms})"
        )));
    }

    if let Some(path) = log_file_path
        && path.trim().is_empty()
    {
        return Err(AppError::config_error(
            "log_file_path must not be empty; remove the key to use the default location",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_too_fast_autoplay() {
        let result = validate_config(50, &None);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_blank_log_path() {
        let result = validate_config(5000, &Some("   ".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_accepts_defaults() {
        assert!(validate_config(5000, &None).is_ok());
        assert!(validate_config(5000, &Some("/tmp/teledeck.log".to_string())).is_ok());
    }
}
