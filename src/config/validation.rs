//! Configuration validation.
//!
//! Semantic checks that serde cannot express. Returns every error found,
//! not just the first, and runs before the config is accepted.

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("upstream.base_url {url:?} is not a valid URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("upstream.base_url {0:?} must use http or https")]
    UnsupportedScheme(String),

    #[error("listener.port must be non-zero")]
    ZeroPort,

    #[error("security.max_body_size must be non-zero")]
    ZeroBodyLimit,
}

/// Validate a configuration, collecting all errors.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.upstream.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::UnsupportedScheme(
                    config.upstream.base_url.clone(),
                ));
            }
        }
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.upstream.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = GatewayConfig::default();
        config.upstream.base_url = "not a url".into();
        config.listener.port = 0;
        config.security.max_body_size = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], ValidationError::InvalidBaseUrl { .. }));
        assert_eq!(errors[1], ValidationError::ZeroPort);
        assert_eq!(errors[2], ValidationError::ZeroBodyLimit);
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = GatewayConfig::default();
        config.upstream.base_url = "ftp://files.internal".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnsupportedScheme("ftp://files.internal".into())]
        );
    }

    #[test]
    fn test_accepts_https() {
        let mut config = GatewayConfig::default();
        config.upstream.base_url = "https://backend.example.com/v1".into();
        assert!(validate_config(&config).is_ok());
    }
}
