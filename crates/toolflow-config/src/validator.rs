//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first validation error into a fatal config error.
    pub fn into_error(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_chat(config, &mut result);
        Self::validate_providers(config, &mut result);

        result
    }

    fn validate_chat(config: &Config, result: &mut ValidationResult) {
        if config.chat.provider.is_empty() {
            result.add_error(ValidationError::new("chat.provider", "must not be empty"));
        }

        if config.chat.max_tokens == 0 {
            result.add_error(ValidationError::new("chat.max_tokens", "must be positive"));
        }

        if let Some(temperature) = config.chat.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                result.add_error(ValidationError::new(
                    "chat.temperature",
                    "must be between 0.0 and 2.0",
                ));
            }
        }

        if config.chat.request_timeout_seconds == 0 {
            result.add_warning(ValidationWarning::new(
                "chat.request_timeout_seconds",
                "0 is ignored; the gateway's default timeout applies",
            ));
        }
    }

    fn validate_providers(config: &Config, result: &mut ValidationResult) {
        let active = &config.chat.provider;
        match config.providers.get(active) {
            None => {
                result.add_warning(ValidationWarning::new(
                    format!("providers.{active}"),
                    "no section for the active provider; the API key must come from the environment",
                ));
            }
            Some(provider) => {
                if provider.api_key.as_deref().is_none_or(str::is_empty) {
                    result.add_warning(ValidationWarning::new(
                        format!("providers.{active}.api_key"),
                        "empty api_key; requests will fail authentication",
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
