use crate::api::types::OutputFormat;
use crate::core::DEFAULT_RADIUS;
use crate::validation::GeodesyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Largest number of decimal places accepted for output rounding
pub const MAX_PRECISION: u8 = 15;

/// Evaluation and output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeodesyConfig {
    /// Sphere radius used when a query does not give one (metres by convention)
    pub radius_m: f64,
    /// Output format for formatted answers
    pub output_format: OutputFormat,
    /// Decimal places in formatted output
    pub precision: u8,
    /// Fold returned longitudes into [-180, 180)
    pub normalize_longitude: bool,
}

impl Default for GeodesyConfig {
    fn default() -> Self {
        Self {
            radius_m: DEFAULT_RADIUS,
            output_format: OutputFormat::Text,
            precision: 4,
            normalize_longitude: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter { parameter: String, value: String, reason: String },
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON serialization/deserialization error
    SerializationError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter { parameter, value, reason } => {
                write!(f, "Invalid configuration {} = {}: {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => write!(f, "{}", message),
            ConfigError::SerializationError { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for GeodesyError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidParameter { parameter, value, reason } => {
                GeodesyError::InvalidParameter { parameter, value, reason }
            }
            ConfigError::IoError { message } => GeodesyError::Io { message },
            ConfigError::SerializationError { message } => GeodesyError::Serialization { message },
        }
    }
}

/// Configuration validation result
#[derive(Debug)]
pub struct ValidationResult {
    /// Whether configuration is valid
    pub is_valid: bool,
    /// Validation errors
    pub errors: Vec<ConfigError>,
    /// Validation warnings
    pub warnings: Vec<String>,
}

/// Holds the active configuration and tracks where it came from
#[derive(Debug, Default)]
pub struct ConfigurationManager {
    config: GeodesyConfig,
    config_file_path: Option<String>,
    is_modified: bool,
}

impl ConfigurationManager {
    /// Create a configuration manager with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration manager and load from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    pub fn config(&self) -> &GeodesyConfig {
        &self.config
    }

    /// Replace the configuration after validating it
    pub fn update_config(&mut self, config: GeodesyConfig) -> Result<(), ConfigError> {
        self.check_config(&config)?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: GeodesyConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        self.check_config(&config)?;

        debug!(path = %path_str, radius_m = config.radius_m, "loaded configuration");
        self.config = config;
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration to JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(&self.config).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })?;

        debug!(path = %path_str, "saved configuration");
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save to the currently loaded file path
    pub fn save(&mut self) -> Result<(), ConfigError> {
        if let Some(path) = self.config_file_path.clone() {
            self.save_to_file(path)
        } else {
            Err(ConfigError::IoError {
                message: "No file path set for saving configuration".to_string(),
            })
        }
    }

    /// Check if configuration has been modified since last save
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Set the default sphere radius
    pub fn set_radius(&mut self, radius_m: f64) -> Result<f64, ConfigError> {
        let old_value = self.config.radius_m;
        Self::check_radius(radius_m)?;
        self.config.radius_m = radius_m;
        self.is_modified = true;
        Ok(old_value)
    }

    /// Set the number of decimal places used in output
    pub fn set_precision(&mut self, precision: u8) -> Result<u8, ConfigError> {
        let old_value = self.config.precision;
        Self::check_precision(precision)?;
        self.config.precision = precision;
        self.is_modified = true;
        Ok(old_value)
    }

    pub fn set_output_format(&mut self, format: OutputFormat) -> OutputFormat {
        let old_value = self.config.output_format;
        self.config.output_format = format;
        self.is_modified = true;
        old_value
    }

    /// Validate a configuration without applying it
    pub fn validate_config(&self, config: &GeodesyConfig) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if let Err(err) = Self::check_radius(config.radius_m) {
            errors.push(err);
        } else if config.radius_m > 1.0e8 {
            warnings.push(format!(
                "Radius {} is far larger than the earth; check the unit",
                config.radius_m
            ));
        }

        if let Err(err) = Self::check_precision(config.precision) {
            errors.push(err);
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Reject on the first validation error, log any warnings
    fn check_config(&self, config: &GeodesyConfig) -> Result<(), ConfigError> {
        let validation = self.validate_config(config);
        if let Some(err) = validation.errors.into_iter().next() {
            return Err(err);
        }
        for warning in &validation.warnings {
            warn!("{}", warning);
        }
        Ok(())
    }

    fn check_radius(radius_m: f64) -> Result<(), ConfigError> {
        if !radius_m.is_finite() || radius_m <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "radius_m".to_string(),
                value: radius_m.to_string(),
                reason: "must be finite and greater than zero".to_string(),
            });
        }
        Ok(())
    }

    fn check_precision(precision: u8) -> Result<(), ConfigError> {
        if precision > MAX_PRECISION {
            return Err(ConfigError::InvalidParameter {
                parameter: "precision".to_string(),
                value: precision.to_string(),
                reason: format!("must be at most {}", MAX_PRECISION),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("spherical_geodesy_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_default_config() {
        let manager = ConfigurationManager::new();
        assert_eq!(manager.config().radius_m, DEFAULT_RADIUS);
        assert_eq!(manager.config().precision, 4);
        assert_eq!(manager.config().output_format, OutputFormat::Text);
        assert!(!manager.is_modified());
    }

    #[test]
    fn test_set_radius() {
        let mut manager = ConfigurationManager::new();
        assert_eq!(manager.set_radius(3959.0), Ok(DEFAULT_RADIUS));
        assert_eq!(manager.config().radius_m, 3959.0);
        assert!(manager.is_modified());

        assert!(manager.set_radius(0.0).is_err());
        assert!(manager.set_radius(f64::NAN).is_err());
        assert_eq!(manager.config().radius_m, 3959.0);
    }

    #[test]
    fn test_set_precision() {
        let mut manager = ConfigurationManager::new();
        assert_eq!(manager.set_precision(6), Ok(4));
        assert!(manager.set_precision(MAX_PRECISION + 1).is_err());
        assert_eq!(manager.config().precision, 6);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: GeodesyConfig = serde_json::from_str(r#"{"radius_m": 3959}"#).unwrap();
        assert_eq!(config.radius_m, 3959.0);
        assert_eq!(config.precision, 4);
        assert!(!config.normalize_longitude);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let manager = ConfigurationManager::new();
        let config = GeodesyConfig { radius_m: -1.0, precision: 40, ..Default::default() };
        let result = manager.validate_config(&config);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_path("round_trip");

        let mut manager = ConfigurationManager::new();
        manager.set_radius(6_378_137.0).unwrap();
        manager.set_output_format(OutputFormat::Csv);
        manager.save_to_file(&path).unwrap();
        assert!(!manager.is_modified());

        let loaded = ConfigurationManager::from_file(&path).unwrap();
        assert_eq!(loaded.config(), manager.config());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_file() {
        let path = temp_path("invalid");
        fs::write(&path, r#"{"radius_m": 0}"#).unwrap();

        let result = ConfigurationManager::from_file(&path);
        assert!(matches!(result, Err(ConfigError::InvalidParameter { .. })));

        fs::write(&path, "not json").unwrap();
        let result = ConfigurationManager::from_file(&path);
        assert!(matches!(result, Err(ConfigError::SerializationError { .. })));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_oversized_radius_loads_with_warning() {
        let path = temp_path("oversized");
        fs::write(&path, r#"{"radius_m": 1e9}"#).unwrap();

        let manager = ConfigurationManager::from_file(&path).unwrap();
        assert_eq!(manager.config().radius_m, 1e9);

        let result = manager.validate_config(manager.config());
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("far larger than the earth"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_update_config() {
        let mut manager = ConfigurationManager::new();
        let config = GeodesyConfig { radius_m: 3959.0, precision: 2, ..Default::default() };
        manager.update_config(config.clone()).unwrap();
        assert_eq!(manager.config(), &config);
        assert!(manager.is_modified());

        let bad = GeodesyConfig { radius_m: 0.0, ..Default::default() };
        assert!(matches!(
            manager.update_config(bad),
            Err(ConfigError::InvalidParameter { .. })
        ));
        assert_eq!(manager.config(), &config);

        let huge = GeodesyConfig { radius_m: 2e9, ..Default::default() };
        assert!(manager.update_config(huge).is_ok());
        assert_eq!(manager.config().radius_m, 2e9);
    }

    #[test]
    fn test_save_without_path() {
        let mut manager = ConfigurationManager::new();
        assert!(matches!(manager.save(), Err(ConfigError::IoError { .. })));
    }
}
