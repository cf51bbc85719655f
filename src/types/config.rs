//! Configuration structures for the user pool
//!
//! This module contains the generator configuration handed to the
//! [`ProfileFactory`](crate::user::ProfileFactory), the command line arguments
//! of the binary, and the validation logic for both.

use clap::Parser;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::Persona;

/// Trait name mapped to the candidate values one is picked from
///
/// Candidates are arbitrary JSON values, so numeric and boolean traits keep
/// their type in the pool file.
pub type TraitOptions = BTreeMap<String, Vec<serde_json::Value>>;

/// Default growth batch used when checkout finds the pool exhausted
pub const DEFAULT_GROWTH_BATCH_SIZE: usize = 1000;

/// Upper bound on rejection sampling rounds before falling back to the mean
const MAX_AGE_SAMPLING_ATTEMPTS: usize = 10_000;

/// Truncated normal distribution that profile ages are drawn from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgeDistribution {
    /// Youngest possible age
    pub min: u32,
    /// Oldest possible age
    pub max: u32,
    /// Mean of the underlying normal distribution
    pub mean: f64,
    /// Standard deviation of the underlying normal distribution
    pub std_dev: f64,
}

impl Default for AgeDistribution {
    fn default() -> Self {
        Self { min: 18, max: 100, mean: 32.0, std_dev: 15.0 }
    }
}

impl AgeDistribution {
    /// Draw one age, truncated to a whole number of years
    ///
    /// Out-of-window draws are rejected; after too many rejections, or with a
    /// standard deviation the normal distribution refuses, the mean clamped
    /// into the window is used.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let min = f64::from(self.min);
        let max = f64::from(self.max);
        let fallback = self.mean.clamp(min, max) as u32;

        let Ok(normal) = Normal::new(self.mean, self.std_dev) else {
            return fallback;
        };

        (0..MAX_AGE_SAMPLING_ATTEMPTS)
            .map(|_| normal.sample(&mut *rng))
            .find(|value| (min..=max).contains(value))
            .map_or(fallback, |value| value as u32)
    }
}

/// Templates used to fabricate device and browser identifiers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformTemplates {
    /// Apple device names used in iOS platform tokens
    pub apple_devices: Vec<String>,
    /// Lowest iOS major version
    pub ios_min_major: u32,
    /// Highest iOS major version
    pub ios_max_major: u32,
    /// Highest iOS minor version (minor starts at 0)
    pub ios_max_minor: u32,
    /// Android release versions used in Android platform tokens
    pub android_versions: Vec<String>,
    /// Browser user agent strings for the web platform
    pub web_user_agents: Vec<String>,
}

impl Default for PlatformTemplates {
    fn default() -> Self {
        Self {
            apple_devices: vec!["iPhone".to_string(), "iPad".to_string(), "iPod".to_string()],
            ios_min_major: 9,
            ios_max_major: 12,
            ios_max_minor: 2,
            android_versions: [
                "4.4", "4.4.4", "5.0", "5.1", "5.1.1", "6.0", "6.0.1", "7.0", "7.1", "7.1.2",
                "8.0.0", "8.1.0", "9", "10", "11",
            ]
            .iter()
            .map(|v| v.to_string())
            .collect(),
            web_user_agents: [
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.88 Safari/537.36",
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0.1 Safari/605.1.15",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:84.0) Gecko/20100101 Firefox/84.0",
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/86.0.4240.198 Safari/537.36",
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.67 Safari/537.36",
                "Mozilla/5.0 (Windows NT 6.1; WOW64; Trident/7.0; rv:11.0) like Gecko",
                "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:83.0) Gecko/20100101 Firefox/83.0",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.88 Safari/537.36 Edg/87.0.664.66",
            ]
            .iter()
            .map(|v| v.to_string())
            .collect(),
        }
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "retail-user-pool",
    version = "0.1.0",
    about = "Retail User Pool - Generates and checks out synthetic retail demo users",
    long_about = "Maintains a file-backed pool of synthetic user profiles for seeding a retail demo environment. Users are fabricated on demand and checked out of the pool for downstream event generation.

EXAMPLES:
    # Create an empty pool file and grow it by 5000 users
    retail-user-pool --pool-file users.json --init --grow 5000

    # Check out 25 users as JSON lines
    retail-user-pool --pool-file users.json --checkout 25

    # Re-use already active users where possible
    retail-user-pool --checkout 25 --select-active

    # Generate configuration template
    retail-user-pool --print-config > generator.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON generator configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Backing file of the user pool
    #[arg(
        long,
        default_value = "users.json",
        help = "Path of the user pool file",
        long_help = "Path of the JSON file holding the persisted user pool. The file must exist unless --init is given."
    )]
    pub pool_file: String,

    /// Create the pool file with an empty user list when it is missing
    #[arg(long, help = "Create an empty pool file if it does not exist")]
    pub init: bool,

    /// Number of users to add to the pool before checkout
    #[arg(long, help = "Grow the pool by this many users and save it")]
    pub grow: Option<usize>,

    /// Number of users to check out
    #[arg(long, default_value = "0", help = "Number of users to check out")]
    pub checkout: usize,

    /// Prefer already active users when checking out
    #[arg(
        long,
        help = "Return already active users where possible",
        long_help = "When set, checkout returns a random user that is already active instead of activating a new one, as long as any user is active."
    )]
    pub select_active: bool,

    /// Output path for checked-out users
    #[arg(long, help = "Write checked-out users as JSON lines to this path instead of stdout")]
    pub output: Option<String>,

    /// Save the pool after checkout
    #[arg(long, help = "Persist the pool back to its file before exiting")]
    pub save: bool,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Minimum generated age
    #[arg(long, help = "Minimum generated age")]
    pub age_min: Option<u32>,

    /// Maximum generated age
    #[arg(long, help = "Maximum generated age")]
    pub age_max: Option<u32>,

    /// Mean generated age
    #[arg(long, help = "Mean of the age distribution")]
    pub age_mean: Option<f64>,

    /// Standard deviation of generated ages
    #[arg(long, help = "Standard deviation of the age distribution")]
    pub age_std_dev: Option<f64>,

    /// Share of generated users that are female (0.0-1.0)
    #[arg(long, help = "Share of female users (0.0-1.0)")]
    pub female_ratio: Option<f64>,

    /// Users fabricated when checkout finds the pool exhausted
    #[arg(long, help = "Users added when checkout exhausts the pool")]
    pub growth_batch_size: Option<usize>,

    /// Domain used for generated email addresses
    #[arg(long, help = "Domain for generated email addresses")]
    pub email_domain: Option<String>,

    /// Directory for JSON log files
    #[arg(
        long,
        help = "Write JSON logs to daily files in this directory",
        long_help = "Write INFO-level JSON logs to daily rolling files in this directory in addition to stderr. Takes precedence over --verbose and --debug."
    )]
    pub log_dir: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without touching the pool
    #[arg(long, help = "Validate configuration without loading the pool")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Age distribution parameters
    pub age: Option<AgeDistribution>,

    /// Share of generated users that are female (0.0-1.0)
    pub female_ratio: Option<f64>,

    /// Personas assigned to generated users
    pub personas: Option<Vec<Persona>>,

    /// Device and browser identifier templates
    pub platforms: Option<PlatformTemplates>,

    /// Domain for generated email addresses
    pub email_domain: Option<String>,

    /// Country code written on generated addresses
    pub country: Option<String>,

    /// Users fabricated when checkout finds the pool exhausted
    pub growth_batch_size: Option<usize>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Traits assigned to checked-out users
    pub trait_options: Option<TraitOptions>,
}

/// Configuration for profile fabrication and pool growth
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// Age distribution parameters
    pub age: AgeDistribution,

    /// Share of generated users that are female (0.0-1.0)
    pub female_ratio: f64,

    /// Personas assigned to generated users
    pub personas: Vec<Persona>,

    /// Device and browser identifier templates
    pub platforms: PlatformTemplates,

    /// Domain for generated email addresses
    pub email_domain: String,

    /// Country code written on generated addresses
    pub country: String,

    /// Users fabricated when checkout finds the pool exhausted
    pub growth_batch_size: usize,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Traits assigned to checked-out users
    pub trait_options: TraitOptions,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for generator configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Age range is inverted
    #[error("Invalid age range: min ({0}) must be <= max ({1})")]
    InvalidAgeRange(u32, u32),

    /// Age mean falls outside the age range
    #[error("Age mean {mean} must lie within the age range {min}-{max}")]
    InvalidAgeMean {
        /// Configured mean
        mean: f64,
        /// Configured minimum age
        min: u32,
        /// Configured maximum age
        max: u32,
    },

    /// Standard deviation is not a positive number
    #[error("Age standard deviation must be positive, got {0}")]
    InvalidStdDev(f64),

    /// Ratio value is out of range
    #[error("Invalid ratio for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidRatio {
        /// Name of the field with the invalid ratio
        field: String,
        /// The invalid ratio value
        value: f64,
    },

    /// No personas to pick from
    #[error("At least one persona must be configured")]
    EmptyPersonaSet,

    /// Growth batch would not grow the pool
    #[error("Growth batch size must be greater than 0, got {0}")]
    InvalidGrowthBatchSize(usize),

    /// A template list is empty
    #[error("Platform template list '{0}' must not be empty")]
    EmptyTemplate(String),

    /// iOS version range is inverted
    #[error("Invalid iOS major version range: min ({0}) must be <= max ({1})")]
    InvalidIosVersionRange(u32, u32),

    /// Email domain is blank
    #[error("Email domain must not be empty")]
    EmptyEmailDomain,

    /// A trait has nothing to choose from
    #[error("Trait '{0}' must have at least one candidate value")]
    EmptyTraitCandidates(String),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            age: AgeDistribution::default(),
            female_ratio: 0.5,
            personas: Persona::ALL.to_vec(),
            platforms: PlatformTemplates::default(),
            email_domain: "example.com".to_string(),
            country: "US".to_string(),
            growth_batch_size: DEFAULT_GROWTH_BATCH_SIZE,
            seed: None,
            trait_options: TraitOptions::new(),
        }
    }
}

impl GeneratorConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            age: config_file.age.unwrap_or(defaults.age),
            female_ratio: config_file.female_ratio.unwrap_or(defaults.female_ratio),
            personas: config_file.personas.unwrap_or(defaults.personas),
            platforms: config_file.platforms.unwrap_or(defaults.platforms),
            email_domain: config_file.email_domain.unwrap_or(defaults.email_domain),
            country: config_file.country.unwrap_or(defaults.country),
            growth_batch_size: config_file
                .growth_batch_size
                .unwrap_or(defaults.growth_batch_size),
            seed: config_file.seed.or(defaults.seed),
            trait_options: config_file.trait_options.unwrap_or(defaults.trait_options),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.age_min {
            config.age.min = value;
        }
        if let Some(value) = args.age_max {
            config.age.max = value;
        }
        if let Some(value) = args.age_mean {
            config.age.mean = value;
        }
        if let Some(value) = args.age_std_dev {
            config.age.std_dev = value;
        }
        if let Some(value) = args.female_ratio {
            config.female_ratio = value;
        }
        if let Some(value) = args.growth_batch_size {
            config.growth_batch_size = value;
        }
        if let Some(value) = args.email_domain {
            config.email_domain = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.age.min > self.age.max {
            return Err(ConfigValidationError::InvalidAgeRange(self.age.min, self.age.max));
        }

        if !self.age.std_dev.is_finite() || self.age.std_dev <= 0.0 {
            return Err(ConfigValidationError::InvalidStdDev(self.age.std_dev));
        }

        // The rejection sampler relies on the mean sitting inside the window
        if !(f64::from(self.age.min)..=f64::from(self.age.max)).contains(&self.age.mean) {
            return Err(ConfigValidationError::InvalidAgeMean {
                mean: self.age.mean,
                min: self.age.min,
                max: self.age.max,
            });
        }

        self.validate_ratio("female_ratio", self.female_ratio)?;

        if self.personas.is_empty() {
            return Err(ConfigValidationError::EmptyPersonaSet);
        }

        if self.growth_batch_size == 0 {
            return Err(ConfigValidationError::InvalidGrowthBatchSize(self.growth_batch_size));
        }

        if self.email_domain.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEmailDomain);
        }

        self.validate_templates()?;

        for (name, candidates) in &self.trait_options {
            if candidates.is_empty() {
                return Err(ConfigValidationError::EmptyTraitCandidates(name.clone()));
            }
        }

        Ok(())
    }

    /// Helper method to validate ratio values
    fn validate_ratio(&self, field: &str, value: f64) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigValidationError::InvalidRatio { field: field.to_string(), value });
        }
        Ok(())
    }

    fn validate_templates(&self) -> Result<(), ConfigValidationError> {
        let templates = &self.platforms;

        if templates.apple_devices.is_empty() {
            return Err(ConfigValidationError::EmptyTemplate("apple_devices".to_string()));
        }
        if templates.android_versions.is_empty() {
            return Err(ConfigValidationError::EmptyTemplate("android_versions".to_string()));
        }
        if templates.web_user_agents.is_empty() {
            return Err(ConfigValidationError::EmptyTemplate("web_user_agents".to_string()));
        }
        if templates.ios_min_major > templates.ios_max_major {
            return Err(ConfigValidationError::InvalidIosVersionRange(
                templates.ios_min_major,
                templates.ios_max_major,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generator_config_default() {
        let config = GeneratorConfig::default();

        assert_eq!(config.age, AgeDistribution { min: 18, max: 100, mean: 32.0, std_dev: 15.0 });
        assert_eq!(config.female_ratio, 0.5);
        assert_eq!(config.personas.len(), 4);
        assert_eq!(config.email_domain, "example.com");
        assert_eq!(config.country, "US");
        assert_eq!(config.growth_batch_size, 1000);
        assert!(config.seed.is_none());
        assert!(config.trait_options.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_age_sampling_stays_in_range() {
        let distribution = AgeDistribution::default();
        let mut rng = StdRng::seed_from_u64(7);

        let ages: Vec<u32> = (0..5_000).map(|_| distribution.sample(&mut rng)).collect();
        assert!(ages.iter().all(|age| (18..=100).contains(age)));

        let mean = ages.iter().map(|&a| f64::from(a)).sum::<f64>() / ages.len() as f64;
        // Truncation at 18 pulls the mean above 32; flooring pulls it down by ~0.5
        assert!((30.0..40.0).contains(&mean), "unexpected mean age {}", mean);
    }

    #[test]
    fn test_age_sampling_narrow_window() {
        let distribution = AgeDistribution { min: 40, max: 41, mean: 40.5, std_dev: 20.0 };
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let age = distribution.sample(&mut rng);
            assert!(age == 40 || age == 41);
        }
    }

    #[test]
    fn test_age_sampling_falls_back_to_clamped_mean() {
        let negative = AgeDistribution { min: 18, max: 100, mean: 32.0, std_dev: -1.0 };
        let above = AgeDistribution { min: 18, max: 30, mean: 55.0, std_dev: -1.0 };
        let mut rng = StdRng::seed_from_u64(13);

        assert_eq!(negative.sample(&mut rng), 32);
        assert_eq!(above.sample(&mut rng), 30);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let inverted = GeneratorConfig {
            age: AgeDistribution { min: 60, max: 20, ..Default::default() },
            ..Default::default()
        };
        assert!(matches!(inverted.validate(), Err(ConfigValidationError::InvalidAgeRange(60, 20))));

        let mean_outside = GeneratorConfig {
            age: AgeDistribution { mean: 150.0, ..Default::default() },
            ..Default::default()
        };
        assert!(matches!(
            mean_outside.validate(),
            Err(ConfigValidationError::InvalidAgeMean { .. })
        ));

        let zero_std_dev = GeneratorConfig {
            age: AgeDistribution { std_dev: 0.0, ..Default::default() },
            ..Default::default()
        };
        assert!(matches!(zero_std_dev.validate(), Err(ConfigValidationError::InvalidStdDev(_))));

        let bad_ratio = GeneratorConfig { female_ratio: 1.5, ..Default::default() };
        assert!(matches!(bad_ratio.validate(), Err(ConfigValidationError::InvalidRatio { .. })));

        let no_personas = GeneratorConfig { personas: Vec::new(), ..Default::default() };
        assert!(matches!(no_personas.validate(), Err(ConfigValidationError::EmptyPersonaSet)));

        let no_growth = GeneratorConfig { growth_batch_size: 0, ..Default::default() };
        assert!(matches!(
            no_growth.validate(),
            Err(ConfigValidationError::InvalidGrowthBatchSize(0))
        ));
    }

    #[test]
    fn test_validation_rejects_empty_trait_candidates() {
        let mut config = GeneratorConfig::default();
        config.trait_options.insert("favorite_color".to_string(), Vec::new());

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("favorite_color"));
    }

    #[test]
    fn test_validation_rejects_empty_templates() {
        let mut config = GeneratorConfig::default();
        config.platforms.web_user_agents.clear();

        assert!(matches!(config.validate(), Err(ConfigValidationError::EmptyTemplate(_))));
    }

    #[test]
    fn test_cli_defaults() {
        let args = CliArgs::try_parse_from(vec!["test"]).unwrap();
        assert_eq!(args.pool_file, "users.json");
        assert_eq!(args.checkout, 0);
        assert!(!args.init);
        assert!(!args.select_active);
        assert!(args.grow.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs::try_parse_from(vec![
            "test",
            "--age-min",
            "21",
            "--age-mean",
            "45",
            "--female-ratio",
            "0.6",
            "--growth-batch-size",
            "50",
            "--seed",
            "99",
        ])
        .unwrap();

        let config = GeneratorConfig::from_cli_args(args).unwrap();
        assert_eq!(config.age.min, 21);
        assert_eq!(config.age.max, 100);
        assert_eq!(config.age.mean, 45.0);
        assert_eq!(config.female_ratio, 0.6);
        assert_eq!(config.growth_batch_size, 50);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_config_file_loading() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        let config_json = r#"{
            "female_ratio": 0.25,
            "personas": ["footwear_outdoors"],
            "growth_batch_size": 200,
            "trait_options": { "favorite_color": ["red", "blue"] }
        }"#;
        temp_file.write_all(config_json.as_bytes()).unwrap();

        let config = GeneratorConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.female_ratio, 0.25);
        assert_eq!(config.personas, vec![Persona::FootwearOutdoors]);
        assert_eq!(config.growth_batch_size, 200);
        assert_eq!(config.trait_options["favorite_color"], vec!["red", "blue"]);
        // Untouched sections fall back to defaults
        assert_eq!(config.age, AgeDistribution::default());
        assert_eq!(config.email_domain, "example.com");
    }

    #[test]
    fn test_config_file_errors() {
        assert!(matches!(
            GeneratorConfig::from_file("/nonexistent/generator.json"),
            Err(ConfigError::FileNotFound(_))
        ));

        let temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(matches!(
            GeneratorConfig::from_file(temp_file.path()),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = GeneratorConfig { seed: Some(3), ..Default::default() };
        let json = config.print_json().unwrap();
        let parsed: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
