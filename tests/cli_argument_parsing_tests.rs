//! Tests for CLI argument parsing and configuration layering
//!
//! These tests verify that command line arguments are parsed with the
//! expected defaults and that CLI values override file values.

use clap::Parser;
use retail_user_pool::types::config::{CliArgs, GeneratorConfig};
use retail_user_pool::types::Persona;
use std::fs;
use tempfile::Builder;

/// Test default values when no flags are given
#[test]
fn test_default_arguments() {
    let args = CliArgs::try_parse_from(["test"]).unwrap();

    assert_eq!(args.pool_file, "users.json");
    assert_eq!(args.checkout, 0);
    assert!(args.grow.is_none());
    assert!(args.output.is_none());
    assert!(args.log_dir.is_none());
    assert!(!args.init);
    assert!(!args.select_active);
    assert!(!args.save);
    assert!(!args.dry_run);
    assert!(!args.print_config);
}

/// Test the pool operation flags
#[test]
fn test_pool_operation_arguments() {
    let args = CliArgs::try_parse_from([
        "test",
        "--pool-file",
        "demo.json",
        "--init",
        "--grow",
        "250",
        "--checkout",
        "12",
        "--select-active",
        "--output",
        "checked_out.jsonl",
        "--save",
    ])
    .unwrap();

    assert_eq!(args.pool_file, "demo.json");
    assert!(args.init);
    assert_eq!(args.grow, Some(250));
    assert_eq!(args.checkout, 12);
    assert!(args.select_active);
    assert_eq!(args.output.as_deref(), Some("checked_out.jsonl"));
    assert!(args.save);
}

/// Test the logging flags
#[test]
fn test_logging_arguments() {
    let args = CliArgs::try_parse_from(["test", "--log-dir", "logs/pool", "--verbose"]).unwrap();
    assert_eq!(args.log_dir.as_deref(), Some("logs/pool"));
    assert!(args.verbose);
    assert!(!args.debug);

    let args = CliArgs::try_parse_from(["test", "-d"]).unwrap();
    assert!(args.debug);
}

/// Test invalid numeric values are rejected by the parser
#[test]
fn test_invalid_arguments() {
    assert!(CliArgs::try_parse_from(["test", "--checkout", "-3"]).is_err());
    assert!(CliArgs::try_parse_from(["test", "--grow", "many"]).is_err());
    assert!(CliArgs::try_parse_from(["test", "--seed", "1.5"]).is_err());
}

/// Test generator overrides reach the configuration
#[test]
fn test_cli_overrides_defaults() {
    let args = CliArgs::try_parse_from([
        "test",
        "--age-min",
        "21",
        "--age-max",
        "65",
        "--age-mean",
        "40",
        "--age-std-dev",
        "10",
        "--female-ratio",
        "0.7",
        "--growth-batch-size",
        "50",
        "--email-domain",
        "shop.test",
        "--seed",
        "99",
    ])
    .unwrap();

    let config = GeneratorConfig::from_cli_args(args).unwrap();

    assert_eq!(config.age.min, 21);
    assert_eq!(config.age.max, 65);
    assert_eq!(config.age.mean, 40.0);
    assert_eq!(config.age.std_dev, 10.0);
    assert_eq!(config.female_ratio, 0.7);
    assert_eq!(config.growth_batch_size, 50);
    assert_eq!(config.email_domain, "shop.test");
    assert_eq!(config.seed, Some(99));
    assert!(config.validate().is_ok());
}

/// Test CLI values take precedence over the config file
#[test]
fn test_cli_overrides_config_file() {
    let file = Builder::new().suffix(".json").tempfile().unwrap();
    fs::write(
        file.path(),
        r#"{
            "female_ratio": 0.2,
            "growth_batch_size": 10,
            "personas": ["jewelry_accessories"],
            "trait_options": {"favorite_color": ["red", "blue"]}
        }"#,
    )
    .unwrap();
    let path = file.path().to_str().unwrap();

    let args =
        CliArgs::try_parse_from(["test", "--config", path, "--growth-batch-size", "30"]).unwrap();
    let config = GeneratorConfig::from_cli_args(args).unwrap();

    assert_eq!(config.growth_batch_size, 30);
    assert_eq!(config.female_ratio, 0.2);
    assert_eq!(config.personas, vec![Persona::JewelryAccessories]);
    assert_eq!(config.trait_options["favorite_color"], vec!["red", "blue"]);
    assert_eq!(config.email_domain, "example.com");
}

/// Test invalid values pass parsing but fail validation
#[test]
fn test_invalid_overrides_fail_validation() {
    let args = CliArgs::try_parse_from(["test", "--growth-batch-size", "0"]).unwrap();
    let config = GeneratorConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());

    let args = CliArgs::try_parse_from(["test", "--age-min", "80", "--age-max", "20"]).unwrap();
    let config = GeneratorConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());

    let args = CliArgs::try_parse_from(["test", "--female-ratio", "1.5"]).unwrap();
    let config = GeneratorConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());
}

/// Test missing config file is reported
#[test]
fn test_missing_config_file() {
    let args =
        CliArgs::try_parse_from(["test", "--config", "/nonexistent/generator.json"]).unwrap();
    assert!(GeneratorConfig::from_cli_args(args).is_err());
}
