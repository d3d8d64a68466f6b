//! Tests for CLI argument parsing.

use clap::Parser;
use gpdat::config::{LogFormat, LogLevel, Opt, OutputFormat};
use gpdat::{Config, TruncationPolicy};
use std::path::PathBuf;

#[test]
fn test_cli_single_file_defaults() {
    let args = ["gpdat", "gpsz000009.dat"];
    let opt = Opt::try_parse_from(args.iter()).expect("Should parse a single file");

    assert_eq!(opt.files, vec![PathBuf::from("gpsz000009.dat")]);
    assert_eq!(opt.format, OutputFormat::Text);
    assert_eq!(opt.limit, None);
    assert!(!opt.strict);
    // LogLevel doesn't implement PartialEq, so we compare via conversion
    assert_eq!(
        log::LevelFilter::from(opt.log_level.clone()),
        log::LevelFilter::from(LogLevel::Warn)
    );
    match opt.log_format {
        LogFormat::Plain => {}
        LogFormat::Json => panic!("Default log format should be Plain"),
    }
}

#[test]
fn test_cli_multiple_files_keep_order() {
    let opt = Opt::try_parse_from(["gpdat", "b.dat", "a.dat", "c.dat"]).expect("Should parse");
    assert_eq!(
        opt.files,
        vec![
            PathBuf::from("b.dat"),
            PathBuf::from("a.dat"),
            PathBuf::from("c.dat")
        ]
    );
}

#[test]
fn test_cli_all_options() {
    let opt = Opt::try_parse_from([
        "gpdat",
        "gpsh600000.dat",
        "--format",
        "csv",
        "--limit",
        "100",
        "--strict",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse all options");

    assert_eq!(opt.format, OutputFormat::Csv);
    assert_eq!(opt.limit, Some(100));
    assert!(opt.strict);
    assert_eq!(
        log::LevelFilter::from(opt.log_level.clone()),
        log::LevelFilter::Debug
    );
    assert!(matches!(opt.log_format, LogFormat::Json));

    let config = Config::from(opt);
    assert_eq!(config.truncation, TruncationPolicy::Strict);
    assert_eq!(config.format, OutputFormat::Csv);
}

#[test]
fn test_cli_rejects_bad_values() {
    assert!(Opt::try_parse_from(["gpdat", "a.dat", "--format", "xml"]).is_err());
    assert!(Opt::try_parse_from(["gpdat", "a.dat", "--limit", "-1"]).is_err());
    assert!(Opt::try_parse_from(["gpdat", "a.dat", "--log-level", "loud"]).is_err());
}

#[test]
fn test_cli_requires_files() {
    assert!(Opt::try_parse_from(["gpdat"]).is_err());
    assert!(Opt::try_parse_from(["gpdat", "--format", "jsonl"]).is_err());
}
