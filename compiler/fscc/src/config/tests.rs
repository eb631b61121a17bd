#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn defaults() {
    let (config, positional) = CliConfig::from_args(&[]).unwrap();
    assert_eq!(config, CliConfig::default());
    assert!(config.parallel);
    assert!(!config.json);
    assert!(positional.is_empty());
}

#[test]
fn options_anywhere() {
    let (config, positional) =
        CliConfig::from_args(&args(&["%d", "--json", "I", "--no-parallel", "-v"])).unwrap();
    assert!(config.json);
    assert!(!config.parallel);
    assert!(config.verbose);
    assert_eq!(positional, args(&["%d", "I"]));
}

#[test]
fn color_modes() {
    let (config, _) = CliConfig::from_args(&args(&["--color=never"])).unwrap();
    assert_eq!(config.color, ColorMode::Never);

    let err = CliConfig::from_args(&args(&["--color=rainbow"])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidColor("rainbow".to_string()));
}

#[test]
fn unknown_option() {
    let err = CliConfig::from_args(&args(&["--fast"])).unwrap_err();
    assert_eq!(err.to_string(), "unknown option `--fast`");
}

#[test]
fn double_dash_ends_options() {
    let (config, positional) =
        CliConfig::from_args(&args(&["--", "-%d", "--json"])).unwrap();
    assert!(!config.json);
    assert_eq!(positional, args(&["-%d", "--json"]));
}

#[test]
fn lone_dash_is_positional() {
    let (_, positional) = CliConfig::from_args(&args(&["-"])).unwrap();
    assert_eq!(positional, args(&["-"]));
}
