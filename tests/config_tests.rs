use std::f64::consts::{E, PI};

use rationalize::{ConfigError, RationalizeConfig, Search, Tolerance, rationalize_with};

fn run(x: f64, config_toml: &str) -> String {
    let config = RationalizeConfig::from_toml(config_toml)
        .unwrap_or_else(|e| panic!("Failed to load config {:?}: {}", config_toml, e));
    rationalize_with(x, &config)
        .unwrap_or_else(|e| panic!("rationalize_with({}) failed: {}", x, e))
        .to_string()
}

#[test]
fn test_default_config_is_half_ulp() {
    assert_eq!(run(0.1, ""), "1/10");
    assert_eq!(run(-1.0 / 3.0, ""), "-1/3");
    assert_eq!(run(f64::INFINITY, ""), "1/0");
}

#[test]
fn test_absolute_tolerance() {
    let config = "[tolerance]\nkind = \"absolute\"\nvalue = 1e-3\n";
    assert_eq!(run(PI, config), "201/64");
    assert_eq!(run(-PI, config), "-201/64");
}

#[test]
fn test_relative_tolerance() {
    let config = "[tolerance]\nkind = \"relative\"\nvalue = 1e-3\n";
    assert_eq!(run(PI, config), "22/7");
    assert_eq!(run(f64::NEG_INFINITY, config), "-1/0");
}

#[test]
fn test_significant_bits() {
    let bits = |n: u32| format!("[tolerance]\nkind = \"significant_bits\"\nvalue = {}\n", n);
    assert_eq!(run(PI, &bits(10)), "22/7");
    assert_eq!(run(PI, &bits(20)), "355/113");
    assert_eq!(run(-E, &bits(12)), "-87/32");
    assert_eq!(run(0.1, &bits(53)), "1/10");
}

#[test]
fn test_convergent_search() {
    let config = r#"
search = "convergent"

[tolerance]
kind = "absolute"
value = 0.001
"#;
    assert_eq!(run(PI, config), "333/106");
    assert_eq!(run(0.3, config), "3/10");
}

#[test]
fn test_config_is_plain_data() {
    let config = RationalizeConfig {
        tolerance: Tolerance::SignificantBits(20),
        search: Search::Best,
    };
    let copy = config;
    assert_eq!(rationalize_with(PI, &copy), rationalize_with(PI, &config));
}

#[test]
fn test_invalid_configs() {
    let err = RationalizeConfig::from_toml("[tolerance]\nkind = \"absolute\"\nvalue = -0.5\n")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid tolerance: must be a non-negative number. got -0.5"
    );

    let err = RationalizeConfig::from_toml("[tolerance]\nkind = \"significant_bits\"\nvalue = 64\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSignificantBits { got: 64 }));

    let err = RationalizeConfig::from_toml("search = 3").unwrap_err();
    assert!(err.to_string().starts_with("failed to parse configuration"));
}
