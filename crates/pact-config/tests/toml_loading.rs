//! Integration tests for TOML and environment configuration loading.
//!
//! Uses `figment::Jail` for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pact_config::{PactConfig, RangePolicy};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn loads_store_config_from_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".pact")?;
        jail.create_file(
            ".pact/config.toml",
            r#"
[store]
data_dir = "./crew_data"
cross_process_lock = false
lock_timeout_secs = 5

[general]
default_history_limit = 25
"#,
        )?;

        let config = PactConfig::load().expect("config loads");
        assert_eq!(config.store.data_dir.to_str(), Some("./crew_data"));
        assert!(!config.store.cross_process_lock);
        assert_eq!(config.store.lock_timeout_secs, 5);
        assert_eq!(config.general.default_history_limit, 25);
        Ok(())
    });
}

#[test]
fn custom_benchmarks_replace_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gaps]
top_recommendations = 1

[[gaps.benchmarks]]
industry = "Technology"
benchmark = 0.12

[[gaps.benchmarks]]
industry = "Automotive"
benchmark = 0.08
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(PactConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = PactConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.gaps.benchmarks.len(), 2);
        assert_eq!(config.gaps.benchmarks[1].industry, "Automotive");
        assert_eq!(config.gaps.top_recommendations, 1);
        // untouched sections keep their defaults
        assert_eq!(config.gaps.partnership_types.len(), 7);
        assert_eq!(config.scoring.criteria.len(), 6);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".pact")?;
        jail.create_file(
            ".pact/config.toml",
            r#"
[store]
data_dir = "from_toml"
"#,
        )?;
        jail.set_env("PACT_STORE__DATA_DIR", "from_env");
        jail.set_env("PACT_SCORING__RANGE_POLICY", "clamp");

        let config = PactConfig::load().expect("config loads");
        assert_eq!(config.store.data_dir.to_str(), Some("from_env"));
        assert_eq!(config.scoring.range_policy, RangePolicy::Clamp);
        Ok(())
    });
}

#[rstest]
#[case::weights_not_summing(
    r#"
[[scoring.criteria]]
name = "brand_alignment"
weight = 0.6
"#,
    "scoring.criteria"
)]
#[case::benchmark_over_one(
    r#"
[[gaps.benchmarks]]
industry = "Energy"
benchmark = 2.0
"#,
    "gaps.benchmarks[0].benchmark"
)]
#[case::tiers_out_of_order(
    r"
[scoring.tiers]
excellent = 5.0
strong = 7.0
good = 5.5
moderate = 4.0
",
    "scoring.tiers"
)]
fn invalid_sections_are_rejected(#[case] toml: &str, #[case] field: &str) {
    let figment =
        Figment::from(Serialized::defaults(PactConfig::default())).merge(Toml::string(toml));
    let err = PactConfig::from_figment(&figment).expect_err("config should be invalid");
    assert!(
        err.to_string().contains(field),
        "expected error about {field}, got: {err}"
    );
}
