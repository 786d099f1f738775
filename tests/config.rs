use std::collections::HashMap;

use chrono::TimeDelta;
use grocery_delivery_api::config::AppConfig;

fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn unset_values_take_defaults() -> anyhow::Result<()> {
    let config = config_from(&[])?;
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 3000);
    assert!(config.seed_demo);
    assert_eq!(config.min_delivery_lead, TimeDelta::minutes(60));
    assert_eq!(config.request_body_limit, 1024 * 1024);
    Ok(())
}

#[test]
fn set_values_are_parsed() -> anyhow::Result<()> {
    let config = config_from(&[
        ("APP_PORT", "8080"),
        ("SEED_DEMO", "off"),
        ("MIN_DELIVERY_LEAD_MINUTES", "0"),
        ("REQUEST_BODY_LIMIT", "4096"),
    ])?;
    assert_eq!(config.port, 8080);
    assert!(!config.seed_demo);
    assert_eq!(config.marketplace_settings().min_delivery_lead, TimeDelta::zero());
    assert_eq!(config.request_body_limit, 4096);
    Ok(())
}

#[test]
fn malformed_values_are_rejected() {
    for (key, value) in [
        ("APP_PORT", "eighty"),
        ("APP_PORT", "70000"),
        ("REQUEST_BODY_LIMIT", "1MB"),
        ("SEED_DEMO", "maybe"),
        ("MIN_DELIVERY_LEAD_MINUTES", "soon"),
        ("MIN_DELIVERY_LEAD_MINUTES", "-5"),
        ("MIN_DELIVERY_LEAD_MINUTES", "9223372036854775807"),
    ] {
        assert!(config_from(&[(key, value)]).is_err(), "{key}={value}");
    }
}
