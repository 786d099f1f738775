use std::{env, str::FromStr};

use anyhow::Context;
use chrono::TimeDelta;

use crate::store::MarketplaceSettings;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_demo: bool,
    pub min_delivery_lead: TimeDelta,
    pub request_body_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset keys take their default;
    /// set but malformed keys are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_var(&lookup, "APP_PORT", 3000u16)?;
        let seed_demo = match lookup("SEED_DEMO") {
            Some(value) => parse_flag(&value).context("invalid SEED_DEMO")?,
            None => true,
        };
        let minutes = parse_var(&lookup, "MIN_DELIVERY_LEAD_MINUTES", 60i64)?;
        anyhow::ensure!(minutes >= 0, "MIN_DELIVERY_LEAD_MINUTES must not be negative");
        let Some(min_delivery_lead) = TimeDelta::try_minutes(minutes) else {
            anyhow::bail!("MIN_DELIVERY_LEAD_MINUTES is too large: {minutes}");
        };
        let request_body_limit = parse_var(&lookup, "REQUEST_BODY_LIMIT", 1024 * 1024usize)?;
        Ok(Self {
            host,
            port,
            seed_demo,
            min_delivery_lead,
            request_body_limit,
        })
    }

    pub fn marketplace_settings(&self) -> MarketplaceSettings {
        MarketplaceSettings {
            min_delivery_lead: self.min_delivery_lead,
        }
    }
}

fn parse_var<T>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("invalid {key}: {value:?}")),
        None => Ok(default),
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid boolean flag: {other}"),
    }
}
