use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/original";
pub const DEFAULT_CURRENCY: &str = "$";

pub const REQUIRED_ENV: [&str; 2] = ["MARQUEE_API_URL", "MARQUEE_API_TOKEN"];

#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub api_url: String,
    pub api_token: String,
    pub image_base_url: String,
    pub currency: String,
    pub admin_name: String,
}

impl AdminConfig {
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("MARQUEE_API_URL").context("MARQUEE_API_URL not set")?;
        let api_token = env::var("MARQUEE_API_TOKEN")
            .ok()
            .filter(|s| !s.is_empty())
            .context("MARQUEE_API_TOKEN must be set")?;
        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_token,
            image_base_url: optional_var("MARQUEE_IMAGE_BASE_URL", DEFAULT_IMAGE_BASE),
            currency: optional_var("MARQUEE_CURRENCY", DEFAULT_CURRENCY),
            admin_name: optional_var("MARQUEE_ADMIN_NAME", "admin"),
        })
    }
}

fn optional_var(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
