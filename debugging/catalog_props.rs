//! Fetch the now-playing catalog and print the field names of the first movie.
//! Uses MARQUEE_API_URL and MARQUEE_API_TOKEN from the environment (.env supported).

use anyhow::{Context, Result};
use dotenvy::dotenv;
use reqwest::Client;
use serde_json::Value;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present for local runs.
    dotenv().ok();

    let api_url = env::var("MARQUEE_API_URL").context("Missing MARQUEE_API_URL in environment")?;
    let api_token =
        env::var("MARQUEE_API_TOKEN").context("Missing MARQUEE_API_TOKEN in environment")?;

    let client = Client::new();
    let url = format!("{}/api/show/now-playing", api_url.trim_end_matches('/'));

    let response = client
        .get(&url)
        .bearer_auth(api_token)
        .send()
        .await
        .context("Failed to call backend")?
        .error_for_status()
        .context("Backend returned an error status")?;

    let body: Value = response.json().await.context("Failed to parse backend response")?;
    println!("success: {}", body.get("success").unwrap_or(&Value::Null));
    let first = body
        .get("movies")
        .and_then(|v| v.as_array())
        .and_then(|movies| movies.first())
        .and_then(|m| m.as_object())
        .context("No movie objects found in backend response")?;

    for (name, value) in first {
        println!("{}: {}", name, value);
    }

    Ok(())
}
