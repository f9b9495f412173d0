//! Shared HTTP plumbing for the provider clients
//!
//! Every provider goes through one `reqwest` client wrapped in
//! `reqwest-middleware`, so timeouts, the user agent and the retry policy
//! are configured in a single place.

use std::time::{Duration, Instant};

use reqwest::header::ACCEPT;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::ProvidersConfig;
use crate::{GolfWeatherError, Result};

/// Build the middleware client used by all providers
pub fn build_client(config: &ProvidersConfig) -> Result<ClientWithMiddleware> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds.into()))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| GolfWeatherError::config(format!("Failed to create HTTP client: {e}")))?;

    let mut builder = ClientBuilder::new(client);
    if config.max_retries > 0 {
        let policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        builder = builder.with(RetryTransientMiddleware::new_with_policy(policy));
    }

    Ok(builder.build())
}

/// GET a JSON document and decode it.
///
/// Transport failures become [`GolfWeatherError::Network`], non-success
/// statuses [`GolfWeatherError::Api`] and undecodable bodies
/// [`GolfWeatherError::Parse`].
pub async fn get_json<T: DeserializeOwned>(
    client: &ClientWithMiddleware,
    url: &str,
    provider: &str,
) -> Result<T> {
    let start_time = Instant::now();
    debug!("{} request: {}", provider, url);

    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| {
            warn!("{} request failed: {}", provider, e);
            GolfWeatherError::network(format!("{provider} request failed: {e}"))
        })?;

    let status = response.status();
    if !status.is_success() {
        warn!("{} returned HTTP {}", provider, status);
        let message = if status.as_u16() == 429 {
            format!("{provider} rate limit exceeded")
        } else {
            format!(
                "{provider} request failed with status: {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown error")
            )
        };
        return Err(GolfWeatherError::api(message));
    }

    let body = response.json::<T>().await.map_err(|e| {
        warn!("Failed to parse {} response: {}", provider, e);
        GolfWeatherError::parse(format!("Invalid data received from {provider}: {e}"))
    })?;

    let total_duration = start_time.elapsed();
    info!(
        "{} responded in {:.3}s",
        provider,
        total_duration.as_secs_f64()
    );
    if total_duration.as_secs() > 5 {
        warn!(
            "Slow {} response: {:.3}s",
            provider,
            total_duration.as_secs_f64()
        );
    }

    Ok(body)
}
