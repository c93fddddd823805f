use log::error;
use reqwest::Client;

use crate::error::Error;

/// Fetch the machine's public IP from an HTTP echo service. The response
/// body is returned trimmed; no parsing or normalization beyond that, so
/// whatever the service prints is what gets compared against DNS.
pub async fn discover(http: &Client, url: &str) -> Result<String, Error> {
    let response = http.get(url).send().await.map_err(fail)?;
    let response = response.error_for_status().map_err(fail)?;
    let body = response.text().await.map_err(fail)?;
    Ok(body.trim().to_string())
}

fn fail(e: reqwest::Error) -> Error {
    error!("Failed to get public IP: {e}");
    Error::Network(e)
}
