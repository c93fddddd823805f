use log::error;
use reqwest::Client;

use crate::config::Config;
use crate::error::Error;
use crate::gandi::types::{RecordEntry, RecordSet, ReplaceRecords, fold_records, to_entries};

/// Client for the LiveDNS record endpoint of one domain's apex (`@`) name.
pub struct LiveDnsClient {
    http: Client,
    records_url: String,
    api_key: String,
}

impl LiveDnsClient {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            records_url: format!("{}/domains/{}/records/@", config.api_url, config.domain),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch the apex record set, folded by record type.
    pub async fn fetch_records(&self) -> Result<RecordSet, Error> {
        let network = |e: reqwest::Error| {
            error!("Failed to fetch DNS records from Gandi: {e}");
            Error::Network(e)
        };

        let response = self
            .http
            .get(&self.records_url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(network)?
            .error_for_status()
            .map_err(network)?;

        let body = response.text().await.map_err(network)?;
        let entries: Vec<RecordEntry> = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse response from Gandi: {e}");
            Error::RemoteData {
                endpoint: self.records_url.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(fold_records(entries))
    }

    /// Replace the apex record set wholesale. LiveDNS treats the PUT body as
    /// the complete new state for the name, so the caller must pass every
    /// rrset it wants to keep.
    pub async fn replace_records(&self, records: &RecordSet) -> Result<(), Error> {
        let network = |e: reqwest::Error| {
            error!("Failed to update DNS records on Gandi: {e}");
            Error::Network(e)
        };

        let payload = ReplaceRecords {
            items: to_entries(records),
        };
        self.http
            .put(&self.records_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(network)?
            .error_for_status()
            .map_err(network)?;
        Ok(())
    }
}
