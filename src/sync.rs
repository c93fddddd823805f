use std::time::Duration;

use log::info;
use reqwest::Client;

use crate::config::Config;
use crate::error::Error;
use crate::gandi::{LiveDnsClient, RecordSet};
use crate::public_ip;

/// Per-request timeout for both the IP echo service and LiveDNS.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    UpToDate,
    Updated {
        previous: Option<String>,
        current: String,
    },
}

/// One full sync pass: discover the public IP, fetch the apex record set,
/// and replace it when the published A record no longer matches. All other
/// rrsets pass through the replace payload untouched.
pub async fn run(config: &Config) -> Result<SyncOutcome, Error> {
    let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

    let ip = public_ip::discover(&http, &config.ip_url).await?;
    info!("Public IP address is {ip}");

    let client = LiveDnsClient::new(http, config);
    let mut records = client.fetch_records().await?;

    if a_record_matches(&records, &ip) {
        info!("IP address is up-to-date. No update needed.");
        return Ok(SyncOutcome::UpToDate);
    }

    info!("IP address does not match. Updating...");
    let previous = records.get("A").and_then(|values| values.first()).cloned();
    records.insert("A".to_string(), vec![ip.clone()]);
    client.replace_records(&records).await?;
    info!("Update complete.");

    Ok(SyncOutcome::Updated {
        previous,
        current: ip,
    })
}

/// Up-to-date iff the first A value equals the discovered IP exactly; a
/// missing or empty A rrset counts as drift. Only the first value is
/// compared, and only by string equality.
fn a_record_matches(records: &RecordSet, ip: &str) -> bool {
    records
        .get("A")
        .and_then(|values| values.first())
        .is_some_and(|current| current == ip)
}
