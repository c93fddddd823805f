//! Gandi LiveDNS client for the apex record set of a single domain.

pub mod client;
pub mod types;


pub use client::LiveDnsClient;
pub use types::RecordSet;
