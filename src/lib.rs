//! Client for the Infoblox WAPI record endpoints (CNAME, TXT and Host records).

pub mod api;
pub mod config;
pub mod logging;

#[cfg(test)]
mod tests;

pub use api::{models, DnsApiClient, InfobloxClient, InfobloxError};
pub use config::Config;
