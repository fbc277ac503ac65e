pub mod client;
pub mod error;
pub mod infoblox;
pub mod models;

pub use client::DnsApiClient;
pub use error::InfobloxError;
pub use infoblox::InfobloxClient;
