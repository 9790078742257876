// fedinfo-api: Async Rust client for Mastodon-compatible instance metadata

pub mod client;
pub mod error;
pub mod instance;
pub mod models;
pub mod transport;

pub use client::{ClientConfig, MastodonClient};
pub use error::Error;
pub use models::{
    Account, Instance, InstanceConfig, InstanceConfigMap, InstanceStats, InstanceV2, Rule,
    WeeklyActivity,
};
pub use transport::{TlsMode, TransportConfig};
