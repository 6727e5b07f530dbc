//! Generation layer: prompt construction, the Anthropic Messages client, and
//! the refresh cycle that rewrites the content store.

pub mod client;
pub mod config;
pub mod prompt;
pub mod refresher;

pub use client::{AnthropicClient, GenerateError, GenerateRequest, TextGenerator};
pub use config::{ConfigError, RefresherConfig};
pub use refresher::{RefreshError, RefreshReport, Refresher};
