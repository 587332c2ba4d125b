//! # twitter-stream-rules
//!
//! A client for Twitter's Labs filtered-stream rule endpoints, with OAuth2
//! client-credentials authentication.
//!
//! The crate is a thin client: constructing a [`TwitterClient`] performs a
//! single token exchange, after which the rules service issues plain REST
//! calls. There is no retry logic, no persistence, and no consumption of
//! the tweet stream itself.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use twitter_stream_rules::{Credentials, Rule, TwitterClient};
//!
//! #[tokio::main]
//! async fn main() -> twitter_stream_rules::Result<()> {
//!     let credentials = Credentials::from_file(".keys.json")?;
//!     let client = TwitterClient::connect(credentials.key(), credentials.secret()).await?;
//!
//!     // List the installed rules (raw JSON text).
//!     let rules = client.rules().list().await?;
//!     println!("Rules: {rules}");
//!
//!     // Dry-run a new rule to validate it without installing.
//!     let rule = Rule::new("cat has:media").with_tag("cats with media");
//!     let validated = client.rules().add(vec![rule], true).await?;
//!     println!("Rules to be added: {validated:?}");
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, Session};
pub use client::{ClientConfig, TwitterClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use models::{Rule, RulePayload, RuleResponse};

/// Prelude module for convenient imports.
///
/// ```rust
/// use twitter_stream_rules::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::RulesService;
    pub use crate::auth::{Credentials, Session};
    pub use crate::client::{ClientConfig, TwitterClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{Rule, RulePayload, RuleResponse};
}
