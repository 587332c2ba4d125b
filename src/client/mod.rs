//! HTTP client layer for the stream rules API.
//!
//! [`TwitterClient`] is the main entry point: constructing one performs the
//! token exchange, and the resulting client hands out service structs for
//! the API surface.
//!
//! # Example
//!
//! ```no_run
//! use twitter_stream_rules::TwitterClient;
//!
//! # async fn example() -> twitter_stream_rules::Result<()> {
//! let client = TwitterClient::connect("consumer-key", "consumer-secret").await?;
//! let added = client
//!     .rules()
//!     .add(vec![twitter_stream_rules::Rule::new("cat has:media")], true)
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use http::TwitterClient;
pub(crate) use http::ClientInner;
