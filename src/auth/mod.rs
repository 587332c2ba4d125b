//! Authentication for the streaming API.
//!
//! Authentication is a single OAuth2 client-credentials exchange: the
//! consumer key and secret from a local [`Credentials`] file are traded for
//! a bearer token held by a [`Session`].
//!
//! ```no_run
//! use twitter_stream_rules::Credentials;
//!
//! # fn example() -> twitter_stream_rules::Result<()> {
//! let credentials = Credentials::from_file(".keys.json")?;
//! # Ok(())
//! # }
//! ```

mod credentials;
mod session;

pub use credentials::Credentials;
pub use session::Session;
