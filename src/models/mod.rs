//! Data models for the stream filter rules API.

mod rule;

pub use rule::{Rule, RulePayload, RuleResponse};
