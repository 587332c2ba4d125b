//! API service modules for the filtered-stream endpoints.

mod rules;

pub use rules::RulesService;
