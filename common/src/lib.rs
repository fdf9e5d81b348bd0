//! Shared building blocks for CivicLens.
//!
//! This crate holds the small pieces every other crate leans on: error
//! location tracking, secret handling, and HTTP status categorisation.
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting primitives
//! - **models**: Pure data structures (prompts, responses, task modes)
//! - **civic-core**: Prompt composition, Gemini client, dispatcher, config
//! - **civiclens**: Terminal application wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_key;


pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
