pub mod gemini;

use crate::error::GenerateError;

use std::future::Future;

/// The one thing the dispatcher needs from a model provider.
///
/// Takes the fully composed request string and resolves to the text of the
/// top candidate. Implementations must not retry; a failure is reported as
/// soon as it happens.
pub trait TextGenerator {
    fn generate(&self, request: &str) -> impl Future<Output = Result<String, GenerateError>> + Send;
}
