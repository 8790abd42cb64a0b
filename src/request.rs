//! Read-only view over the invocation payload

use serde_json::Value;
use thiserror::Error;

/// A field the gateway promises to populate is absent or malformed
///
/// Not mapped to any HTTP status here; it leaves the handler unhandled and
/// the platform produces its own error response.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum MissingFieldError {
    #[error("invocation payload has no `requestContext`")]
    RequestContext,
    #[error("request context has no `identity`")]
    Identity,
    #[error("caller identity has no `sourceIp`")]
    SourceIp,
    #[error("`sourceIp` is not a string")]
    SourceIpType,
}

/// The raw gateway payload, wrapped for field access
///
/// The payload stays owned by the runtime; this only borrows the one field
/// path it needs, nothing is deserialized up front.
pub struct InvocationRequest<'a>(&'a Value);

impl<'a> InvocationRequest<'a> {
    pub fn new(payload: &'a Value) -> Self {
        Self(payload)
    }

    /// The client address as resolved by the gateway
    ///
    /// # Errors
    ///
    /// Will return `Err` when any level of `requestContext.identity.sourceIp`
    /// is missing, or when the value is not a string
    pub fn source_ip(&self) -> Result<&'a str, MissingFieldError> {
        self.0
            .get("requestContext")
            .ok_or(MissingFieldError::RequestContext)?
            .get("identity")
            .ok_or(MissingFieldError::Identity)?
            .get("sourceIp")
            .ok_or(MissingFieldError::SourceIp)?
            .as_str()
            .ok_or(MissingFieldError::SourceIpType)
    }
}
