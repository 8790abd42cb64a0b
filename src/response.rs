//! Response envelope for the gateway integration

use serde::Serialize;

/// Hold data for a completed invocation, in the exact shape the gateway
/// integration expects back
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Envelope {
    #[serde(rename = "statusCode")]
    status_code: u16,
    body: String,
}

impl Envelope {
    pub fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }
}
