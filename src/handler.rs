//! The single invocation handler

use lambda_runtime::Error;
use lambda_runtime::LambdaEvent;
use serde_json::Value;

use crate::request::InvocationRequest;
use crate::response::Envelope;

/// Echo the caller's source IP back as the response body
///
/// The address is whatever the gateway resolved for the original client;
/// it is passed through verbatim, without validation or normalization.
///
/// # Errors
///
/// Will return `Err` when the gateway did not populate
/// `requestContext.identity.sourceIp`; the runtime reports that as its
/// generic invocation failure
pub async fn handle(event: LambdaEvent<Value>) -> Result<Envelope, Error> {
    let request = InvocationRequest::new(&event.payload);

    let source_ip = request.source_ip()?;

    Ok(Envelope::ok(source_ip.to_string()))
}
