use lambda_runtime::Context;
use lambda_runtime::LambdaEvent;
use serde_json::Map;
use serde_json::Value;

use crate::handler::handle;
use crate::request::MissingFieldError;

/// Invoke the handler with a raw payload
///
/// A successful envelope comes back serialized, so assertions see the exact
/// JSON the gateway would receive; a failure comes back as the lookup error.
pub async fn invoke(payload: Value) -> Result<Value, MissingFieldError> {
    let event = LambdaEvent::new(payload, Context::default());

    match handle(event).await {
        Ok(envelope) => Ok(serde_json::to_value(envelope).unwrap()),
        Err(error) => Err(error
            .downcast::<MissingFieldError>()
            .map(|boxed| *boxed)
            .unwrap()),
    }
}

/// A well-formed gateway payload carrying the given source IP
pub fn gateway_payload(source_ip: Value) -> Value {
    let mut identity = Map::new();
    identity.insert("sourceIp".to_string(), source_ip);

    let mut request_context = Map::new();
    request_context.insert("identity".to_string(), Value::Object(identity));

    let mut payload = Map::new();
    payload.insert(
        "requestContext".to_string(),
        Value::Object(request_context),
    );

    Value::Object(payload)
}
