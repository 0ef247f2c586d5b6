//! Request dispatch: POST a payload, hand the parsed JSON reply to the
//! caller's completion callback.

use serde_json::Value;
use tracing::error;

use crate::api::transport::{HttpTransport, Payload};
use crate::error::Result;

/// POST `args` to `url` and invoke `completion` with the parsed JSON body.
///
/// File payloads go out as multipart forms, everything else as JSON. The
/// body is parsed whatever the HTTP status; backends report errors as JSON
/// too. On transport or parse failure the callback is never invoked and a
/// single diagnostic is logged. Callers needing failure detection must
/// bring their own timeout.
pub(crate) async fn hit_endpoint<T, F>(transport: &T, url: &str, args: Payload, completion: F)
where
    T: HttpTransport,
    F: FnOnce(Value),
{
    let exchanged: Result<Value> = match &args {
        Payload::File(file) => transport.post_file(url, file).await,
        Payload::Json(value) => transport.post_json(url, value).await,
    }
    .and_then(|reply| reply.json());

    match exchanged {
        Ok(value) => completion(value),
        Err(err) => error!(url, error = %err, "endpoint call failed, completion not invoked"),
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
