//! One call = encode, post, classify, decode

use serde_json::Value;
use tracing::{debug, warn};

use super::{encode_request, parse_response, HttpTransport, SdkError, Transport};
use crate::decode::FromNode;

/// Sends calls to a single node endpoint.
///
/// Holds no state besides the endpoint and the transport, so clones and
/// concurrent calls are independent of each other.
#[derive(Debug, Clone)]
pub struct Dispatcher<T = HttpTransport> {
    url: String,
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(url: impl Into<String>, transport: T) -> Self {
        Self {
            url: url.into(),
            transport,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Perform one round trip and return the `result` node
    pub async fn call(&self, method: &str, params: &[Value]) -> Result<Value, SdkError> {
        let body = encode_request(method, params);
        debug!(method, url = %self.url, params = params.len(), "sending rpc request");

        let response = match self.transport.post(&self.url, body).await {
            Ok(response) => response,
            Err(e) => {
                warn!(method, error = %e, "rpc transport failed");
                return Err(SdkError::WebRequest(e));
            }
        };

        match parse_response(&response) {
            Ok(result) => {
                debug!(method, "rpc call succeeded");
                Ok(result)
            }
            Err(e) => {
                warn!(method, kind = %e.kind(), error = %e, "rpc call failed");
                Err(e)
            }
        }
    }

    /// [`call`](Self::call) followed by decoding the result as `R`
    pub async fn call_decoded<R: FromNode>(
        &self,
        method: &'static str,
        params: &[Value],
    ) -> Result<R, SdkError> {
        let node = self.call(method, params).await?;
        R::from_node(&node).map_err(|source| {
            warn!(method, error = %source, "rpc result did not decode");
            SdkError::Decode { method, source }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::{ErrorKind, TransportError};
    use serde_json::json;
    use std::sync::Mutex;

    /// Replays one canned outcome and records the body it was sent
    struct Canned {
        reply: Result<String, TransportError>,
        sent: Mutex<Vec<String>>,
    }

    impl Canned {
        fn ok(body: &str) -> Self {
            Self {
                reply: Ok(body.to_string()),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(TransportError::Request("connection refused".into())),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    impl Transport for Canned {
        async fn post(&self, _url: &str, body: String) -> Result<String, TransportError> {
            self.sent.lock().unwrap().push(body);
            self.reply.clone()
        }
    }

    #[tokio::test]
    async fn test_success_returns_result() {
        let dispatcher = Dispatcher::new("http://node", Canned::ok(r#"{"result":{"a":1}}"#));
        let result = dispatcher.call("getNexus", &[json!(false)]).await.unwrap();
        assert_eq!(result, json!({ "a": 1 }));

        let sent = dispatcher.transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let request: Value = serde_json::from_str(&sent[0]).unwrap();
        assert_eq!(request["method"], "getNexus");
        assert_eq!(request["params"], json!([false]));
    }

    #[tokio::test]
    async fn test_transport_failure_is_web_request_error() {
        let dispatcher = Dispatcher::new("http://node", Canned::failing());
        let err = dispatcher.call("getChains", &[]).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WebRequestError);
        assert!(err.message().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_envelope_failures() {
        let cases = [
            ("not json", ErrorKind::FailedParsingJson),
            (r#"{"error":{"message":"x"}}"#, ErrorKind::ApiError),
            (r#"{"nothing":1}"#, ErrorKind::MalformedResponse),
        ];
        for (body, kind) in cases {
            let dispatcher = Dispatcher::new("http://node", Canned::ok(body));
            let err = dispatcher.call("getChains", &[]).await.unwrap_err();
            assert_eq!(err.kind(), kind, "body: {body}");
        }
    }

    #[tokio::test]
    async fn test_decode_failure_is_distinct() {
        let dispatcher = Dispatcher::new("http://node", Canned::ok(r#"{"result":"abc"}"#));
        let err = dispatcher
            .call_decoded::<i32>("getBlockHeight", &[json!("main")])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecodeError);
        assert!(matches!(err, SdkError::Decode { method: "getBlockHeight", .. }));
    }

    #[tokio::test]
    async fn test_numeric_text_result() {
        let dispatcher = Dispatcher::new("http://node", Canned::ok(r#"{"result":"1234"}"#));
        let height: i32 = dispatcher
            .call_decoded("getBlockHeight", &[json!("main")])
            .await
            .unwrap();
        assert_eq!(height, 1234);
    }
}
