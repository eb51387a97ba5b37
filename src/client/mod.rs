//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::callback::{self, CallbackRequest};
use crate::domain::{
    ApiResponse, ApiToken, CheckSendAbility, CheckVerificationStatus, RequestStatus,
    RevokeVerificationMessage, SendVerificationMessage, ValidationError,
};
use crate::transport::{self, Method, Reply, TransportError};

const DEFAULT_BASE_URL: &str = "https://gatewayapi.telegram.org/";

/// Environment variable read by [`GatewayClientBuilder::from_env`].
pub const TOKEN_ENV_VAR: &str = "TELEGRAM_GATEWAY_API_TOKEN";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        token: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        token: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .bearer_auth(token)
                .header(reqwest::header::ACCEPT, "application/json")
                .json(&body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`GatewayClient`].
///
/// Every call is a single attempt; nothing is retried internally.
pub enum GatewayError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway answered with an HTTP status other than 200.
    ///
    /// `error` is the gateway's error string when the body carried one.
    #[error(
        "unexpected HTTP status: {status} ({})",
        .error.as_deref().unwrap_or("no error string")
    )]
    Api {
        status: u16,
        error: Option<String>,
        body: Option<String>,
    },

    /// The gateway answered `{"ok": false, "error": ...}`.
    #[error(
        "request rejected by gateway: {}",
        .error.as_deref().unwrap_or("no error string")
    )]
    Rejected { error: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// Request body could not be encoded as JSON.
    #[error("encode error: {0}")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The base URL carries a query or fragment, or cannot hold path segments.
    #[error("unsupported base url: {url}")]
    UnsupportedBaseUrl { url: String },

    /// No usable token in the environment.
    #[error("environment variable {var} is not set or blank")]
    MissingToken { var: &'static str },

    /// A delivery report failed signature verification.
    #[error("callback signature does not match")]
    InvalidCallbackSignature,

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

fn parse_error(err: TransportError) -> GatewayError {
    GatewayError::Parse(Box::new(err))
}

fn encode_error(err: TransportError) -> GatewayError {
    GatewayError::Encode(Box::new(err))
}

#[derive(Debug, Clone)]
/// Builder for [`GatewayClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct GatewayClientBuilder {
    token: ApiToken,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl GatewayClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Create a builder with the token taken from [`TOKEN_ENV_VAR`].
    pub fn from_env() -> Result<Self, GatewayError> {
        let token = token_from_env_value(std::env::var(TOKEN_ENV_VAR).ok())?;
        Ok(Self::new(token))
    }

    /// Override the API base URL; method names are appended as path segments.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`GatewayClient`].
    pub fn build(self) -> Result<GatewayClient, GatewayError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| GatewayError::Transport(Box::new(err)))?;

        Ok(GatewayClient {
            token: self.token,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn token_from_env_value(value: Option<String>) -> Result<ApiToken, GatewayError> {
    value
        .and_then(|value| ApiToken::new(value).ok())
        .ok_or(GatewayError::MissingToken { var: TOKEN_ENV_VAR })
}

/// Method names are appended to the result as plain text, so it must end in `/`
/// and carry nothing after the path.
fn normalize_base_url(raw: &str) -> Result<String, GatewayError> {
    let mut url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() || url.query().is_some() || url.fragment().is_some() {
        return Err(GatewayError::UnsupportedBaseUrl { url: url.into() });
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url.into())
}

#[derive(Clone)]
/// Telegram Gateway API client.
///
/// Every method issues one `POST https://gatewayapi.telegram.org/<method>` with a
/// JSON body and `Authorization: Bearer <token>`, and returns the decoded `result`
/// together with the raw response body.
pub struct GatewayClient {
    token: ApiToken,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayClient")
            .field("token", &self.token)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GatewayClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`GatewayClient::builder`].
    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Create a client with the token read from [`TOKEN_ENV_VAR`].
    pub fn from_env() -> Result<Self, GatewayError> {
        GatewayClientBuilder::from_env()?.build()
    }

    /// Start building a client with custom settings.
    pub fn builder(token: ApiToken) -> GatewayClientBuilder {
        GatewayClientBuilder::new(token)
    }

    /// Send a verification message (`sendVerificationMessage`).
    ///
    /// Errors:
    /// - [`GatewayError::Api`] for non-200 HTTP responses,
    /// - [`GatewayError::Rejected`] when the gateway answers `ok: false`,
    /// - [`GatewayError::Transport`] when the request could not complete.
    pub async fn send_verification_message(
        &self,
        request: &SendVerificationMessage,
    ) -> Result<ApiResponse<RequestStatus>, GatewayError> {
        let payload =
            transport::encode_send_verification_message(request).map_err(encode_error)?;
        let body = self.post(Method::SendVerificationMessage, payload).await?;
        let reply = transport::decode_request_status_response(&body);
        accept(Method::SendVerificationMessage, reply, body)
    }

    /// Check whether a code can be sent to a number (`checkSendAbility`).
    ///
    /// The returned `request_id` makes a following send to the same number free.
    pub async fn check_send_ability(
        &self,
        request: &CheckSendAbility,
    ) -> Result<ApiResponse<RequestStatus>, GatewayError> {
        let payload = transport::encode_check_send_ability(request).map_err(encode_error)?;
        let body = self.post(Method::CheckSendAbility, payload).await?;
        let reply = transport::decode_request_status_response(&body);
        accept(Method::CheckSendAbility, reply, body)
    }

    /// Fetch the status of a previous message, optionally checking an entered code
    /// (`checkVerificationStatus`).
    pub async fn check_verification_status(
        &self,
        request: &CheckVerificationStatus,
    ) -> Result<ApiResponse<RequestStatus>, GatewayError> {
        let payload =
            transport::encode_check_verification_status(request).map_err(encode_error)?;
        let body = self.post(Method::CheckVerificationStatus, payload).await?;
        let reply = transport::decode_request_status_response(&body);
        accept(Method::CheckVerificationStatus, reply, body)
    }

    /// Revoke a message that has not been read yet (`revokeVerificationMessage`).
    pub async fn revoke_verification_message(
        &self,
        request: &RevokeVerificationMessage,
    ) -> Result<ApiResponse<bool>, GatewayError> {
        let payload =
            transport::encode_revoke_verification_message(request).map_err(encode_error)?;
        let body = self.post(Method::RevokeVerificationMessage, payload).await?;
        let reply = transport::decode_revoke_verification_message_response(&body);
        accept(Method::RevokeVerificationMessage, reply, body)
    }

    /// Whether an inbound delivery report was signed with this client's token.
    pub fn check_callback_request(&self, request: &CallbackRequest) -> bool {
        let verified = callback::verify(&self.token, request);
        if !verified {
            tracing::warn!(
                timestamp = %request.timestamp,
                "callback signature verification failed"
            );
        }
        verified
    }

    /// Verify an inbound delivery report and decode its `RequestStatus` body.
    pub fn parse_callback_request(
        &self,
        request: &CallbackRequest,
    ) -> Result<RequestStatus, GatewayError> {
        if !self.check_callback_request(request) {
            return Err(GatewayError::InvalidCallbackSignature);
        }
        transport::decode_request_status(&request.body).map_err(parse_error)
    }

    fn method_url(&self, method: Method) -> String {
        format!("{}{}", self.base_url, method.as_str())
    }

    async fn post(&self, method: Method, payload: serde_json::Value) -> Result<String, GatewayError> {
        let url = self.method_url(method);
        tracing::debug!(method = method.as_str(), %url, "sending gateway request");

        let response = self
            .http
            .post_json(&url, self.token.expose(), payload)
            .await
            .map_err(GatewayError::Transport)?;

        if response.status != 200 {
            let error = transport::peek_error(&response.body);
            tracing::warn!(
                method = method.as_str(),
                status = response.status,
                error = ?error,
                "gateway returned non-200 status"
            );
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(GatewayError::Api {
                status: response.status,
                error,
                body,
            });
        }

        tracing::debug!(
            method = method.as_str(),
            status = response.status,
            body = %response.body,
            "gateway response"
        );
        Ok(response.body)
    }
}

fn accept<T>(
    method: Method,
    reply: Result<Reply<T>, TransportError>,
    body: String,
) -> Result<ApiResponse<T>, GatewayError> {
    match reply.map_err(parse_error)? {
        Reply::Ok(result) => Ok(ApiResponse { result, body }),
        Reply::Rejected(error) => {
            tracing::warn!(method = method.as_str(), error = ?error, "gateway rejected request");
            Err(GatewayError::Rejected { error })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use crate::domain::{RawPhoneNumber, RequestId, VerificationCode, VerificationState};

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last_url: Option<String>,
        last_token: Option<String>,
        last_body: Option<serde_json::Value>,
        response: Result<(u16, String), String>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    struct FakeNetworkError(String);

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self::with_response(Ok((response_status, response_body.into())))
        }

        fn failing(message: &str) -> Self {
            Self::with_response(Err(message.to_owned()))
        }

        fn with_response(response: Result<(u16, String), String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_url: None,
                    last_token: None,
                    last_body: None,
                    response,
                })),
            }
        }

        fn last_request(&self) -> (Option<String>, Option<String>, Option<serde_json::Value>) {
            let state = self.state.lock().unwrap();
            (
                state.last_url.clone(),
                state.last_token.clone(),
                state.last_body.clone(),
            )
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_json<'a>(
            &'a self,
            url: &'a str,
            token: &'a str,
            body: serde_json::Value,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let response = {
                    let mut state = self.state.lock().unwrap();
                    state.last_url = Some(url.to_owned());
                    state.last_token = Some(token.to_owned());
                    state.last_body = Some(body);
                    state.response.clone()
                };
                match response {
                    Ok((status, body)) => Ok(HttpResponse { status, body }),
                    Err(message) => {
                        let err: Box<dyn StdError + Send + Sync> =
                            Box::new(FakeNetworkError(message));
                        Err(err)
                    }
                }
            })
        }
    }

    fn make_client(transport: FakeTransport) -> GatewayClient {
        GatewayClient {
            token: ApiToken::new("test_token").unwrap(),
            base_url: "https://example.invalid/".to_owned(),
            http: Arc::new(transport),
        }
    }

    fn send_request() -> SendVerificationMessage {
        let mut request =
            SendVerificationMessage::new(RawPhoneNumber::new("+15555550123").unwrap());
        request.set_code("1234").unwrap().set_ttl(120).unwrap();
        request
    }

    const STATUS_OK: &str = r#"
    {
      "ok": true,
      "result": {
        "request_id": "req-1",
        "phone_number": "+15555550123",
        "request_cost": 0.01,
        "remaining_balance": 4.99,
        "delivery_status": { "status": "sent", "updated_at": 1700000000 }
      }
    }
    "#;

    #[tokio::test]
    async fn send_verification_message_posts_json_with_token_and_parses_status() {
        let transport = FakeTransport::new(200, STATUS_OK);
        let client = make_client(transport.clone());

        let response = client
            .send_verification_message(&send_request())
            .await
            .unwrap();
        assert_eq!(response.result.request_id, "req-1");
        assert_eq!(response.result.request_cost, "0.01");
        assert_eq!(response.result.remaining_balance.as_deref(), Some("4.99"));
        assert_eq!(response.body, STATUS_OK);

        let (url, token, body) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/sendVerificationMessage")
        );
        assert_eq!(token.as_deref(), Some("test_token"));
        assert_eq!(
            body,
            Some(json!({ "phone_number": "+15555550123", "code": "1234", "ttl": 120 }))
        );
    }

    #[tokio::test]
    async fn non_200_status_maps_to_api_error_with_gateway_error_string() {
        let transport = FakeTransport::new(400, r#"{"ok":false,"error":"PHONE_NUMBER_INVALID"}"#);
        let client = make_client(transport);

        let err = client
            .send_verification_message(&send_request())
            .await
            .unwrap_err();
        match err {
            GatewayError::Api {
                status,
                error,
                body,
            } => {
                assert_eq!(status, 400);
                assert_eq!(error.as_deref(), Some("PHONE_NUMBER_INVALID"));
                assert!(body.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_200_with_blank_body_maps_body_to_none() {
        let transport = FakeTransport::new(502, "  ");
        let client = make_client(transport);

        let err = client
            .send_verification_message(&send_request())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Api {
                status: 502,
                error: None,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn other_2xx_statuses_are_errors() {
        let transport = FakeTransport::new(204, "");
        let client = make_client(transport);

        let err = client
            .send_verification_message(&send_request())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Api { status: 204, .. }));
    }

    #[tokio::test]
    async fn ok_false_maps_to_rejected() {
        let transport = FakeTransport::new(200, r#"{"ok":false,"error":"ACCESS_TOKEN_INVALID"}"#);
        let client = make_client(transport);

        let err = client
            .send_verification_message(&send_request())
            .await
            .unwrap_err();
        match err {
            GatewayError::Rejected { error } => {
                assert_eq!(error.as_deref(), Some("ACCESS_TOKEN_INVALID"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_maps_to_parse_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client(transport);

        let err = client
            .send_verification_message(&send_request())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[tokio::test]
    async fn network_failure_maps_to_transport_error() {
        let transport = FakeTransport::failing("connection reset");
        let client = make_client(transport);

        let err = client
            .send_verification_message(&send_request())
            .await
            .unwrap_err();
        match err {
            GatewayError::Transport(source) => assert_eq!(source.to_string(), "connection reset"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_send_leaves_request_untouched() {
        let transport = FakeTransport::new(500, "oops");
        let client = make_client(transport);
        let request = send_request();
        let before = request.clone();

        assert!(client.send_verification_message(&request).await.is_err());
        assert_eq!(request, before);
    }

    #[tokio::test]
    async fn check_send_ability_uses_its_endpoint() {
        let transport = FakeTransport::new(200, STATUS_OK);
        let client = make_client(transport.clone());
        let request = CheckSendAbility::new(RawPhoneNumber::new("+15555550123").unwrap());

        let response = client.check_send_ability(&request).await.unwrap();
        assert_eq!(response.result.request_id, "req-1");

        let (url, _, body) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/checkSendAbility"));
        assert_eq!(body, Some(json!({ "phone_number": "+15555550123" })));
    }

    #[tokio::test]
    async fn check_verification_status_sends_code_and_reads_verification() {
        let json = r#"
        {
          "ok": true,
          "result": {
            "request_id": "req-1",
            "phone_number": "+15555550123",
            "request_cost": 0.01,
            "verification_status": {
              "status": "code_invalid",
              "updated_at": 1700000100,
              "code_entered": "9999"
            }
          }
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());
        let request = CheckVerificationStatus::new(RequestId::new("req-1").unwrap())
            .with_code(VerificationCode::new("9999").unwrap());

        let response = client.check_verification_status(&request).await.unwrap();
        let verification = response.result.verification_status.unwrap();
        assert_eq!(verification.status, VerificationState::CodeInvalid);
        assert_eq!(verification.code_entered.as_deref(), Some("9999"));

        let (url, _, body) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/checkVerificationStatus")
        );
        assert_eq!(body, Some(json!({ "request_id": "req-1", "code": "9999" })));
    }

    #[tokio::test]
    async fn revoke_verification_message_returns_boolean_result() {
        let transport = FakeTransport::new(200, r#"{"ok":true,"result":true}"#);
        let client = make_client(transport.clone());
        let request = RevokeVerificationMessage::new(RequestId::new("req-1").unwrap());

        let response = client.revoke_verification_message(&request).await.unwrap();
        assert!(response.result);

        let (url, _, body) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/revokeVerificationMessage")
        );
        assert_eq!(body, Some(json!({ "request_id": "req-1" })));
    }

    #[test]
    fn callback_requests_are_checked_against_client_token() {
        let client = make_client(FakeTransport::new(200, "{}"));
        let body = r#"{"request_id":"req-1","phone_number":"+15555550123","request_cost":0.01,"payload":"p"}"#;
        let signature =
            callback::sign(&ApiToken::new("test_token").unwrap(), "1700000000", body).unwrap();

        let request = CallbackRequest::new("1700000000", signature, body);
        assert!(client.check_callback_request(&request));
        let status = client.parse_callback_request(&request).unwrap();
        assert_eq!(status.payload.as_deref(), Some("p"));

        let forged = CallbackRequest::new("1700000000", "00".repeat(32), body);
        assert!(!client.check_callback_request(&forged));
        assert!(matches!(
            client.parse_callback_request(&forged),
            Err(GatewayError::InvalidCallbackSignature)
        ));
    }

    #[test]
    fn builder_normalizes_base_url() {
        let token = ApiToken::new("key").unwrap();

        let client = GatewayClient::builder(token.clone())
            .base_url("http://127.0.0.1:8080")
            .build()
            .unwrap();
        assert_eq!(
            client.method_url(Method::CheckSendAbility),
            "http://127.0.0.1:8080/checkSendAbility"
        );

        let client = GatewayClient::builder(token.clone())
            .base_url("https://proxy.example/gateway")
            .timeout(Duration::from_secs(5))
            .user_agent("tests")
            .build()
            .unwrap();
        assert_eq!(
            client.method_url(Method::SendVerificationMessage),
            "https://proxy.example/gateway/sendVerificationMessage"
        );

        let client = GatewayClient::new(token.clone());
        assert_eq!(
            client.method_url(Method::RevokeVerificationMessage),
            "https://gatewayapi.telegram.org/revokeVerificationMessage"
        );

        let err = GatewayClient::builder(token.clone()).base_url("not a url").build();
        assert!(matches!(err, Err(GatewayError::InvalidBaseUrl(_))));

        for base_url in [
            "https://proxy.example/gw?tenant=1",
            "https://proxy.example/gw/#frag",
            "mailto:ops@example.com",
        ] {
            let err = GatewayClient::builder(token.clone()).base_url(base_url).build();
            assert!(
                matches!(err, Err(GatewayError::UnsupportedBaseUrl { .. })),
                "{base_url} should be rejected"
            );
        }
    }

    #[test]
    fn env_token_must_be_present_and_non_blank() {
        for value in [None, Some(String::new()), Some("  ".to_owned())] {
            match token_from_env_value(value) {
                Err(GatewayError::MissingToken { var }) => assert_eq!(var, TOKEN_ENV_VAR),
                other => panic!("unexpected result: {other:?}"),
            }
        }

        let token = token_from_env_value(Some(" AAH-token \n".to_owned())).unwrap();
        assert_eq!(token.expose(), "AAH-token");
    }

    #[test]
    fn error_messages_show_gateway_error_strings_plainly() {
        let err = GatewayError::Api {
            status: 400,
            error: Some("PHONE_NUMBER_INVALID".to_owned()),
            body: None,
        };
        assert_eq!(
            err.to_string(),
            "unexpected HTTP status: 400 (PHONE_NUMBER_INVALID)"
        );

        let err = GatewayError::Api {
            status: 502,
            error: None,
            body: None,
        };
        assert_eq!(err.to_string(), "unexpected HTTP status: 502 (no error string)");

        let err = GatewayError::Rejected {
            error: Some("BALANCE_NOT_ENOUGH".to_owned()),
        };
        assert_eq!(err.to_string(), "request rejected by gateway: BALANCE_NOT_ENOUGH");
    }

    #[test]
    fn debug_output_redacts_token() {
        let client = make_client(FakeTransport::new(200, "{}"));
        let debug = format!("{client:?}");
        assert!(!debug.contains("test_token"));
        assert!(debug.contains("REDACTED"));
    }
}
