//! The RPC client (C12, `spec.md` §4.8): a long-lived `reqwest::Client`
//! pointed at a GophKeeper server, attaching `Authorization: Bearer <token>`
//! to every outgoing call once a token is available — grounded in the
//! teacher's `ah-rest-client::client::RestClient` get/post/put/delete →
//! `request` → `handle_response` shape.

use gophkeeper_proto::{
    ApiError, CreateSecretRequest, CreateSecretResponse, DeleteSecretResponse, GetSecretResponse,
    ListSecretsResponse, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse,
    UpdateSecretRequest, UpdateSecretResponse, VerifyTokenRequest, VerifyTokenResponse,
};
use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// A connection to a GophKeeper server. Cheap to clone: the underlying
/// `reqwest::Client` is itself a connection-pooled `Arc`.
#[derive(Debug, Clone)]
pub struct GophKeeperClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl GophKeeperClient {
    /// Builds a client with no token attached yet — every call until
    /// [`GophKeeperClient::with_token`] is used hits only the public
    /// endpoints (`SignUp`/`SignIn`/`VerifyToken`).
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    /// Parses `base_url` and builds a client from it.
    pub fn from_url(base_url: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(base_url)?))
    }

    /// Returns a copy of this client that attaches `Authorization: Bearer
    /// <token>` to every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ---- AuthService ----

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<String> {
        let resp: SignUpResponse = self
            .post(
                "/api/v1/auth/register",
                &SignUpRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;
        Ok(resp.access_token)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<String> {
        let resp: SignInResponse = self
            .post(
                "/api/v1/auth/login",
                &SignInRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;
        Ok(resp.access_token)
    }

    pub async fn verify_token(&self, access_token: &str) -> Result<i64> {
        let resp: VerifyTokenResponse = self
            .post(
                "/api/v1/auth/verify",
                &VerifyTokenRequest {
                    access_token: access_token.to_string(),
                },
            )
            .await?;
        Ok(resp.user_id)
    }

    // ---- SecretService ----

    pub async fn get_secret(&self, name: &str) -> Result<GetSecretResponse> {
        self.get(&format!("/api/v1/secrets/{name}")).await
    }

    pub async fn create_secret(&self, name: &str, content: Vec<u8>) -> Result<CreateSecretResponse> {
        self.post(
            "/api/v1/secrets",
            &CreateSecretRequest {
                name: name.to_string(),
                content,
            },
        )
        .await
    }

    pub async fn update_secret(&self, name: &str, content: Vec<u8>) -> Result<UpdateSecretResponse> {
        self.put(
            &format!("/api/v1/secrets/{name}"),
            &UpdateSecretRequest { content },
        )
        .await
    }

    pub async fn delete_secret(&self, name: &str) -> Result<DeleteSecretResponse> {
        self.delete(&format!("/api/v1/secrets/{name}")).await
    }

    pub async fn list_secrets(&self) -> Result<ListSecretsResponse> {
        self.get("/api/v1/secrets").await
    }

    // ---- transport internals ----

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::PUT, path, Some(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, ()>(Method::DELETE, path, None).await
    }

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%method, %url, "sending request");
        let mut req = self.http.request(method, url);

        if let Some(token) = &self.token {
            req = req.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return serde_json::from_slice(&bytes).map_err(|err| Error::Server {
                kind: gophkeeper_proto::ApiErrorKind::Internal,
                message: format!("malformed response body: {err}"),
            });
        }

        match serde_json::from_slice::<ApiError>(&bytes) {
            Ok(err) => Err(Error::Server {
                kind: err.kind,
                message: err.message,
            }),
            Err(_) => Err(Error::UnexpectedResponse {
                status: status_code(status),
            }),
        }
    }
}

fn status_code(status: StatusCode) -> u16 {
    status.as_u16()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn sign_up_returns_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "tok-123"
            })))
            .mount(&server)
            .await;

        let client = GophKeeperClient::from_url(&server.uri()).unwrap();
        let token = client.sign_up("alice@x", "pw-alice").await.unwrap();
        assert_eq!(token, "tok-123");
    }

    #[tokio::test]
    async fn authenticated_calls_attach_bearer_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/secrets"))
            .and(header("authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "secrets": []
            })))
            .mount(&server)
            .await;

        let client = GophKeeperClient::from_url(&server.uri())
            .unwrap()
            .with_token("tok-123");
        let resp = client.list_secrets().await.unwrap();
        assert!(resp.secrets.is_empty());
    }

    #[tokio::test]
    async fn server_error_body_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/secrets/gmail"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "kind": "not_found",
                "message": "secret not found"
            })))
            .mount(&server)
            .await;

        let client = GophKeeperClient::from_url(&server.uri())
            .unwrap()
            .with_token("tok-123");
        let err = client.get_secret("gmail").await.unwrap_err();
        assert!(matches!(err, Error::Server { kind: gophkeeper_proto::ApiErrorKind::NotFound, .. }));
    }
}
