use fitcalc_domain::StorageError;
use serde_json::{Value, json};

use crate::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl Request {
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    #[must_use]
    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub status_text: String,
    pub body: Value,
}

impl Response {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, StorageError>;
}

#[derive(Clone, Default)]
pub struct GlooNetSendRequest {
    api_key: Option<String>,
}

impl GlooNetSendRequest {
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, StorageError> {
        let mut builder = match request.method {
            Method::Get => gloo_net::http::Request::get(&request.url),
            Method::Post => gloo_net::http::Request::post(&request.url),
        }
        .header("Accept", "application/json");

        if let Some(ref api_key) = self.api_key {
            builder = builder
                .header("apikey", api_key)
                .header("Authorization", &format!("Bearer {api_key}"));
        }

        let request = match request.body {
            Some(ref body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|err| StorageError::Other(err.into()))?;

        let response = request
            .send()
            .await
            .map_err(|_| StorageError::NoConnection)?;

        let status = response.status();
        let status_text = response.status_text();

        if !response.ok() {
            return Ok(Response {
                status,
                status_text,
                body: Value::Null,
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|err| StorageError::Deserialization(err.to_string()))?;

        Ok(Response {
            status,
            status_text,
            body,
        })
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub sender: S,
    pub config: Config,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            sender: GlooNetSendRequest::new(config.api_key.clone()),
            config,
        }
    }
}

impl<S: SendRequest> REST<S> {
    pub async fn call_rpc(&self) -> Result<Value, StorageError> {
        self.fetch(Request::post(self.config.rpc_url(), json!({})))
            .await
    }

    pub async fn select(&self, table: &str, columns: &str) -> Result<Value, StorageError> {
        self.fetch(Request::get(self.config.table_url(table, columns)))
            .await
    }

    pub async fn get(&self, url: String) -> Result<Value, StorageError> {
        self.fetch(Request::get(url)).await
    }

    async fn fetch(&self, request: Request) -> Result<Value, StorageError> {
        let response = self.sender.send_request(request).await?;

        if response.ok() {
            Ok(response.body)
        } else {
            Err(StorageError::Status {
                status: response.status,
                text: response.status_text,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::tests::mock::{MockSendRequest, ok, status};

    use super::*;

    fn rest(sender: MockSendRequest) -> REST<MockSendRequest> {
        REST {
            sender,
            config: Config {
                base_url: "https://db.example.com".to_string(),
                ..Config::default()
            },
        }
    }

    #[test]
    fn test_response_ok() {
        assert!(ok(json!([])).unwrap().ok());
        assert!(!status(404, "Not Found").unwrap().ok());
        assert!(!status(500, "Internal Server Error").unwrap().ok());
    }

    #[tokio::test]
    async fn test_call_rpc() {
        let rest = rest(MockSendRequest::new().with(
            "https://db.example.com/rest/v1/rpc/get_exercises_with_involvement",
            ok(json!([{ "id": "squat" }])),
        ));

        assert_eq!(rest.call_rpc().await.unwrap(), json!([{ "id": "squat" }]));
        assert_eq!(
            rest.sender.requests(),
            vec![Request::post(
                "https://db.example.com/rest/v1/rpc/get_exercises_with_involvement",
                json!({})
            )]
        );
    }

    #[tokio::test]
    async fn test_select() {
        let rest = rest(MockSendRequest::new().with(
            "https://db.example.com/rest/v1/exercises?select=id",
            ok(json!([])),
        ));

        assert_eq!(rest.select("exercises", "id").await.unwrap(), json!([]));
        assert_eq!(rest.sender.requests()[0].method, Method::Get);
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let rest = rest(MockSendRequest::new().with(
            "https://db.example.com/rest/v1/rpc/get_exercises_with_involvement",
            status(401, "Unauthorized"),
        ));

        assert!(matches!(
            rest.call_rpc().await,
            Err(StorageError::Status { status: 401, text }) if text == "Unauthorized"
        ));
    }

    #[tokio::test]
    async fn test_fetch_no_connection() {
        assert!(matches!(
            rest(MockSendRequest::new())
                .get("/data/manifest.json".to_string())
                .await,
            Err(StorageError::NoConnection)
        ));
    }
}
