use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use serde::Serialize;

/// Thin wrapper over `gloo_net` for calls to third-party HTTP APIs.
pub struct Api;

pub struct RequestWrapper {
    request: Request,
    url: String,
    method: &'static str,
}

/// Status and body of a finished request, read eagerly so callers can log it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl RequestWrapper {
    fn new(url: &str, method: &'static str) -> Self {
        let request = match method {
            "POST" => Request::post(url),
            "PUT" => Request::put(url),
            _ => Request::get(url),
        };

        Self {
            request,
            url: url.to_string(),
            method,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body);
        Ok(self)
    }

    pub async fn send(self) -> Result<ApiResponse, GlooError> {
        log::debug!("{} {}", self.method, self.url);
        let response: Response = self.request.send().await?;
        let status = response.status();
        // a body we can't read shouldn't hide the status
        let body = response.text().await.unwrap_or_default();
        if !(200..300).contains(&status) {
            log::warn!("{} {} returned {}: {}", self.method, self.url, status, body);
        }
        Ok(ApiResponse { status, body })
    }
}

impl Api {
    pub fn post(url: &str) -> RequestWrapper {
        RequestWrapper::new(url, "POST")
    }
}
