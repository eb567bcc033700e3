//! REST API Wrappers
//!
//! Frontend bindings to the server's JSON endpoints, organized by domain.

mod skill;
mod theme;

use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::AppConfig;
use crate::error::ApiError;

pub use skill::*;
pub use theme::*;

/// Cookie set by the server for session-authenticated writes
const CSRF_COOKIE: &str = "csrftoken";

/// HTTP client for the CV builder API
#[derive(Debug, Clone, PartialEq)]
pub struct HttpApi {
    config: AppConfig,
}

impl HttpApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }
}

/// Send a request and fail on anything outside the OK range
async fn send(method: &str, url: &str, body: Option<String>) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::SameOrigin);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(ApiError::network)?;
    let headers = request.headers();
    headers.set("Content-Type", "application/json").map_err(ApiError::network)?;
    headers.set("Accept", "application/json").map_err(ApiError::network)?;
    if let Some(token) = csrf_token() {
        headers.set("X-CSRFToken", &token).map_err(ApiError::network)?;
    }

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::network)?;
    let response: Response = value.dyn_into().map_err(ApiError::network)?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(ApiError::decode)?;
    let value = JsFuture::from(promise).await.map_err(ApiError::decode)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn to_body<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))
}

fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    cookie_value(&cookies, CSRF_COOKIE)
}

/// Look up a cookie in a `document.cookie` string
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "sessionid=abc; csrftoken=Xy%2BZ; theme=nord";
        assert_eq!(cookie_value(cookies, "csrftoken"), Some("Xy+Z".to_string()));
        assert_eq!(cookie_value(cookies, "theme"), Some("nord".to_string()));
        assert_eq!(cookie_value(cookies, "missing"), None);
        assert_eq!(cookie_value("csrftoken=", "csrftoken"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }

    #[test]
    fn test_http_api_urls() {
        let api = HttpApi::new(AppConfig::default());
        assert_eq!(api.url("skills/"), "/api/skills/");
        assert_eq!(api.url(&skill::skill_path(12)), "/api/skills/12/");
    }
}
