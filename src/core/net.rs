// src/core/net.rs

// Blocking HTTP GET of one JSON report

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::consts::USER_AGENT;
use crate::config::options::FetchOptions;
use crate::error::{ConfigError, FetchError};
use crate::extract::Report;

pub type FetchOutcome = Result<Report, FetchError>;

/// Anything that can turn a report URL into a parsed report.
pub trait ReportSource {
    fn fetch(&self, url: &str) -> FetchOutcome;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(opts: &FetchOptions) -> Result<Self, ConfigError> {
        // reqwest's blocking client defaults to 30s; only time out when asked to
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(opts.timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl ReportSource for HttpSource {
    fn fetch(&self, url: &str) -> FetchOutcome {
        let transport = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }
        let body = resp.bytes().map_err(transport)?;
        parse_report(url, &body)
    }
}

/// Body must be a JSON object; anything else is a decode failure.
pub fn parse_report(url: &str, body: &[u8]) -> FetchOutcome {
    let decode = |message: String| FetchError::Decode { url: url.to_string(), message };

    match serde_json::from_slice::<Value>(body).map_err(|e| decode(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(decode(format!("expected a JSON object, found {}", json_kind(&other)))),
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
