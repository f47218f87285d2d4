use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Url;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// How create and update bodies are put on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Json,
    Form,
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Encoding::Json),
            "form" | "urlencoded" => Ok(Encoding::Form),
            other => Err(format!("unknown encoding {:?} (expected json or form)", other)),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Json => write!(f, "json"),
            Encoding::Form => write!(f, "form"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: Url,
    pub encoding: Encoding,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Config {
            base_url: parse_base_url(base_url)?,
            encoding: Encoding::default(),
            timeout: None,
        })
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

// Url::join drops the last path segment unless it ends in '/', which would
// lose a prefix like "/api".
fn parse_base_url(input: &str) -> Result<Url> {
    let mut url = Url::parse(input).map_err(|e| Error::Url {
        input: input.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(Error::Url {
            input: input.to_string(),
            reason: "not a base url".to_string(),
        });
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
