//! Client Configuration
//!
//! Where the `items` resource lives. Injected into the UI rather than
//! baked into each request.

use thiserror::Error;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
}

impl ClientConfig {
    /// Parse and normalize a base url (always ends with `/`)
    pub fn new(base: &str) -> Result<Self, ConfigError> {
        let mut base_url = Url::parse(base.trim()).map_err(|source| ConfigError::InvalidUrl {
            input: base.to_string(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(base_url.scheme().to_string()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    /// Base url from the `CART_API_BASE` build environment, or the default
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("CART_API_BASE").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/items`
    pub fn items_url(&self) -> Url {
        self.join("items")
    }

    /// `{base}/items/{id}`
    pub fn item_url(&self, id: u32) -> Url {
        self.join(&format!("items/{}", id))
    }

    fn join(&self, path: &str) -> Url {
        self.base_url
            .join(path)
            .expect("base url ends with '/' and path is a relative ascii segment")
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
        }
    }
}
