use std::time::Duration;

use reqwest::Client;

use crate::{Error, Result};

pub const DEFAULT_API_BASE: &str = "https://repository.library.brown.edu/api";
pub const DEFAULT_IMAGE_BASE: &str = "https://repository.library.brown.edu/iiif/image";
/// IIIF size parameter: fit the page into an 800x800 box, keeping the aspect ratio.
pub const DEFAULT_IMAGE_SIZE: &str = "!800,800";

/// Where to fetch from and how.
#[derive(Debug, Clone)]
pub struct Config {
    /// Item API root, `{api_base}/items/{pid}/` is requested.
    pub api_base: String,
    /// IIIF image service root.
    pub image_base: String,
    pub image_size: String,
    /// `None` leaves the HTTP client's defaults in place.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
            timeout: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    pub fn item_url(&self, pid: &str) -> String {
        format!("{}/items/{}/", self.api_base.trim_end_matches('/'), pid)
    }

    pub fn image_url(&self, pid: &str) -> String {
        format!(
            "{}/{}/full/{}/0/default.jpg",
            self.image_base.trim_end_matches('/'),
            pid,
            self.image_size
        )
    }

    /// Builds the one `Client` shared by every request of a run.
    pub fn build_client(&self) -> Result<Client> {
        let mut builder = Client::builder().user_agent(self.user_agent.as_str());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(Error::Reqwest)
    }
}
