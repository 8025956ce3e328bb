// SPDX-License-Identifier: MPL-2.0
//! Style catalog providers.
//!
//! `StyleSource` is an enum over concrete providers. The bundled source
//! serves a fixed list after a simulated network delay; the HTTP source
//! performs the real fetch against a configured endpoint. Enum dispatch
//! keeps callers free of trait-object machinery, and sources are cheap to
//! clone.

use super::StyleOption;
use crate::app::config::defaults::BUNDLED_STYLES_DELAY_MS;
use crate::error::{Error, Result};
use std::time::Duration;
use tracing::{debug, error};

/// Extra styles served by the bundled source.
pub fn bundled_extra_styles() -> Vec<StyleOption> {
    [
        "Pop Art",
        "Surrealism",
        "Minimalist",
        "Art Deco",
        "Baroque",
        "Cubism",
        "Gothic",
        "Futurism",
        "Abstract Expressionism",
    ]
    .into_iter()
    .map(StyleOption::unillustrated)
    .collect()
}

/// Where additional styles come from.
#[derive(Debug, Clone)]
pub enum StyleSource {
    /// Fixed list behind a simulated delay; used when no endpoint is
    /// configured.
    Bundled,
    /// JSON endpoint returning an array of style options.
    Http {
        client: reqwest::Client,
        endpoint: String,
    },
}

impl StyleSource {
    /// Builds the source matching the configuration: an endpoint selects the
    /// HTTP provider, absence selects the bundled one.
    pub fn from_config(client: reqwest::Client, endpoint: Option<String>) -> Self {
        match endpoint {
            Some(endpoint) => StyleSource::Http { client, endpoint },
            None => StyleSource::Bundled,
        }
    }

    /// Fetches the additional style options.
    ///
    /// One round-trip only; the one-shot policy lives in the catalog, not
    /// here.
    pub async fn fetch_extra(&self) -> Result<Vec<StyleOption>> {
        match self {
            StyleSource::Bundled => {
                tokio::time::sleep(Duration::from_millis(BUNDLED_STYLES_DELAY_MS)).await;
                Ok(bundled_extra_styles())
            }
            StyleSource::Http { client, endpoint } => {
                debug!(%endpoint, "fetching extra styles");
                let response = client.get(endpoint).send().await.map_err(|e| {
                    error!(%endpoint, error = %e, "style fetch failed (transport)");
                    Error::Network(e.to_string())
                })?;

                let status = response.status();
                if !status.is_success() {
                    error!(%endpoint, %status, "style fetch returned HTTP error");
                    return Err(Error::Network(format!("HTTP {status}")));
                }

                let styles = response.json::<Vec<StyleOption>>().await.map_err(|e| {
                    error!(error = %e, "failed to deserialize style list");
                    Error::Network(format!("failed to parse style list: {e}"))
                })?;

                debug!(count = styles.len(), "received extra styles");
                Ok(styles)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_extras_are_nine_unique_names() {
        let extras = bundled_extra_styles();
        assert_eq!(extras.len(), 9);
        let mut names: Vec<_> = extras.iter().map(|s| s.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn from_config_selects_provider() {
        let client = reqwest::Client::new();
        assert!(matches!(
            StyleSource::from_config(client.clone(), None),
            StyleSource::Bundled
        ));
        assert!(matches!(
            StyleSource::from_config(client, Some("https://styles.example".into())),
            StyleSource::Http { .. }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn bundled_fetch_returns_extras_after_delay() {
        let source = StyleSource::Bundled;
        let styles = source.fetch_extra().await.expect("fetch");
        assert_eq!(styles.len(), 9);
        assert!(styles.iter().any(|s| s.name == "Pop Art"));
    }

    #[tokio::test]
    async fn http_fetch_reports_transport_failure() {
        // Port 9 (discard) refuses connections; the provider must map the
        // transport error into the network variant, not panic.
        let source = StyleSource::Http {
            client: reqwest::Client::new(),
            endpoint: "http://127.0.0.1:9/styles".into(),
        };
        match source.fetch_extra().await {
            Err(Error::Network(_)) => {}
            other => panic!("expected network error, got {other:?}"),
        }
    }
}
