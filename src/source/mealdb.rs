use crate::config::FinderConfig;
use crate::error::{FinderError, Result};
use crate::raw::{MealSummary, MealsEnvelope, RawRecord};
use crate::source::RecipeSource;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::sleep;

/// [`RecipeSource`] backed by the TheMealDB JSON API
pub struct MealDbSource {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
    retry_attempts: u32,
    retry_delay_ms: u64,
}

impl MealDbSource {
    /// Create a new source from configuration
    pub fn new(config: &FinderConfig) -> Result<Self> {
        Self::with_timeout(config, config.timeout_duration())
    }

    /// Create a new source from configuration with an exact request timeout
    pub fn with_timeout(config: &FinderConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-finder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(MealDbSource {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout: Some(timeout),
            retry_attempts: config.retry.attempts.max(1),
            retry_delay_ms: config.retry.delay_ms,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        MealDbSource {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
            retry_attempts: 1,
            retry_delay_ms: 0,
        }
    }

    /// Request timeout the HTTP client was built with, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Override the retry policy
    pub fn with_retry(mut self, attempts: u32, delay_ms: u64) -> Self {
        self.retry_attempts = attempts.max(1);
        self.retry_delay_ms = delay_ms;
        self
    }

    async fn get_meals<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut attempt = 1;

        loop {
            match self.try_get_meals(&url, query).await {
                Ok(meals) => return Ok(meals),
                Err(e) if e.is_transient() && attempt < self.retry_attempts => {
                    warn!(
                        "Request to {} failed (attempt {}/{}): {}",
                        url, attempt, self.retry_attempts, e
                    );
                    // Backoff grows with each attempt
                    let delay = backoff_delay(self.retry_delay_ms, attempt);
                    debug!("Waiting {:?} before retry", delay);
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_get_meals<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        debug!("GET {} {:?}", url, query);
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FinderError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let envelope: MealsEnvelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.into_meals())
    }
}

fn backoff_delay(delay_ms: u64, attempt: u32) -> Duration {
    Duration::from_millis(delay_ms.saturating_mul(u64::from(attempt)))
}

#[async_trait]
impl RecipeSource for MealDbSource {
    fn source_name(&self) -> &str {
        "themealdb"
    }

    async fn fetch_by_ingredient(&self, ingredient: &str) -> Result<Vec<MealSummary>> {
        self.get_meals("filter.php", &[("i", ingredient)]).await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<RawRecord>> {
        let meals: Vec<RawRecord> = self.get_meals("lookup.php", &[("i", id)]).await?;
        Ok(meals.into_iter().next())
    }

    async fn fetch_random(&self) -> Result<Option<RawRecord>> {
        let meals: Vec<RawRecord> = self.get_meals("random.php", &[]).await?;
        Ok(meals.into_iter().next())
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<RawRecord>> {
        self.get_meals("search.php", &[("s", query)]).await
    }
}
