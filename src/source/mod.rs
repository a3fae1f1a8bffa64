mod mealdb;

pub use mealdb::MealDbSource;

use async_trait::async_trait;

use crate::error::Result;
use crate::raw::{MealSummary, RawRecord};

/// Upstream recipe lookups the aggregation pipeline depends on
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name used in log messages
    fn source_name(&self) -> &str;

    /// Partial records for every recipe using `ingredient`
    async fn fetch_by_ingredient(&self, ingredient: &str) -> Result<Vec<MealSummary>>;

    /// Full record for one id, `None` when the id is unknown
    async fn fetch_by_id(&self, id: &str) -> Result<Option<RawRecord>>;

    /// One random full record
    async fn fetch_random(&self) -> Result<Option<RawRecord>>;

    /// Full records whose name matches `query`
    async fn search_by_name(&self, query: &str) -> Result<Vec<RawRecord>>;
}
