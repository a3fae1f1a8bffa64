pub mod aggregate;
pub mod builder;
pub mod classify;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod raw;
pub mod source;

pub use aggregate::{random_recipes, search, search_by_name};
pub use builder::{RecipeFinder, RecipeSearchBuilder};
pub use classify::{classify, prepare};
pub use config::FinderConfig;
pub use error::FinderError;
pub use favorites::{FavoritesStore, InMemoryFavorites};
pub use filter::{apply_filters, FilterState};
pub use model::{CuisineType, DietaryPreference, Recipe};
pub use normalize::normalize;
pub use raw::{MealSummary, RawRecord};
pub use source::{MealDbSource, RecipeSource};

/// Search TheMealDB for recipes using any of `ingredients`
///
/// Uses configuration from `recipe-finder.toml` and `RECIPE_FINDER__*`
/// environment variables.
pub async fn search_ingredients<S: AsRef<str>>(
    ingredients: &[S],
) -> Result<Vec<Recipe>, FinderError> {
    let config = FinderConfig::load()?;
    let source = MealDbSource::new(&config)?;
    Ok(search(&source, ingredients).await)
}
