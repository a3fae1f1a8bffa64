use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::aggregate::{random_recipes, search};
use crate::config::FinderConfig;
use crate::filter::FilterState;
use crate::source::{MealDbSource, RecipeSource};
use crate::{FinderError, Recipe};

/// Builder for configuring and executing a recipe search
#[derive(Default)]
pub struct RecipeSearchBuilder {
    ingredients: Vec<String>,
    filters: FilterState,
    random_count: Option<usize>,
    source: Option<Arc<dyn RecipeSource>>,
    timeout: Option<Duration>,
}

impl RecipeSearchBuilder {
    /// Add one ingredient to search for
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .ingredient("egg")
    ///     .ingredient("cheese");
    /// ```
    pub fn ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    /// Add several ingredients to search for
    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients
            .extend(ingredients.into_iter().map(Into::into));
        self
    }

    /// Only keep recipes of this cuisine
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{CuisineType, RecipeFinder};
    ///
    /// let builder = RecipeFinder::builder()
    ///     .ingredient("tomato")
    ///     .cuisine(CuisineType::Italian);
    /// ```
    pub fn cuisine(mut self, cuisine: impl ToString) -> Self {
        self.filters.cuisine = Some(cuisine.to_string());
        self
    }

    /// Only keep recipes carrying this dietary tag; repeatable
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{DietaryPreference, RecipeFinder};
    ///
    /// let builder = RecipeFinder::builder()
    ///     .ingredient("rice")
    ///     .dietary(DietaryPreference::Vegan)
    ///     .dietary(DietaryPreference::GlutenFree);
    /// ```
    pub fn dietary(mut self, tag: impl ToString) -> Self {
        self.filters.dietary.insert(tag.to_string());
        self
    }

    /// Replace the whole filter selection
    pub fn filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    /// Number of random recipes to load when no ingredient is given
    pub fn random_count(mut self, count: usize) -> Self {
        self.random_count = Some(count);
        self
    }

    /// Use a custom recipe source instead of TheMealDB
    pub fn source(mut self, source: Arc<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Set a timeout for HTTP requests to the default source
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build and execute the search
    ///
    /// With ingredients, recipes using any of them are aggregated. Without,
    /// a set of random recipes is loaded instead. Either way the result is
    /// passed through the configured filters.
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - configuration cannot be loaded for the default source
    /// - the HTTP client cannot be built
    /// - no ingredient is given and the random count is zero
    ///
    /// Upstream failures never surface here; they only shrink the result.
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_finder::RecipeFinder;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipes = RecipeFinder::builder()
    ///     .ingredients(["egg", "cheese"])
    ///     .dietary("Vegetarian")
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Vec<Recipe>, FinderError> {
        let (source, configured_count) = match self.source {
            Some(source) => (source, None),
            None => {
                let config = FinderConfig::load()?;
                let source: Arc<dyn RecipeSource> =
                    Arc::new(default_source(&config, self.timeout)?);
                (source, Some(config.random_count))
            }
        };

        let has_terms = self.ingredients.iter().any(|i| !i.trim().is_empty());

        let recipes = if has_terms {
            search(source.as_ref(), &self.ingredients).await
        } else {
            let count = self
                .random_count
                .or(configured_count)
                .unwrap_or_else(|| FinderConfig::default().random_count);
            if count == 0 {
                return Err(FinderError::Builder(
                    "No ingredients given and random count is zero. Use .ingredient() or .random_count()"
                        .to_string(),
                ));
            }
            random_recipes(source.as_ref(), count).await
        };

        let filtered = self.filters.apply(&recipes);
        debug!(
            "{} of {} recipe(s) passed filters {:?}",
            filtered.len(),
            recipes.len(),
            self.filters
        );
        Ok(filtered)
    }
}

/// TheMealDB source from `config`; an explicit timeout is used as given
fn default_source(
    config: &FinderConfig,
    timeout: Option<Duration>,
) -> Result<MealDbSource, FinderError> {
    match timeout {
        Some(timeout) => MealDbSource::with_timeout(config, timeout),
        None => MealDbSource::new(config),
    }
}

/// Main entry point for the builder API
pub struct RecipeFinder;

impl RecipeFinder {
    /// Creates a new builder for searching recipes
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder();
    /// ```
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }
}
