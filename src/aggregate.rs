//! Fan-out search across single-ingredient lookups.
//!
//! Every aggregation round launches its lookups concurrently and joins them
//! with `join_all`, which yields results in launch order. Merging therefore
//! depends only on term order and per-term result order, never on which
//! request finished first.

use std::collections::HashSet;

use futures_util::future::join_all;
use log::{debug, info, warn};

use crate::classify::prepare;
use crate::model::Recipe;
use crate::raw::{MealSummary, RawRecord};
use crate::source::RecipeSource;

/// Search recipes using any of `ingredients`.
///
/// One ingredient lookup is issued per distinct term and one detail lookup per
/// returned summary. Failed lookups, unknown ids and malformed records are
/// dropped. The merged list keeps the first occurrence of each id, ordered by
/// term first and by upstream result order second. An empty term list yields
/// an empty result.
pub async fn search<S: AsRef<str>>(source: &dyn RecipeSource, ingredients: &[S]) -> Vec<Recipe> {
    let terms = distinct_terms(ingredients);
    debug!(
        "Searching {} for {} ingredient(s): {:?}",
        source.source_name(),
        terms.len(),
        terms
    );

    let per_term = join_all(terms.iter().map(|term| recipes_for_term(source, term))).await;

    let recipes = dedup_by_id(per_term.into_iter().flatten());
    info!(
        "Found {} unique recipe(s) for {} ingredient(s)",
        recipes.len(),
        terms.len()
    );
    recipes
}

/// Fetch `count` random recipes concurrently, dropping failures and repeats
pub async fn random_recipes(source: &dyn RecipeSource, count: usize) -> Vec<Recipe> {
    let fetches = (0..count).map(|_| async move {
        match source.fetch_random().await {
            Ok(record) => record,
            Err(e) => {
                warn!("Random recipe fetch from {} failed: {}", source.source_name(), e);
                None
            }
        }
    });

    let records = join_all(fetches).await;
    let recipes = dedup_by_id(records.iter().flatten().filter_map(prepare_or_skip));
    debug!("Loaded {} of {} random recipe(s)", recipes.len(), count);
    recipes
}

/// Search recipes by name; a failed lookup yields an empty list
pub async fn search_by_name(source: &dyn RecipeSource, query: &str) -> Vec<Recipe> {
    match source.search_by_name(query).await {
        Ok(records) => dedup_by_id(records.iter().filter_map(prepare_or_skip)),
        Err(e) => {
            warn!("Name search for '{}' failed: {}", query, e);
            Vec::new()
        }
    }
}

async fn recipes_for_term(source: &dyn RecipeSource, term: &str) -> Vec<Recipe> {
    let summaries = match source.fetch_by_ingredient(term).await {
        Ok(summaries) => summaries,
        Err(e) => {
            warn!("Ingredient lookup for '{}' failed: {}", term, e);
            return Vec::new();
        }
    };
    debug!("'{}' matched {} recipe(s)", term, summaries.len());

    let details = join_all(summaries.iter().map(|summary| resolve(source, summary))).await;
    details.iter().flatten().filter_map(prepare_or_skip).collect()
}

async fn resolve(source: &dyn RecipeSource, summary: &MealSummary) -> Option<RawRecord> {
    let Some(id) = summary.id.as_deref().filter(|id| !id.trim().is_empty()) else {
        warn!("Skipping summary without an id: {:?}", summary.title);
        return None;
    };

    match source.fetch_by_id(id).await {
        Ok(Some(record)) => Some(record),
        Ok(None) => {
            debug!("Recipe {} not found, skipping", id);
            None
        }
        Err(e) => {
            warn!("Lookup of recipe {} failed: {}", id, e);
            None
        }
    }
}

fn prepare_or_skip(record: &RawRecord) -> Option<Recipe> {
    match prepare(record) {
        Ok(recipe) => Some(recipe),
        Err(e) => {
            warn!("Skipping record {:?}: {}", record.id, e);
            None
        }
    }
}

/// Trimmed, non-empty terms in first-occurrence order
fn distinct_terms<S: AsRef<str>>(ingredients: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    ingredients
        .iter()
        .map(|term| term.as_ref().trim())
        .filter(|term| !term.is_empty() && seen.insert(term.to_string()))
        .map(str::to_string)
        .collect()
}

/// Keep the first recipe for every id, preserving order
pub fn dedup_by_id(recipes: impl IntoIterator<Item = Recipe>) -> Vec<Recipe> {
    let mut seen = HashSet::new();
    recipes
        .into_iter()
        .filter(|recipe| seen.insert(recipe.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, title: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            image: String::new(),
            ingredients: Vec::new(),
            instructions: None,
            cuisine_type: None,
            dietary_preferences: Default::default(),
        }
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let merged = dedup_by_id(vec![
            recipe("1", "first"),
            recipe("2", "second"),
            recipe("1", "duplicate"),
            recipe("3", "third"),
            recipe("2", "duplicate"),
        ]);

        let ids: Vec<_> = merged.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(merged[0].title, "first");
    }

    #[test]
    fn test_distinct_terms() {
        assert_eq!(
            distinct_terms(&["egg", " cheese ", "egg", "", "  ", "cheese"]),
            vec!["egg", "cheese"]
        );
        assert!(distinct_terms::<&str>(&[]).is_empty());
    }
}
