use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::Recipe;

/// Caller-owned filter selection.
///
/// Tags are plain strings so a selection outside the known enumeration is
/// representable; such a tag simply never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub cuisine: Option<String>,
    #[serde(default)]
    pub dietary: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_dietary(mut self, tag: impl Into<String>) -> Self {
        self.dietary.insert(tag.into());
        self
    }

    /// No cuisine selected and no dietary tags
    pub fn is_empty(&self) -> bool {
        self.active_cuisine().is_none() && self.dietary.is_empty()
    }

    fn active_cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref().filter(|c| !c.is_empty())
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        matches_filters(recipe, self.active_cuisine(), &self.dietary)
    }

    pub fn apply(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        apply_filters(recipes, self.cuisine.as_deref(), &self.dietary)
    }
}

/// Keep recipes matching `cuisine` exactly and carrying every `dietary` tag.
///
/// An absent or empty cuisine and no dietary tags leaves the input as is.
pub fn apply_filters<'a, I, S>(
    recipes: &[Recipe],
    cuisine: Option<&str>,
    dietary: I,
) -> Vec<Recipe>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    let cuisine = cuisine.filter(|c| !c.is_empty());
    let dietary: Vec<&str> = dietary.into_iter().map(|tag| tag.as_ref()).collect();

    if cuisine.is_none() && dietary.is_empty() {
        return recipes.to_vec();
    }

    recipes
        .iter()
        .filter(|recipe| matches_filters(recipe, cuisine, &dietary))
        .cloned()
        .collect()
}

fn matches_filters<'a, I, S>(recipe: &Recipe, cuisine: Option<&str>, dietary: I) -> bool
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    if let Some(cuisine) = cuisine {
        if recipe.cuisine_tag() != Some(cuisine) {
            return false;
        }
    }

    dietary
        .into_iter()
        .all(|tag| recipe.has_preference(tag.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CuisineType, DietaryPreference};

    fn recipe(id: &str, cuisine: CuisineType, prefs: &[DietaryPreference]) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Recipe {}", id),
            image: String::new(),
            ingredients: Vec::new(),
            instructions: None,
            cuisine_type: Some(cuisine),
            dietary_preferences: prefs.iter().copied().collect(),
        }
    }

    fn sample() -> Vec<Recipe> {
        use DietaryPreference::*;
        vec![
            recipe("1", CuisineType::Italian, &[Vegetarian, Vegan, DairyFree]),
            recipe("2", CuisineType::Italian, &[Vegetarian]),
            recipe("3", CuisineType::Mexican, &[Vegetarian, Vegan, GlutenFree]),
            recipe("4", CuisineType::Other, &[GlutenFree, DairyFree]),
        ]
    }

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_no_filters_returns_input() {
        let recipes = sample();
        let none: [&str; 0] = [];
        assert_eq!(apply_filters(&recipes, None, none.iter()), recipes);
        assert_eq!(apply_filters(&recipes, Some(""), none.iter()), recipes);
        assert_eq!(FilterState::new().apply(&recipes), recipes);
        assert!(FilterState::new().with_cuisine("").is_empty());
    }

    #[test]
    fn test_cuisine_and_dietary_combined() {
        let recipes = sample();
        let filtered = apply_filters(&recipes, Some("Italian"), ["Vegan"].iter());
        assert_eq!(ids(&filtered), vec!["1"]);
    }

    #[test]
    fn test_dietary_is_all_of() {
        let recipes = sample();
        let state = FilterState::new()
            .with_dietary("Vegetarian")
            .with_dietary("Gluten-Free");
        assert_eq!(ids(&state.apply(&recipes)), vec!["3"]);

        let state = FilterState::new().with_dietary("Vegetarian");
        assert_eq!(ids(&state.apply(&recipes)), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_cuisine_match_is_exact() {
        let recipes = sample();
        let none: [&str; 0] = [];
        assert!(apply_filters(&recipes, Some("italian"), none.iter()).is_empty());
        assert_eq!(
            ids(&apply_filters(&recipes, Some("Other"), none.iter())),
            vec!["4"]
        );
    }

    #[test]
    fn test_unknown_tags_match_nothing() {
        let recipes = sample();
        assert!(FilterState::new().with_cuisine("Klingon").apply(&recipes).is_empty());
        assert!(FilterState::new().with_dietary("Carnivore").apply(&recipes).is_empty());
    }

    #[test]
    fn test_recipe_without_cuisine_fails_cuisine_filter() {
        let mut untagged = recipe("5", CuisineType::Other, &[]);
        untagged.cuisine_type = None;

        let state = FilterState::new().with_cuisine("Other");
        assert!(!state.matches(&untagged));
        assert!(FilterState::new().matches(&untagged));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let recipes = sample();
        let state = FilterState::new().with_cuisine("Italian").with_dietary("Vegetarian");

        let once = state.apply(&recipes);
        let twice = state.apply(&once);
        assert_eq!(once, twice);
        assert_eq!(ids(&once), vec!["1", "2"]);
    }
}
