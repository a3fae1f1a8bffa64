//! Upstream record shapes as returned by TheMealDB.
//!
//! The API stores ingredients as `strIngredient1`..`strIngredient20` and
//! measures as `strMeasure1`..`strMeasure20`. They are collected into
//! fixed-size slot arrays at deserialization time so nothing downstream
//! looks fields up by name.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of ingredient/measure slots in an upstream record
pub const INGREDIENT_SLOTS: usize = 20;

/// Full recipe record as delivered by the lookup, random and search endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct RawRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub instructions: Option<String>,
    pub area: Option<String>,
    pub category: Option<String>,
    /// Comma separated free text, e.g. `"Meat,Casserole"`
    pub tags: Option<String>,
    /// Slot `n` (1-based upstream) lives at index `n - 1`
    pub ingredients: [Option<String>; INGREDIENT_SLOTS],
    pub measures: [Option<String>; INGREDIENT_SLOTS],
}

impl RawRecord {
    /// Ingredient and measure for a 1-based slot number
    pub fn slot(&self, n: usize) -> (Option<&str>, Option<&str>) {
        match n.checked_sub(1) {
            Some(i) if i < INGREDIENT_SLOTS => {
                (self.ingredients[i].as_deref(), self.measures[i].as_deref())
            }
            _ => (None, None),
        }
    }

    /// Set a 1-based slot; numbers outside `1..=20` are ignored
    pub fn set_slot(&mut self, n: usize, ingredient: Option<&str>, measure: Option<&str>) {
        if let Some(i) = n.checked_sub(1).filter(|i| *i < INGREDIENT_SLOTS) {
            self.ingredients[i] = ingredient.map(str::to_string);
            self.measures[i] = measure.map(str::to_string);
        }
    }
}

/// Parse the slot number out of keys like `strIngredient7`
fn slot_index(key: &str, prefix: &str) -> Option<usize> {
    let n: usize = key.strip_prefix(prefix)?.parse().ok()?;
    (1..=INGREDIENT_SLOTS).contains(&n).then(|| n - 1)
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        let mut record = RawRecord::default();

        for (key, value) in fields {
            // Non-string values (null, numbers) count as absent
            let Value::String(text) = value else {
                continue;
            };

            match key.as_str() {
                "idMeal" => record.id = Some(text),
                "strMeal" => record.title = Some(text),
                "strMealThumb" => record.image = Some(text),
                "strInstructions" => record.instructions = Some(text),
                "strArea" => record.area = Some(text),
                "strCategory" => record.category = Some(text),
                "strTags" => record.tags = Some(text),
                other => {
                    if let Some(i) = slot_index(other, "strIngredient") {
                        record.ingredients[i] = Some(text);
                    } else if let Some(i) = slot_index(other, "strMeasure") {
                        record.measures[i] = Some(text);
                    }
                }
            }
        }

        record
    }
}

/// Partial record returned by the ingredient filter endpoint.
///
/// Decoded field by field like [`RawRecord`], so an entry with a missing or
/// non-string id still parses and is skipped later instead of failing the
/// whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: Option<String>,
    #[serde(rename = "strMeal")]
    pub title: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub image: Option<String>,
}

impl From<Map<String, Value>> for MealSummary {
    fn from(fields: Map<String, Value>) -> Self {
        let text = |key: &str| match fields.get(key) {
            Some(Value::String(text)) => Some(text.clone()),
            _ => None,
        };

        MealSummary {
            id: text("idMeal"),
            title: text("strMeal"),
            image: text("strMealThumb"),
        }
    }
}

/// Envelope shared by every TheMealDB endpoint; `meals` is `null` on no match
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    pub fn into_meals(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}
