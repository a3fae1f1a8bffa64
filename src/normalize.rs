use crate::error::{FinderError, Result};
use crate::model::Recipe;
use crate::raw::{RawRecord, INGREDIENT_SLOTS};

/// Convert an upstream record into a [`Recipe`] without any classification.
///
/// Fails with [`FinderError::MalformedRecord`] when `id` or `title` is missing
/// or blank. A missing image becomes an empty string.
pub fn normalize(raw: &RawRecord) -> Result<Recipe> {
    let id = required(raw.id.as_deref(), "id")?;
    let title = required(raw.title.as_deref(), "title")?;

    Ok(Recipe {
        id: id.to_string(),
        title: title.to_string(),
        image: raw.image.clone().unwrap_or_default(),
        ingredients: extract_ingredients(raw),
        instructions: raw.instructions.clone(),
        cuisine_type: None,
        dietary_preferences: Default::default(),
    })
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(FinderError::MalformedRecord(format!(
            "missing required field '{}'",
            field
        ))),
    }
}

/// Join each slot's measure and ingredient, skipping empty slots
pub fn extract_ingredients(raw: &RawRecord) -> Vec<String> {
    let mut ingredients = Vec::new();

    for n in 1..=INGREDIENT_SLOTS {
        let (ingredient, measure) = raw.slot(n);
        let ingredient = ingredient.map(str::trim).unwrap_or_default();
        let measure = measure.map(str::trim).unwrap_or_default();

        if ingredient.is_empty() {
            continue;
        }

        if measure.is_empty() {
            ingredients.push(ingredient.to_string());
        } else {
            ingredients.push(format!("{} {}", measure, ingredient));
        }
    }

    ingredients
}
