//! Cuisine and dietary tagging.
//!
//! Dietary tags are derived from the absence of keywords in the ingredient
//! text. Matching is plain substring matching over lower-cased text, so
//! "buttermilk" trips both the `milk` and `butter` keywords. This is a
//! heuristic, not an allergen check.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::model::{CuisineType, DietaryPreference, Recipe};
use crate::normalize::normalize;
use crate::raw::RawRecord;

const MEAT_KEYWORDS: &[&str] = &[
    "meat", "chicken", "beef", "pork", "fish", "seafood", "lamb", "bacon", "prawn", "shrimp",
];

// Overlaps MEAT_KEYWORDS on purpose; kept as observed upstream
const ANIMAL_PRODUCT_KEYWORDS: &[&str] = &[
    "meat", "milk", "cheese", "cream", "yogurt", "butter", "egg", "honey", "chicken", "beef",
    "pork", "fish",
];

const GLUTEN_KEYWORDS: &[&str] = &[
    "flour", "bread", "pasta", "wheat", "rye", "barley", "couscous",
];

const DAIRY_KEYWORDS: &[&str] = &["milk", "cheese", "butter", "cream", "yogurt"];

const TAG_KEYWORDS: &[(&str, DietaryPreference)] = &[
    ("keto", DietaryPreference::Keto),
    ("paleo", DietaryPreference::Paleo),
    ("low carb", DietaryPreference::LowCarb),
];

/// Normalize and classify in one step
pub fn prepare(raw: &RawRecord) -> Result<Recipe> {
    let recipe = normalize(raw)?;
    Ok(classify(recipe, raw))
}

/// Populate `cuisine_type` and `dietary_preferences` of a normalized recipe
pub fn classify(mut recipe: Recipe, raw: &RawRecord) -> Recipe {
    recipe.cuisine_type = Some(cuisine_for_area(raw.area.as_deref()));
    recipe.dietary_preferences = dietary_preferences(&recipe.ingredients, raw.tags.as_deref());
    recipe
}

/// Map an upstream area string onto a cuisine tag
pub fn cuisine_for_area(area: Option<&str>) -> CuisineType {
    match area {
        Some("Italian") => CuisineType::Italian,
        Some("Mexican") => CuisineType::Mexican,
        Some("Chinese") => CuisineType::Chinese,
        Some("Indian") => CuisineType::Indian,
        Some("Japanese") => CuisineType::Japanese,
        Some("Thai") => CuisineType::Thai,
        Some("French") => CuisineType::French,
        Some("American") => CuisineType::American,
        Some("Greek" | "Lebanese" | "Moroccan" | "Turkish") => CuisineType::Mediterranean,
        _ => CuisineType::Other,
    }
}

pub fn dietary_preferences<S: AsRef<str>>(
    ingredients: &[S],
    tags: Option<&str>,
) -> BTreeSet<DietaryPreference> {
    let haystack = ingredients
        .iter()
        .map(|i| i.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    let mentions_any = |keywords: &[&str]| keywords.iter().any(|k| haystack.contains(k));

    let mut prefs = BTreeSet::new();

    if !mentions_any(MEAT_KEYWORDS) {
        prefs.insert(DietaryPreference::Vegetarian);

        if !mentions_any(ANIMAL_PRODUCT_KEYWORDS) {
            prefs.insert(DietaryPreference::Vegan);
        }
    }

    if !mentions_any(GLUTEN_KEYWORDS) {
        prefs.insert(DietaryPreference::GlutenFree);
    }

    if !mentions_any(DAIRY_KEYWORDS) {
        prefs.insert(DietaryPreference::DairyFree);
    }

    if let Some(tags) = tags {
        let tags = tags.to_lowercase();
        for (keyword, pref) in TAG_KEYWORDS {
            if tags.contains(keyword) {
                prefs.insert(*pref);
            }
        }
    }

    prefs
}

#[cfg(test)]
mod tests {
    use super::*;
    use DietaryPreference::*;

    fn prefs(ingredients: &[&str]) -> BTreeSet<DietaryPreference> {
        dietary_preferences(ingredients, None)
    }

    #[test]
    fn test_area_mapping() {
        assert_eq!(cuisine_for_area(Some("Greek")), CuisineType::Mediterranean);
        assert_eq!(cuisine_for_area(Some("Moroccan")), CuisineType::Mediterranean);
        assert_eq!(cuisine_for_area(Some("Turkish")), CuisineType::Mediterranean);
        assert_eq!(cuisine_for_area(Some("Lebanese")), CuisineType::Mediterranean);
        assert_eq!(cuisine_for_area(Some("Italian")), CuisineType::Italian);
        assert_eq!(cuisine_for_area(Some("American")), CuisineType::American);
        assert_eq!(cuisine_for_area(Some("British")), CuisineType::Other);
        assert_eq!(cuisine_for_area(Some("italian")), CuisineType::Other);
        assert_eq!(cuisine_for_area(None), CuisineType::Other);
    }

    #[test]
    fn test_plain_vegetables_get_every_absence_tag() {
        assert_eq!(
            prefs(&["2 Carrots", "1 Onion", "Salt"]),
            [Vegetarian, Vegan, GlutenFree, DairyFree].into_iter().collect()
        );
    }

    #[test]
    fn test_butter_blocks_dairy_free_and_vegan_only() {
        let tags = prefs(&["2 tbsp Butter", "1 Potato"]);
        assert!(tags.contains(&Vegetarian));
        assert!(!tags.contains(&Vegan));
        assert!(!tags.contains(&DairyFree));
        assert!(tags.contains(&GlutenFree));
    }

    #[test]
    fn test_meat_blocks_vegetarian_and_vegan() {
        let tags = prefs(&["500g Lamb Mince", "1 Onion"]);
        assert!(!tags.contains(&Vegetarian));
        assert!(!tags.contains(&Vegan));
        assert!(tags.contains(&DairyFree));
    }

    #[test]
    fn test_substring_matching_is_not_whole_word() {
        // "buttermilk" contains both "butter" and "milk"
        let tags = prefs(&["1 cup Buttermilk"]);
        assert!(!tags.contains(&DairyFree));

        // "eggplant" contains "egg"
        let tags = prefs(&["1 Eggplant"]);
        assert!(tags.contains(&Vegetarian));
        assert!(!tags.contains(&Vegan));

        // "shellfish" contains "fish"
        assert!(!prefs(&["Shellfish stock"]).contains(&Vegetarian));
    }

    #[test]
    fn test_gluten_keywords() {
        assert!(!prefs(&["200g Pasta"]).contains(&GlutenFree));
        assert!(!prefs(&["Plain Flour"]).contains(&GlutenFree));
        assert!(!prefs(&["Couscous"]).contains(&GlutenFree));
        assert!(prefs(&["Rice"]).contains(&GlutenFree));
    }

    #[test]
    fn test_vegan_implies_vegetarian() {
        let cases: &[&[&str]] = &[
            &["Tofu", "Soy Sauce"],
            &["Egg", "Rice"],
            &["Chicken", "Rice"],
            &["Honey", "Oats"],
            &["Prawns"],
            &[],
        ];

        for ingredients in cases {
            let tags = prefs(ingredients);
            if tags.contains(&Vegan) {
                assert!(tags.contains(&Vegetarian), "{:?}", ingredients);
            }
        }
    }

    #[test]
    fn test_upstream_tags() {
        let tags = dietary_preferences(&["Beef"], Some("Keto,Paleo,Low Carb"));
        assert!(tags.contains(&Keto));
        assert!(tags.contains(&Paleo));
        assert!(tags.contains(&LowCarb));

        let tags = dietary_preferences(&["Beef"], Some("LowCarb,Meat"));
        assert!(!tags.contains(&LowCarb));
        assert!(!tags.contains(&Keto));
        assert!(!tags.contains(&NutFree));
    }

    #[test]
    fn test_prepare_populates_tags() {
        let mut raw = RawRecord {
            id: Some("53000".to_string()),
            title: Some("Spanakopita".to_string()),
            area: Some("Greek".to_string()),
            ..Default::default()
        };
        raw.set_slot(1, Some("Spinach"), Some("500g"));
        raw.set_slot(2, Some("Feta Cheese"), Some("200g"));
        raw.set_slot(3, Some("Filo Pastry"), Some("1 pack"));

        let recipe = prepare(&raw).unwrap();

        assert_eq!(recipe.cuisine_type, Some(CuisineType::Mediterranean));
        assert_eq!(
            recipe.dietary_preferences,
            [Vegetarian, GlutenFree].into_iter().collect()
        );
    }
}
