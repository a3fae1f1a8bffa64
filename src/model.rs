use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A normalized, classified recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image: String,
    /// `"<measure> <ingredient>"` or bare `"<ingredient>"`, in source order
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<CuisineType>,
    #[serde(default)]
    pub dietary_preferences: BTreeSet<DietaryPreference>,
}

impl Recipe {
    /// Cuisine tag as it is matched by the filter engine
    pub fn cuisine_tag(&self) -> Option<&'static str> {
        self.cuisine_type.map(CuisineType::as_str)
    }

    pub fn has_preference(&self, tag: &str) -> bool {
        self.dietary_preferences.iter().any(|p| p.as_str() == tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CuisineType {
    Italian,
    Mexican,
    Chinese,
    Indian,
    Japanese,
    Thai,
    Mediterranean,
    American,
    French,
    Other,
}

impl CuisineType {
    pub const ALL: [CuisineType; 10] = [
        CuisineType::Italian,
        CuisineType::Mexican,
        CuisineType::Chinese,
        CuisineType::Indian,
        CuisineType::Japanese,
        CuisineType::Thai,
        CuisineType::Mediterranean,
        CuisineType::American,
        CuisineType::French,
        CuisineType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CuisineType::Italian => "Italian",
            CuisineType::Mexican => "Mexican",
            CuisineType::Chinese => "Chinese",
            CuisineType::Indian => "Indian",
            CuisineType::Japanese => "Japanese",
            CuisineType::Thai => "Thai",
            CuisineType::Mediterranean => "Mediterranean",
            CuisineType::American => "American",
            CuisineType::French => "French",
            CuisineType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DietaryPreference {
    Vegetarian,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    #[serde(rename = "Dairy-Free")]
    DairyFree,
    #[serde(rename = "Low-Carb")]
    LowCarb,
    Keto,
    Paleo,
    #[serde(rename = "Nut-Free")]
    NutFree,
}

impl DietaryPreference {
    pub const ALL: [DietaryPreference; 8] = [
        DietaryPreference::Vegetarian,
        DietaryPreference::Vegan,
        DietaryPreference::GlutenFree,
        DietaryPreference::DairyFree,
        DietaryPreference::LowCarb,
        DietaryPreference::Keto,
        DietaryPreference::Paleo,
        DietaryPreference::NutFree,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::Vegan => "Vegan",
            DietaryPreference::GlutenFree => "Gluten-Free",
            DietaryPreference::DairyFree => "Dairy-Free",
            DietaryPreference::LowCarb => "Low-Carb",
            DietaryPreference::Keto => "Keto",
            DietaryPreference::Paleo => "Paleo",
            DietaryPreference::NutFree => "Nut-Free",
        }
    }
}

/// Error returned when a string is not one of the fixed tag spellings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tag '{}'", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for CuisineType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CuisineType::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

impl FromStr for DietaryPreference {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietaryPreference::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

impl fmt::Display for CuisineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
