use crate::model::Recipe;

/// Injected store for the user's favorite recipes.
///
/// The pipeline never touches favorites itself; callers keep one of these next
/// to their search results and run it through the same filters.
pub trait FavoritesStore {
    /// All favorites in the order they were added
    fn favorites(&self) -> Vec<Recipe>;

    /// Add a recipe; adding an id that is already present is a no-op
    fn add(&mut self, recipe: Recipe);

    /// Remove the recipe with `id`, returning whether anything was removed
    fn remove(&mut self, id: &str) -> bool;

    fn is_favorite(&self, id: &str) -> bool {
        self.favorites().iter().any(|recipe| recipe.id == id)
    }
}

/// Process-local favorites list without persistence
#[derive(Debug, Clone, Default)]
pub struct InMemoryFavorites {
    recipes: Vec<Recipe>,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl From<Vec<Recipe>> for InMemoryFavorites {
    fn from(recipes: Vec<Recipe>) -> Self {
        let mut store = InMemoryFavorites::new();
        for recipe in recipes {
            store.add(recipe);
        }
        store
    }
}

impl FavoritesStore for InMemoryFavorites {
    fn favorites(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    fn add(&mut self, recipe: Recipe) {
        if !self.is_favorite(&recipe.id) {
            self.recipes.push(recipe);
        }
    }

    fn remove(&mut self, id: &str) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|recipe| recipe.id != id);
        self.recipes.len() != before
    }
}
