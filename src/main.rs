use clap::{Args, Parser, Subcommand};
use log::{debug, LevelFilter};

use recipe_finder::{
    apply_filters, random_recipes, search, search_by_name, FinderConfig, MealDbSource, Recipe,
};

#[derive(Parser)]
#[command(
    name = "recipe-finder",
    about = "Find recipes on TheMealDB by the ingredients you have"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print recipes as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Recipes using any of the given ingredients
    Search {
        #[arg(required = true)]
        ingredients: Vec<String>,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// A handful of random recipes
    Random {
        /// Number of recipes (defaults to the configured random_count)
        #[arg(long, short = 'n')]
        count: Option<usize>,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Recipes whose name matches a query
    Name {
        query: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Only show this cuisine (e.g. Italian, Mediterranean)
    #[arg(long)]
    cuisine: Option<String>,

    /// Only show recipes with this dietary tag; repeatable
    #[arg(long = "diet")]
    dietary: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let config = FinderConfig::load()?;
    debug!("{:#?}", config);
    let source = MealDbSource::new(&config)?;

    let (recipes, filters) = match cli.command {
        Command::Search {
            ingredients,
            filters,
        } => (search(&source, &ingredients).await, filters),
        Command::Random { count, filters } => {
            let count = count.unwrap_or(config.random_count);
            (random_recipes(&source, count).await, filters)
        }
        Command::Name { query, filters } => (search_by_name(&source, &query).await, filters),
    };

    let shown = apply_filters(&recipes, filters.cuisine.as_deref(), &filters.dietary);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
    } else {
        print_recipes(&shown);
    }

    Ok(())
}

fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    for recipe in recipes {
        let cuisine = recipe.cuisine_tag().unwrap_or("Other");
        let tags: Vec<&str> = recipe
            .dietary_preferences
            .iter()
            .map(|p| p.as_str())
            .collect();

        println!("{} [{}] {}", recipe.id, cuisine, recipe.title);
        if !tags.is_empty() {
            println!("    {}", tags.join(", "));
        }
        for ingredient in &recipe.ingredients {
            println!("    - {}", ingredient);
        }
    }
}
