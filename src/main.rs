//! Command-line shim over the mealdex library.
//!
//! This binary is the thin integration layer between a terminal and the
//! library's action surface. It carries no business logic: arguments map
//! onto store actions and the resulting state is printed.
//!
//! # Usage
//!
//! ```text
//! mealdex                      Fetch-all listing (empty-term search)
//! mealdex <term>               Search meals by keyword
//! mealdex --random             Fetch one random meal
//! mealdex --favorites          List persisted favorites
//! mealdex <term> --show <id>   Search, then show detail for one result
//! mealdex <term> --add <id>    Search, then save one result as a favorite
//! mealdex --remove <id>        Remove a favorite
//! ```
//!
//! Configuration is read from the TOML file named by `MEALDEX_CONFIG` when
//! that variable is set; otherwise the built-in defaults apply.

use mealdex::{initialize, observability, App, AppState, Config, HttpMealApi, JsonFavoritesStore, Meal};

/// Parsed command-line arguments.
#[derive(Debug, Default)]
struct CliArgs {
    term: Option<String>,
    random: bool,
    favorites: bool,
    show: Option<String>,
    add: Option<String>,
    remove: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--random" => parsed.random = true,
            "--favorites" => parsed.favorites = true,
            "--show" => parsed.show = Some(args.next().ok_or("--show requires a meal id")?),
            "--add" => parsed.add = Some(args.next().ok_or("--add requires a meal id")?),
            "--remove" => parsed.remove = Some(args.next().ok_or("--remove requires a meal id")?),
            other if other.starts_with("--") => return Err(format!("unknown flag: {other}")),
            other => parsed.term = Some(other.to_string()),
        }
    }

    Ok(parsed)
}

fn load_config() -> Config {
    match std::env::var("MEALDEX_CONFIG") {
        Ok(path) => Config::from_file(&path).unwrap_or_else(|e| {
            eprintln!("mealdex: {e}, using defaults");
            Config::default()
        }),
        Err(_) => Config::default(),
    }
}

#[tokio::main]
async fn main() {
    let config = load_config();
    observability::init_tracing(&config);

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("mealdex: {e}");
            std::process::exit(2);
        }
    };

    let mut app = match initialize(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("mealdex: {e}");
            std::process::exit(1);
        }
    };

    run(&mut app, &args).await;
}

async fn run(app: &mut App<HttpMealApi, JsonFavoritesStore>, args: &CliArgs) {
    if let Some(id) = args.remove.as_deref() {
        app.remove_from_favorites(id);
        print_meals("Favorites", &app.state().favorites);
        return;
    }

    if args.favorites {
        print_meals("Favorites", &app.state().favorites);
        return;
    }

    if args.random {
        app.fetch_random_meal().await;
    } else {
        match args.term.as_deref() {
            Some(term) => app.set_search_term(term).await,
            None => app.load_initial().await,
        }
    }

    if app.state().no_matches() {
        println!("No meals matched your search term. Please try again.");
        return;
    }

    if let Some(id) = args.add.as_deref() {
        app.add_to_favorites(id);
    }

    if let Some(id) = args.show.as_deref() {
        app.select_meal(id, false);
        print_detail(app.state());
        return;
    }

    print_meals("Meals", &app.state().meals);
}

fn print_meals(heading: &str, meals: &[Meal]) {
    println!("{heading} ({}):", meals.len());
    for meal in meals {
        match meal.thumbnail.as_deref() {
            Some(thumbnail) => println!("  {}  {}  [{thumbnail}]", meal.id, meal.name),
            None => println!("  {}  {}", meal.id, meal.name),
        }
    }
}

fn print_detail(state: &AppState) {
    let Some(meal) = &state.selected_meal else {
        println!("No such meal.");
        return;
    };

    println!("{}  {}", meal.id, meal.name);
    if let Some(thumbnail) = meal.thumbnail.as_deref() {
        println!("  {thumbnail}");
    }
    for (key, value) in &meal.extra {
        if let Some(text) = value.as_str() {
            if !text.is_empty() {
                println!("  {key}: {text}");
            }
        }
    }
}
