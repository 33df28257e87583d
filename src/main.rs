//! Text rendering surface for the panel core: performs the initial load
//! against the configured backend and prints the dashboard.

use std::env;

use config::Config;
use dotenvy::dotenv;

use bookdesk::dto::authors::AuthorsPageData;
use bookdesk::dto::books::BooksPageData;
use bookdesk::dto::main::DashboardData;
use bookdesk::dto::products::ProductsPageData;
use bookdesk::models::config::AppConfig;
use bookdesk::repository::rest::RestRepository;
use bookdesk::services::authors::AuthorListController;
use bookdesk::services::books::BookListController;
use bookdesk::services::main::load_dashboard;
use bookdesk::services::products::load_products;

fn print_books(data: &BooksPageData) {
    println!();
    println!("Books ({} total)", data.table.total_items);
    println!("{:<30} {:<6} {}", "Title", "Year", "Author");

    if let Some(placeholder) = &data.placeholder {
        println!("{placeholder}");
    }
    for row in &data.table.items {
        println!("{:<30} {:<6} {}", row.title, row.year, row.author_name);
    }

    println!("{}", data.page_label());
}

fn print_authors(data: &AuthorsPageData) {
    println!();
    println!("Authors ({} total)", data.table.total_items);
    println!("{:<24} {:<20} {}", "Name", "City", "Books");

    if let Some(placeholder) = &data.placeholder {
        println!("{placeholder}");
    }
    for row in &data.table.items {
        println!("{:<24} {:<20} {}", row.name, row.city, row.book_count);
    }

    println!("{}", data.page_label());
}

fn print_products(data: &ProductsPageData) {
    println!();
    println!("Products");
    println!("{:<6} {:<24} {:<10} {}", "Id", "Name", "Quantity", "Price");

    if let Some(placeholder) = &data.placeholder {
        println!("{placeholder}");
    }
    for row in &data.rows {
        println!(
            "{:<6} {:<24} {:<10} {:.2}",
            row.id, row.name, row.quantity, row.price
        );
    }
}

fn print_dashboard(dashboard: &DashboardData) {
    println!(
        "Published years: {}  Total authors: {}",
        dashboard.stats.published_years, dashboard.stats.total_authors
    );

    print_books(&dashboard.books);
    print_authors(&dashboard.authors);

    println!();
    println!("Author dropdown:");
    for option in &dashboard.author_options {
        println!("  [{}] {}", option.id, option.label);
    }
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let app_config = match settings.try_deserialize::<AppConfig>() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading app config: {err}");
            std::process::exit(1);
        }
    };

    let repo = match RestRepository::new(&app_config.api_base_url) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Invalid backend url: {err}");
            std::process::exit(1);
        }
    };

    let books = BookListController::new();
    let authors = AuthorListController::new();

    match load_dashboard(&repo, &books, &authors) {
        Ok(dashboard) => print_dashboard(&dashboard),
        Err(err) => {
            log::error!("Failed to load dashboard: {err}");
            std::process::exit(1);
        }
    }

    // The products panel is served by a separate backend; skip it unless
    // one is configured.
    if let Some(products_url) = &app_config.products_base_url {
        let products_repo = match RestRepository::new(products_url) {
            Ok(repo) => repo,
            Err(err) => {
                log::error!("Invalid products url: {err}");
                return;
            }
        };

        match load_products(&products_repo) {
            Ok(products) => print_products(&products),
            Err(err) => log::error!("Failed to load products: {err}"),
        }
    }
}
