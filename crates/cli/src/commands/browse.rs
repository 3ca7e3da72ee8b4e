//! Interactive browse session: render the catalog, read user intents.
//!
//! The loop is strictly unidirectional: parse a line into an [`Intent`],
//! apply it to the session, then redraw from a fresh view projection.

use std::error::Error;

use tokio::io::{AsyncBufReadExt, BufReader};

use shopwindow_catalog::{
    CatalogClient, CatalogConfig, CatalogView, LoadState, ProductCard, Session,
};
use shopwindow_core::{CategoryFilter, ProductId, SortOrder};

/// One parsed user intent from the prompt.
#[derive(Debug, Clone, PartialEq)]
enum Intent {
    Search(String),
    Category(CategoryFilter),
    Sort(SortOrder),
    ToggleFavorite(ProductId),
    Categories,
    Clear,
    Retry,
    Help,
    Quit,
}

/// Run the interactive browse session.
pub async fn run(base_url: Option<&str>) -> Result<(), Box<dyn Error>> {
    let mut config = CatalogConfig::from_env()?;
    if let Some(base) = base_url {
        config = config.with_api_base(base)?;
    }

    let client = CatalogClient::new(&config);
    let mut session = Session::new(&config);

    println!("Loading catalog from {} ...", config.api_base);
    session.load(&client).await;
    draw(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        println!();
        print_prompt();

        let Some(line) = lines.next_line().await? else {
            break; // stdin closed
        };

        let intent = match parse_intent(&line) {
            Some(intent) => intent,
            None => {
                println!("Unrecognized command. Type `help` for the command list.");
                continue;
            }
        };

        match intent {
            Intent::Search(term) => session.set_search_term(term),
            Intent::Category(filter) => session.set_category(filter),
            Intent::Sort(order) => session.set_sort_order(order),
            Intent::ToggleFavorite(id) => {
                let now_favorite = session.toggle_favorite(id);
                println!(
                    "Product {id} {}.",
                    if now_favorite {
                        "added to favorites"
                    } else {
                        "removed from favorites"
                    }
                );
            }
            Intent::Categories => {
                if let Some(view) = session.view() {
                    for category in &view.categories {
                        println!("  {}", capitalize(category));
                    }
                    continue;
                }
            }
            Intent::Clear => session.clear_filters(),
            Intent::Retry => {
                println!("Loading catalog from {} ...", config.api_base);
                session.retry(&client).await;
            }
            Intent::Help => {
                print_help();
                continue;
            }
            Intent::Quit => break,
        }

        draw(&session);
    }

    Ok(())
}

/// Parse one prompt line into an intent.
fn parse_intent(line: &str) -> Option<Intent> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        // `search` with no argument clears the term
        "search" => Some(Intent::Search(rest.to_string())),
        "category" if !rest.is_empty() => rest.parse().ok().map(Intent::Category),
        "sort" if !rest.is_empty() => rest.parse().ok().map(Intent::Sort),
        "fav" if !rest.is_empty() => rest.parse().ok().map(Intent::ToggleFavorite),
        "categories" => Some(Intent::Categories),
        "clear" => Some(Intent::Clear),
        "retry" => Some(Intent::Retry),
        "help" => Some(Intent::Help),
        "quit" | "exit" => Some(Intent::Quit),
        _ => None,
    }
}

/// Draw the session's current state.
fn draw(session: &Session) {
    match session.state() {
        LoadState::Loading => println!("Loading..."),
        LoadState::Failed(message) => {
            println!("Error: {message}");
            println!("Type `retry` to try again.");
        }
        LoadState::Ready(_) => {
            if let Some(view) = session.view() {
                println!("{}", render_view(&view));
            }
        }
    }
}

/// Render the full listing: summary line, then cards or the empty state.
fn render_view(view: &CatalogView) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Showing {} of {} products",
        view.shown, view.total
    ));
    if view.favorites > 0 {
        out.push_str(&format!(" \u{2022} {} favorite(s)", view.favorites));
    }
    out.push('\n');

    if view.cards.is_empty() {
        out.push_str("\nNo products found\nType `clear` to reset the search.\n");
        return out;
    }

    for card in &view.cards {
        out.push('\n');
        out.push_str(&render_card(card));
    }

    out
}

/// Render one product card.
fn render_card(card: &ProductCard) -> String {
    let product = &card.product;
    let mut out = String::new();

    let mut badges = String::new();
    if card.recommended {
        badges.push_str("  * Recommended");
    }
    if card.favorite {
        badges.push_str("  \u{2665}");
    }

    out.push_str(&format!("[{}] {}{badges}\n", product.id, product.title));
    out.push_str(&format!(
        "      {}  |  ${:.2}  |  {} ({})\n",
        capitalize(&product.category),
        product.price,
        product.rating.rate,
        product.rating.count
    ));

    out
}

/// Uppercase the first character of a category label for display.
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

fn print_prompt() {
    println!("shopwindow> search | category | sort | fav | categories | clear | retry | help | quit");
}

fn print_help() {
    println!("Commands:");
    println!("  search <term>         filter titles by substring (empty term shows all)");
    println!("  category <name|all>   filter by exact category");
    println!("  sort <none|asc|desc>  sort by price");
    println!("  fav <id>              toggle a favorite");
    println!("  categories            list available categories");
    println!("  clear                 reset search and category");
    println!("  retry                 reload the catalog");
    println!("  quit                  leave the session");
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopwindow_core::{Product, Rating};

    fn card(id: u64, title: &str, price: f64, favorite: bool, recommended: bool) -> ProductCard {
        ProductCard {
            product: Product {
                id: ProductId::new(id),
                title: title.to_string(),
                price,
                category: "men's clothing".to_string(),
                image: String::new(),
                rating: Rating {
                    rate: 3.9,
                    count: 120,
                },
            },
            favorite,
            recommended,
        }
    }

    #[test]
    fn test_parse_search_keeps_rest_of_line() {
        assert_eq!(
            parse_intent("search gold chain"),
            Some(Intent::Search("gold chain".to_string()))
        );
        // Empty search clears the term
        assert_eq!(parse_intent("search"), Some(Intent::Search(String::new())));
    }

    #[test]
    fn test_parse_category_and_sort() {
        assert_eq!(
            parse_intent("category all"),
            Some(Intent::Category(CategoryFilter::All))
        );
        assert_eq!(
            parse_intent("category men's clothing"),
            Some(Intent::Category(CategoryFilter::Category(
                "men's clothing".to_string()
            )))
        );
        assert_eq!(parse_intent("sort asc"), Some(Intent::Sort(SortOrder::Asc)));
        assert_eq!(parse_intent("sort sideways"), None);
    }

    #[test]
    fn test_parse_fav_requires_numeric_id() {
        assert_eq!(
            parse_intent("fav 12"),
            Some(Intent::ToggleFavorite(ProductId::new(12)))
        );
        assert_eq!(parse_intent("fav twelve"), None);
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(parse_intent("clear"), Some(Intent::Clear));
        assert_eq!(parse_intent("retry"), Some(Intent::Retry));
        assert_eq!(parse_intent("quit"), Some(Intent::Quit));
        assert_eq!(parse_intent("exit"), Some(Intent::Quit));
        assert_eq!(parse_intent("  help  "), Some(Intent::Help));
        assert_eq!(parse_intent("frobnicate"), None);
    }

    #[test]
    fn test_render_card_formats_price_and_rating() {
        let rendered = render_card(&card(1, "Mens Cotton Jacket", 55.9, false, true));
        assert!(rendered.contains("[1] Mens Cotton Jacket  * Recommended"));
        assert!(rendered.contains("$55.90"));
        assert!(rendered.contains("3.9 (120)"));
        assert!(rendered.contains("Men's clothing"));
    }

    #[test]
    fn test_render_view_summary_and_favorites() {
        let view = CatalogView {
            cards: vec![card(1, "a", 1.0, true, false)],
            categories: vec![],
            shown: 1,
            total: 4,
            favorites: 2,
        };
        let rendered = render_view(&view);
        assert!(rendered.contains("Showing 1 of 4 products \u{2022} 2 favorite(s)"));
        assert!(rendered.contains('\u{2665}'));
    }

    #[test]
    fn test_render_view_empty_state() {
        let view = CatalogView {
            cards: vec![],
            categories: vec![],
            shown: 0,
            total: 4,
            favorites: 0,
        };
        let rendered = render_view(&view);
        assert!(rendered.contains("No products found"));
        assert!(rendered.contains("clear"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("electronics"), "Electronics");
        assert_eq!(capitalize(""), "");
    }
}
