//! Flora CLI - the flower storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse and search the catalog
//! flora catalog --category bouquets --occasion valentine
//! flora search peony
//!
//! # Fill the cart and check out
//! flora cart add 3 --quantity 2
//! flora cart show --promo FLOWER20
//! flora checkout --address "Tverskaya 1" --card-name "Ivan Ivanov" \
//!     --card-number 4242424242424242 --expiry 12/29 --cvc 123
//!
//! # Follow the order and talk to the florist
//! flora orders list
//! flora chat --order order-1718000123456 "Can you add a card?"
//! ```
//!
//! # Environment Variables
//!
//! See [`StorefrontConfig`]; `RUST_LOG` controls log verbosity.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};
use flora_storefront::config::StorefrontConfig;
use flora_storefront::state::AppState;
use secrecy::SecretString;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::account::{ProfileUpdate, SignIn};
use commands::catalog::CatalogArgs;
use commands::orders::CheckoutArgs;

#[derive(Parser)]
#[command(name = "flora")]
#[command(author, version, about = "Flora flower storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog {
        /// Catalog section (bouquets, indoor, accessories, gifts)
        #[arg(short, long)]
        category: Option<String>,

        /// Part of the product name
        #[arg(short, long)]
        name: Option<String>,

        #[arg(long)]
        min_price: Option<u32>,

        #[arg(long)]
        max_price: Option<u32>,

        /// Occasion tag, e.g. birthday
        #[arg(short, long)]
        occasion: Option<String>,

        /// Flower tag; repeat to accept any of several
        #[arg(short, long = "flower")]
        flowers: Vec<String>,

        #[arg(long)]
        min_rating: Option<f64>,
    },
    /// Show one product
    Product {
        id: String,
    },
    /// Search the catalog; without a query, list recent searches
    Search {
        query: Option<String>,

        /// Forget recent searches
        #[arg(long)]
        clear: bool,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Build a custom bouquet and add it to the cart
    Bouquet {
        /// small, medium or large
        #[arg(short, long, default_value = "medium")]
        size: String,

        /// Stems as flower=count, e.g. roses=5
        stems: Vec<String>,

        /// Card message
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Place an order for the cart
    Checkout(Box<CheckoutCommand>),
    /// Review placed orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Read or write product reviews
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },
    /// Chat with the florist
    Chat {
        /// Discuss a specific order
        #[arg(short, long)]
        order: Option<String>,

        /// Messages to send
        messages: Vec<String>,
    },
    /// Sign in with email and password, or through a provider
    SignIn {
        #[arg(short, long, required_unless_present = "provider")]
        email: Option<String>,

        #[arg(short, long, required_unless_present = "provider")]
        password: Option<String>,

        /// Social provider, e.g. google or apple
        #[arg(long, conflicts_with_all = ["email", "password"])]
        provider: Option<String>,
    },
    /// Sign out
    SignOut,
    /// Show or edit the profile
    Profile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        location: Option<String>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and totals
    Show {
        /// Promo code to preview
        #[arg(long)]
        promo: Option<String>,
    },
    /// Add a product
    Add {
        id: String,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Card message for this line
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Set a line's quantity (0 removes it)
    Set { id: String, quantity: u32 },
    /// Remove a line
    Remove { id: String },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// List wishlisted products
    Show,
    /// Add or remove a product
    Toggle { id: String },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders, newest first
    List,
    /// Show an order and its tracking progress
    Show { id: String },
    /// Change an order's status
    SetStatus {
        id: String,
        /// pending, confirmed, preparing, delivering, delivered or cancelled
        status: String,
    },
}

#[derive(Subcommand)]
enum ReviewAction {
    /// List reviews of a product
    List { id: String },
    /// Review a product
    Add {
        id: String,

        /// Stars from 1 to 5
        #[arg(short, long, default_value_t = 5)]
        rating: u8,

        text: String,
    },
}

#[derive(clap::Args)]
struct CheckoutCommand {
    /// Recipient name (defaults to the profile name)
    #[arg(long)]
    full_name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    country: Option<String>,

    #[arg(long)]
    state: Option<String>,

    #[arg(long)]
    address: String,

    #[arg(long)]
    postal_code: Option<String>,

    /// Delivery date, YYYY-MM-DD (default: tomorrow)
    #[arg(long)]
    date: Option<String>,

    /// Delivery time, HH:MM (default: 12:00)
    #[arg(long, requires = "date")]
    time: Option<String>,

    /// Message for the gift card
    #[arg(long)]
    card_message: Option<String>,

    #[arg(long)]
    card_name: String,

    #[arg(long)]
    card_number: String,

    /// Card expiry, MM/YY
    #[arg(long)]
    expiry: String,

    #[arg(long)]
    cvc: String,

    #[arg(long)]
    save_card: bool,
}

impl From<CheckoutCommand> for CheckoutArgs {
    fn from(c: CheckoutCommand) -> Self {
        Self {
            full_name: c.full_name,
            email: c.email,
            phone: c.phone,
            country: c.country,
            state: c.state,
            address: c.address,
            postal_code: c.postal_code,
            date: c.date,
            time: c.time,
            card_message: c.card_message,
            card_name: c.card_name,
            card_number: c.card_number,
            expiration_date: c.expiry,
            security_code: c.cvc,
            save_card: c.save_card,
        }
    }
}

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "flora_storefront=info,flora_cli=info";

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::debug!("Sentry initialized");
    Some(guard)
}

/// Map tracing levels to Sentry: warnings and errors become events, info and
/// debug become breadcrumbs.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let _sentry_guard = init_sentry(&config);

    // Logs go to stderr so command output stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&state, cli.command, &mut out).await?;
    out.flush()?;
    Ok(())
}

async fn execute(
    state: &AppState,
    command: Commands,
    out: &mut impl Write,
) -> commands::CommandResult {
    match command {
        Commands::Catalog {
            category,
            name,
            min_price,
            max_price,
            occasion,
            flowers,
            min_rating,
        } => {
            let args = CatalogArgs {
                category,
                name,
                min_price,
                max_price,
                occasion,
                flowers,
                min_rating,
            };
            commands::catalog::list(state, args, out)?;
        }
        Commands::Product { id } => commands::catalog::show(state, &id, out)?,
        Commands::Search { query, clear } => {
            if clear {
                state.storage.clear_recent_searches();
            }
            commands::catalog::search(state, query.as_deref(), out)?;
        }
        Commands::Cart { action } => match action {
            CartAction::Show { promo } => commands::cart::show(state, promo.as_deref(), out)?,
            CartAction::Add {
                id,
                quantity,
                message,
            } => commands::cart::add(state, &id, quantity, message.as_deref(), out)?,
            CartAction::Set { id, quantity } => {
                commands::cart::set_quantity(state, &id, quantity, out)?;
            }
            CartAction::Remove { id } => commands::cart::remove(state, &id, out)?,
            CartAction::Clear => commands::cart::clear(state, out)?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::cart::wishlist(state, out)?,
            WishlistAction::Toggle { id } => commands::cart::toggle_wishlist(state, &id, out)?,
        },
        Commands::Bouquet {
            size,
            stems,
            message,
        } => commands::cart::bouquet(state, &size, &stems, message.as_deref(), out)?,
        Commands::Checkout(args) => commands::orders::checkout(state, (*args).into(), out)?,
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::orders::list(state, out)?,
            OrdersAction::Show { id } => commands::orders::show(state, &id, out)?,
            OrdersAction::SetStatus { id, status } => {
                commands::orders::set_status(state, &id, &status, out)?;
            }
        },
        Commands::Review { action } => match action {
            ReviewAction::List { id } => commands::catalog::reviews(state, &id, out)?,
            ReviewAction::Add { id, rating, text } => {
                commands::catalog::add_review(state, &id, rating, &text, out)?;
            }
        },
        Commands::Chat { order, messages } => {
            commands::chat::chat(state, order.as_deref(), &messages, out).await?;
        }
        Commands::SignIn {
            email,
            password,
            provider,
        } => {
            let how = match provider {
                Some(provider) => SignIn::Provider(provider),
                None => SignIn::Password {
                    email: email.unwrap_or_default(),
                    password: SecretString::from(password.unwrap_or_default()),
                },
            };
            commands::account::sign_in(state, how, out)?;
        }
        Commands::SignOut => commands::account::sign_out(state, out)?,
        Commands::Profile {
            name,
            phone,
            location,
        } => {
            let update = ProfileUpdate {
                name,
                phone,
                location,
            };
            commands::account::profile(state, update, out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use flora_storefront::config::StorageBackend;

    use super::*;

    fn state() -> AppState {
        AppState::new(StorefrontConfig {
            storage: StorageBackend::Memory,
            florist_reply_delay: std::time::Duration::from_millis(10),
            ..StorefrontConfig::default()
        })
        .unwrap()
    }

    async fn exec(state: &AppState, args: &[&str]) -> String {
        let cli = Cli::try_parse_from(std::iter::once("flora").chain(args.iter().copied())).unwrap();
        let mut out = Vec::new();
        execute(state, cli.command, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_log_filter_parses() {
        let filter = tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
        let shown = filter.to_string();
        assert!(shown.contains("flora_storefront=info"));
        assert!(shown.contains("flora_cli=info"));
    }

    #[tokio::test]
    async fn test_cart_flow() {
        let state = state();
        exec(&state, &["cart", "add", "1", "--quantity", "2"]).await;
        exec(&state, &["cart", "add", "2"]).await;
        let shown = exec(&state, &["cart", "show", "--promo", "flower20"]).await;
        assert!(shown.contains("Discount:"));
        assert!(shown.contains("FLOWER20"));

        exec(&state, &["cart", "set", "2", "0"]).await;
        assert_eq!(state.storage.cart().len(), 1);
    }

    #[tokio::test]
    async fn test_checkout_and_track() {
        let state = state();
        exec(&state, &["sign-in", "--provider", "google"]).await;
        exec(&state, &["cart", "add", "3"]).await;
        let out = exec(
            &state,
            &[
                "checkout",
                "--address",
                "Tverskaya 1",
                "--card-name",
                "Ivan Ivanov",
                "--card-number",
                "4242424242424242",
                "--expiry",
                "12/29",
                "--cvc",
                "123",
            ],
        )
        .await;
        assert!(out.contains("confirmed"));
        assert!(state.storage.cart().is_empty());

        let id = state.storage.orders()[0].id.to_string();
        exec(&state, &["orders", "set-status", id.as_str(), "delivering"]).await;
        let tracked = exec(&state, &["orders", "show", id.as_str()]).await;
        assert!(tracked.contains("On the way"));
    }

    #[tokio::test]
    async fn test_chat_waits_for_reply() {
        let state = state();
        let out = exec(&state, &["chat", "Hello there"]).await;
        assert!(out.contains("You: Hello there"));
        assert_eq!(out.matches("Florist:").count(), 2);
    }

    #[tokio::test]
    async fn test_bouquet_adds_custom_line() {
        let state = state();
        let out = exec(&state, &["bouquet", "--size", "small", "roses=9", "tulips=2"]).await;
        assert!(out.contains("at most 5 Roses"));
        let cart = state.storage.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].product.price.to_string(), "61.00");
    }
}
