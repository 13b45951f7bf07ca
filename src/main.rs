use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use marquee::api::{ShowApi, ShowClient};
use marquee::bookings::BookingList;
use marquee::config::{AdminConfig, REQUIRED_ENV};
use marquee::form::{FormView, ShowSelectionForm};
use marquee::models::AdminUser;
use std::env;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "marquee_admin", about = "Admin tools for the show booking backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List now-playing movies
    Catalog,
    /// Schedule shows for a movie
    AddShow {
        #[arg(long)]
        movie: String,
        #[arg(long)]
        price: String,
        /// One or more `YYYY-MM-DDTHH:MM` values
        #[arg(required = true)]
        times: Vec<String>,
    },
    /// List every booking
    Bookings,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn check_env() -> Result<()> {
    for key in REQUIRED_ENV {
        if env::var(key).is_err() {
            anyhow::bail!("Missing required environment variable: {}", key);
        }
    }
    info!("All required environment variables are set");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match dotenv() {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) => warn!("No .env file loaded ({}) - relying on environment", e),
    }
    init_tracing();
    check_env()?;

    let config = AdminConfig::from_env()?;
    let api: Arc<dyn ShowApi> = Arc::new(ShowClient::from_config(&config)?);
    let user = AdminUser {
        id: "service-account".to_string(),
        name: config.admin_name.clone(),
        image_url: None,
    };

    match cli.command {
        Command::Catalog => {
            let mut form = ShowSelectionForm::new(api, config.image_base_url.clone());
            if let Some(notice) = form.load_catalog(Some(&user)).await {
                anyhow::bail!("{}", notice);
            }
            match form.view() {
                FormView::Loading => println!("No movies are playing right now"),
                FormView::Ready(cards) => {
                    for card in cards {
                        let released = card
                            .release_date
                            .map(|d| d.to_string())
                            .unwrap_or_else(|| "-".to_string());
                        println!(
                            "{:<10} {:<40} {:>4} {:>7} votes  {}",
                            card.id, card.title, card.rating, card.votes, released
                        );
                    }
                }
            }
        }
        Command::AddShow {
            movie,
            price,
            times,
        } => {
            let mut form = ShowSelectionForm::new(api, config.image_base_url.clone());
            form.select_movie(&movie);
            form.set_price(&price);
            for value in &times {
                form.set_date_time_input(value);
                if !form.add_date_time() && !form.date_time_input().is_empty() {
                    warn!("Ignoring malformed date-time '{}'", value);
                }
            }
            let notice = form.submit().await;
            println!("{}", notice);
            if notice.is_error() {
                std::process::exit(1);
            }
        }
        Command::Bookings => {
            let mut list = BookingList::new(api, config.currency.clone());
            if let Some(notice) = list.load().await {
                anyhow::bail!("{}", notice);
            }
            for row in list.rows() {
                println!(
                    "{:<20} {:<30} {:<28} {:<16} {}",
                    row.user_name, row.movie_title, row.show_time, row.seats, row.amount
                );
            }
        }
    }
    Ok(())
}
