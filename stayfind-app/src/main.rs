mod app_config;
mod command;
mod http;
mod render;

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stayfind_search::{EngineConfig, SearchEngine};

use crate::command::Command;
use crate::http::HttpRoomsLookup;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stayfind=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = app_config::Config::load().expect("Failed to load config");
    tracing::info!(endpoint = %config.endpoint.url, "Starting Stayfind search");

    let lookup = HttpRoomsLookup::new(
        &config.endpoint.url,
        Duration::from_millis(config.endpoint.timeout_ms),
    )?;
    let mut engine = SearchEngine::new(
        Arc::new(lookup),
        EngineConfig {
            quiet_period: Duration::from_millis(config.search.quiet_period_ms),
        },
    );

    let mut rx = engine.subscribe();
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let view = rx.borrow_and_update().clone();
            println!("{}", render::render(&view));
        }
    });

    // Initial search with the session defaults, like a fresh page load.
    engine.search();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::DateFrom(date)) => engine.set_date_from(date),
            Ok(Command::DateTo(date)) => engine.set_date_to(date),
            Ok(Command::Adults(count)) => engine.set_adults_number(count),
            Ok(Command::Children(count)) => engine.set_children_number(count),
            Ok(Command::Search) => engine.search(),
            Ok(Command::Quit) => break,
            Err(err) => tracing::warn!(%err, "Ignoring input"),
        }
    }

    Ok(())
}
