use anyhow::{Context, Result};
use clap::Parser;
use client_core::{HttpFilmSource, Locale, SearchController};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod terminal;

use terminal::{Command, TerminalPage, HELP};

#[derive(Parser, Debug)]
#[command(about = "Look up films by number from the film server")]
struct Args {
    /// Base URL of the film server, e.g. http://127.0.0.1:8080
    #[arg(long)]
    server_url: Option<String>,
    /// Display language: es or en
    #[arg(long)]
    locale: Option<Locale>,
    /// Print HTML fragments instead of plain text
    #[arg(long)]
    html: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if let Some(locale) = args.locale {
        settings.locale = locale;
    }
    info!(server_url = %settings.server_url, locale = %settings.locale, "console starting");

    let source = HttpFilmSource::new(&settings.server_url)?;
    let mut controller = SearchController::with_locale(source, settings.locale);
    let mut page = TerminalPage::new(std::io::stdout(), args.html);
    page.print_line(HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        match Command::parse(&line) {
            Command::Search(input) => {
                page.set_input(input);
                // Failures are already rendered into the page.
                let _ = controller.submit(&mut page).await;
            }
            Command::History => controller.show_history(&mut page),
            Command::Help => page.print_line(HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}
