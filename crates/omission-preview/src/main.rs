//! OMISSION Preview - HTTP server and CLI for withhold records.
//!
//! Serves the recording form, share pages, PNG downloads and Open Graph
//! images. The same binary can encode, decode and render tokens offline.

use std::path::PathBuf;

use anyhow::{Context, bail};
use axum::http::Request;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use omission_core::{MAX_TEXT_CHARS, Reference, prepare_submission, sanitize_input, today_local};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use omission_preview::render::{self, DOWNLOAD, OPEN_GRAPH};
use omission_preview::{AppState, Config, router};

/// OMISSION Preview - record what you didn't give into.
#[derive(Parser, Debug)]
#[command(name = "omission-preview")]
#[command(about = "Share pages and card images for OMISSION records", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env", global = true)]
    dotenv: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Sanitize and encode a phrase, printing the reference token.
    Encode {
        /// The withheld phrase.
        text: String,

        /// Record date (YYYY-MM-DD). Defaults to today, local time.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Decode a reference token and print the record as JSON.
    Decode {
        /// The `REF-...` token.
        token: String,
    },

    /// Render a reference token's card to a PNG file.
    Render {
        /// The `REF-...` token.
        token: String,

        /// Output path.
        #[arg(long, short)]
        out: PathBuf,

        /// Render the 1200x630 Open Graph image instead of the download.
        #[arg(long)]
        og: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    // Initialize tracing (stderr, so command output stays clean)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Encode { text, date } => {
            let cleaned = sanitize_input(&text, "");
            let Some(text) = prepare_submission(&cleaned) else {
                bail!(
                    "nothing to record: the phrase is empty after sanitizing or longer than {MAX_TEXT_CHARS} characters"
                );
            };
            let reference = Reference::new(date.unwrap_or_else(today_local), text)?;
            println!("{reference}");
            Ok(())
        }
        Command::Decode { token } => {
            let record = omission_core::decode(&token)
                .with_context(|| format!("cannot decode {token}"))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Command::Render { token, out, og } => {
            let reference: Reference = token
                .parse()
                .with_context(|| format!("cannot decode {token}"))?;
            let state = AppState::new(Config::from_env()?);
            let export = if og { OPEN_GRAPH } else { DOWNLOAD };

            let png = render::render_png(&state, &reference, export).await?;
            tokio::fs::write(&out, &png)
                .await
                .with_context(|| format!("failed to write {}", out.display()))?;

            let (width, height) = export.size();
            tracing::info!(
                path = %out.display(),
                width,
                height,
                bytes = png.len(),
                "card written"
            );
            Ok(())
        }
    }
}

/// Run the HTTP server until the process is stopped.
async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();

    // Create application state
    let state = AppState::new(config);

    // Build router with middleware
    let app = router(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::span!(
                    Level::INFO,
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "starting preview server");

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_default_to_serve() {
        let args = Args::try_parse_from(["omission-preview"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn args_encode_with_date() {
        let args = Args::try_parse_from([
            "omission-preview",
            "encode",
            "Checking notifications",
            "--date",
            "2026-02-17",
        ])
        .unwrap();
        match args.command {
            Some(Command::Encode { text, date }) => {
                assert_eq!(text, "Checking notifications");
                assert_eq!(date, NaiveDate::from_ymd_opt(2026, 2, 17));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn args_reject_bad_date() {
        assert!(
            Args::try_parse_from(["omission-preview", "encode", "x", "--date", "17/02/2026"])
                .is_err()
        );
    }

    #[test]
    fn args_render_og() {
        let args = Args::try_parse_from([
            "omission-preview",
            "render",
            "REF-20260217-YQ",
            "-o",
            "card.png",
            "--og",
        ])
        .unwrap();
        match args.command {
            Some(Command::Render { token, out, og }) => {
                assert_eq!(token, "REF-20260217-YQ");
                assert_eq!(out, PathBuf::from("card.png"));
                assert!(og);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
