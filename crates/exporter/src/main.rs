//! Export one broadcast round as PGN on stdout.
//!
//! Usage: exporter <name> <source-url>
//!
//! e.g. exporter "Candidates 2026" chessdotcom:12345/round-1

use exporter::client::ChessComClient;
use exporter::config::Config;
use exporter::export;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <name> <source-url>", args[0]);
        eprintln!("  e.g. {} \"Candidates 2026\" chessdotcom:12345/round-1", args[0]);
        std::process::exit(2);
    }

    let config = Config::from_env();
    let client = ChessComClient::new(&config);

    match export::export_round(&client, &args[1], &args[2]).await {
        Ok(pgn) => print!("{pgn}"),
        Err(e) => {
            tracing::error!("Export failed: {e}");
            std::process::exit(1);
        }
    }
}
