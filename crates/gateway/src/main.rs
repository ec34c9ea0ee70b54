//! User API - HTTP REST API over the in-memory user store.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_lib::config::GatewayConfig;

#[derive(Parser)]
#[command(name = "user-api")]
#[command(about = "In-memory user CRUD service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides GATEWAY_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides GATEWAY_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { host, port } => {
            let config = GatewayConfig::from_env().with_overrides(host, port);
            tracing::debug!(?config, "Configuration loaded");
            gateway_lib::run_server(config).await
        }
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e.user_message());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_flags_are_optional_overrides() {
        let cli = Cli::try_parse_from(["user-api", "serve"]).unwrap();
        let Commands::Serve { host, port } = cli.command;
        assert_eq!(host, None);
        assert_eq!(port, None);

        let cli = Cli::try_parse_from(["user-api", "serve", "--host", "127.0.0.1", "--port", "8080"])
            .unwrap();
        let Commands::Serve { host, port } = cli.command;
        let config = GatewayConfig::default().with_overrides(host, port);
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }
}
