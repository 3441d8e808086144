mod client;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{appointment, booking, business, service};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "bookpage")]
#[command(about = "bookpage CLI - Manage your booking page, services and appointments")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "API server URL")]
    server: Option<String>,

    #[arg(long, global = true, help = "User ID to act as on owner routes")]
    user_id: Option<Uuid>,

    #[arg(long, global = true, help = "Output format", default_value = "table")]
    format: output::Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure CLI settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Manage your business profile
    Business {
        #[command(subcommand)]
        command: business::Commands,
    },
    /// Manage your service catalog
    #[command(alias = "svc")]
    Service {
        #[command(subcommand)]
        command: service::Commands,
    },
    /// Manage incoming appointments
    #[command(alias = "appt")]
    Appointment {
        #[command(subcommand)]
        command: appointment::Commands,
    },
    /// Use a public booking page
    Booking {
        #[command(subcommand)]
        command: booking::Commands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration values
    Set {
        #[arg(long)]
        server: Option<String>,
        #[arg(long)]
        user_id: Option<Uuid>,
    },
    /// Show current configuration
    Show,
    /// Get config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::Config::load()?;

    if let Some(server) = &cli.server {
        cfg.server = server.clone();
    }
    if let Some(user_id) = cli.user_id {
        cfg.user_id = Some(user_id);
    }

    match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Set { server, user_id } => {
                if let Some(s) = server {
                    cfg.server = s;
                }
                if let Some(id) = user_id {
                    cfg.user_id = Some(id);
                }
                cfg.save()?;
                output::success("Configuration saved");
            }
            ConfigCommands::Show => {
                println!("Server: {}", cfg.server);
                println!(
                    "User ID: {}",
                    cfg.user_id
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| "(not set)".into())
                );
            }
            ConfigCommands::Path => {
                println!("{}", config::config_path()?.display());
            }
        },
        Commands::Business { command } => {
            business::run(command, &cfg, cli.format).await?;
        }
        Commands::Service { command } => {
            service::run(command, &cfg, cli.format).await?;
        }
        Commands::Appointment { command } => {
            appointment::run(command, &cfg, cli.format).await?;
        }
        Commands::Booking { command } => {
            booking::run(command, &cfg, cli.format).await?;
        }
    }

    Ok(())
}
