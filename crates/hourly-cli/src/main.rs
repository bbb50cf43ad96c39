use clap::{Parser, Subcommand};
use hourly_core::HourlyConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Context;

#[derive(Parser, Debug)]
#[command(name = "hourly", version, about = "Hourly time-tracking client")]
struct Cli {
    /// Configuration file (YAML). Defaults are used when omitted.
    #[arg(long, global = true, env = "HOURLY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web dashboard.
    Serve {
        /// Override the configured listen port.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Log in and store the issued token.
    Login {
        login: String,

        #[arg(long, env = "HOURLY_PASSWORD", hide_env_values = true, default_value = "")]
        password: String,
    },

    /// Forget the stored token.
    Logout,

    /// Show the identity behind the stored token.
    Whoami,

    /// Run the route guard for a path against the stored token.
    Navigate {
        path: String,

        /// Print the decision as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List routes and each role's landing route.
    Routes,

    /// Token utilities.
    Token {
        #[command(subcommand)]
        cmd: TokenCommand,
    },
}

#[derive(Subcommand, Debug)]
enum TokenCommand {
    /// Decode a token's claims without verifying it.
    Inspect { token: String },

    /// Mint an unsigned development token (for demo mode).
    Mint {
        #[arg(long)]
        uid: String,

        /// Lifetime, e.g. 30m, 24h, 7d.
        #[arg(long)]
        expires: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = HourlyConfig::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.cmd {
        Command::Serve { port } => commands::serve::run(config, port).await?,
        Command::Login { login, password } => {
            commands::session::login(&Context::new(config)?, &login, &password).await?
        }
        Command::Logout => commands::session::logout(&Context::new(config)?)?,
        Command::Whoami => commands::session::whoami(&Context::new(config)?).await?,
        Command::Navigate { path, json } => {
            commands::navigate::navigate(&Context::new(config)?, &path, json).await?
        }
        Command::Routes => commands::navigate::routes(),
        Command::Token { cmd } => match cmd {
            TokenCommand::Inspect { token } => commands::token::inspect(&token)?,
            TokenCommand::Mint { uid, expires } => commands::token::mint(&uid, expires.as_deref())?,
        },
    }

    Ok(())
}
