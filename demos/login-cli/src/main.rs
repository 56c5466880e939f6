use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vendorgate::prelude::*;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "login-cli")]
#[command(about = "Drive the vendor portal login flow from a terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Login configuration (TOML). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Vendor roster (JSON array). The built-in roster is used when omitted.
    #[arg(short, long, global = true)]
    roster: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the roles available in the picker
    Roles {
        /// Print the roles as JSON
        #[arg(long)]
        json: bool,
    },

    /// Submit the login form once
    Login {
        /// Selected vendor id (empty means nothing selected)
        #[arg(long, default_value = "")]
        vendor: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Path the visitor came from
        #[arg(long)]
        from: Option<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in roster as JSON, a starting point for --roster.
    /// Ignores --roster and --config.
    DumpRoster,
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

fn load_config(path: Option<&Path>) -> Result<LoginConfig> {
    let Some(path) = path else {
        return Ok(LoginConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))
}

fn build_portal(
    roster: Option<&Path>,
    config: LoginConfig,
) -> Result<Portal<StaticRoster>> {
    match roster {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("reading roster {}", path.display()))?;
            Ok(Portal::from_json_roster(&data, config)?)
        }
        None => Ok(Portal::new(StaticRoster::fixture(), config)),
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn roles_json(portal: &Portal<StaticRoster>) -> Result<String> {
    Ok(serde_json::to_string(&portal.role_options())?)
}

/// Runs one command. Returns `false` when a login was refused.
async fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Roles { json } => {
            let config = load_config(cli.config.as_deref())?;
            let portal = build_portal(cli.roster.as_deref(), config)?;

            if json {
                println!("{}", roles_json(&portal)?);
            } else {
                for option in portal.role_options() {
                    println!("{}\t{}", option.id.as_str(), option.label);
                }
            }
        }

        Commands::Login {
            vendor,
            email,
            password,
            from,
            json,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let mut portal = build_portal(cli.roster.as_deref(), config)?;
            let mut form = LoginForm::new(vendor, email, password);
            tracing::info!("signing in...");
            let outcome = portal.login(&mut form, from.as_deref()).await;

            if json {
                println!("{}", serde_json::to_string(&outcome)?);
            } else {
                match &outcome {
                    LoginOutcome::Redirect(path) => {
                        if let Some(session) = portal.session() {
                            println!(
                                "signed in as {} ({}), redirecting to {path}",
                                session.account.name, session.account.level
                            );
                        }
                    }
                    LoginOutcome::Error(message) => println!("error: {message}"),
                }
            }

            return Ok(matches!(outcome, LoginOutcome::Redirect(_)));
        }

        Commands::DumpRoster => {
            let fixture = StaticRoster::fixture();
            let bytes = JsonRosterCodec.encode(fixture.accounts())?;
            println!("{}", String::from_utf8_lossy(&bytes));
        }
    }

    Ok(true)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if !run(cli).await? {
        std::process::exit(1);
    }
    Ok(())
}
