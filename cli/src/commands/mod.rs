pub mod ipam;
pub mod log_level;

use clap::{Parser, Subcommand};
use ::commands::LogLevelOptions;
use config::ConfigFileError;
use errors::{CommandError, StorageError};
use std::path::{Path, PathBuf};
use storage::Datastore;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "netctl",
    author,
    version,
    about = "netctl - network control-plane administration",
    long_about = "Manage global IPAM settings and per-component log severity overrides.\n\nThe \
                  datastore is chosen by the connection configuration (--config, default \
                  /etc/netctl/netctl.cfg) and NETCTL_* environment variables."
)]
pub struct Cli {
    /// Path to the connection configuration (YAML, JSON or TOML)
    #[arg(short = 'c', long = "config", global = true, env = "NETCTL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand, about = "Manage global IPAM settings")]
    Ipam(ipam::IpamCommand),

    #[command(subcommand, about = "Manage per-component log severity")]
    LogLevel(log_level::LogLevelCommand)
}

/// Datastore and handler options for one invocation.
pub struct Session {
    pub datastore: Datastore,
    pub options: LogLevelOptions
}

impl Session {
    pub fn open(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let config = config::load_client_config(config_path)?;
        debug!(
            datastore_type = %config.spec.datastore_type,
            preserve_creation_timestamp = config.spec.preserve_creation_timestamp,
            "connection config loaded"
        );

        let datastore = storage::connect(&config)?;
        Ok(Self {
            datastore,
            options: LogLevelOptions {
                preserve_creation_timestamp: config.spec.preserve_creation_timestamp
            }
        })
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let session = Session::open(cli.config.as_deref())?;
    match cli.command {
        Commands::Ipam(cmd) => ipam::run(cmd, &session).await,
        Commands::LogLevel(cmd) => log_level::run(cmd, &session).await
    }
}

/// Reject values clap accepts but no handler can use.
pub(crate) fn require_non_empty(flag: &str, value: &str) -> Result<(), CommandError> {
    if value.trim().is_empty() {
        return Err(CommandError::ArgumentParse {
            message: format!("{} must not be empty", flag)
        });
    }
    Ok(())
}

/// Log field naming which layer an invocation failed in.
pub fn error_kind(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<CommandError>() {
        e.kind()
    } else if err.is::<ConfigFileError>() {
        "config"
    } else if err.is::<StorageError>() {
        "store"
    } else {
        "other"
    }
}
