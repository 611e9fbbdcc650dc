use ::commands::{log_level, table};
use clap::{Args, Subcommand};
use nc_core::KnownComponents;

use super::{Session, require_non_empty};
use crate::output;

#[derive(Subcommand)]
pub enum LogLevelCommand {
    #[command(about = "Set log severity for a component, or a component on one node")]
    Set(LogLevelSetArgs),

    #[command(about = "Remove a log severity override")]
    Unset(LogLevelUnsetArgs),

    #[command(about = "Show configured log severity overrides")]
    Show(LogLevelShowArgs)
}

#[derive(Args)]
pub struct LogLevelSetArgs {
    /// Component name, any case (Felix, Typha, Confd, Bird, Cni, KubeControllers, ApiServer)
    #[arg(long)]
    pub component: String,

    /// Restrict the override to one node
    #[arg(long, default_value = "")]
    pub node: String,

    /// Severity: Info or Debug
    #[arg(long)]
    pub severity: String
}

#[derive(Args)]
pub struct LogLevelUnsetArgs {
    /// Component name
    #[arg(long)]
    pub component: String,

    /// Node the override was set for
    #[arg(long, default_value = "")]
    pub node: String
}

#[derive(Args)]
pub struct LogLevelShowArgs {
    /// Only show this component
    #[arg(long)]
    pub component: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool
}

pub async fn run(cmd: LogLevelCommand, session: &Session) -> anyhow::Result<()> {
    let validator = KnownComponents;
    match cmd {
        LogLevelCommand::Set(args) => {
            require_non_empty("--component", &args.component)?;
            log_level::set(
                &session.datastore,
                &validator,
                &args.component,
                &args.node,
                &args.severity,
                session.options
            )
            .await?;
        }
        LogLevelCommand::Unset(args) => {
            require_non_empty("--component", &args.component)?;
            log_level::unset(
                &session.datastore,
                &validator,
                &args.component,
                &args.node,
                session.options
            )
            .await?;
        }
        LogLevelCommand::Show(args) => {
            if let Some(component) = &args.component {
                require_non_empty("--component", component)?;
            }
            let rows =
                log_level::show(&session.datastore, &validator, args.component.as_deref()).await?;

            if args.json {
                println!("{}", table::render_log_levels_json(&rows)?);
            } else {
                output::table(&table::render_log_levels(&rows));
                if rows.is_empty() {
                    output::hint("no log severity overrides configured");
                }
            }
        }
    }
    Ok(())
}
