use ::commands::{ipam, table};
use clap::{Args, Subcommand};

use super::Session;
use crate::output;

#[derive(Subcommand)]
pub enum IpamCommand {
    #[command(subcommand, about = "Get or set global IPAM configuration")]
    Config(IpamConfigCommand)
}

#[derive(Subcommand)]
pub enum IpamConfigCommand {
    #[command(about = "Print the current value of a setting")]
    Get(IpamGetArgs),

    #[command(about = "Change a setting (blockSizeIPv4, blockSizeIPv6: 1-8)")]
    Set(IpamSetArgs),

    #[command(about = "Show every setting")]
    Show
}

#[derive(Args)]
pub struct IpamGetArgs {
    /// Setting name (blockSizeIPv4 or blockSizeIPv6, case-insensitive)
    pub name: String
}

#[derive(Args)]
pub struct IpamSetArgs {
    /// Setting name (blockSizeIPv4 or blockSizeIPv6, case-insensitive)
    pub name: String,

    /// Block size in bits, 1 to 8
    #[arg(allow_hyphen_values = true)]
    pub value: String
}

pub async fn run(cmd: IpamCommand, session: &Session) -> anyhow::Result<()> {
    match cmd {
        IpamCommand::Config(IpamConfigCommand::Get(args)) => {
            let value = ipam::get(&session.datastore, &args.name).await?;
            println!("{}", value);
        }
        IpamCommand::Config(IpamConfigCommand::Set(args)) => {
            ipam::set(&session.datastore, &args.name, &args.value).await?;
        }
        IpamCommand::Config(IpamConfigCommand::Show) => {
            let settings = ipam::show(&session.datastore).await?;
            output::table(&table::render_ipam(&settings));
        }
    }
    Ok(())
}
