//! Command implementations for the Lotacor CLI.
//!
//! Provides subcommands for posting a query to the Lotacor API and for
//! listing the report types it understands.

use clap::Subcommand;

pub mod query;

pub use query::QueryArgs;

#[derive(Subcommand)]
pub enum Command {
    /// Post a query to the Lotacor API and print the response
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// List the report type codes accepted by --type
    ReportTypes,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Query { args } => query::run_query(args).await,
        Command::ReportTypes => {
            print!("{}", query::report_types_table());
            Ok(())
        }
    }
}
