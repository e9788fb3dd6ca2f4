use crate::commands::{run_audit, run_catalog, AuditRunArgs, CatalogArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use opportunity_audit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "AI Opportunity Audit",
    about = "Score businesses for AI readiness and serve the audit quiz API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an audit from the command line
    Audit {
        #[command(subcommand)]
        command: AuditCommand,
    },
    /// List sectors, pain points, and tier options
    Catalog(CatalogArgs),
}

#[derive(Subcommand, Debug)]
enum AuditCommand {
    /// Compute a result and print the recommendations
    Run(AuditRunArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Audit {
            command: AuditCommand::Run(args),
        } => run_audit(args),
        Command::Catalog(args) => run_catalog(args),
    }
}
