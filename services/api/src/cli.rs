use crate::demo::{run_cohort_report, run_demo, CohortReportArgs, DemoArgs};
use crate::server;
use career_compass::config::AppConfig;
use career_compass::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Compass",
    about = "Deterministic career readiness scoring, recommendations, and cohort reporting",
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
    /// Batch-evaluate questionnaire exports for cohort reviews
    Cohort {
        #[command(subcommand)]
        command: CohortCommand,
    },
    /// Run an end-to-end CLI demo covering evaluation and recommendations
    Demo(DemoArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(ServeArgs::default())
    }
}

#[derive(Subcommand, Debug)]
enum CohortCommand {
    /// Evaluate a CSV export and print the cohort report
    Report(CohortReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

impl ServeArgs {
    /// Command-line flags beat `.env` and process environment values.
    pub(crate) fn apply(self, config: &mut AppConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Serve(args) => server::run(args).await,
        Command::Cohort {
            command: CohortCommand::Report(args),
        } => run_cohort_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
