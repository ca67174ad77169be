use clap::{Parser, Subcommand};
use montehist_core::cli::report::{ReportArgs, run_report};
use montehist_core::cli::{CheckArgs, check, print_section_error};
use montehist_core::logging::init_logging;
use montehist_core::sections::SectionError;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "montehist",
    version,
    about = "montehist: log-scale summaries of sectioned simulation results"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize every section and print averages and histograms (default)
    Report(ReportArgs),

    /// Parse the input and list its sections
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    init_logging();
    debug!(command = ?cli.command, "starting");

    match cli.command {
        Some(Command::Report(args)) => {
            let plain = args.plain || args.json;
            if let Err(e) = run_report(args) {
                fail(e, plain);
            }
        }

        Some(Command::Check(args)) => {
            if let Err(e) = check(args) {
                fail(e, true);
            }
        }

        None => {
            if let Err(e) = run_report(ReportArgs::default()) {
                fail(e, false);
            }
        }
    }
}

fn fail(err: anyhow::Error, plain: bool) -> ! {
    match err.downcast::<SectionError>() {
        Ok(err) => print_section_error(err, plain),
        Err(err) => eprintln!("montehist error: {err:#}"),
    }
    std::process::exit(1);
}
