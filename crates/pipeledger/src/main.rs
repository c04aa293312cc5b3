mod exit;
mod logging;
mod orchestrator;
mod output;

use clap::Parser;

use crate::logging::{init_logging, LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[command(
    name = "pipeledger",
    version,
    about = "Generates n random expenses and reduces them in two worker processes"
)]
struct Cli {
    /// Number of expense entries to generate. Must be an odd integer > 0.
    #[arg(allow_negative_numbers = true)]
    n: String,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

fn main() {
    // All usage errors exit with the generic failure code, including the
    // ones clap raises itself (missing or extra arguments).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(exit::FAILURE);
        }
    };

    init_logging(cli.log_format, cli.log_level);

    match orchestrator::run(&cli.n) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
