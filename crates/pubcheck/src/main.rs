use std::path::PathBuf;

use clap::Parser;
use probe::{SystemEnv, SystemRunner};
use pubcheck_lib::orchestrator::{self, RunArgs};
use pubcheck_lib::outputs;

#[derive(Debug, Parser)]
#[command(
    name = "pubcheck",
    about = "Preflight validator for npm publishing with changesets",
    version,
    long_about = "Validates that a CI environment is ready to publish npm packages with changesets.\n\nExamples:\n  pubcheck --auth-method oidc                        # Validate trusted publishing setup\n  pubcheck --auth-method token                       # Validate NPM_TOKEN setup\n  pubcheck --auth-method oidc --fail-on-error false  # Advisory mode, never fails the job\n  pubcheck --auth-method token --debug               # Dump environment details first"
)]
struct Pubcheck {
    /// Authentication method to validate ("oidc" or "token")
    #[arg(long)]
    auth_method: String,

    /// Exit nonzero when validation errors are found
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    fail_on_error: bool,

    /// Print detailed environment diagnostics before validating
    #[arg(long)]
    debug: bool,

    /// Directory of the package being published
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

fn main() {
    let cli = Pubcheck::parse();

    if cli.debug {
        logging::set_log_level(logging::LogLevel::Debug);
    } else {
        logging::set_log_level(logging::LogLevel::Info);
    }

    let args = RunArgs {
        auth_method: cli.auth_method,
        fail_on_error: cli.fail_on_error,
        debug: cli.debug,
    };

    if let Err(err) = orchestrator::run(&args, &SystemEnv, &SystemRunner, &cli.dir) {
        outputs::set_failed(&err.to_string());
        std::process::exit(1);
    }
}
