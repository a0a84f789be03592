use std::path::Path;

use models::{AuthMethod, ParseAuthMethodError, ValidationResult};
use probe::{CommandRunner, Env};
use thiserror::Error;
use validators::{validate_common, validate_oidc, validate_token};

use crate::debug;
use crate::outputs;

/// Inputs consumed from the host CI configuration.
#[derive(Debug, Clone)]
pub struct RunArgs {
    pub auth_method: String,
    pub fail_on_error: bool,
    pub debug: bool,
}

/// Terminal failures of a validation run. Everything recoverable is
/// reported as result data and logged instead.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ParseAuthMethodError),

    #[error("Validation failed with {0} error(s). See logs above for details.")]
    ValidationFailed(usize),

    #[error("Failed to write action output: {0}")]
    Output(#[from] std::io::Error),
}

/// Runs the full preflight: common checks plus the validator for the
/// selected auth method, in that order, then renders the verdict and
/// persists the `valid` output.
///
/// A bad auth-method selector fails before any validator runs. With
/// `fail_on_error` unset the run ends `Ok` even when invalid, so the check
/// can be used in advisory mode.
pub fn run(
    args: &RunArgs,
    env: &dyn Env,
    runner: &dyn CommandRunner,
    cwd: &Path,
) -> Result<(), RunError> {
    let auth_method: AuthMethod = args.auth_method.parse()?;

    logging::info("🔍 Changesets Publish Validator");
    logging::info(&format!("Authentication method: {}", auth_method));
    logging::info(&format!("Fail on error: {}", args.fail_on_error));
    logging::info(&format!("Debug mode: {}", args.debug));
    logging::info("");

    if args.debug {
        debug::output_debug_info(env, runner);
    }

    logging::start_group("Running common validations");
    let common = validate_common(cwd, runner);
    format_results(&common, "Common validations");
    logging::end_group();

    let auth = match auth_method {
        AuthMethod::Oidc => {
            logging::start_group("Running OIDC validations");
            let auth = validate_oidc(env, runner);
            format_results(&auth, "OIDC validations");
            logging::end_group();
            auth
        }
        AuthMethod::Token => {
            logging::start_group("Running token validations");
            let auth = validate_token(env);
            format_results(&auth, "Token validations");
            logging::end_group();
            auth
        }
    };

    let combined = ValidationResult::combine([common, auth]);

    outputs::set_output(env, "valid", &combined.is_valid().to_string())?;

    logging::info("");
    if combined.is_valid() {
        logging::info("✅ All validations passed!");
        logging::info(
            "Your environment is properly configured for npm publishing with changesets.",
        );
        return Ok(());
    }

    let error_count = combined.errors.len();
    let warning_count = combined.warnings.len();

    logging::info(&format!("❌ Validation failed with {} error(s)", error_count));
    if warning_count > 0 {
        logging::info(&format!("⚠️  {} warning(s) found", warning_count));
    }
    logging::info("");
    logging::info("Please fix the errors above and try again.");
    logging::info("For more information, rerun with --debug for detailed environment info.");

    if args.fail_on_error {
        return Err(RunError::ValidationFailed(error_count));
    }

    Ok(())
}

// Renders one validator's findings as grouped log output.
fn format_results(result: &ValidationResult, label: &str) {
    if result.errors.is_empty() {
        logging::info(&format!("✓ {} - passed", label));
    } else {
        logging::start_group(&format!("❌ {} - {} error(s)", label, result.errors.len()));
        for error in &result.errors {
            logging::error(error);
        }
        logging::end_group();
    }

    if !result.warnings.is_empty() {
        logging::start_group(&format!(
            "⚠️  {} - {} warning(s)",
            label,
            result.warnings.len()
        ));
        for warning in &result.warnings {
            logging::warning(warning);
        }
        logging::end_group();
    }
}
