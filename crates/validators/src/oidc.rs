use std::io;

use models::ValidationResult;
use probe::{CommandRunner, Env};

use crate::version::Version;
use crate::{npmrc, ID_TOKEN_REQUEST_TOKEN, ID_TOKEN_REQUEST_URL, NPM_TOKEN};

/// Oldest npm release that can mint trusted-publishing tokens.
const MIN_NPM_VERSION: Version = Version::new(11, 5, 1);

/// Readiness checks for OIDC (trusted publishing) authentication.
///
/// Checks:
/// 1. npm version >= 11.5.1 (required for OIDC support)
/// 2. id-token: write permission (via ACTIONS_ID_TOKEN_REQUEST_URL)
/// 3. ACTIONS_ID_TOKEN_REQUEST_TOKEN is present
/// 4. No conflicting NPM_TOKEN set
pub fn validate_oidc(env: &dyn Env, runner: &dyn CommandRunner) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_npm_version(runner, &mut result);

    if !env.is_set(ID_TOKEN_REQUEST_URL) {
        result.add_error(concat!(
            "id-token: write permission not detected.\n",
            "Add to your workflow:\n",
            "permissions:\n",
            "  contents: write\n",
            "  pull-requests: write\n",
            "  id-token: write"
        ));
    } else {
        logging::info("✓ id-token: write permission detected");
    }

    if !env.is_set(ID_TOKEN_REQUEST_TOKEN) {
        result.add_error(format!(
            "{} environment variable not found.\nThis indicates an issue with GitHub Actions OIDC configuration.",
            ID_TOKEN_REQUEST_TOKEN
        ));
    }

    if env.is_set(NPM_TOKEN) {
        result.add_error(
            "NPM_TOKEN is set but auth-method is \"oidc\".\nRemove NPM_TOKEN from your workflow:\n  1. Remove NPM_TOKEN from env section\n  2. Or switch to auth-method: token",
        );
    } else {
        logging::info("✓ No conflicting NPM_TOKEN found");
    }

    if npmrc::has_registry_auth_token(env) {
        result.add_warning(
            "Found existing authToken in ~/.npmrc file.\nThis may conflict with OIDC authentication.\nConsider removing it or ensuring it's not for registry.npmjs.org",
        );
    }

    result
}

fn check_npm_version(runner: &dyn CommandRunner, result: &mut ValidationResult) {
    let version = match npm_version(runner) {
        Ok(version) => version,
        Err(err) => {
            result.add_error(format!(
                "Failed to check npm version: {}\nEnsure npm is installed and accessible.",
                err
            ));
            return;
        }
    };

    logging::info(&format!("Detected npm version: {}", version));

    match version.parse::<Version>() {
        Ok(parsed) if parsed >= MIN_NPM_VERSION => {}
        Ok(_) => {
            result.add_error(format!(
                "npm version {} detected. npm {}+ required for OIDC.\nAdd step to your workflow:\n  - name: Update npm\n    run: npm install -g npm@latest",
                version, MIN_NPM_VERSION
            ));
        }
        Err(err) => {
            result.add_error(format!("Failed to check npm version: {}", err));
        }
    }
}

fn npm_version(runner: &dyn CommandRunner) -> io::Result<String> {
    let output = runner.run("npm", &["--version"])?;
    if !output.success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("npm --version exited with code {}", output.exit_code),
        ));
    }
    Ok(output.stdout.trim().to_string())
}
