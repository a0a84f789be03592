use std::path::Path;

use models::{PackageManifest, ValidationResult};
use probe::CommandRunner;

use crate::version::Version;

/// Oldest Node.js major recommended for modern npm auth flows.
const MIN_NODE_MAJOR: u64 = 18;

/// Repository-level prerequisites shared by both auth schemes.
///
/// Only the two existence checks can fail the result; the manifest content
/// and Node.js version checks are advisory. All checks run unconditionally.
pub fn validate_common(cwd: &Path, runner: &dyn CommandRunner) -> ValidationResult {
    let mut result = ValidationResult::new();

    let changeset_config = cwd.join(".changeset").join("config.json");
    if !probe::fs::exists(&changeset_config) {
        result.add_error(format!(
            "Changesets configuration not found at {}\nInitialize changesets with:\n  npx @changesets/cli init",
            changeset_config.display()
        ));
    } else {
        logging::info("✓ Found changesets configuration");
    }

    let manifest_path = cwd.join("package.json");
    if !probe::fs::exists(&manifest_path) {
        result.add_error(format!(
            "package.json not found at {}\nEnsure you are running in the correct directory.",
            manifest_path.display()
        ));
    } else {
        logging::info("✓ Found package.json");
        check_publish_script(&manifest_path, &mut result);
    }

    check_node_version(runner, &mut result);

    result
}

// A manifest that cannot be read or parsed is a warning, not an error; the
// existence check above already passed.
fn check_publish_script(manifest_path: &Path, result: &mut ValidationResult) {
    let manifest = probe::fs::read_text(manifest_path)
        .map_err(|err| err.to_string())
        .and_then(|text| {
            serde_json::from_str::<PackageManifest>(&text).map_err(|err| err.to_string())
        });

    match manifest {
        Ok(manifest) => {
            if manifest.has_publish_script() {
                logging::info("✓ Found publish/release script");
            } else {
                result.add_warning(
                    "No \"release\" or \"publish\" script found in package.json.\nThe changesets action typically needs a publish command.\nAdd a script like:\n  \"release\": \"changeset publish\"",
                );
            }
        }
        Err(err) => result.add_warning(format!("Could not parse package.json: {}", err)),
    }
}

fn check_node_version(runner: &dyn CommandRunner, result: &mut ValidationResult) {
    let version = match runner.run("node", &["--version"]) {
        Ok(output) if output.success() => output.stdout.trim().to_string(),
        Ok(output) => {
            result.add_warning(format!(
                "Could not detect Node.js version: node --version exited with code {}",
                output.exit_code
            ));
            return;
        }
        Err(err) => {
            result.add_warning(format!("Could not detect Node.js version: {}", err));
            return;
        }
    };

    logging::info(&format!("Detected Node.js version: {}", version));

    match version.parse::<Version>() {
        Ok(parsed) if parsed.major < MIN_NODE_MAJOR => {
            result.add_warning(format!(
                "Node.js version {} detected.\nNode.js {} or higher is recommended for modern npm features.\nUpdate your workflow to use a newer Node.js version.",
                version, MIN_NODE_MAJOR
            ));
        }
        Ok(_) => {}
        Err(_) => {
            result.add_warning(format!(
                "Could not parse Node.js version from \"{}\"",
                version
            ));
        }
    }
}
