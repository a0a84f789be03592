use std::io;

use probe::{CommandRunner, Env};
use validators::{
    ID_TOKEN_REQUEST_TOKEN, ID_TOKEN_REQUEST_URL, NPM_TOKEN, REGISTRY_AUTH_TOKEN_ENTRY,
};

/// Dumps environment details that help diagnose validation failures.
/// Informational only; never influences the verdict.
pub fn output_debug_info(env: &dyn Env, runner: &dyn CommandRunner) {
    logging::start_group("Debug Information");

    match run_trimmed(runner, "node", &["--version"]) {
        Ok(version) => logging::info(&format!("Node.js version: {}", version)),
        Err(err) => logging::warning(&format!("Could not detect Node.js version: {}", err)),
    }

    match run_trimmed(runner, "npm", &["--version"]) {
        Ok(version) => logging::info(&format!("npm version: {}", version)),
        Err(err) => logging::warning(&format!("Could not detect npm version: {}", err)),
    }

    match run_trimmed(runner, "npm", &["config", "list"]) {
        Ok(config) => {
            logging::info("npm configuration:");
            logging::info(&config);
        }
        Err(err) => logging::debug(&format!("Could not get npm config: {}", err)),
    }

    logging::info("");
    logging::info("Relevant Environment Variables:");
    logging::info(&format!("{}: {}", NPM_TOKEN, describe_secret(env, NPM_TOKEN)));
    logging::info(&format!(
        "{}: {}",
        ID_TOKEN_REQUEST_URL,
        describe_presence(env, ID_TOKEN_REQUEST_URL)
    ));
    logging::info(&format!(
        "{}: {}",
        ID_TOKEN_REQUEST_TOKEN,
        describe_presence(env, ID_TOKEN_REQUEST_TOKEN)
    ));
    for name in ["HOME", "CI", "GITHUB_ACTIONS"] {
        logging::info(&format!(
            "{}: {}",
            name,
            env.var(name).unwrap_or_else(|| "NOT SET".to_string())
        ));
    }

    check_npmrc(env);

    logging::end_group();
}

fn run_trimmed(runner: &dyn CommandRunner, program: &str, args: &[&str]) -> io::Result<String> {
    let output = runner.run(program, args)?;
    if !output.success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("{} exited with code {}", program, output.exit_code),
        ));
    }
    Ok(output.stdout.trim().to_string())
}

// Secrets are reported by presence and length only.
fn describe_secret(env: &dyn Env, name: &str) -> String {
    match env.var(name) {
        Some(value) => format!("***SET*** (length: {})", value.len()),
        None => "NOT SET".to_string(),
    }
}

fn describe_presence(env: &dyn Env, name: &str) -> &'static str {
    if env.var(name).is_some() {
        "***SET***"
    } else {
        "NOT SET"
    }
}

fn check_npmrc(env: &dyn Env) {
    let Some(path) = probe::npmrc_path(env) else {
        logging::info(".npmrc: no home directory resolved");
        return;
    };

    match probe::fs::read_if_exists(&path) {
        Ok(Some(content)) => {
            logging::info(&format!(
                ".npmrc found at {} ({} line(s))",
                path.display(),
                content.lines().count()
            ));
            if content.contains(REGISTRY_AUTH_TOKEN_ENTRY) {
                logging::info(".npmrc contains an authToken entry for registry.npmjs.org");
            }
        }
        Ok(None) => logging::info(&format!(".npmrc not found at {}", path.display())),
        Err(err) => logging::debug(&format!("Could not check {}: {}", path.display(), err)),
    }
}
