use std::fs::OpenOptions;
use std::io::{self, Write};

use probe::Env;

/// File the runner collects step outputs from.
const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

/// Persist a step output for downstream jobs. Outside a workflow run (no
/// GITHUB_OUTPUT target) the value is only logged.
pub fn set_output(env: &dyn Env, key: &str, value: &str) -> io::Result<()> {
    match env.var(GITHUB_OUTPUT) {
        Some(path) if !path.is_empty() => {
            let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
            writeln!(file, "{}={}", key, value)?;
        }
        _ => logging::info(&format!("Output {}={}", key, value)),
    }
    Ok(())
}

/// Report the single terminal failure of a run; the caller owns the nonzero
/// exit.
pub fn set_failed(message: &str) {
    logging::error(message);
}
