// probe crate
//
// Leaf I/O wrappers the validators run against: environment lookup, file
// probes, and subprocess invocation. No validation policy lives here.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::process::Command;

/// Environment lookup used by the validators.
///
/// Injected by the caller instead of read from process globals, so the
/// validators can be driven against a fixed map.
pub trait Env {
    fn var(&self, name: &str) -> Option<String>;

    /// True when the variable is set to a non-empty value.
    fn is_set(&self, name: &str) -> bool {
        self.var(name).map_or(false, |value| !value.is_empty())
    }
}

/// The process environment.
pub struct SystemEnv;

impl Env for SystemEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Env for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Per-user npm credentials file, resolved from the injected environment
/// with a host fallback. An empty `HOME` counts as unset.
pub fn npmrc_path(env: &dyn Env) -> Option<PathBuf> {
    env.var("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .map(|home| home.join(".npmrc"))
}

pub mod fs {
    use std::io;
    use std::path::Path;

    pub fn exists(path: &Path) -> bool {
        path.exists()
    }

    pub fn read_text(path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    /// Read a file that is allowed to be absent. `Ok(None)` means the file
    /// does not exist; `Err` means it exists but could not be read, and the
    /// caller decides whether that matters.
    pub fn read_if_exists(path: &Path) -> io::Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(path).map(Some)
    }
}

/// Captured output of a finished subprocess.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Subprocess seam; the validators only ever need stdout and the exit code.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;
}

/// Runs commands on the host and waits for them to exit.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}
