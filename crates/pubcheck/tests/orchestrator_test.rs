use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use probe::{CommandOutput, CommandRunner};
use pubcheck_lib::orchestrator::{run, RunArgs, RunError};

// Answers the version probes the validators issue; nothing else is run.
struct StubRunner {
    node: &'static str,
    npm: &'static str,
}

impl CommandRunner for StubRunner {
    fn run(&self, program: &str, _args: &[&str]) -> io::Result<CommandOutput> {
        let stdout = match program {
            "node" => self.node,
            "npm" => self.npm,
            other => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{}: command not found", other),
                ))
            }
        };
        Ok(CommandOutput {
            stdout: format!("{}\n", stdout),
            exit_code: 0,
        })
    }
}

fn ready_runner() -> StubRunner {
    StubRunner {
        node: "v20.11.0",
        npm: "11.5.1",
    }
}

fn args(auth_method: &str) -> RunArgs {
    RunArgs {
        auth_method: auth_method.to_string(),
        fail_on_error: true,
        debug: false,
    }
}

// A repository fixture that passes every common check.
fn write_publishable_repo(dir: &Path) {
    fs::create_dir_all(dir.join(".changeset")).unwrap();
    fs::write(dir.join(".changeset").join("config.json"), "{}").unwrap();
    fs::write(
        dir.join("package.json"),
        r#"{"scripts":{"release":"changeset publish"}}"#,
    )
    .unwrap();
}

// HOME pinned to the fixture so the host ~/.npmrc stays out of the run;
// GITHUB_OUTPUT routed to a scratch file we can assert on.
fn base_env(home: &Path, output: &Path) -> HashMap<String, String> {
    let mut env = HashMap::new();
    env.insert("HOME".to_string(), home.display().to_string());
    env.insert("GITHUB_OUTPUT".to_string(), output.display().to_string());
    env
}

fn oidc_env(home: &Path, output: &Path) -> HashMap<String, String> {
    let mut env = base_env(home, output);
    env.insert(
        "ACTIONS_ID_TOKEN_REQUEST_URL".to_string(),
        "https://token.actions.example".to_string(),
    );
    env.insert(
        "ACTIONS_ID_TOKEN_REQUEST_TOKEN".to_string(),
        "request-bearer".to_string(),
    );
    env
}

#[test]
fn oidc_run_passes_and_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    write_publishable_repo(dir.path());
    let output = dir.path().join("github_output");
    let env = oidc_env(dir.path(), &output);

    let outcome = run(&args("oidc"), &env, &ready_runner(), dir.path());

    assert!(outcome.is_ok());
    assert_eq!(fs::read_to_string(&output).unwrap(), "valid=true\n");
}

#[test]
fn token_run_passes_and_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    write_publishable_repo(dir.path());
    let output = dir.path().join("github_output");
    let mut env = base_env(dir.path(), &output);
    env.insert(
        "NPM_TOKEN".to_string(),
        "npm_1234567890abcdefghij".to_string(),
    );

    let outcome = run(&args("token"), &env, &ready_runner(), dir.path());

    assert!(outcome.is_ok());
    assert_eq!(fs::read_to_string(&output).unwrap(), "valid=true\n");
}

#[test]
fn auth_method_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    write_publishable_repo(dir.path());
    let output = dir.path().join("github_output");
    let env = oidc_env(dir.path(), &output);

    assert!(run(&args("OIDC"), &env, &ready_runner(), dir.path()).is_ok());
}

#[test]
fn invalid_auth_method_fails_before_validation() {
    let dir = tempfile::tempdir().unwrap();
    write_publishable_repo(dir.path());
    let output = dir.path().join("github_output");
    let env = oidc_env(dir.path(), &output);

    let err = run(&args("basic"), &env, &ready_runner(), dir.path()).unwrap_err();

    assert!(matches!(err, RunError::Config(_)));
    assert!(err.to_string().contains("Invalid auth-method"));
    assert!(err.to_string().contains("\"basic\""));
    // No validator ran, so no output was persisted.
    assert!(!output.exists());
}

#[test]
fn failed_validation_reports_error_count() {
    let dir = tempfile::tempdir().unwrap();
    // No .changeset/config.json and no NPM_TOKEN: one common error plus one
    // token error.
    fs::write(
        dir.path().join("package.json"),
        r#"{"scripts":{"release":"changeset publish"}}"#,
    )
    .unwrap();
    let output = dir.path().join("github_output");
    let env = base_env(dir.path(), &output);

    let err = run(&args("token"), &env, &ready_runner(), dir.path()).unwrap_err();

    match &err {
        RunError::ValidationFailed(count) => assert_eq!(*count, 2),
        other => panic!("expected ValidationFailed, got {:?}", other),
    }
    assert!(err.to_string().contains("2 error(s)"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "valid=false\n");
}

#[test]
fn advisory_mode_never_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("github_output");
    let env = base_env(dir.path(), &output);

    let mut advisory = args("token");
    advisory.fail_on_error = false;

    let outcome = run(&advisory, &env, &ready_runner(), dir.path());

    assert!(outcome.is_ok());
    assert_eq!(fs::read_to_string(&output).unwrap(), "valid=false\n");
}
