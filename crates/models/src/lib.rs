use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Findings of one validator run.
///
/// Validity is derived, never stored: a result is valid exactly when
/// `errors` is empty. Warnings are advisory and do not affect validity.
/// Entries keep the order the checks ran in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        ValidationResult {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Merge results in input order: errors and warnings concatenate, and
    /// the merged result is valid only when every input was.
    pub fn combine<I>(results: I) -> ValidationResult
    where
        I: IntoIterator<Item = ValidationResult>,
    {
        let mut combined = ValidationResult::new();
        for result in results {
            combined.errors.extend(result.errors);
            combined.warnings.extend(result.warnings);
        }
        combined
    }
}

/// Authentication scheme the environment is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    Oidc,
    Token,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid auth-method: \"{0}\". Must be \"oidc\" or \"token\".")]
pub struct ParseAuthMethodError(pub String);

impl FromStr for AuthMethod {
    type Err = ParseAuthMethodError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "oidc" => Ok(AuthMethod::Oidc),
            "token" => Ok(AuthMethod::Token),
            _ => Err(ParseAuthMethodError(input.to_string())),
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMethod::Oidc => write!(f, "oidc"),
            AuthMethod::Token => write!(f, "token"),
        }
    }
}

/// The slice of `package.json` the validators inspect. Unknown fields are
/// ignored so arbitrary manifests parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub scripts: HashMap<String, String>,
}

impl PackageManifest {
    /// Changesets needs a publish command; either script name satisfies it.
    pub fn has_publish_script(&self) -> bool {
        self.scripts.contains_key("release") || self.scripts.contains_key("publish")
    }
}
