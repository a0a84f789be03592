// validators crate

mod common;
mod npmrc;
mod oidc;
mod token;
mod version;

pub use common::validate_common;
pub use oidc::validate_oidc;
pub use token::validate_token;
pub use version::{ParseVersionError, Version};

/// Static registry token consumed by token-based publishing.
pub const NPM_TOKEN: &str = "NPM_TOKEN";

/// Set by the runner when the job carries the `id-token: write` permission.
pub const ID_TOKEN_REQUEST_URL: &str = "ACTIONS_ID_TOKEN_REQUEST_URL";

/// Bearer the runner exposes for redeeming an OIDC token request.
pub const ID_TOKEN_REQUEST_TOKEN: &str = "ACTIONS_ID_TOKEN_REQUEST_TOKEN";

/// Auth-token entry the changesets action writes for the public registry.
pub const REGISTRY_AUTH_TOKEN_ENTRY: &str = "//registry.npmjs.org/:_authToken=";
