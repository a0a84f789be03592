use probe::Env;

use crate::REGISTRY_AUTH_TOKEN_ENTRY;

/// True when the user-scoped `.npmrc` pins an auth token for the public
/// registry. The probe is advisory: a read failure is logged at debug level
/// and reported as no conflict, never surfaced to the result.
pub(crate) fn has_registry_auth_token(env: &dyn Env) -> bool {
    let Some(path) = probe::npmrc_path(env) else {
        return false;
    };

    match probe::fs::read_if_exists(&path) {
        Ok(Some(content)) => content.contains(REGISTRY_AUTH_TOKEN_ENTRY),
        Ok(None) => false,
        Err(err) => {
            logging::debug(&format!("Could not check {}: {}", path.display(), err));
            false
        }
    }
}
