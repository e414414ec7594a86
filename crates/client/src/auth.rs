//! Bearer token helpers

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Token length used when callers have no preference
pub const DEFAULT_BEARER_TOKEN_LENGTH: usize = 32;

/// Generates a random alphanumeric bearer token
///
/// Suitable for provisioning new API keys; uses the thread-local CSPRNG.
pub fn generate_bearer_token(length: usize) -> String {
    let rng = rand::thread_rng();
    rng.sample_iter(&Alphanumeric).take(length).map(char::from).collect()
}
