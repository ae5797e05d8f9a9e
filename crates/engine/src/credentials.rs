//! Secret hashing for accounts (Argon2, PHC string format).

use std::sync::OnceLock;

use argon2::{
    Argon2,
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
};
use rand::rngs::OsRng;

use crate::{EngineError, ResultEngine};

/// Hash `secret` with a fresh random salt.
pub(crate) fn hash_secret(secret: &str) -> ResultEngine<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| EngineError::Credential(format!("failed to hash secret: {err}")))
}

/// Verify `candidate` against a stored PHC hash.
///
/// A wrong secret is reported as [`EngineError::InvalidCredentials`].
pub(crate) fn verify_secret(candidate: &str, stored_hash: &str) -> ResultEngine<()> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|err| EngineError::Credential(format!("invalid stored hash: {err}")))?;
    Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .map_err(|err| match err {
            PasswordHashError::Password => EngineError::InvalidCredentials,
            other => EngineError::Credential(format!("verification failed: {other}")),
        })
}

/// Hash checked when the account name is unknown, so that a failed login
/// costs one Argon2 verification either way.
static PLACEHOLDER_HASH: OnceLock<String> = OnceLock::new();

/// Run a verification that always fails, taking as long as a real one, and
/// return the error to report.
pub(crate) fn reject_unknown(candidate: &str) -> EngineError {
    let stored = match PLACEHOLDER_HASH.get() {
        Some(hash) => hash,
        None => match hash_secret("placeholder account secret") {
            Ok(hash) => PLACEHOLDER_HASH.get_or_init(|| hash),
            Err(err) => return err,
        },
    };
    // A candidate equal to the placeholder secret must still fail.
    let _ = verify_secret(candidate, stored);
    EngineError::InvalidCredentials
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_not_the_secret_and_verifies() {
        let hash = hash_secret("hunter2").unwrap();
        assert_ne!(hash, "hunter2");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_secret("hunter2", &hash).is_ok());
    }

    #[test]
    fn unknown_account_is_always_rejected() {
        assert_eq!(reject_unknown("hunter2"), EngineError::InvalidCredentials);
        assert_eq!(
            reject_unknown("placeholder account secret"),
            EngineError::InvalidCredentials
        );
        assert!(PLACEHOLDER_HASH.get().is_some_and(|hash| hash.starts_with("$argon2")));
    }

    #[test]
    fn wrong_secret_is_invalid_credentials() {
        let hash = hash_secret("hunter2").unwrap();
        assert_eq!(
            verify_secret("hunter3", &hash),
            Err(EngineError::InvalidCredentials)
        );
    }
}
