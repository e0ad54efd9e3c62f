use argon2::{Algorithm, Argon2, Params, Version};
use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::compare;
use crate::encoding::{self, Decoded};
use crate::error::HashError;
use crate::params::ParameterSet;

/// Argon2id password hasher.
///
/// Holds only immutable configuration, so a single instance can be shared
/// across any number of threads without locking. Every in-flight `hash` or
/// `verify` call allocates the full configured memory cost (`memory_kib`
/// KiB) for the duration of the derivation and cannot be cancelled once
/// started. The hasher performs no admission control of its own: callers
/// must bound concurrent invocations, e.g. with a semaphore sized to
/// `available_ram_kib / memory_kib`, or a login flood can exhaust process
/// memory.
pub struct Hasher {
    params: ParameterSet,
    argon2: Argon2<'static>,
}

impl Hasher {
    /// Build a hasher from a parameter set. Invalid cost values are rejected
    /// here at startup; `hash` itself can then only fail on the random source.
    pub fn new(params: ParameterSet) -> Result<Self, HashError> {
        params.validate()?;
        let kdf = kdf_params(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            params.key_length,
        )?;

        Ok(Self {
            params,
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, kdf),
        })
    }

    /// Hash a password (any bytes, including empty) with a fresh random salt,
    /// returning the self-describing encoded string. The string embeds the
    /// parameters used, so later verification never depends on this hasher's
    /// configuration.
    pub fn hash(&self, password: &[u8]) -> Result<String, HashError> {
        let mut salt = vec![0u8; self.params.salt_length];
        OsRng.try_fill_bytes(&mut salt).map_err(|e| {
            tracing::error!("OS random source failed during password hash: {e}");
            HashError::RandomGeneration(e.to_string())
        })?;

        let mut key = vec![0u8; self.params.key_length];
        self.argon2
            .hash_password_into(password, &salt, &mut key)
            .map_err(|e| HashError::InvalidParameter(e.to_string()))?;

        Ok(encoding::encode(
            self.params.memory_kib,
            self.params.iterations,
            self.params.parallelism,
            &salt,
            &key,
        ))
    }

    /// Verify a password against an encoded hash.
    ///
    /// The key is re-derived with the parameters embedded in `encoded`, not
    /// with this hasher's own, and the candidate is sized to the stored
    /// key's length, so cost or key-length upgrades never break existing
    /// hashes. Returns `Ok(false)` on mismatch with no error. Decode
    /// failures return a typed error that login flows must treat exactly
    /// like a mismatch.
    pub fn verify(&self, password: &[u8], encoded: &str) -> Result<bool, HashError> {
        let decoded = encoding::decode(encoded)?;
        let candidate = derive_candidate(password, &decoded)?;
        Ok(compare::bytes_eq(&candidate, &decoded.key))
    }

    /// Report whether `encoded` was produced with parameters different from
    /// this hasher's current set, so the caller can re-hash on the next
    /// successful login.
    pub fn needs_rehash(&self, encoded: &str) -> Result<bool, HashError> {
        let decoded = encoding::decode(encoded)?;

        Ok(decoded.memory_kib != self.params.memory_kib
            || decoded.iterations != self.params.iterations
            || decoded.parallelism != self.params.parallelism
            || decoded.salt.len() != self.params.salt_length
            || decoded.key.len() != self.params.key_length)
    }
}

fn kdf_params(
    memory_kib: u32,
    iterations: u32,
    parallelism: u32,
    key_length: usize,
) -> Result<Params, HashError> {
    Params::new(memory_kib, iterations, parallelism, Some(key_length))
        .map_err(|e| HashError::InvalidParameter(e.to_string()))
}

fn derive_candidate(password: &[u8], decoded: &Decoded) -> Result<Vec<u8>, HashError> {
    let kdf = kdf_params(
        decoded.memory_kib,
        decoded.iterations,
        decoded.parallelism,
        decoded.key.len(),
    )?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, kdf);

    let mut candidate = vec![0u8; decoded.key.len()];
    argon2
        .hash_password_into(password, &decoded.salt, &mut candidate)
        .map_err(|e| HashError::InvalidParameter(e.to_string()))?;

    Ok(candidate)
}
