use crate::error::HashError;

// Salt bounds accepted by the argon2 crate; key minimum per RFC 9106.
const MIN_SALT_LENGTH: usize = 8;
const MAX_SALT_LENGTH: usize = 64;
const MIN_KEY_LENGTH: usize = 4;

/// Argon2id cost configuration, chosen once at startup and immutable after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSet {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
    pub salt_length: usize,
    pub key_length: usize,
}

impl Default for ParameterSet {
    /// OWASP-recommended Argon2id parameters (19 MiB memory, 2 iterations,
    /// single lane) with a 16-byte salt and 32-byte key.
    fn default() -> Self {
        Self {
            memory_kib: 19456,
            iterations: 2,
            parallelism: 1,
            salt_length: 16,
            key_length: 32,
        }
    }
}

impl ParameterSet {
    /// Check the startup invariants: every cost field positive, salt and key
    /// lengths within the ranges the KDF accepts.
    pub fn validate(&self) -> Result<(), HashError> {
        if self.memory_kib == 0 || self.iterations == 0 || self.parallelism == 0 {
            return Err(HashError::InvalidParameter(
                "memory, iterations, and parallelism must all be positive".to_string(),
            ));
        }

        if self.salt_length < MIN_SALT_LENGTH || self.salt_length > MAX_SALT_LENGTH {
            return Err(HashError::InvalidParameter(format!(
                "salt length must be {MIN_SALT_LENGTH}-{MAX_SALT_LENGTH} bytes, got {}",
                self.salt_length
            )));
        }

        if self.key_length < MIN_KEY_LENGTH {
            return Err(HashError::InvalidParameter(format!(
                "key length must be at least {MIN_KEY_LENGTH} bytes, got {}",
                self.key_length
            )));
        }

        Ok(())
    }
}
