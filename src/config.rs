use crate::error::HashError;
use crate::params::ParameterSet;

/// Load the hashing parameter set from `CREDHASH_*` environment variables,
/// falling back to the defaults for any that are unset. Invalid values are
/// a startup error, never deferred to hash time.
pub fn params_from_env() -> Result<ParameterSet, HashError> {
    let defaults = ParameterSet::default();

    let params = ParameterSet {
        memory_kib: env_parse("CREDHASH_MEMORY_KIB", defaults.memory_kib)?,
        iterations: env_parse("CREDHASH_ITERATIONS", defaults.iterations)?,
        parallelism: env_parse("CREDHASH_PARALLELISM", defaults.parallelism)?,
        salt_length: env_parse("CREDHASH_SALT_LENGTH", defaults.salt_length)?,
        key_length: env_parse("CREDHASH_KEY_LENGTH", defaults.key_length)?,
    };

    params.validate()?;

    tracing::info!(
        "Password hashing configured: m={} KiB, t={}, p={}, salt={}B, key={}B",
        params.memory_kib,
        params.iterations,
        params.parallelism,
        params.salt_length,
        params.key_length
    );

    Ok(params)
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T, HashError> {
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|_| HashError::InvalidParameter(format!("Invalid {key}: {value}"))),
        Err(_) => Ok(default),
    }
}
