use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;

use crate::error::HashError;

/// Algorithm tag embedded in every encoded hash.
pub const ALGORITHM_TAG: &str = "argon2id";

/// Argon2 version this crate produces and accepts.
pub const VERSION: u32 = argon2::Version::V0x13 as u32;

/// Fields recovered from an encoded hash string. These are the parameters
/// the hash was created with, which may differ from any current
/// `ParameterSet`.
pub struct Decoded {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
    pub salt: Vec<u8>,
    pub key: Vec<u8>,
}

impl std::fmt::Debug for Decoded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoded")
            .field("memory_kib", &self.memory_kib)
            .field("iterations", &self.iterations)
            .field("parallelism", &self.parallelism)
            .field("salt", &"[REDACTED]")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Format the six-segment hash string:
/// `$argon2id$v=19$m=<m>,t=<t>,p=<p>$<b64-salt>$<b64-key>`.
pub fn encode(
    memory_kib: u32,
    iterations: u32,
    parallelism: u32,
    salt: &[u8],
    key: &[u8],
) -> String {
    format!(
        "${ALGORITHM_TAG}$v={VERSION}$m={memory_kib},t={iterations},p={parallelism}${}${}",
        STANDARD_NO_PAD.encode(salt),
        STANDARD_NO_PAD.encode(key),
    )
}

/// Parse an encoded hash back into its parameters, salt, and key.
pub fn decode(s: &str) -> Result<Decoded, HashError> {
    let segments: Vec<&str> = s.split('$').collect();
    if segments.len() != 6 || !segments[0].is_empty() {
        return Err(HashError::Malformed);
    }

    if segments[1] != ALGORITHM_TAG {
        return Err(HashError::UnsupportedAlgorithm(segments[1].to_string()));
    }

    let version: u32 = segments[2]
        .strip_prefix("v=")
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| {
            HashError::InvalidParameter(format!("unreadable version segment: {}", segments[2]))
        })?;
    if version != VERSION {
        return Err(HashError::UnsupportedVersion(version));
    }

    let (memory_kib, iterations, parallelism) = parse_costs(segments[3])?;

    let salt = STANDARD_NO_PAD
        .decode(segments[4])
        .map_err(|e| HashError::InvalidEncoding(format!("salt segment: {e}")))?;
    let key = STANDARD_NO_PAD
        .decode(segments[5])
        .map_err(|e| HashError::InvalidEncoding(format!("key segment: {e}")))?;

    Ok(Decoded {
        memory_kib,
        iterations,
        parallelism,
        salt,
        key,
    })
}

/// Parse `m=<int>,t=<int>,p=<int>` in exactly that order.
fn parse_costs(segment: &str) -> Result<(u32, u32, u32), HashError> {
    let mut fields = segment.split(',');
    let mut next = |prefix: &str| {
        fields
            .next()
            .and_then(|field| field.strip_prefix(prefix))
            .and_then(|value| value.parse::<u32>().ok())
            .ok_or_else(|| {
                HashError::InvalidParameter(format!("unreadable cost segment: {segment}"))
            })
    };

    let memory_kib = next("m=")?;
    let iterations = next("t=")?;
    let parallelism = next("p=")?;

    if fields.next().is_some() {
        return Err(HashError::InvalidParameter(format!(
            "unreadable cost segment: {segment}"
        )));
    }

    Ok((memory_kib, iterations, parallelism))
}
