#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    RandomGeneration(String),
    Malformed,
    UnsupportedAlgorithm(String),
    UnsupportedVersion(u32),
    InvalidParameter(String),
    InvalidEncoding(String),
}

impl std::fmt::Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashError::RandomGeneration(msg) => {
                write!(f, "Secure random source unavailable: {msg}")
            }
            HashError::Malformed => {
                write!(f, "Malformed hash: expected six '$'-delimited segments")
            }
            HashError::UnsupportedAlgorithm(tag) => write!(f, "Unsupported algorithm: {tag}"),
            HashError::UnsupportedVersion(version) => {
                write!(f, "Unsupported Argon2 version: {version}")
            }
            HashError::InvalidParameter(msg) => write!(f, "Invalid parameter: {msg}"),
            HashError::InvalidEncoding(msg) => write!(f, "Invalid encoding: {msg}"),
        }
    }
}

impl std::error::Error for HashError {}
