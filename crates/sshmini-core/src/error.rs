//! Error types for the compact signature codec.

/// Codec errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MinisigError {
    /// Input exceeded the armored-size ceiling before any parsing.
    #[error("armored signature too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },

    /// The armor wrapper was malformed or carried the wrong label.
    #[error("invalid armored SSH signature: {reason}")]
    InvalidArmor { reason: String },

    /// The payload did not start with the SSHSIG preamble.
    #[error("invalid magic preamble")]
    BadMagic,

    /// The payload declared a wire version other than 1.
    #[error("unsupported signature version: {version}")]
    BadVersion { version: u32 },

    /// A declared length ran past the end of the payload.
    #[error("truncated signature blob reading {field}")]
    Truncated { field: &'static str },

    /// The inner signature blob was absent or incomplete.
    #[error("invalid signature blob: missing signature data")]
    MissingSignatureData,

    /// The extracted algorithm pair is not in the closed table.
    #[error("unsupported algorithm: {sig_alg:?} with {hash_alg:?}")]
    UnsupportedAlgorithm { sig_alg: String, hash_alg: String },

    /// Token shorter than a prefix byte plus one payload character.
    #[error("compact signature too short")]
    TooShort,

    /// The token's first byte maps to no known algorithm pair.
    #[error("unknown prefix: {prefix}")]
    UnknownPrefix { prefix: char },

    /// The token payload was not valid unpadded URL-safe base64.
    #[error("failed to decode signature: {0}")]
    SignatureDecode(#[from] base64::DecodeError),
}

impl MinisigError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Envelope rejected before or during unwrap
            Self::TooLarge { .. } | Self::InvalidArmor { .. } => 2,

            // Payload structure
            Self::BadMagic
            | Self::BadVersion { .. }
            | Self::Truncated { .. }
            | Self::MissingSignatureData => 3,

            // Table lookups
            Self::UnsupportedAlgorithm { .. } | Self::UnknownPrefix { .. } => 4,

            // Token shape
            Self::TooShort | Self::SignatureDecode(_) => 5,
        }
    }
}

/// Result type for codec operations.
pub type MinisigResult<T> = Result<T, MinisigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_offending_values() {
        let err = MinisigError::UnsupportedAlgorithm {
            sig_alg: "ssh-dss".to_string(),
            hash_alg: "sha512".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported algorithm: \"ssh-dss\" with \"sha512\""
        );

        let err = MinisigError::UnknownPrefix { prefix: 'x' };
        assert_eq!(err.to_string(), "unknown prefix: x");
    }

    #[test]
    fn exit_codes_group_by_stage() {
        assert_eq!(
            MinisigError::TooLarge {
                size: 9000,
                limit: 8192
            }
            .exit_code(),
            2
        );
        assert_eq!(MinisigError::BadMagic.exit_code(), 3);
        assert_eq!(
            MinisigError::Truncated { field: "namespace" }.exit_code(),
            3
        );
        assert_eq!(MinisigError::UnknownPrefix { prefix: 'x' }.exit_code(), 4);
        assert_eq!(MinisigError::TooShort.exit_code(), 5);
    }
}
