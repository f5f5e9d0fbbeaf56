//! The closed table of supported algorithm combinations.
//!
//! Each supported (signature algorithm, hash algorithm) pair owns exactly one
//! prefix byte. The forward mapping is injective; the reverse mapping is total
//! over the byte space, with unlisted bytes yielding `None`.

use serde::{Deserialize, Serialize};

/// Reserved prefix byte.
///
/// Never assigned by the forward mapping. On decode it behaves like any other
/// unlisted byte.
pub const RESERVED_PREFIX: u8 = b'z';

/// A supported (signature algorithm, hash algorithm) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmPair {
    /// `ssh-ed25519` + sha512 (`e`)
    Ed25519,
    /// `rsa-sha2-256` + sha256 (`r`)
    RsaSha256,
    /// `rsa-sha2-512` + sha512 (`s`)
    RsaSha512,
    /// `ecdsa-sha2-nistp256` + sha512 (`c`)
    EcdsaP256,
    /// `ecdsa-sha2-nistp384` + sha512 (`d`)
    EcdsaP384,
    /// `ecdsa-sha2-nistp521` + sha512 (`p`)
    EcdsaP521,
    /// `sk-ssh-ed25519@openssh.com` + sha512 (`f`)
    SkEd25519,
    /// `sk-ecdsa-sha2-nistp256@openssh.com` + sha256 (`g`)
    SkEcdsaP256,
    /// `ssh-rsa` + sha256 (`2`)
    LegacyRsaSha256,
    /// `ssh-rsa` + sha512 (`5`)
    LegacyRsaSha512,
}

impl AlgorithmPair {
    /// Every supported combination, in table order.
    pub const ALL: [AlgorithmPair; 10] = [
        Self::Ed25519,
        Self::RsaSha256,
        Self::RsaSha512,
        Self::EcdsaP256,
        Self::EcdsaP384,
        Self::EcdsaP521,
        Self::SkEd25519,
        Self::SkEcdsaP256,
        Self::LegacyRsaSha256,
        Self::LegacyRsaSha512,
    ];

    /// The prefix byte identifying this combination in a compact token.
    pub const fn prefix(self) -> u8 {
        match self {
            Self::Ed25519 => b'e',
            Self::RsaSha256 => b'r',
            Self::RsaSha512 => b's',
            Self::EcdsaP256 => b'c',
            Self::EcdsaP384 => b'd',
            Self::EcdsaP521 => b'p',
            Self::SkEd25519 => b'f',
            Self::SkEcdsaP256 => b'g',
            Self::LegacyRsaSha256 => b'2',
            Self::LegacyRsaSha512 => b'5',
        }
    }

    /// Reverse lookup from a prefix byte.
    ///
    /// Total over all 256 byte values; unlisted bytes (including
    /// [`RESERVED_PREFIX`]) yield `None`.
    pub const fn from_prefix(prefix: u8) -> Option<Self> {
        match prefix {
            b'e' => Some(Self::Ed25519),
            b'r' => Some(Self::RsaSha256),
            b's' => Some(Self::RsaSha512),
            b'c' => Some(Self::EcdsaP256),
            b'd' => Some(Self::EcdsaP384),
            b'p' => Some(Self::EcdsaP521),
            b'f' => Some(Self::SkEd25519),
            b'g' => Some(Self::SkEcdsaP256),
            b'2' => Some(Self::LegacyRsaSha256),
            b'5' => Some(Self::LegacyRsaSha512),
            _ => None,
        }
    }

    /// Exact-match lookup from the wire-format name strings.
    ///
    /// Case-sensitive; anything outside the closed table yields `None`.
    pub fn from_names(sig_alg: &str, hash_alg: &str) -> Option<Self> {
        match (sig_alg, hash_alg) {
            ("ssh-ed25519", "sha512") => Some(Self::Ed25519),
            ("rsa-sha2-256", "sha256") => Some(Self::RsaSha256),
            ("rsa-sha2-512", "sha512") => Some(Self::RsaSha512),
            ("ecdsa-sha2-nistp256", "sha512") => Some(Self::EcdsaP256),
            ("ecdsa-sha2-nistp384", "sha512") => Some(Self::EcdsaP384),
            ("ecdsa-sha2-nistp521", "sha512") => Some(Self::EcdsaP521),
            ("sk-ssh-ed25519@openssh.com", "sha512") => Some(Self::SkEd25519),
            ("sk-ecdsa-sha2-nistp256@openssh.com", "sha256") => Some(Self::SkEcdsaP256),
            ("ssh-rsa", "sha256") => Some(Self::LegacyRsaSha256),
            ("ssh-rsa", "sha512") => Some(Self::LegacyRsaSha512),
            _ => None,
        }
    }

    /// The SSH wire name of the signature algorithm.
    pub const fn signature_algorithm(self) -> &'static str {
        match self {
            Self::Ed25519 => "ssh-ed25519",
            Self::RsaSha256 => "rsa-sha2-256",
            Self::RsaSha512 => "rsa-sha2-512",
            Self::EcdsaP256 => "ecdsa-sha2-nistp256",
            Self::EcdsaP384 => "ecdsa-sha2-nistp384",
            Self::EcdsaP521 => "ecdsa-sha2-nistp521",
            Self::SkEd25519 => "sk-ssh-ed25519@openssh.com",
            Self::SkEcdsaP256 => "sk-ecdsa-sha2-nistp256@openssh.com",
            Self::LegacyRsaSha256 | Self::LegacyRsaSha512 => "ssh-rsa",
        }
    }

    /// The hash algorithm name used with this signature algorithm.
    pub const fn hash_algorithm(self) -> &'static str {
        match self {
            Self::RsaSha256 | Self::SkEcdsaP256 | Self::LegacyRsaSha256 => "sha256",
            Self::Ed25519
            | Self::RsaSha512
            | Self::EcdsaP256
            | Self::EcdsaP384
            | Self::EcdsaP521
            | Self::SkEd25519
            | Self::LegacyRsaSha512 => "sha512",
        }
    }
}
