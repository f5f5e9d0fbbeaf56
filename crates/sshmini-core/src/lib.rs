//! Compact tokens for armored SSH signatures.
//!
//! Converts the armored signatures produced by `ssh-keygen -Y sign` into the
//! smallest possible representation for consumers that already know the
//! public key and namespace out of band:
//!
//! - one ASCII byte naming the (signature algorithm, hash algorithm)
//!   combination
//! - the raw signature bytes, base64url-encoded without padding
//!
//! # Quick Start
//!
//! ```
//! use sshmini_core::{decode, AlgorithmPair};
//!
//! let (pair, sig) = decode("eAQID")?;
//! assert_eq!(pair, AlgorithmPair::Ed25519);
//! assert_eq!(sig, [0x01, 0x02, 0x03]);
//! # Ok::<(), sshmini_core::MinisigError>(())
//! ```
//!
//! Encoding takes the whole armored envelope and performs the reverse walk:
//! size ceiling, armor unwrap, SSHSIG payload parse, algorithm table lookup,
//! compact text encoding. Both directions are pure functions over in-memory
//! buffers; the only shared state is the closed algorithm table.

pub mod alg;
mod armor;
pub mod blob;
pub mod codec;
pub mod error;

// Re-export main types
pub use alg::{AlgorithmPair, RESERVED_PREFIX};
pub use armor::ENVELOPE_LABEL;
pub use blob::{parse_signature_blob, SignatureBlob};
pub use codec::{decode, encode, MAX_ARMORED_SIZE};
pub use error::{MinisigError, MinisigResult};
