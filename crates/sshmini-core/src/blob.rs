//! SSHSIG payload parsing.
//!
//! Walks the unwrapped armor payload: magic preamble, version, three skipped
//! header fields, the hash algorithm name, then the nested signature blob.
//! Every length field is attacker-controlled; all reads go through a
//! bounds-checked cursor that fails instead of indexing out of range.

use crate::error::{MinisigError, MinisigResult};

/// Magic preamble at the start of every SSHSIG payload.
const MAGIC: &[u8; 6] = b"SSHSIG";

/// The only wire version this parser accepts.
const VERSION: u32 = 1;

/// Parsed contents of an SSHSIG payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureBlob {
    /// Signature algorithm name, e.g. `ssh-ed25519`.
    pub sig_alg: String,
    /// Hash algorithm name, `sha256` or `sha512`.
    pub hash_alg: String,
    /// Raw signature bytes, with any security-key trailer appended verbatim.
    pub signature: Vec<u8>,
}

/// Cursor over an untrusted byte buffer.
struct Cursor<'a> {
    buf: &'a [u8],
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    fn take(&mut self, n: usize, field: &'static str) -> MinisigResult<&'a [u8]> {
        if self.buf.len() < n {
            return Err(MinisigError::Truncated { field });
        }
        let (head, rest) = self.buf.split_at(n);
        self.buf = rest;
        Ok(head)
    }

    fn read_u32(&mut self, field: &'static str) -> MinisigResult<u32> {
        let b = self.take(4, field)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read an SSH-style string: 4-byte big-endian length prefix, then data.
    fn read_string(&mut self, field: &'static str) -> MinisigResult<&'a [u8]> {
        let n = self.read_u32(field)? as usize;
        self.take(n, field)
    }

    fn rest(self) -> &'a [u8] {
        self.buf
    }
}

/// Parse an SSHSIG payload and extract the algorithm names and signature data.
pub fn parse_signature_blob(payload: &[u8]) -> MinisigResult<SignatureBlob> {
    let mut cur = Cursor::new(payload);

    let magic = cur
        .take(MAGIC.len(), "magic")
        .map_err(|_| MinisigError::BadMagic)?;
    if magic != MAGIC {
        return Err(MinisigError::BadMagic);
    }

    let version = cur.read_u32("version")?;
    if version != VERSION {
        return Err(MinisigError::BadVersion { version });
    }

    // Skip past public key, namespace, reserved
    for field in ["public key", "namespace", "reserved"] {
        cur.read_string(field)?;
    }

    let hash_alg = cur.read_string("hash algorithm")?;

    // The signature field is itself a nested blob: algorithm name, signature
    // data, then an optional trailer (security-key flags and counter).
    let sig_field = cur
        .read_string("signature")
        .map_err(|_| MinisigError::MissingSignatureData)?;
    let mut inner = Cursor::new(sig_field);
    let sig_alg = inner
        .read_string("signature algorithm")
        .map_err(|_| MinisigError::MissingSignatureData)?;
    let sig_data = inner
        .read_string("signature data")
        .map_err(|_| MinisigError::MissingSignatureData)?;

    let mut signature = sig_data.to_vec();
    signature.extend_from_slice(inner.rest());

    Ok(SignatureBlob {
        sig_alg: String::from_utf8_lossy(sig_alg).into_owned(),
        hash_alg: String::from_utf8_lossy(hash_alg).into_owned(),
        signature,
    })
}
