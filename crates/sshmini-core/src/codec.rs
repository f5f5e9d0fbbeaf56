//! Compact signature encoding and decoding.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

use crate::alg::AlgorithmPair;
use crate::armor::unwrap_envelope;
use crate::blob::parse_signature_blob;
use crate::error::{MinisigError, MinisigResult};

/// Maximum accepted size for an armored signature.
///
/// RSA-8192 with a large namespace fits in ~4KB; 8KB leaves headroom.
pub const MAX_ARMORED_SIZE: usize = 8 * 1024;

/// Convert an armored SSH signature to its compact token.
pub fn encode(armored: &[u8]) -> MinisigResult<String> {
    if armored.len() > MAX_ARMORED_SIZE {
        return Err(MinisigError::TooLarge {
            size: armored.len(),
            limit: MAX_ARMORED_SIZE,
        });
    }

    let payload = unwrap_envelope(armored)?;
    let blob = parse_signature_blob(&payload)?;

    let pair = AlgorithmPair::from_names(&blob.sig_alg, &blob.hash_alg).ok_or_else(|| {
        MinisigError::UnsupportedAlgorithm {
            sig_alg: blob.sig_alg.clone(),
            hash_alg: blob.hash_alg.clone(),
        }
    })?;

    tracing::debug!(
        sig_alg = %blob.sig_alg,
        hash_alg = %blob.hash_alg,
        sig_len = blob.signature.len(),
        "encoding compact signature"
    );

    let mut token = String::new();
    token.push(pair.prefix() as char);
    token.push_str(&URL_SAFE_NO_PAD.encode(&blob.signature));
    Ok(token)
}

/// Parse a compact token back into its algorithm pair and signature bytes.
pub fn decode(token: &str) -> MinisigResult<(AlgorithmPair, Vec<u8>)> {
    if token.len() < 2 {
        return Err(MinisigError::TooShort);
    }

    let prefix = token.as_bytes()[0];
    let pair = AlgorithmPair::from_prefix(prefix).ok_or(MinisigError::UnknownPrefix {
        prefix: prefix as char,
    })?;

    let signature = URL_SAFE_NO_PAD.decode(&token.as_bytes()[1..])?;
    Ok((pair, signature))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_oversized_input_before_parsing() {
        let oversized = vec![b'a'; MAX_ARMORED_SIZE + 1];
        assert!(matches!(
            encode(&oversized),
            Err(MinisigError::TooLarge { size, limit })
                if size == MAX_ARMORED_SIZE + 1 && limit == MAX_ARMORED_SIZE
        ));
    }

    #[test]
    fn rejects_invalid_armor() {
        assert!(matches!(
            encode(b"not a valid armor"),
            Err(MinisigError::InvalidArmor { .. })
        ));
    }

    #[test]
    fn decode_rejects_short_tokens() {
        assert!(matches!(decode(""), Err(MinisigError::TooShort)));
        assert!(matches!(decode("e"), Err(MinisigError::TooShort)));
    }

    #[test]
    fn decode_rejects_unknown_prefix() {
        assert!(matches!(
            decode("xAAAA"),
            Err(MinisigError::UnknownPrefix { prefix: 'x' })
        ));
    }

    #[test]
    fn decode_rejects_reserved_prefix() {
        assert!(matches!(
            decode("zAAAA"),
            Err(MinisigError::UnknownPrefix { prefix: 'z' })
        ));
    }

    #[test]
    fn decode_rejects_malformed_base64() {
        assert!(matches!(
            decode("e!!!"),
            Err(MinisigError::SignatureDecode(_))
        ));
        // Padded input is not accepted; the wire format is unpadded.
        assert!(matches!(
            decode("eAQID="),
            Err(MinisigError::SignatureDecode(_))
        ));
    }

    #[test]
    fn decode_multibyte_first_char_is_unknown_prefix() {
        // First byte of a multibyte character must not panic the slice.
        assert!(matches!(
            decode("éAAAA"),
            Err(MinisigError::UnknownPrefix { .. })
        ));
    }

    #[test]
    fn decode_recovers_known_token() {
        let (pair, sig) = decode("eAQID").unwrap();
        assert_eq!(pair, AlgorithmPair::Ed25519);
        assert_eq!(sig, [0x01, 0x02, 0x03]);
    }
}
