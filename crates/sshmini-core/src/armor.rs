//! Armor envelope unwrapping.
//!
//! The codec consumes the armor through one narrow contract: parse the
//! wrapper, check the label, hand back the payload bytes. Everything about
//! the wrapper's textual framing stays inside the `pem` crate.

use crate::error::{MinisigError, MinisigResult};

/// Label carried by armored SSH signatures.
pub const ENVELOPE_LABEL: &str = "SSH SIGNATURE";

/// Unwrap an armored envelope, returning the binary payload.
pub(crate) fn unwrap_envelope(armored: &[u8]) -> MinisigResult<Vec<u8>> {
    let block = pem::parse(armored).map_err(|e| MinisigError::InvalidArmor {
        reason: e.to_string(),
    })?;
    if block.tag() != ENVELOPE_LABEL {
        return Err(MinisigError::InvalidArmor {
            reason: format!("unexpected label {:?}", block.tag()),
        });
    }
    Ok(block.into_contents())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_labeled_payload() {
        let armored = pem::encode(&pem::Pem::new(ENVELOPE_LABEL, vec![0x01, 0x02, 0x03]));
        let payload = unwrap_envelope(armored.as_bytes()).unwrap();
        assert_eq!(payload, [0x01, 0x02, 0x03]);
    }

    #[test]
    fn rejects_wrong_label() {
        let armored = pem::encode(&pem::Pem::new("CERTIFICATE", vec![0x01]));
        let err = unwrap_envelope(armored.as_bytes()).unwrap_err();
        assert!(matches!(err, MinisigError::InvalidArmor { .. }));
        assert!(err.to_string().contains("CERTIFICATE"));
    }

    #[test]
    fn rejects_non_armor_text() {
        assert!(matches!(
            unwrap_envelope(b"not a valid armor"),
            Err(MinisigError::InvalidArmor { .. })
        ));
    }
}
