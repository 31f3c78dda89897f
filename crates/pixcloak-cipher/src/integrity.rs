// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixel fingerprints — SHA-256 over shape and pixels for exact-recovery checks.

use pixcloak_core::error::CloakError;
use sha2::{Digest, Sha256};

use crate::buffer::PixelBuffer;

/// SHA-256 of the buffer as a lowercase hex string.
///
/// Hashes width and height (little-endian `u32`) followed by the RGBA bytes,
/// so two images with the same bytes but different shapes differ.
pub fn fingerprint(buffer: &PixelBuffer) -> String {
    let mut hasher = Sha256::new();
    hasher.update(buffer.width().to_le_bytes());
    hasher.update(buffer.height().to_le_bytes());
    hasher.update(buffer.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verify that `buffer` matches the expected hex fingerprint.
///
/// Comparison ignores case. Returns `Err(CloakError::IntegrityMismatch)` with
/// the expected and actual values when it does not match.
pub fn verify_fingerprint(buffer: &PixelBuffer, expected_hex: &str) -> Result<(), CloakError> {
    let actual = fingerprint(buffer);
    if actual.eq_ignore_ascii_case(expected_hex.trim()) {
        Ok(())
    } else {
        Err(CloakError::IntegrityMismatch {
            expected: expected_hex.trim().to_owned(),
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_hex_sha256() {
        let fp = fingerprint(&PixelBuffer::new(1, 1).unwrap());
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn shape_changes_fingerprint() {
        let wide = PixelBuffer::new(4, 1).unwrap();
        let tall = PixelBuffer::new(1, 4).unwrap();
        assert_eq!(wide.as_bytes(), tall.as_bytes());
        assert_ne!(fingerprint(&wide), fingerprint(&tall));
    }

    #[test]
    fn verify_matching_fingerprint() {
        let buf = PixelBuffer::from_rgba(1, 1, vec![1, 2, 3, 4]).unwrap();
        let hex = fingerprint(&buf).to_uppercase();
        assert!(verify_fingerprint(&buf, &hex).is_ok());
    }

    #[test]
    fn verify_mismatched_fingerprint() {
        let buf = PixelBuffer::new(2, 2).unwrap();
        match verify_fingerprint(&buf, "0000") {
            Err(CloakError::IntegrityMismatch { expected, actual }) => {
                assert_eq!(expected, "0000");
                assert_eq!(actual, fingerprint(&buf));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
