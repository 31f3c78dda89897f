// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the command line.
//
// Every technical error is mapped to plain English with a clear suggestion.
// Nothing here is retriable: every operation is deterministic.

use crate::error::CloakError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user must change an argument or config value.
    ActionRequired,
    /// The input data itself is unusable (damaged file, wrong key, full disk).
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Severity level (drives the process exit code).
    pub severity: Severity,
}

impl HumanError {
    /// Exit code for the CLI: 2 for usage problems, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self.severity {
            Severity::ActionRequired => 2,
            Severity::Permanent => 1,
        }
    }
}

/// Convert a `CloakError` into a `HumanError`.
pub fn humanize_error(err: &CloakError) -> HumanError {
    match err {
        // -- Pipeline errors --
        CloakError::UnknownOperation(name) => HumanError {
            message: format!("\"{name}\" isn't an operation we know."),
            suggestion: "Use a colon-separated list of xor, add, channel_swap, permute, swap_pairs (for example xor:add:permute).".into(),
            severity: Severity::ActionRequired,
        },

        CloakError::InvalidConfiguration(detail) => HumanError {
            message: "The settings don't make sense together.".into(),
            suggestion: format!("Check the operations, key and channel order, then try again. ({detail})"),
            severity: Severity::ActionRequired,
        },

        CloakError::ShapeMismatch { expected, actual } => HumanError {
            message: "The pixel data has the wrong size.".into(),
            suggestion: format!("The image should hold {expected} but holds {actual}. Try re-saving it as PNG."),
            severity: Severity::Permanent,
        },

        // -- Image adapter errors --
        CloakError::Image(_) => HumanError {
            message: "There's a problem with this image.".into(),
            suggestion: "The image may be damaged or in an unusual format. Try saving it as a PNG first.".into(),
            severity: Severity::Permanent,
        },

        CloakError::UnsupportedFormat(format) => HumanError {
            message: format!("Results can't be saved as {format}."),
            suggestion: "Lossy formats change pixel values and break decryption. Save as .png, .bmp or .tiff instead.".into(),
            severity: Severity::ActionRequired,
        },

        CloakError::IntegrityMismatch { .. } => HumanError {
            message: "The decrypted image doesn't match the original.".into(),
            suggestion: "Decrypt with exactly the same operations, key and channel order used to encrypt.".into(),
            severity: Severity::Permanent,
        },

        // -- Storage --
        CloakError::Io(io_err) => match io_err.kind() {
            std::io::ErrorKind::NotFound => HumanError {
                message: "The file couldn't be found.".into(),
                suggestion: "It may have been moved or deleted. Check the path and try again.".into(),
                severity: Severity::ActionRequired,
            },
            std::io::ErrorKind::PermissionDenied => HumanError {
                message: "We don't have permission to use that file.".into(),
                suggestion: "Check the file permissions, or choose a different location.".into(),
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: "There was a problem reading or writing a file.".into(),
                suggestion: "Try again. If this keeps happening, your storage may be full.".into(),
                severity: Severity::Permanent,
            },
        },

        CloakError::Serialization(_) => HumanError {
            message: "The config file couldn't be read.".into(),
            suggestion: "Make sure it is valid JSON with the fields operations, key, channels and strict_key.".into(),
            severity: Severity::ActionRequired,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_operation_names_the_culprit() {
        let human = humanize_error(&CloakError::UnknownOperation("rotate".into()));
        assert!(human.message.contains("rotate"));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert_eq!(human.exit_code(), 2);
    }

    #[test]
    fn integrity_mismatch_is_permanent() {
        let err = CloakError::IntegrityMismatch {
            expected: "aa".into(),
            actual: "bb".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Permanent);
        assert_eq!(human.exit_code(), 1);
    }

    #[test]
    fn missing_file_is_action_required() {
        let err = CloakError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(humanize_error(&err).severity, Severity::ActionRequired);
    }

    #[test]
    fn lossy_format_suggests_png() {
        let human = humanize_error(&CloakError::UnsupportedFormat("jpeg".into()));
        assert!(human.suggestion.contains(".png"));
    }
}
