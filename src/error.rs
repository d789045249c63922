//! Crate level error definitions.

use thiserror::Error;

/// Errors surfaced by the emulation core.
///
/// Everything recoverable is handled locally (open-bus reads, dropped
/// writes, masked bank indices); only construction problems and the
/// deterministic CPU freeze reach the host through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The ROM image failed header validation and no core was built.
    #[error("invalid cartridge: {reason}")]
    InvalidCartridge { reason: String },

    /// The CPU fetched one of the opcodes the hardware never defined
    /// and has frozen in place.
    #[error("unsupported opcode 0x{opcode:02x} at 0x{addr:04x}")]
    UnsupportedOpcode { opcode: u8, addr: u16 },

    /// A `load_sram` blob does not match the cartridge RAM size.
    #[error("SRAM size mismatch: expected {expected} bytes, got {actual}")]
    SramSize { expected: usize, actual: usize },
}

impl Error {
    pub fn invalid_cartridge(reason: &str) -> Self {
        Self::InvalidCartridge {
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        let error = Error::invalid_cartridge("logo mismatch");
        assert_eq!(error.to_string(), "invalid cartridge: logo mismatch");

        let error = Error::UnsupportedOpcode {
            opcode: 0xdd,
            addr: 0x0150,
        };
        assert_eq!(error.to_string(), "unsupported opcode 0xdd at 0x0150");

        let error = Error::SramSize {
            expected: 8192,
            actual: 16,
        };
        assert_eq!(
            error.to_string(),
            "SRAM size mismatch: expected 8192 bytes, got 16"
        );
    }
}
