//! Timed cryptographic operations for the benchmark harness
//!
//! Each submodule implements [`crate::harness::BenchOp`] for one operation
//! class; this module owns the curve table shared between them.

pub mod ec;
pub mod rsa;
pub mod sign;
pub mod verify;

use crate::errors::{BenchError, Result};

use openssl::nid::Nid;
use std::fmt;
use std::str::FromStr;

// Re-export the operation types for easier access
pub use ec::EcKeygenOp;
pub use rsa::RsaKeygenOp;
pub use sign::EcdsaSignOp;
pub use verify::EcdsaVerifyOp;

/// Supported NIST prime curves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    P256,
    P384,
    P521,
}

impl Curve {
    pub const ALL: [Curve; 3] = [Curve::P256, Curve::P384, Curve::P521];

    /// OpenSSL NID for this curve
    pub fn nid(self) -> Nid {
        match self {
            Curve::P256 => Nid::X9_62_PRIME256V1,
            Curve::P384 => Nid::SECP384R1,
            Curve::P521 => Nid::SECP521R1,
        }
    }

    /// Human-readable listing line for `--curves` output
    pub fn describe(self) -> &'static str {
        match self {
            Curve::P256 => "P256  - NIST P-256 (secp256r1, prime256v1) - 256-bit",
            Curve::P384 => "P384  - NIST P-384 (secp384r1) - 384-bit",
            Curve::P521 => "P521  - NIST P-521 (secp521r1) - 521-bit",
        }
    }
}

impl FromStr for Curve {
    type Err = BenchError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_uppercase().as_str() {
            "P256" => Ok(Curve::P256),
            "P384" => Ok(Curve::P384),
            "P521" => Ok(Curve::P521),
            other => Err(BenchError::config(format!(
                "Unsupported curve '{}'. Supported curves: P256, P384, P521",
                other
            ))),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Curve::P256 => "P256",
            Curve::P384 => "P384",
            Curve::P521 => "P521",
        };
        write!(f, "{}", name)
    }
}

/// Print the supported curve table (the `--curves` listing)
pub fn list_curves() {
    println!("Supported EC curves:");
    for curve in Curve::ALL {
        println!("  {}", curve.describe());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_parse_case_insensitive() {
        assert_eq!("p256".parse::<Curve>().unwrap(), Curve::P256);
        assert_eq!("P384".parse::<Curve>().unwrap(), Curve::P384);
        assert_eq!("p521".parse::<Curve>().unwrap(), Curve::P521);
    }

    #[test]
    fn test_unknown_curve_rejected() {
        assert!("P192".parse::<Curve>().is_err());
        assert!("".parse::<Curve>().is_err());
    }

    #[test]
    fn test_curve_display_round_trips() {
        for curve in Curve::ALL {
            assert_eq!(curve.to_string().parse::<Curve>().unwrap(), curve);
        }
    }
}
