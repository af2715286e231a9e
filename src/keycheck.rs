//! EC key generation self-test
//!
//! Generates a handful of P-256 key pairs, validates each one, and prints
//! the key size, generation time, and a private-scalar prefix for eyeball
//! verification.

use crate::constants::KEYCHECK_KEY_COUNT;
use crate::errors::{BenchError, Result};
use crate::ops::Curve;

use openssl::ec::{EcGroup, EcKey};
use std::time::Instant;
use tracing::warn;

pub fn run() -> Result<()> {
    println!("EC Key Generation Verification Test");
    println!("====================================");

    let group = EcGroup::from_curve_name(Curve::P256.nid())?;
    let mut valid = 0;

    for i in 0..KEYCHECK_KEY_COUNT {
        let start = Instant::now();
        let key = match EcKey::generate(&group) {
            Ok(key) => key,
            Err(e) => {
                warn!("Key {} generation failed: {}", i, e);
                continue;
            }
        };
        let elapsed = start.elapsed();

        if let Err(e) = key.check_key() {
            warn!("Key {} failed validation check: {}", i, e);
            continue;
        }

        println!(
            "Key {}: VALID, Size: {} bits, Time: {} μs",
            i,
            group.degree(),
            elapsed.as_micros()
        );

        let private_hex = key.private_key().to_hex_str()?;
        let prefix: String = private_hex.chars().take(16).collect();
        println!("  Private key (first 16 chars): {}...", prefix);

        valid += 1;
    }

    if valid < KEYCHECK_KEY_COUNT {
        return Err(BenchError::execution(format!(
            "{} of {} keys failed validation",
            KEYCHECK_KEY_COUNT - valid,
            KEYCHECK_KEY_COUNT
        )));
    }

    println!();
    println!("All keys generated and validated successfully!");
    Ok(())
}
