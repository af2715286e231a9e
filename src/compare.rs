//! One-shot RSA-PSS vs ECDSA performance comparison
//!
//! Runs a fixed number of keygen/sign/verify operations for RSA-3072
//! (RSA-PSS, SHA-256, MGF1-SHA256) and EC P-256 (ECDSA, SHA-256) on the
//! current thread and prints totals, per-operation times, and speed ratios.

use crate::constants::{COMPARE_ITERATIONS, COMPARE_RSA_BITS, SIGN_DATA_LEN};
use crate::errors::Result;
use crate::ops::Curve;

use openssl::ec::{EcGroup, EcKey};
use openssl::hash::MessageDigest;
use openssl::pkey::{PKey, Private};
use openssl::rsa::{Padding, Rsa};
use openssl::sign::{RsaPssSaltlen, Signer, Verifier};
use std::time::{Duration, Instant};

struct SideResult {
    keygen: Duration,
    sign_total: Duration,
    verify_total: Duration,
}

pub fn run() -> Result<()> {
    let data = [0xAAu8; SIGN_DATA_LEN];

    println!("Cryptographic Operation Performance Comparison");
    println!("=============================================");
    println!("Iterations: {}", COMPARE_ITERATIONS);
    println!("RSA Algorithm: RSA-PSS with SHA-256 and MGF1-SHA256");
    println!("ECDSA Algorithm: ECDSA with SHA-256");
    println!();

    let rsa = run_rsa_side(&data)?;
    let ec = run_ec_side(&data)?;

    println!("Key Generation Performance:");
    println!("  RSA-{}:  {:.2} ms", COMPARE_RSA_BITS, ms(rsa.keygen));
    println!("  EC P-256:  {:.2} ms", ms(ec.keygen));
    println!("  Speed Ratio: {:.2}x faster", ratio(rsa.keygen, ec.keygen));
    println!();

    println!("Signing Performance ({} signatures):", COMPARE_ITERATIONS);
    print_op_line("RSA-PSS-3072", rsa.sign_total, "sig");
    print_op_line("ECDSA-256   ", ec.sign_total, "sig");
    println!("  Speed Ratio: {:.2}x faster", ratio(rsa.sign_total, ec.sign_total));
    println!();

    println!("Verification Performance ({} verifications):", COMPARE_ITERATIONS);
    print_op_line("RSA-PSS-3072", rsa.verify_total, "verify");
    print_op_line("ECDSA-256   ", ec.verify_total, "verify");
    println!(
        "  Speed Ratio: {:.2}x faster",
        ratio(rsa.verify_total, ec.verify_total)
    );
    println!();

    println!("Algorithm Details:");
    println!("  RSA-PSS: PKCS#1 v2.1 with SHA-256, MGF1-SHA256, salt length = digest length");
    println!("  ECDSA: P-256 curve with SHA-256 hash");
    println!();

    println!("Performance Ratio Analysis:");
    println!(
        "  RSA Sign/Verify ratio: {:.2}x (asymmetric)",
        ratio(rsa.sign_total, rsa.verify_total)
    );
    println!(
        "  ECDSA Sign/Verify ratio: {:.2}x (symmetric)",
        ratio(ec.sign_total, ec.verify_total)
    );
    println!("  Explanation: RSA uses small public exponent (65537) vs large private key");
    println!("               ECDSA operations have similar computational complexity");

    Ok(())
}

fn run_rsa_side(data: &[u8]) -> Result<SideResult> {
    let start = Instant::now();
    let key = PKey::from_rsa(Rsa::generate(COMPARE_RSA_BITS)?)?;
    let keygen = start.elapsed();

    let mut signatures = Vec::with_capacity(COMPARE_ITERATIONS as usize);
    let start = Instant::now();
    for _ in 0..COMPARE_ITERATIONS {
        let mut signer = pss_signer(&key)?;
        signer.update(data)?;
        signatures.push(signer.sign_to_vec()?);
    }
    let sign_total = start.elapsed();

    let start = Instant::now();
    for signature in &signatures {
        let mut verifier = pss_verifier(&key)?;
        verifier.update(data)?;
        verifier.verify(signature)?;
    }
    let verify_total = start.elapsed();

    Ok(SideResult {
        keygen,
        sign_total,
        verify_total,
    })
}

fn run_ec_side(data: &[u8]) -> Result<SideResult> {
    let group = EcGroup::from_curve_name(Curve::P256.nid())?;

    let start = Instant::now();
    let key = PKey::from_ec_key(EcKey::generate(&group)?)?;
    let keygen = start.elapsed();

    let mut signatures = Vec::with_capacity(COMPARE_ITERATIONS as usize);
    let start = Instant::now();
    for _ in 0..COMPARE_ITERATIONS {
        let mut signer = Signer::new(MessageDigest::sha256(), &key)?;
        signer.update(data)?;
        signatures.push(signer.sign_to_vec()?);
    }
    let sign_total = start.elapsed();

    let start = Instant::now();
    for signature in &signatures {
        let mut verifier = Verifier::new(MessageDigest::sha256(), &key)?;
        verifier.update(data)?;
        verifier.verify(signature)?;
    }
    let verify_total = start.elapsed();

    Ok(SideResult {
        keygen,
        sign_total,
        verify_total,
    })
}

fn pss_signer(key: &PKey<Private>) -> Result<Signer<'_>> {
    let mut signer = Signer::new(MessageDigest::sha256(), key)?;
    signer.set_rsa_padding(Padding::PKCS1_PSS)?;
    signer.set_rsa_pss_saltlen(RsaPssSaltlen::DIGEST_LENGTH)?;
    signer.set_rsa_mgf1_md(MessageDigest::sha256())?;
    Ok(signer)
}

fn pss_verifier(key: &PKey<Private>) -> Result<Verifier<'_>> {
    let mut verifier = Verifier::new(MessageDigest::sha256(), key)?;
    verifier.set_rsa_padding(Padding::PKCS1_PSS)?;
    verifier.set_rsa_pss_saltlen(RsaPssSaltlen::DIGEST_LENGTH)?;
    verifier.set_rsa_mgf1_md(MessageDigest::sha256())?;
    Ok(verifier)
}

fn print_op_line(label: &str, total: Duration, op_noun: &str) {
    println!(
        "  {}: {} μs total ({} μs/{})",
        label,
        total.as_micros(),
        total.as_micros() / COMPARE_ITERATIONS as u128,
        op_noun
    );
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn ratio(slow: Duration, fast: Duration) -> f64 {
    let fast_secs = fast.as_secs_f64();
    if fast_secs > 0.0 {
        slow.as_secs_f64() / fast_secs
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_guards_zero_denominator() {
        assert_eq!(ratio(Duration::from_secs(1), Duration::ZERO), 0.0);
        assert_eq!(
            ratio(Duration::from_secs(4), Duration::from_secs(2)),
            2.0
        );
    }

    #[test]
    fn test_pss_sign_verify_round_trip() {
        let key = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();
        let data = [0xAAu8; SIGN_DATA_LEN];

        let mut signer = pss_signer(&key).unwrap();
        signer.update(&data).unwrap();
        let signature = signer.sign_to_vec().unwrap();

        let mut verifier = pss_verifier(&key).unwrap();
        verifier.update(&data).unwrap();
        assert!(verifier.verify(&signature).unwrap());
    }
}
