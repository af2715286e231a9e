//! ECDSA verification benchmark operation

use crate::constants::{ECDSA_VERIFY_CEILING, SIGN_DATA_LEN};
use crate::errors::{BenchError, Result};
use crate::harness::BenchOp;
use crate::ops::Curve;

use openssl::ec::{EcGroup, EcKey};
use openssl::hash::MessageDigest;
use openssl::pkey::{PKey, Private};
use openssl::sign::{Signer, Verifier};
use rand::RngCore;
use std::time::{Duration, Instant};

/// Verifies a fixed ECDSA-SHA256 signature per invocation.
///
/// Key, message, and signature are all produced once during worker setup;
/// only the digest-and-verify cost is measured.
#[derive(Debug, Clone, Copy)]
pub struct EcdsaVerifyOp {
    curve: Curve,
    ceiling: Duration,
}

pub struct VerifyResource {
    key: PKey<Private>,
    data: [u8; SIGN_DATA_LEN],
    signature: Vec<u8>,
}

impl EcdsaVerifyOp {
    pub fn new(curve: Curve, ceiling: Option<Duration>) -> Self {
        Self {
            curve,
            ceiling: ceiling.unwrap_or(ECDSA_VERIFY_CEILING),
        }
    }
}

impl BenchOp for EcdsaVerifyOp {
    type Resource = VerifyResource;

    fn noun(&self) -> &'static str {
        "Verifies"
    }

    fn unit(&self) -> &'static str {
        "verifies/s"
    }

    fn ceiling(&self) -> Duration {
        self.ceiling
    }

    fn setup(&self) -> Result<VerifyResource> {
        let group = EcGroup::from_curve_name(self.curve.nid())?;
        let key = PKey::from_ec_key(EcKey::generate(&group)?)?;

        let mut data = [0u8; SIGN_DATA_LEN];
        rand::rng().fill_bytes(&mut data);

        let mut signer = Signer::new(MessageDigest::sha256(), &key)?;
        signer.update(&data)?;
        let signature = signer.sign_to_vec()?;

        Ok(VerifyResource {
            key,
            data,
            signature,
        })
    }

    fn run_once(&self, resource: &mut VerifyResource) -> Result<Duration> {
        let start = Instant::now();
        let mut verifier = Verifier::new(MessageDigest::sha256(), &resource.key)?;
        verifier.update(&resource.data)?;
        let valid = verifier.verify(&resource.signature)?;
        let elapsed = start.elapsed();

        if !valid {
            return Err(BenchError::execution("signature failed verification"));
        }
        Ok(elapsed)
    }
}
