//! ECDSA signing benchmark operation

use crate::constants::{ECDSA_SIGN_CEILING, SIGN_DATA_LEN};
use crate::errors::Result;
use crate::harness::BenchOp;
use crate::ops::Curve;

use openssl::ec::{EcGroup, EcKey};
use openssl::hash::MessageDigest;
use openssl::pkey::{PKey, Private};
use openssl::sign::Signer;
use rand::RngCore;
use rand::rngs::ThreadRng;
use std::time::{Duration, Instant};

/// Signs 32 bytes of fresh random data with SHA-256 per invocation.
///
/// One signing key is generated per worker before the loop starts; the
/// random payload is refilled outside the timed window so only the
/// digest-and-sign cost is measured.
#[derive(Debug, Clone, Copy)]
pub struct EcdsaSignOp {
    curve: Curve,
    ceiling: Duration,
}

pub struct SignResource {
    key: PKey<Private>,
    data: [u8; SIGN_DATA_LEN],
    rng: ThreadRng,
}

impl EcdsaSignOp {
    pub fn new(curve: Curve, ceiling: Option<Duration>) -> Self {
        Self {
            curve,
            ceiling: ceiling.unwrap_or(ECDSA_SIGN_CEILING),
        }
    }
}

impl BenchOp for EcdsaSignOp {
    type Resource = SignResource;

    fn noun(&self) -> &'static str {
        "Sigs"
    }

    fn unit(&self) -> &'static str {
        "sigs/s"
    }

    fn ceiling(&self) -> Duration {
        self.ceiling
    }

    fn setup(&self) -> Result<SignResource> {
        let group = EcGroup::from_curve_name(self.curve.nid())?;
        let key = PKey::from_ec_key(EcKey::generate(&group)?)?;
        Ok(SignResource {
            key,
            data: [0u8; SIGN_DATA_LEN],
            rng: rand::rng(),
        })
    }

    fn run_once(&self, resource: &mut SignResource) -> Result<Duration> {
        resource.rng.fill_bytes(&mut resource.data);

        let start = Instant::now();
        let mut signer = Signer::new(MessageDigest::sha256(), &resource.key)?;
        signer.update(&resource.data)?;
        let signature = signer.sign_to_vec()?;
        let elapsed = start.elapsed();
        drop(signature);
        Ok(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_produces_sample() {
        let op = EcdsaSignOp::new(Curve::P256, None);
        let mut resource = op.setup().unwrap();
        let elapsed = op.run_once(&mut resource).unwrap();
        assert!(elapsed > Duration::ZERO);
    }

    #[test]
    fn test_payload_changes_between_invocations() {
        let op = EcdsaSignOp::new(Curve::P256, None);
        let mut resource = op.setup().unwrap();
        op.run_once(&mut resource).unwrap();
        let first = resource.data;
        op.run_once(&mut resource).unwrap();
        assert_ne!(first, resource.data);
    }
}
