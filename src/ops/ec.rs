//! EC key pair generation benchmark operation

use crate::constants::EC_KEYGEN_CEILING;
use crate::errors::Result;
use crate::harness::BenchOp;
use crate::ops::Curve;

use openssl::ec::{EcGroup, EcKey};
use std::time::{Duration, Instant};

/// Generates one fresh EC key pair on the configured curve per invocation.
/// The curve group is built once per worker and reused for every key.
#[derive(Debug, Clone, Copy)]
pub struct EcKeygenOp {
    curve: Curve,
    ceiling: Duration,
}

impl EcKeygenOp {
    pub fn new(curve: Curve, ceiling: Option<Duration>) -> Self {
        Self {
            curve,
            ceiling: ceiling.unwrap_or(EC_KEYGEN_CEILING),
        }
    }
}

impl BenchOp for EcKeygenOp {
    type Resource = EcGroup;

    fn noun(&self) -> &'static str {
        "Keys"
    }

    fn unit(&self) -> &'static str {
        "keys/s"
    }

    fn ceiling(&self) -> Duration {
        self.ceiling
    }

    fn setup(&self) -> Result<EcGroup> {
        Ok(EcGroup::from_curve_name(self.curve.nid())?)
    }

    fn run_once(&self, group: &mut EcGroup) -> Result<Duration> {
        let start = Instant::now();
        let key = EcKey::generate(group)?;
        let elapsed = start.elapsed();
        drop(key);
        Ok(elapsed)
    }
}
