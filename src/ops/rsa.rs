//! RSA key pair generation benchmark operation

use crate::constants::RSA_KEYGEN_CEILING;
use crate::errors::Result;
use crate::harness::BenchOp;

use openssl::rsa::Rsa;
use std::time::{Duration, Instant};

/// Generates one fresh RSA key pair of the configured size per invocation
#[derive(Debug, Clone, Copy)]
pub struct RsaKeygenOp {
    bits: u32,
    ceiling: Duration,
}

impl RsaKeygenOp {
    pub fn new(bits: u32, ceiling: Option<Duration>) -> Self {
        Self {
            bits,
            ceiling: ceiling.unwrap_or(RSA_KEYGEN_CEILING),
        }
    }
}

impl BenchOp for RsaKeygenOp {
    // RSA generation in OpenSSL needs no reusable per-thread context.
    type Resource = ();

    fn noun(&self) -> &'static str {
        "Keys"
    }

    fn unit(&self) -> &'static str {
        "keys/s"
    }

    fn ceiling(&self) -> Duration {
        self.ceiling
    }

    fn setup(&self) -> Result<()> {
        Ok(())
    }

    fn run_once(&self, _resource: &mut ()) -> Result<Duration> {
        let start = Instant::now();
        let key = Rsa::generate(self.bits)?;
        let elapsed = start.elapsed();
        drop(key);
        Ok(elapsed)
    }
}
