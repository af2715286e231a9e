//! Configuration validation logic

use super::{Command, Config, Operation};
use crate::constants::{MAX_RSA_KEYSIZE_BITS, MAX_THREADS_LIMIT, MIN_RSA_KEYSIZE_BITS};
use crate::errors::{BenchError, Result};

/// Validate the configuration. Runs before any thread is spawned.
pub fn validate(config: &Config) -> Result<()> {
    let Command::Bench(bench) = &config.command else {
        return Ok(());
    };

    validate_run_shape(bench.run.threads, bench.run.loops)?;
    validate_operation(&bench.operation)?;
    Ok(())
}

fn validate_run_shape(threads: u32, loops: u64) -> Result<()> {
    if threads < 1 || threads > MAX_THREADS_LIMIT {
        return Err(BenchError::config(format!(
            "Number of threads must be between 1 and {}",
            MAX_THREADS_LIMIT
        )));
    }

    if loops < 1 {
        return Err(BenchError::config("Number of loops must be at least 1"));
    }

    Ok(())
}

fn validate_operation(operation: &Operation) -> Result<()> {
    if let Operation::RsaKeygen { bits } = operation
        && (*bits < MIN_RSA_KEYSIZE_BITS || *bits > MAX_RSA_KEYSIZE_BITS)
    {
        return Err(BenchError::config(format!(
            "Key size must be between {} and {} bits",
            MIN_RSA_KEYSIZE_BITS, MAX_RSA_KEYSIZE_BITS
        )));
    }

    Ok(())
}
