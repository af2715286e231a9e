//! Configuration management for the crypto-bench tools
//!
//! This module provides a layered approach to configuration:
//! - CLI argument parsing (clap derive)
//! - Conversion into typed, immutable configuration
//! - Validation before any thread is spawned

pub mod parser;
pub mod validation;

use crate::constants::REPORT_INTERVAL;
use crate::errors::{BenchError, Result};
use crate::harness::RunConfig;
use crate::ops::Curve;

use clap::Parser;
use clap::error::ErrorKind;
use parser::{CurveBenchArgs, RawCommand, RawConfig};
use std::process;
use std::time::Duration;

/// The benchmarked operation class and its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    RsaKeygen { bits: u32 },
    EcKeygen { curve: Curve },
    EcdsaSign { curve: Curve },
    EcdsaVerify { curve: Curve },
}

/// A fully specified benchmark run
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub operation: Operation,
    pub run: RunConfig,
    /// Optional override of the operation class's sanity ceiling
    pub ceiling: Option<Duration>,
}

/// Resolved top-level command
#[derive(Debug, Clone)]
pub enum Command {
    Bench(BenchConfig),
    ListCurves,
    Compare,
    VerifyKeys,
}

/// Main configuration structure, immutable after construction
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub verbose: bool,
}

impl Config {
    /// Parse and validate configuration from command line arguments.
    ///
    /// `--help` and `--version` exit 0 here; malformed argument lists exit 1
    /// before any thread is spawned.
    pub fn from_args() -> Result<Self> {
        let raw = match RawConfig::try_parse() {
            Ok(raw) => raw,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                let _ = err.print();
                process::exit(0);
            }
            Err(err) => {
                let _ = err.print();
                process::exit(1);
            }
        };

        let config = raw.try_into()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Print the effective configuration header for a benchmark run
    pub fn print_summary(&self) {
        let Command::Bench(bench) = &self.command else {
            return;
        };

        let total = bench.run.threads as u64 * bench.run.loops;
        match bench.operation {
            Operation::RsaKeygen { bits } => {
                println!("Starting RSA key generation with:");
                println!("Key size: {} bits", bits);
                self.print_run_shape(&bench.run);
                println!("Total keys to generate: {}", total);
            }
            Operation::EcKeygen { curve } => {
                println!("Starting EC key generation with:");
                println!("Curve: {}", curve);
                self.print_run_shape(&bench.run);
                println!("Total keys to generate: {}", total);
            }
            Operation::EcdsaSign { curve } => {
                println!("Starting EC-DSA signing performance test with:");
                println!("Curve: {}", curve);
                self.print_run_shape(&bench.run);
                println!("Total signatures to generate: {}", total);
                println!("Data size: 32 bytes (random data per signature)");
                println!("Hash algorithm: SHA-256");
            }
            Operation::EcdsaVerify { curve } => {
                println!("Starting EC-DSA verification performance test with:");
                println!("Curve: {}", curve);
                self.print_run_shape(&bench.run);
                println!("Total verifications to perform: {}", total);
                println!("Data size: 32 bytes (fixed random message)");
                println!("Hash algorithm: SHA-256");
            }
        }
        println!();
    }

    fn print_run_shape(&self, run: &RunConfig) {
        println!("Threads: {}", run.threads);
        println!("Loops per thread: {}", run.loops);
    }
}

fn parse_ceiling(max_op_time: Option<f64>) -> Result<Option<Duration>> {
    match max_op_time {
        None => Ok(None),
        Some(secs) if secs.is_finite() && secs > 0.0 => Ok(Some(Duration::from_secs_f64(secs))),
        Some(secs) => Err(BenchError::config(format!(
            "--max-op-time must be a positive number of seconds, got {}",
            secs
        ))),
    }
}

fn curve_bench(args: &CurveBenchArgs, make: fn(Curve) -> Operation) -> Result<Command> {
    if args.curves {
        return Ok(Command::ListCurves);
    }

    // required_unless_present guarantees all positionals once --curves is absent
    let (Some(curve), Some(threads), Some(loops)) = (&args.curve, args.threads, args.loops) else {
        return Err(BenchError::config("Missing benchmark arguments"));
    };

    Ok(Command::Bench(BenchConfig {
        operation: make(curve.parse()?),
        run: RunConfig {
            threads,
            loops,
            report_interval: REPORT_INTERVAL,
        },
        ceiling: parse_ceiling(args.max_op_time)?,
    }))
}

impl TryFrom<RawConfig> for Config {
    type Error = BenchError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let command = match &raw.command {
            RawCommand::RsaKeygen {
                keysize,
                threads,
                loops,
                max_op_time,
            } => Command::Bench(BenchConfig {
                operation: Operation::RsaKeygen { bits: *keysize },
                run: RunConfig {
                    threads: *threads,
                    loops: *loops,
                    report_interval: REPORT_INTERVAL,
                },
                ceiling: parse_ceiling(*max_op_time)?,
            }),
            RawCommand::EcKeygen(args) => {
                curve_bench(args, |curve| Operation::EcKeygen { curve })?
            }
            RawCommand::EcdsaSign(args) => {
                curve_bench(args, |curve| Operation::EcdsaSign { curve })?
            }
            RawCommand::EcdsaVerify(args) => {
                curve_bench(args, |curve| Operation::EcdsaVerify { curve })?
            }
            RawCommand::Compare => Command::Compare,
            RawCommand::VerifyKeys => Command::VerifyKeys,
        };

        Ok(Config {
            command,
            verbose: raw.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(args: &[&str]) -> Result<Config> {
        let raw = RawConfig::try_parse_from(args).expect("args should parse");
        let config: Config = raw.try_into()?;
        validation::validate(&config)?;
        Ok(config)
    }

    #[test]
    fn test_ec_keygen_config() {
        let config = config_from(&["crypto-bench", "ec-keygen", "p256", "4", "100"]).unwrap();
        match config.command {
            Command::Bench(bench) => {
                assert_eq!(bench.operation, Operation::EcKeygen { curve: Curve::P256 });
                assert_eq!(bench.run.threads, 4);
                assert_eq!(bench.run.loops, 100);
                assert!(bench.ceiling.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_curve_is_config_error() {
        let err = config_from(&["crypto-bench", "ecdsa-sign", "P999", "1", "1"]).unwrap_err();
        assert!(matches!(err, BenchError::Config(_)));
    }

    #[test]
    fn test_curves_flag_becomes_listing_command() {
        let config = config_from(&["crypto-bench", "ec-keygen", "--curves"]).unwrap();
        assert!(matches!(config.command, Command::ListCurves));
    }

    #[test]
    fn test_zero_ceiling_rejected() {
        let err = config_from(&[
            "crypto-bench",
            "rsa-keygen",
            "2048",
            "1",
            "1",
            "--max-op-time",
            "0",
        ])
        .unwrap_err();
        assert!(matches!(err, BenchError::Config(_)));
    }
}
