//! Command-line argument parsing for the crypto-bench tools

use clap::{Args, Parser, Subcommand};

/// Raw configuration from command line arguments
#[derive(Parser, Debug, Clone)]
#[command(
    name = "crypto-bench",
    version = "0.1.0",
    about = "Multi-threaded OpenSSL benchmarking tools for RSA/EC key generation and ECDSA signing",
    long_about = None
)]
pub struct RawConfig {
    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose", global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: RawCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RawCommand {
    /// Benchmark RSA key pair generation
    RsaKeygen {
        /// RSA key size in bits (e.g., 1024, 2048, 4096)
        #[arg(value_name = "KEYSIZE")]
        keysize: u32,

        /// Number of worker threads
        #[arg(value_name = "NUM_THREADS")]
        threads: u32,

        /// Number of key pairs to generate per thread
        #[arg(value_name = "NUM_LOOPS")]
        loops: u64,

        /// Override the sanity ceiling for one operation, in seconds
        #[arg(long = "max-op-time", value_name = "SECONDS")]
        max_op_time: Option<f64>,
    },

    /// Benchmark EC key pair generation
    EcKeygen(CurveBenchArgs),

    /// Benchmark ECDSA signing (SHA-256, 32 random bytes per signature)
    EcdsaSign(CurveBenchArgs),

    /// Benchmark ECDSA signature verification (SHA-256)
    EcdsaVerify(CurveBenchArgs),

    /// One-shot RSA-PSS vs ECDSA comparison with system information
    Compare,

    /// Generate and validate a handful of P-256 keys
    VerifyKeys,
}

/// Positional arguments shared by the curve-based benchmarks
#[derive(Args, Debug, Clone)]
pub struct CurveBenchArgs {
    /// List supported curves and exit
    #[arg(short = 'c', long = "curves", help = "List supported curves and exit")]
    pub curves: bool,

    /// EC curve name (P256, P384, P521)
    #[arg(value_name = "CURVE", required_unless_present = "curves")]
    pub curve: Option<String>,

    /// Number of worker threads
    #[arg(value_name = "NUM_THREADS", required_unless_present = "curves")]
    pub threads: Option<u32>,

    /// Number of operations to perform per thread
    #[arg(value_name = "NUM_LOOPS", required_unless_present = "curves")]
    pub loops: Option<u64>,

    /// Override the sanity ceiling for one operation, in seconds
    #[arg(long = "max-op-time", value_name = "SECONDS")]
    pub max_op_time: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rsa_keygen() {
        let raw =
            RawConfig::try_parse_from(["crypto-bench", "rsa-keygen", "2048", "4", "100"]).unwrap();
        match raw.command {
            RawCommand::RsaKeygen {
                keysize,
                threads,
                loops,
                max_op_time,
            } => {
                assert_eq!(keysize, 2048);
                assert_eq!(threads, 4);
                assert_eq!(loops, 100);
                assert!(max_op_time.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_ec_keygen_with_ceiling_override() {
        let raw = RawConfig::try_parse_from([
            "crypto-bench",
            "ec-keygen",
            "P384",
            "8",
            "50",
            "--max-op-time",
            "2.5",
        ])
        .unwrap();
        match raw.command {
            RawCommand::EcKeygen(args) => {
                assert_eq!(args.curve.as_deref(), Some("P384"));
                assert_eq!(args.threads, Some(8));
                assert_eq!(args.loops, Some(50));
                assert_eq!(args.max_op_time, Some(2.5));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_curves_flag_needs_no_positionals() {
        let raw = RawConfig::try_parse_from(["crypto-bench", "ecdsa-sign", "--curves"]).unwrap();
        match raw.command {
            RawCommand::EcdsaSign(args) => {
                assert!(args.curves);
                assert!(args.curve.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_positionals_rejected() {
        assert!(RawConfig::try_parse_from(["crypto-bench", "ec-keygen", "P256", "4"]).is_err());
        assert!(RawConfig::try_parse_from(["crypto-bench", "rsa-keygen"]).is_err());
    }
}
