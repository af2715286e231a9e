use crypto_bench::config::{BenchConfig, Command, Config, Operation};
use crypto_bench::errors::Result;
use crypto_bench::harness::{self, BenchOp, RunConfig};
use crypto_bench::ops::{self, EcKeygenOp, EcdsaSignOp, EcdsaVerifyOp, RsaKeygenOp};
use crypto_bench::stats::reporting;
use crypto_bench::{compare, keycheck, sysinfo};

use std::process;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
fn run() -> Result<()> {
    // Parse and validate configuration
    let config = Config::from_args()?;

    // Initialize logging based on verbosity
    init_logging(&config);

    match &config.command {
        Command::ListCurves => ops::list_curves(),
        Command::Compare => {
            sysinfo::print_system_info();
            compare::run()?;
        }
        Command::VerifyKeys => keycheck::run()?,
        Command::Bench(bench) => {
            config.print_summary();
            run_bench(bench);
        }
    }

    Ok(())
}

/// Dispatch the benchmark to the generic harness with the selected operation
fn run_bench(bench: &BenchConfig) {
    match bench.operation {
        Operation::RsaKeygen { bits } => {
            execute(RsaKeygenOp::new(bits, bench.ceiling), &bench.run);
        }
        Operation::EcKeygen { curve } => {
            execute(EcKeygenOp::new(curve, bench.ceiling), &bench.run);
        }
        Operation::EcdsaSign { curve } => {
            execute(EcdsaSignOp::new(curve, bench.ceiling), &bench.run);
        }
        Operation::EcdsaVerify { curve } => {
            execute(EcdsaVerifyOp::new(curve, bench.ceiling), &bench.run);
        }
    }
}

fn execute<O: BenchOp>(op: O, run: &RunConfig) {
    info!(
        "Starting benchmark with {} worker threads, {} loops each",
        run.threads, run.loops
    );
    let outcome = harness::run(&op, run);
    reporting::print_final(&outcome.snapshot, outcome.elapsed, op.noun(), op.unit());
    info!("Benchmark completed in {:.2}s", outcome.elapsed.as_secs_f64());
}

/// Initialize logging based on configuration.
/// Logs go to stderr so the carriage-return progress line owns stdout.
fn init_logging(config: &Config) {
    let level = if config.verbose { "debug" } else { "info" };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                format!("crypto_bench={}", level)
                    .parse()
                    .expect("Invalid filter directive"),
            ),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default subscriber");

    if config.verbose {
        info!("Verbose logging enabled");
    }
}
