use std::process::Command;
use std::str;

const BIN: &str = env!("CARGO_BIN_EXE_crypto-bench");

fn run_tool(args: &[&str]) -> (std::process::ExitStatus, String, String) {
    let output = Command::new(BIN)
        .args(args)
        .output()
        .expect("Failed to execute crypto-bench");

    let stdout = str::from_utf8(&output.stdout).unwrap_or("").to_string();
    let stderr = str::from_utf8(&output.stderr).unwrap_or("").to_string();
    (output.status, stdout, stderr)
}

#[test]
fn test_ec_keygen_e2e() {
    let (status, stdout, stderr) = run_tool(&["ec-keygen", "P256", "2", "5"]);

    assert!(
        status.success(),
        "Command failed with status: {:?}\nSTDOUT: {}\nSTDERR: {}",
        status.code(),
        stdout,
        stderr
    );

    // Configuration header
    assert!(stdout.contains("Starting EC key generation with:"));
    assert!(stdout.contains("Curve: P256"));
    assert!(stdout.contains("Threads: 2"));
    assert!(stdout.contains("Loops per thread: 5"));
    assert!(stdout.contains("Total keys to generate: 10"));

    // Final statistics with the full sample count
    assert!(stdout.contains("Final Statistics:"));
    assert!(
        stdout.contains("Keys:     10,"),
        "Expected 10 keys in final statistics\nSTDOUT: {}",
        stdout
    );
}

#[test]
fn test_ecdsa_sign_e2e() {
    let (status, stdout, stderr) = run_tool(&["ecdsa-sign", "p384", "2", "10"]);

    assert!(
        status.success(),
        "Command failed with status: {:?}\nSTDOUT: {}\nSTDERR: {}",
        status.code(),
        stdout,
        stderr
    );

    // Lowercase selector is normalized
    assert!(stdout.contains("Curve: P384"));
    assert!(stdout.contains("Total signatures to generate: 20"));
    assert!(stdout.contains("Hash algorithm: SHA-256"));
    assert!(stdout.contains("Final Statistics:"));
    assert!(
        stdout.contains("Sigs:     20,"),
        "Expected 20 signatures in final statistics\nSTDOUT: {}",
        stdout
    );
}

#[test]
fn test_ecdsa_verify_e2e() {
    let (status, stdout, stderr) = run_tool(&["ecdsa-verify", "P256", "1", "10"]);

    assert!(
        status.success(),
        "Command failed with status: {:?}\nSTDOUT: {}\nSTDERR: {}",
        status.code(),
        stdout,
        stderr
    );

    assert!(stdout.contains("Total verifications to perform: 10"));
    assert!(stdout.contains("Verifies:     10,"));
}

#[test]
fn test_curves_listing_exits_zero_without_running() {
    let (status, stdout, _stderr) = run_tool(&["ec-keygen", "--curves"]);

    assert_eq!(status.code(), Some(0));
    assert!(stdout.contains("Supported EC curves:"));
    assert!(stdout.contains("P256"));
    assert!(stdout.contains("P384"));
    assert!(stdout.contains("P521"));
    assert!(!stdout.contains("Starting"));
}

#[test]
fn test_zero_threads_rejected() {
    let (status, stdout, stderr) = run_tool(&["ec-keygen", "P256", "0", "10"]);

    assert_eq!(status.code(), Some(1));
    assert!(stderr.contains("Number of threads must be between 1 and 100"));
    assert!(!stdout.contains("Starting"));
}

#[test]
fn test_zero_loops_rejected() {
    let (status, _stdout, stderr) = run_tool(&["ecdsa-sign", "P256", "1", "0"]);

    assert_eq!(status.code(), Some(1));
    assert!(stderr.contains("Number of loops must be at least 1"));
}

#[test]
fn test_unknown_curve_rejected() {
    let (status, _stdout, stderr) = run_tool(&["ecdsa-sign", "P999", "1", "1"]);

    assert_eq!(status.code(), Some(1));
    assert!(stderr.contains("Unsupported curve 'P999'"));
}

#[test]
fn test_rsa_keysize_out_of_range_rejected() {
    let (status, _stdout, stderr) = run_tool(&["rsa-keygen", "256", "1", "1"]);

    assert_eq!(status.code(), Some(1));
    assert!(stderr.contains("Key size must be between 512 and 8192 bits"));
}

#[test]
fn test_argument_count_mismatch_exits_one() {
    let (status, _stdout, _stderr) = run_tool(&["rsa-keygen", "2048"]);
    assert_eq!(status.code(), Some(1));

    let (status, _stdout, _stderr) = run_tool(&["ec-keygen", "P256", "4"]);
    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_verify_keys_self_test() {
    let (status, stdout, stderr) = run_tool(&["verify-keys"]);

    assert!(
        status.success(),
        "Command failed with status: {:?}\nSTDOUT: {}\nSTDERR: {}",
        status.code(),
        stdout,
        stderr
    );
    assert!(stdout.contains("EC Key Generation Verification Test"));
    assert_eq!(stdout.matches(": VALID").count(), 10);
    assert!(stdout.contains("All keys generated and validated successfully!"));
}
