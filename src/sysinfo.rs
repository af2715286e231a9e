//! Host and library information for the comparison tool

use std::fs;
use std::thread;

// CPU feature flags that matter for crypto throughput
const CRYPTO_FLAGS: [&str; 9] = [
    "aes",
    "sha_ni",
    "avx",
    "avx2",
    "sse4_1",
    "sse4_2",
    "pclmulqdq",
    "rdrand",
    "rdseed",
];

/// Print the system information header
pub fn print_system_info() {
    println!("System Information:");
    println!("===================");
    println!("OS: {} {}", std::env::consts::OS, kernel_release());
    println!("Architecture: {}", std::env::consts::ARCH);
    println!("CPU: {}", cpu_model());
    println!("CPU Cores: {}", cpu_cores());
    println!("Crypto CPU Features: {}", crypto_cpu_features());
    println!("OpenSSL Version: {}", openssl::version::version());
    println!();
}

fn kernel_release() -> String {
    fs::read_to_string("/proc/sys/kernel/osrelease")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

fn cpu_cores() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

fn cpu_model() -> String {
    cpuinfo_field("model name").unwrap_or_else(|| "Unknown".to_string())
}

fn crypto_cpu_features() -> String {
    match cpuinfo_field("flags") {
        Some(flags) => {
            let found = filter_crypto_flags(&flags);
            if found.is_empty() {
                "none detected".to_string()
            } else {
                found
            }
        }
        None => "unavailable".to_string(),
    }
}

/// First value for the given key in /proc/cpuinfo, if readable
fn cpuinfo_field(key: &str) -> Option<String> {
    let cpuinfo = fs::read_to_string("/proc/cpuinfo").ok()?;
    cpuinfo.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.trim() == key {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

fn filter_crypto_flags(all_flags: &str) -> String {
    all_flags
        .split_whitespace()
        .filter(|flag| CRYPTO_FLAGS.contains(flag))
        .collect::<Vec<_>>()
        .join(", ")
}
