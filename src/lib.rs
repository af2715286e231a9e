//! Multi-threaded OpenSSL benchmarking tools
//!
//! One generic harness (worker threads + shared statistics + live reporter)
//! drives every benchmark in this crate: RSA key generation, EC key
//! generation, ECDSA signing, and ECDSA verification.

pub mod compare;
pub mod config;
pub mod constants;
pub mod errors;
pub mod harness;
pub mod keycheck;
pub mod ops;
pub mod stats;
pub mod sysinfo;
