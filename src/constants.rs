//! Application-wide constants and policy values

use std::time::Duration;

// Run limits
pub const MAX_THREADS_LIMIT: u32 = 100;
pub const MIN_RSA_KEYSIZE_BITS: u32 = 512;
pub const MAX_RSA_KEYSIZE_BITS: u32 = 8192;

// Reporter cadence
pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);

// Sanity ceilings: the longest duration considered physically plausible for
// one operation of each class. Samples above the ceiling (or of zero length)
// are clock anomalies and are discarded. Overridable with --max-op-time.
pub const RSA_KEYGEN_CEILING: Duration = Duration::from_secs(3600);
pub const EC_KEYGEN_CEILING: Duration = Duration::from_secs(10);
pub const ECDSA_SIGN_CEILING: Duration = Duration::from_secs(1);
pub const ECDSA_VERIFY_CEILING: Duration = Duration::from_secs(1);

// Signing payload
pub const SIGN_DATA_LEN: usize = 32;

// One-shot comparison tool
pub const COMPARE_ITERATIONS: u32 = 100;
pub const COMPARE_RSA_BITS: u32 = 3072;

// Key validation self-test
pub const KEYCHECK_KEY_COUNT: u32 = 10;
