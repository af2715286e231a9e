//! Progress and final-result rendering

use crate::stats::StatsSnapshot;

use std::io::Write;
use std::time::Duration;

/// Render the one-line statistics summary, e.g.
/// `Keys:    400, Throughput:   123.45 keys/s, Avg:   8.10ms, Min:   7.90ms, Max:  12.30ms`
pub fn summary_line(snap: &StatsSnapshot, elapsed: Duration, noun: &str, unit: &str) -> String {
    format!(
        "{}: {:6}, Throughput: {:8.2} {}, Avg: {:6.2}ms, Min: {:6.2}ms, Max: {:6.2}ms",
        noun,
        snap.count,
        snap.throughput(elapsed),
        unit,
        snap.avg_ms(),
        snap.min_ms(),
        snap.max_ms()
    )
}

/// Overwrite the current terminal line with a live progress update
pub fn print_progress(snap: &StatsSnapshot, elapsed: Duration, noun: &str, unit: &str) {
    print!("\r{}", summary_line(snap, elapsed, noun, unit));
    let _ = std::io::stdout().flush();
}

/// Print the terminal "Final Statistics" block (not overwritten)
pub fn print_final(snap: &StatsSnapshot, elapsed: Duration, noun: &str, unit: &str) {
    println!("\n");
    println!("Final Statistics:");
    println!("{}", summary_line(snap, elapsed, noun, unit));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::AggregateStats;

    #[test]
    fn test_summary_line_with_samples() {
        let stats = AggregateStats::new(Duration::from_secs(1));
        for _ in 0..4 {
            stats.accept(Duration::from_millis(2));
        }
        let line = summary_line(&stats.snapshot(), Duration::from_secs(2), "Keys", "keys/s");
        assert!(line.starts_with("Keys:"));
        assert!(line.contains("2.00 keys/s"));
        assert!(line.contains("Avg:   2.00ms"));
    }

    #[test]
    fn test_summary_line_renders_zeros_without_samples() {
        let stats = AggregateStats::new(Duration::from_secs(1));
        let line = summary_line(&stats.snapshot(), Duration::ZERO, "Sigs", "sigs/s");
        assert!(line.contains("Throughput:     0.00 sigs/s"));
        assert!(line.contains("Avg:   0.00ms"));
        assert!(line.contains("Min:   0.00ms"));
        assert!(line.contains("Max:   0.00ms"));
    }
}
