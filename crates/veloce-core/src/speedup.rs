// SPDX-License-Identifier: MIT OR Apache-2.0
//! Speedup and efficiency formulas.

/// Speedup and efficiency of a parallel run against the serial baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speedup {
    /// `t / tp` — how many times faster than serial.
    pub speedup: f64,
    /// `t / (tp * nt)` — speedup per processor.
    pub efficiency: f64,
}

/// Compute speedup and efficiency for baseline time `t`, candidate time `tp`,
/// and thread count `nt`.
///
/// No special-casing of `nt == 0`; callers are expected to pass the serial
/// run as `nt == 1`.
#[must_use]
pub fn compute_speedup(t: f64, tp: f64, nt: u32) -> Speedup {
    Speedup {
        speedup: t / tp,
        efficiency: t / (tp * f64::from(nt)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speedup_halved_time_two_threads() {
        let s = compute_speedup(10.0, 5.0, 2);
        assert!((s.speedup - 2.0).abs() < f64::EPSILON);
        assert!((s.efficiency - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serial_against_itself() {
        let s = compute_speedup(10.0, 10.0, 1);
        assert!((s.speedup - 1.0).abs() < f64::EPSILON);
        assert!((s.efficiency - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sublinear_speedup() {
        let s = compute_speedup(12.0, 4.0, 4);
        assert!((s.speedup - 3.0).abs() < f64::EPSILON);
        assert!((s.efficiency - 0.75).abs() < f64::EPSILON);
    }
}
