use fixed::types::I32F32;

/// Q32.32 fixed-point: 32 integer bits, 32 fractional bits.
///
/// Every in-simulation hydro quantity (roid amounts, tank level, mining
/// rate) is a `Fixed64`. This keeps the simulation bit-for-bit reproducible
/// across platforms and makes exact comparisons (a fully drained roid is
/// *exactly* zero) sound in a way `f64` arithmetic would not be.
pub type Fixed64 = I32F32;

/// Simulated time, in seconds. All state advancement happens in whole-tick
/// increments of a configured tick length.
pub type Seconds = u64;

/// Seconds per minute. Level tables quote rates per minute and the
/// configuration quotes the genrich start in minutes.
pub const MINUTE: Seconds = 60;

/// Convert an f64 to Fixed64. Use only for initialization, never in the sim loop.
#[inline]
pub fn f64_to_fixed64(v: f64) -> Fixed64 {
    Fixed64::from_num(v)
}

/// Convert Fixed64 to f64. Use only for display, never in the sim loop.
#[inline]
pub fn fixed64_to_f64(v: Fixed64) -> f64 {
    v.to_num::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed64_basic_arithmetic() {
        let a = f64_to_fixed64(1.5);
        let b = f64_to_fixed64(2.0);
        assert_eq!(fixed64_to_f64(a + b), 3.5);
    }

    #[test]
    fn fixed64_determinism() {
        let a = f64_to_fixed64(1.0 / 3.0);
        let b = f64_to_fixed64(1.0 / 3.0);
        assert_eq!(a, b);
        assert_eq!(a * f64_to_fixed64(3.0), b * f64_to_fixed64(3.0));
    }

    #[test]
    fn fixed64_ordering() {
        let a = f64_to_fixed64(1.0);
        let b = f64_to_fixed64(2.0);
        assert!(a < b);
    }

    #[test]
    fn fixed64_floor_truncates_toward_negative_infinity() {
        assert_eq!(f64_to_fixed64(576.923).floor(), f64_to_fixed64(576.0));
    }

    #[test]
    fn minute_constant() {
        let t: Seconds = 3 * MINUTE;
        assert_eq!(t, 180);
    }
}
