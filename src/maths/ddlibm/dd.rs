//! Double-double arithmetic on plain `f64` operations.
//!
//! Inputs must be finite; the kernels filter NaN and infinities before
//! building any double-double value.

const SPLIT: f64 = 134_217_729.0; // 2^27 + 1

/// Unevaluated sum `hi + lo`. After normalization |lo| <= ulp(hi) / 2.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DoubleDouble {
    pub hi: f64,
    pub lo: f64,
}

impl DoubleDouble {
    #[inline(always)]
    pub const fn new(hi: f64, lo: f64) -> Self {
        Self { hi, lo }
    }

    #[inline(always)]
    pub const fn from_f64(x: f64) -> Self {
        Self { hi: x, lo: 0.0 }
    }

    #[inline(always)]
    pub fn value(self) -> f64 {
        self.hi + self.lo
    }

    /// Exact `a + b` for any finite operands (Knuth).
    #[inline(always)]
    pub fn two_sum(a: f64, b: f64) -> Self {
        let s = a + b;
        let bb = s - a;
        let err = (a - (s - bb)) + (b - bb);
        Self { hi: s, lo: err }
    }

    /// Exact `a + b` when |a| >= |b| or a == 0 (Dekker).
    #[inline(always)]
    pub fn fast_two_sum(a: f64, b: f64) -> Self {
        let s = a + b;
        let z = s - a;
        Self { hi: s, lo: b - z }
    }

    /// Veltkamp split of `a` into two halves of at most 26 significant bits.
    /// |a| must stay below 2^996 so the split product does not overflow.
    #[inline(always)]
    pub fn split(a: f64) -> (f64, f64) {
        let c = SPLIT * a;
        let hi = c - (c - a);
        (hi, a - hi)
    }

    /// Exact `a * b` without FMA, barring underflow of the low part.
    #[inline(always)]
    pub fn two_prod(a: f64, b: f64) -> Self {
        let p = a * b;
        let (ah, al) = Self::split(a);
        let (bh, bl) = Self::split(b);
        let err = ((ah * bh - p) + ah * bl + al * bh) + al * bl;
        Self { hi: p, lo: err }
    }

    #[inline(always)]
    pub fn normalize(self) -> Self {
        Self::fast_two_sum(self.hi, self.lo)
    }

    #[inline(always)]
    pub fn add_f64(self, b: f64) -> Self {
        let s = Self::two_sum(self.hi, b);
        Self::fast_two_sum(s.hi, s.lo + self.lo)
    }

    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        let s = Self::two_sum(self.hi, other.hi);
        Self::fast_two_sum(s.hi, s.lo + (self.lo + other.lo))
    }

    #[inline(always)]
    pub fn mul_f64(self, b: f64) -> Self {
        let p = Self::two_prod(self.hi, b);
        Self::fast_two_sum(p.hi, p.lo + self.lo * b)
    }

    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        let p = Self::two_prod(self.hi, other.hi);
        Self::fast_two_sum(p.hi, p.lo + (self.hi * other.lo + self.lo * other.hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sum_recovers_rounding_error() {
        let a = 1.0;
        let b = f64::EPSILON / 4.0;
        let s = DoubleDouble::two_sum(a, b);
        assert_eq!(s.hi, 1.0);
        assert_eq!(s.lo, b);
        // order does not matter
        let t = DoubleDouble::two_sum(b, a);
        assert_eq!((t.hi, t.lo), (s.hi, s.lo));
    }

    #[test]
    fn fast_two_sum_exact_for_ordered_inputs() {
        let s = DoubleDouble::fast_two_sum(1.0e16, 1.25);
        assert_eq!(s.hi, 1.0e16 + 2.0);
        assert_eq!(s.lo, -0.75);
    }

    #[test]
    fn two_prod_is_exact() {
        // (1 + 2^-30)^2 = 1 + 2^-29 + 2^-60
        let a = 1.0 + f64::from_bits(0x3e10_0000_0000_0000);
        let p = DoubleDouble::two_prod(a, a);
        assert_eq!(p.hi, 1.0 + f64::from_bits(0x3e20_0000_0000_0000));
        assert_eq!(p.lo, f64::from_bits(0x3c30_0000_0000_0000));

        let x = 0.1;
        let y = 3.0;
        let p = DoubleDouble::two_prod(x, y);
        // 0.1 * 3 = 0.30000000000000004 with a known negative residual
        assert_eq!(p.hi, 0.30000000000000004);
        assert!(p.lo < 0.0 && p.lo.abs() < 1e-16);
    }

    #[test]
    fn split_halves_sum_back() {
        for &a in &[core::f64::consts::PI, -1.0e10 / 3.0, 1.0e-300 * 7.0] {
            let (hi, lo) = DoubleDouble::split(a);
            assert_eq!(hi + lo, a);
            assert_eq!(hi.to_bits() & 0x3ff_ffff, 0);
        }
    }

    #[test]
    fn arithmetic_keeps_low_part() {
        let third = DoubleDouble::new(1.0 / 3.0, 1.850371707708594e-17);
        let one = third.mul_f64(3.0);
        assert_eq!(one.hi, 1.0);
        assert!(one.lo.abs() < 1e-31);

        let sum = third.add(third).add(third);
        assert_eq!(sum.hi, 1.0);
        assert!(sum.lo.abs() < 1e-31);

        let sq = third.mul(third);
        assert_eq!(sq.value(), 1.0 / 9.0);

        let n = DoubleDouble::new(1.0, 1.0).normalize();
        assert_eq!((n.hi, n.lo), (2.0, 0.0));
        assert_eq!(DoubleDouble::from_f64(2.0).add_f64(-2.0).value(), 0.0);
    }
}
