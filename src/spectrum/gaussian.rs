/// Skewed bell curve with independent left and right spreads.
///
/// Samples below `mu` fall off with `s1`, samples at or above it with `s2`.
/// The peak value at `x == mu` is exactly `1.0`.
///
/// Both spreads must be non-zero; a zero spread divides by zero.
#[inline]
pub fn asymmetric_gaussian(x: f64, mu: f64, s1: f64, s2: f64) -> f64 {
    let sigma = if x < mu { s1 } else { s2 };
    let t = (x - mu) / sigma;
    (-0.5 * t * t).exp()
}

/// Parameters of one weighted lobe: `weight * G(x; mu, s1, s2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lobe {
    pub weight: f64,
    pub mu: f64,
    pub s1: f64,
    pub s2: f64,
}

impl Lobe {
    pub const fn new(weight: f64, mu: f64, s1: f64, s2: f64) -> Self {
        Lobe { weight, mu, s1, s2 }
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.weight * asymmetric_gaussian(x, self.mu, self.s1, self.s2)
    }
}

/// Evaluate a sum of lobes at a single wavelength.
#[inline]
pub fn lobe_sum(lobes: &[Lobe], x: f64) -> f64 {
    lobes.iter().map(|lobe| lobe.eval(x)).sum()
}

/// Evaluate a sum of lobes over every wavelength in `xs`.
pub fn basis(lobes: &[Lobe], xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| lobe_sum(lobes, x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn peak_is_exactly_one() {
        for &(s1, s2) in &[(1.0, 1.0), (33.0, 60.0), (0.5, 200.0)] {
            assert_eq!(asymmetric_gaussian(605.0, 605.0, s1, s2), 1.0);
        }
    }

    #[test]
    fn decreases_away_from_peak_on_both_sides() {
        let (mu, s1, s2) = (542.0, 45.0, 40.0);
        let mut prev = 1.0;
        for step in 1..50 {
            let v = asymmetric_gaussian(mu - step as f64, mu, s1, s2);
            assert!(v < prev);
            prev = v;
        }
        let mut prev = 1.0;
        for step in 1..50 {
            let v = asymmetric_gaussian(mu + step as f64, mu, s1, s2);
            assert!(v < prev);
            prev = v;
        }
    }

    #[test]
    fn sides_use_their_own_spread() {
        // One spread away on each side is exp(-0.5).
        let expected = (-0.5f64).exp();
        assert_relative_eq!(asymmetric_gaussian(572.0, 605.0, 33.0, 60.0), expected);
        assert_relative_eq!(asymmetric_gaussian(665.0, 605.0, 33.0, 60.0), expected);
    }

    #[test]
    fn basis_sums_weighted_lobes() {
        let lobes = [Lobe::new(0.35, 605.0, 33.0, 60.0), Lobe::new(0.05, 430.0, 18.0, 22.0)];
        let out = basis(&lobes, &[430.0, 605.0]);
        assert_eq!(out.len(), 2);
        assert_relative_eq!(out[1], 0.35 + 0.05 * asymmetric_gaussian(605.0, 430.0, 18.0, 22.0));
        assert!(out.iter().all(|v| v.is_finite() && *v > 0.0));
    }
}
