//! # Special functions
//!
//! Sign utility and the gamma / beta family of functions. These are typically the
//! functions a root search inverts, for example solving `I_x(a, b) = p` for `x`.
//!
// BSD 3-Clause License
//
// Copyright (c) 2026, Dar Dahlen
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::f64::consts::PI;

/// Relative precision at which the incomplete beta continued fraction is converged.
const BETA_EPSILON: f64 = 3e-14;

/// Maximum number of continued fraction terms evaluated.
const BETA_MAX_ITERATIONS: usize = 200;

/// Lanczos approximation coefficients, `g = 7`, `n = 9`.
#[allow(clippy::excessive_precision, reason = "Published coefficients.")]
const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];
const LANCZOS_G: f64 = 7.0;

/// Sign of a value, one of -1, 0, or 1.
///
/// Zero (of either sign) and NaN both map to 0.
///
/// ```
///     use numerics_core::special::sign;
///     assert_eq!(sign(-2.5), -1);
///     assert_eq!(sign(0.0), 0);
///     assert_eq!(sign(f32::INFINITY), 1);
/// ```
pub fn sign<T>(x: T) -> i8
where
    T: num_traits::Float,
{
    if x < T::zero() {
        -1
    } else if x > T::zero() {
        1
    } else {
        0
    }
}

/// Natural log of the absolute value of the gamma function, `ln |Γ(x)|`.
///
/// Infinite at zero and the negative integers.
pub fn ln_gamma(x: f64) -> f64 {
    if x <= 0.0 && x == x.floor() {
        return f64::INFINITY;
    }

    // reflection formula
    if x < 0.5 {
        return (PI / (PI * x).sin().abs()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut sum = LANCZOS_COEFFICIENTS[0];
    for (idx, coef) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
        sum += coef / (x + idx as f64);
    }

    let t = x + LANCZOS_G + 0.5;
    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

/// Complete beta function `B(a, b) = Γ(a) Γ(b) / Γ(a + b)`.
pub fn beta(a: f64, b: f64) -> f64 {
    (ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)).exp()
}

/// Regularized incomplete beta function `I_x(a, b)`.
///
/// This is not to be confused with the incomplete beta function, see
/// [`beta_incomplete`].
///
/// Returns NaN if `x` is outside of `[0, 1]`, or if the continued fraction does not
/// converge.
///
/// ```
///     use numerics_core::special::beta_incomplete_regular;
///     assert!((beta_incomplete_regular(0.5, 2.0, 3.0) - 0.6875).abs() < 1e-12);
/// ```
pub fn beta_incomplete_regular(x: f64, a: f64, b: f64) -> f64 {
    // Numerical Recipes in C, section 6.4:
    //
    //  (x^a (1-x)^b) / (a B(a,b)) * 1 / (1 + d_1 / (1 + d_2 / (1 + ...)))
    //
    //  d_{2m+1} = -(a+m)(a+b+m)x / ((a+2m)(a+2m+1))
    //  d_{2m}   = m(b-m)x / ((a+2m-1)(a+2m))
    if !(0.0..=1.0).contains(&x) {
        return f64::NAN;
    }

    let front = if 0.0 < x && x < 1.0 {
        (ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln()).exp()
    } else {
        0.0
    };

    if x < (a + 1.0) / (a + b + 2.0) {
        front * beta_continued_fraction(x, a, b) / a
    } else {
        // symmetry transform converges faster here
        1.0 - front * beta_continued_fraction(1.0 - x, b, a) / b
    }
}

/// Incomplete beta function, `I_x(a, b) B(a, b)`.
pub fn beta_incomplete(x: f64, a: f64, b: f64) -> f64 {
    beta_incomplete_regular(x, a, b) * beta(a, b)
}

/// Probability of `k` successes in `n` Bernoulli trials of probability `x`, without
/// the binomial coefficient.
///
/// `exp((n - k) ln(1 - x) + k ln(x))`
///
/// Up to normalization this is the derivative of the regularized incomplete beta
/// function with respect to `x`, which makes it the natural companion when inverting
/// a binomial cumulative distribution.
pub fn binomial(x: f64, k: f64, n: f64) -> f64 {
    ((n - k) * (1.0 - x).ln() + k * x.ln()).exp()
}

/// Replace values too small to divide by with the smallest positive subnormal.
#[inline(always)]
fn non_zero(val: f64) -> f64 {
    if val.abs() < f64::from_bits(1) {
        f64::from_bits(1)
    } else {
        val
    }
}

/// Continued fraction component of the regularized incomplete beta function, by the
/// modified Lentz method.
fn beta_continued_fraction(x: f64, a: f64, b: f64) -> f64 {
    let mut c = 1.0;
    let mut d = 1.0 / non_zero(1.0 - (a + b) * x / (a + 1.0));
    let mut h = d;
    for m in 1..=BETA_MAX_ITERATIONS {
        let m = m as f64;

        // even step of the recurrence
        let numer = m * (b - m) * x / ((a + 2.0 * m - 1.0) * (a + 2.0 * m));
        d = 1.0 / non_zero(1.0 + numer * d);
        c = non_zero(1.0 + numer / c);
        h *= d * c;

        // odd step
        let numer = -(a + m) * (a + b + m) * x / ((a + 2.0 * m) * (a + 2.0 * m + 1.0));
        d = 1.0 / non_zero(1.0 + numer * d);
        c = non_zero(1.0 + numer / c);
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < BETA_EPSILON {
            return h;
        }
    }
    f64::NAN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitting::{bisect, find};

    #[test]
    fn test_sign() {
        assert_eq!(sign(3.0), 1);
        assert_eq!(sign(-1e-300), -1);
        assert_eq!(sign(-0.0), 0);
        assert_eq!(sign(f64::NAN), 0);
        assert_eq!(sign(f64::NEG_INFINITY), -1);
    }

    #[test]
    fn test_ln_gamma() {
        assert!(ln_gamma(1.0).abs() < 1e-13);
        assert!(ln_gamma(2.0).abs() < 1e-13);
        assert!((ln_gamma(5.0) - 24_f64.ln()).abs() < 1e-12);
        assert!((ln_gamma(0.5) - PI.sqrt().ln()).abs() < 1e-12);
        assert!((ln_gamma(10.0) - 362_880_f64.ln()).abs() < 1e-11);

        // |Γ(-0.5)| = 2 sqrt(pi)
        assert!((ln_gamma(-0.5) - (2.0 * PI.sqrt()).ln()).abs() < 1e-12);
        assert_eq!(ln_gamma(0.0), f64::INFINITY);
        assert_eq!(ln_gamma(-3.0), f64::INFINITY);
    }

    #[test]
    fn test_beta() {
        assert!((beta(2.0, 3.0) - 1.0 / 12.0).abs() < 1e-13);
        assert!((beta(1.0, 1.0) - 1.0).abs() < 1e-13);
        assert!((beta(0.5, 0.5) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_beta_incomplete_regular() {
        assert!((beta_incomplete_regular(0.5, 2.0, 3.0) - 0.6875).abs() < 1e-12);
        assert!((beta_incomplete_regular(0.25, 1.0, 1.0) - 0.25).abs() < 1e-12);
        assert!((beta_incomplete_regular(0.3, 2.0, 5.0) - 0.579_825).abs() < 1e-12);
        assert!((beta_incomplete_regular(0.9, 3.0, 3.0) - 0.991_44).abs() < 1e-12);
        assert_eq!(beta_incomplete_regular(0.0, 2.0, 3.0), 0.0);
        assert_eq!(beta_incomplete_regular(1.0, 2.0, 3.0), 1.0);
        assert!(beta_incomplete_regular(-0.1, 2.0, 3.0).is_nan());
        assert!(beta_incomplete_regular(1.1, 2.0, 3.0).is_nan());
    }

    #[test]
    fn test_beta_incomplete() {
        let expected = 0.6875 / 12.0;
        assert!((beta_incomplete(0.5, 2.0, 3.0) - expected).abs() < 1e-13);
    }

    #[test]
    fn test_binomial() {
        assert!((binomial(0.5, 2.0, 4.0) - 0.0625).abs() < 1e-14);
        assert!((binomial(0.2, 1.0, 3.0) - 0.2 * 0.64).abs() < 1e-14);
    }

    #[test]
    fn test_invert_incomplete_beta() {
        // solve I_x(2, 3) = 0.6875 for x
        let target = 0.6875;
        let root = bisect(|x| beta_incomplete_regular(x, 2.0, 3.0) - target, 0.0, 1.0);
        assert!((root - 0.5).abs() < 1e-9);

        // same with the derivative x (1 - x)^2 / B(2, 3)
        let norm = beta(2.0, 3.0);
        let root = find(
            |x: f64| beta_incomplete_regular(x, 2.0, 3.0) - target,
            |x| binomial(x, 1.0, 3.0) / norm,
            0.3,
            [],
        );
        assert!((root - 0.5).abs() < 1e-9);
    }
}
