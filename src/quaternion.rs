//! Quaternions: numbers of the form `a + bi + cj + dk`.
//!
//! A [`Quaternion`] is a plain `Copy` value. Every operation hands back a
//! new quaternion.
//!
//! # Examples
//!
//! ```
//! use exercises::quaternion::Quaternion;
//!
//! let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
//!
//! assert_eq!(Quaternion::I.times(Quaternion::J), Quaternion::K);
//! assert_eq!(q.times(q.conjugate()).coefficients(), [30.0, 0.0, 0.0, 0.0]);
//! assert_eq!(q.to_string(), "1.0+2.0i+3.0j+4.0k");
//! ```

use std::fmt;
use std::ops::{Add, Mul, Neg};

/// A quaternion `a + bi + cj + dk` with `f64` components.
///
/// Equality compares components with IEEE-754 `==`, so `0.0` equals `-0.0`
/// and a quaternion with a `NaN` component is not equal to itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quaternion {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Quaternion {
    /// `0 + 0i + 0j + 0k`
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// The unit `i`.
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// The unit `j`.
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// The unit `k`.
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Builds `a + bi + cj + dk`.
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// The real part.
    pub fn a(self) -> f64 {
        self.a
    }

    /// The `i` coefficient.
    pub fn b(self) -> f64 {
        self.b
    }

    /// The `j` coefficient.
    pub fn c(self) -> f64 {
        self.c
    }

    /// The `k` coefficient.
    pub fn d(self) -> f64 {
        self.d
    }

    /// Component-wise sum.
    pub fn plus(self, other: Self) -> Self {
        Self::new(
            self.a + other.a,
            self.b + other.b,
            self.c + other.c,
            self.d + other.d,
        )
    }

    /// The Hamilton product `self * other`. Not commutative: in general
    /// `p.times(q) != q.times(p)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exercises::quaternion::Quaternion;
    ///
    /// assert_eq!(Quaternion::I.times(Quaternion::J), Quaternion::K);
    /// assert_eq!(Quaternion::J.times(Quaternion::I), -Quaternion::K);
    /// ```
    pub fn times(self, other: Self) -> Self {
        let (a1, b1, c1, d1) = (self.a, self.b, self.c, self.d);
        let (a2, b2, c2, d2) = (other.a, other.b, other.c, other.d);

        Self::new(
            a1 * a2 - b1 * b2 - c1 * c2 - d1 * d2,
            a1 * b2 + b1 * a2 + c1 * d2 - d1 * c2,
            a1 * c2 - b1 * d2 + c1 * a2 + d1 * b2,
            a1 * d2 + b1 * c2 - c1 * b2 + d1 * a2,
        )
    }

    /// Flips the sign of the imaginary parts.
    pub fn conjugate(self) -> Self {
        Self::new(self.a, -self.b, -self.c, -self.d)
    }

    /// `[a, b, c, d]`, in that order.
    pub fn coefficients(self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(rhs)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.times(rhs)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from([a, b, c, d]: [f64; 4]) -> Self {
        Self::new(a, b, c, d)
    }
}

impl fmt::Display for Quaternion {
    /// Writes the non-zero terms in the order `a`, `bi`, `cj`, `dk`. A term
    /// gets a leading `+` only when something was already written and its
    /// coefficient is positive; negative coefficients carry their own `-`.
    /// All-zero quaternions are written as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote_any = false;
        if self.a != 0.0 {
            write_coefficient(f, self.a)?;
            wrote_any = true;
        }
        for &(coefficient, unit) in &[(self.b, 'i'), (self.c, 'j'), (self.d, 'k')] {
            if coefficient == 0.0 {
                continue;
            }
            if coefficient > 0.0 && wrote_any {
                f.write_str("+")?;
            }
            write_coefficient(f, coefficient)?;
            write!(f, "{}", unit)?;
            wrote_any = true;
        }

        if wrote_any {
            Ok(())
        } else {
            f.write_str("0")
        }
    }
}

/// Writes the shortest form of `x` that reads back exactly, always with a
/// fractional part: `1.0`, `-2.5`, `1.0e16`, `1.5e-7`.
fn write_coefficient(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let text = format!("{:?}", x);
    if !x.is_finite() || text.contains('.') {
        return f.write_str(&text);
    }
    match text.find('e') {
        Some(exponent) => write!(f, "{}.0{}", &text[..exponent], &text[exponent..]),
        None => write!(f, "{}.0", text),
    }
}
