//! Powers of a number, smallest first.

use std::iter::FusedIterator;

/// Yields `base^0, base^1, base^2, ...` for as long as the power is at most
/// `up_to`.
///
/// The sequence also ends if the next power would overflow a `u64`, or if it
/// would just repeat the previous one (bases `0` and `1`).
///
/// # Examples
///
/// ```
/// use exercises::powers::powers_of;
///
/// assert_eq!(powers_of(2, 70).collect::<Vec<_>>(), [1, 2, 4, 8, 16, 32, 64]);
/// assert_eq!(powers_of(3, 0).count(), 0);
/// ```
pub fn powers_of(base: u64, up_to: u64) -> Powers {
    Powers {
        base,
        up_to,
        next: Some(1),
    }
}

/// Iterator returned by [`powers_of`].
#[derive(Clone, Debug)]
pub struct Powers {
    base: u64,
    up_to: u64,
    next: Option<u64>,
}

impl Iterator for Powers {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take().filter(|&power| power <= self.up_to)?;
        self.next = current
            .checked_mul(self.base)
            .filter(|&power| power != current);
        Some(current)
    }
}

impl FusedIterator for Powers {}
