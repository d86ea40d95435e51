//! Picking the first matching item out of a sequence.

/// Applies `f` to the first item of `items` that satisfies `predicate`.
/// Returns `None` if nothing matches; `f` is never called in that case.
///
/// # Examples
///
/// ```
/// use exercises::strings::first_then_apply;
///
/// let doubled = first_then_apply(vec![1, 4, 9], |x| *x > 2, |x| x * 2);
/// assert_eq!(doubled, Some(8));
/// ```
pub fn first_then_apply<I, P, F, U>(items: I, predicate: P, f: F) -> Option<U>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
    F: FnOnce(I::Item) -> U,
{
    items.into_iter().find(predicate).map(f)
}

/// Lower-cases the first string of `strings` that satisfies `predicate`.
///
/// # Examples
///
/// ```
/// use exercises::strings::first_then_lower_case;
///
/// let words = ["Alpha", "BETA", "gamma"];
/// assert_eq!(
///     first_then_lower_case(&words, |s| s.len() == 4),
///     Some("beta".to_string())
/// );
/// assert_eq!(first_then_lower_case(&words, |s| s.is_empty()), None);
/// ```
pub fn first_then_lower_case<S, P>(strings: &[S], mut predicate: P) -> Option<String>
where
    S: AsRef<str>,
    P: FnMut(&str) -> bool,
{
    first_then_apply(
        strings.iter().map(AsRef::<str>::as_ref),
        |s| predicate(*s),
        str::to_lowercase,
    )
}
