//! Per-position mapping of a sequence of values.

use super::Hook;

/// Maps each value through the transformer at the same position.
///
/// For the value at index `i`:
///
/// - if `i < transformers.len()`, the transformer `transformers[i]` is applied
///   when present, and the value passes through unchanged when it is `None`;
/// - otherwise `fallback` is applied when present, and the value passes
///   through unchanged when it is `None`.
///
/// A length mismatch between `transformers` and `values` is not an error:
/// surplus transformers are never invoked, and surplus values are handled by
/// `fallback`. Values are consumed once, in order, and every transformer is
/// invoked at most once.
///
/// # Examples
///
/// ```
/// use hookwork::compose::{Hook, map_indexed};
///
/// let double = Hook::new(|value: i32| value * 2);
///
/// // Positions without a transformer pass through
/// assert_eq!(map_indexed(&[Some(double), None], vec![1, 2, 3], None), vec![2, 2, 3]);
///
/// // The fallback covers every value when no transformers are given
/// let negate = Hook::new(|value: i32| -value);
/// assert_eq!(map_indexed(&[], vec![1, 2], Some(&negate)), vec![-1, -2]);
/// ```
pub fn map_indexed<T, I>(
    transformers: &[Option<Hook<T>>],
    values: I,
    fallback: Option<&Hook<T>>,
) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let transformer = match transformers.get(index) {
                Some(slot) => slot.as_ref(),
                None => fallback,
            };
            match transformer {
                Some(hook) => hook.apply(value),
                None => value,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_more_transformers_than_values() {
        let increment = Hook::new(|value: i32| value + 1);
        let transformers = vec![Some(increment.clone()), Some(increment.clone()), Some(increment)];
        assert_eq!(map_indexed(&transformers, vec![10], None), vec![11]);
    }

    #[test]
    fn test_absent_entry_ignores_fallback() {
        let negate = Hook::new(|value: i32| -value);
        assert_eq!(map_indexed(&[None], vec![1, 2], Some(&negate)), vec![1, -2]);
    }

    #[test]
    fn test_empty_values() {
        let negate = Hook::new(|value: i32| -value);
        assert!(map_indexed(&[Some(negate.clone())], Vec::new(), Some(&negate)).is_empty());
    }

    #[test]
    fn test_surplus_transformers_are_not_invoked() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counting = Hook::new(move |value: i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            value
        });
        let transformers = vec![Some(counting.clone()), Some(counting.clone()), Some(counting)];

        let _ = map_indexed(&transformers, vec![1, 2], None);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
