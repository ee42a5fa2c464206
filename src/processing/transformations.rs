//! Transformations: map a [`Collection`] to a same-shaped collection of derived numbers.
//!
//! Keys and order are preserved. Percentages are fractions of the total (`0.2`, not `20`).
//! A total of zero is not guarded against: the results are whatever `x / 0.0` gives (`NaN` or
//! an infinity).

use crate::collection::{Collection, Numeric};

use super::aggregations::sum;

/// Replace every element with its share of the collection's sum.
///
/// ```rust
/// use immutable_math::collection::Collection;
/// use immutable_math::processing::percent;
///
/// assert_eq!(vec![2.0, 2.0, 4.0].update(percent()), vec![0.25, 0.25, 0.5]);
/// ```
pub fn percent<C>() -> impl Fn(&C) -> C::Mapped<f64>
where
    C: Collection,
    C::Value: Numeric,
{
    |input: &C| {
        let total = sum::<C>()(input);
        input.map(|value, _, _| value.to_f64() / total)
    }
}

/// Like [`percent`], reading each element through `selector(value, key, collection)`.
///
/// Returns the bare percentages; use [`percent_by_with`] to merge them back into the elements.
pub fn percent_by<C, F>(selector: F) -> impl Fn(&C) -> C::Mapped<f64>
where
    C: Collection,
    F: Fn(&C::Value, &C::Key, &C) -> f64,
{
    move |input: &C| {
        let (mut shares, total) = project_shares(input, &selector);
        input.map(|_, _, _| shares.next().map_or(f64::NAN, |share| share / total))
    }
}

/// Like [`percent_by`], but each element becomes `setter(original, percent, key, collection)`.
///
/// ```rust
/// use immutable_math::collection::Collection;
/// use immutable_math::processing::percent_by_with;
///
/// #[derive(Debug, PartialEq)]
/// struct Slice {
///     n: f64,
///     p: Option<f64>,
/// }
///
/// let pie = vec![Slice { n: 1.0, p: None }, Slice { n: 3.0, p: None }];
/// let out = pie.update(percent_by_with(
///     |s: &Slice, _, _| s.n,
///     |s: &Slice, p, _, _| Slice { n: s.n, p: Some(p) },
/// ));
/// assert_eq!(out[1], Slice { n: 3.0, p: Some(0.75) });
/// ```
pub fn percent_by_with<C, F, S, U>(selector: F, setter: S) -> impl Fn(&C) -> C::Mapped<U>
where
    C: Collection,
    F: Fn(&C::Value, &C::Key, &C) -> f64,
    S: Fn(&C::Value, f64, &C::Key, &C) -> U,
{
    move |input: &C| {
        let (mut shares, total) = project_shares(input, &selector);
        input.map(|item, key, source| {
            let pct = shares.next().map_or(f64::NAN, |share| share / total);
            setter(item, pct, key, source)
        })
    }
}

// Runs the selector once per element. `entries` and `map` visit elements in the same order, so
// the returned iterator lines up with a following `input.map`.
fn project_shares<C, F>(input: &C, selector: &F) -> (std::vec::IntoIter<f64>, f64)
where
    C: Collection,
    F: Fn(&C::Value, &C::Key, &C) -> f64,
{
    let projected: Vec<f64> = input
        .entries()
        .map(|(key, value)| selector(value, &key, input))
        .collect();
    let total = projected.iter().fold(0.0, |acc, v| acc + v);
    (projected.into_iter(), total)
}
