//! Aggregations: reduce a [`Collection`] to one `f64`.
//!
//! Every operation is configured first and applied later:
//!
//! ```rust
//! use immutable_math::collection::Collection;
//! use immutable_math::processing::{average, average_by};
//!
//! assert_eq!(vec![1, 1, 1, 5].update(average()), 2.0);
//!
//! struct Item {
//!     num: f64,
//! }
//! let average_by_num = average_by(|item: &Item, _, _| item.num);
//! let a = vec![Item { num: 1.0 }, Item { num: 5.0 }];
//! let b = vec![Item { num: 3.0 }, Item { num: 5.0 }];
//! assert_eq!(average_by_num(&a), 3.0);
//! assert_eq!(average_by_num(&b), 4.0);
//! ```
//!
//! ## Empty input
//!
//! `sum` of an empty collection is `0.0`. Every other aggregation returns `f64::NAN` for an empty
//! collection. This is the only "no result" signal the crate uses; there is no `Option`
//! variant of these functions, so check `is_nan()` before feeding a result into further
//! arithmetic.
//!
//! ## NaN elements
//!
//! `min` and `max` skip `NaN` elements, so `[NaN, 1.0, 5.0]` has a min of `1.0`. `median` sorts
//! `NaN` after every number. `sum` and `average` propagate it.

use crate::collection::{Collection, Numeric};

/// Smallest element. `NaN` when empty; `NaN` elements are skipped.
pub fn min<C>() -> impl Fn(&C) -> f64
where
    C: Collection,
    C::Value: Numeric,
{
    |input: &C| min_of(input.values().map(|v| v.to_f64()))
}

/// Like [`min`], reading each element through `selector(value, key, collection)`.
pub fn min_by<C, F>(selector: F) -> impl Fn(&C) -> f64
where
    C: Collection,
    F: Fn(&C::Value, &C::Key, &C) -> f64,
{
    move |input: &C| min_of(project(input, &selector))
}

/// Largest element. `NaN` when empty; `NaN` elements are skipped.
pub fn max<C>() -> impl Fn(&C) -> f64
where
    C: Collection,
    C::Value: Numeric,
{
    |input: &C| max_of(input.values().map(|v| v.to_f64()))
}

/// Like [`max`], reading each element through `selector(value, key, collection)`.
pub fn max_by<C, F>(selector: F) -> impl Fn(&C) -> f64
where
    C: Collection,
    F: Fn(&C::Value, &C::Key, &C) -> f64,
{
    move |input: &C| max_of(project(input, &selector))
}

/// Arithmetic sum. `0.0` when empty.
pub fn sum<C>() -> impl Fn(&C) -> f64
where
    C: Collection,
    C::Value: Numeric,
{
    |input: &C| sum_of(input.values().map(|v| v.to_f64()))
}

/// Like [`sum`], reading each element through `selector(value, key, collection)`.
pub fn sum_by<C, F>(selector: F) -> impl Fn(&C) -> f64
where
    C: Collection,
    F: Fn(&C::Value, &C::Key, &C) -> f64,
{
    move |input: &C| sum_of(project(input, &selector))
}

/// `sum / count`. `NaN` when empty.
pub fn average<C>() -> impl Fn(&C) -> f64
where
    C: Collection,
    C::Value: Numeric,
{
    |input: &C| average_of(input.values().map(|v| v.to_f64()))
}

/// Like [`average`], reading each element through `selector(value, key, collection)`.
pub fn average_by<C, F>(selector: F) -> impl Fn(&C) -> f64
where
    C: Collection,
    F: Fn(&C::Value, &C::Key, &C) -> f64,
{
    move |input: &C| average_of(project(input, &selector))
}

/// Alias for [`average`].
pub fn mean<C>() -> impl Fn(&C) -> f64
where
    C: Collection,
    C::Value: Numeric,
{
    average::<C>()
}

/// Alias for [`average_by`].
pub fn mean_by<C, F>(selector: F) -> impl Fn(&C) -> f64
where
    C: Collection,
    F: Fn(&C::Value, &C::Key, &C) -> f64,
{
    average_by::<C, F>(selector)
}

/// Middle element of the ascending numeric order, or the mean of the two middle elements for an
/// even count. `NaN` when empty.
pub fn median<C>() -> impl Fn(&C) -> f64
where
    C: Collection,
    C::Value: Numeric,
{
    |input: &C| median_of(input.values().map(|v| v.to_f64()).collect())
}

/// Like [`median`], reading each element through `selector(value, key, collection)`.
pub fn median_by<C, F>(selector: F) -> impl Fn(&C) -> f64
where
    C: Collection,
    F: Fn(&C::Value, &C::Key, &C) -> f64,
{
    move |input: &C| median_of(project(input, &selector).collect())
}

fn project<'a, C, F>(input: &'a C, selector: &'a F) -> impl Iterator<Item = f64> + 'a
where
    C: Collection,
    F: Fn(&C::Value, &C::Key, &C) -> f64,
{
    input
        .entries()
        .map(move |(key, value)| selector(value, &key, input))
}

fn min_of(values: impl Iterator<Item = f64>) -> f64 {
    values.reduce(f64::min).unwrap_or_else(|| {
        tracing::trace!("min of empty collection");
        f64::NAN
    })
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.reduce(f64::max).unwrap_or_else(|| {
        tracing::trace!("max of empty collection");
        f64::NAN
    })
}

fn sum_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |acc, v| acc + v)
}

fn average_of(values: impl Iterator<Item = f64>) -> f64 {
    let (total, count) = values.fold((0.0, 0_usize), |(total, count), v| (total + v, count + 1));
    if count == 0 {
        tracing::trace!("average of empty collection");
        return f64::NAN;
    }
    total / count as f64
}

fn median_of(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        tracing::trace!("median of empty collection");
        return f64::NAN;
    }
    values.sort_by(f64::total_cmp);
    let count = values.len();
    if count % 2 == 0 {
        (values[count / 2 - 1] + values[count / 2]) / 2.0
    } else {
        values[count / 2]
    }
}
