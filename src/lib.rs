//! `immutable-math` is a small library of composable statistics over read-only collections:
//! `min`, `max`, `sum`, `average` (alias `mean`), `median`, and percent-of-total, each with a
//! `*_by` variant that reads elements through a selector.
//!
//! ## Configure, then apply
//!
//! Every operation is called once to produce a closure, and the closure is called with the data.
//! The configured closure can be reused across inputs, or passed to
//! [`collection::Collection::update`] so it slots into a chain:
//!
//! ```rust
//! use immutable_math::collection::Collection;
//! use immutable_math::processing::{average, median, percent};
//!
//! let numbers = vec![1, 1, 1, 5];
//! assert_eq!(average()(&numbers), 2.0);
//! assert_eq!(numbers.update(median()), 1.0);
//!
//! let shares = vec![1.0, 1.0, 2.0].update(percent());
//! assert_eq!(shares, vec![0.25, 0.25, 0.5]);
//! ```
//!
//! Selectors receive `(value, key, collection)`. The key is the index for sequences and the map
//! key for maps:
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use immutable_math::collection::Collection;
//! use immutable_math::processing::{average_by, percent_by_with};
//!
//! struct Item {
//!     n: f64,
//! }
//!
//! let items = vec![Item { n: 2.0 }, Item { n: 2.0 }, Item { n: 8.0 }];
//! assert_eq!(items.update(average_by(|item: &Item, _, _| item.n)), 4.0);
//!
//! let budget = BTreeMap::from([("food", 300.0), ("rent", 900.0)]);
//! let labelled = budget.update(percent_by_with(
//!     |amount: &f64, _, _| *amount,
//!     |amount: &f64, share, key: &&str, _| format!("{key}: {amount} ({share})"),
//! ));
//! assert_eq!(labelled["rent"], "rent: 900 (0.75)");
//! ```
//!
//! ## Empty collections
//!
//! Nothing here returns an error for empty input. `sum` gives `0.0`, `percent`/`percent_by`
//! give an empty collection, and `min`, `max`, `average`, `mean` and `median` (plus their `*_by`
//! forms) give `f64::NAN`. `NaN` is the single "no meaningful result" marker used throughout;
//! no function returns `Option` for it, so check `is_nan()` before relying on a result.
//!
//! Percentages are not guarded against a zero total either: they follow plain `f64` division.
//!
//! ## Modules
//!
//! - [`collection`]: the [`collection::Collection`] container trait and its implementations
//! - [`processing`]: aggregations, transformations and dataset column helpers
//! - [`types`]: tabular [`types::DataSet`] model
//! - [`execution`]: apply one configured operation to many collections in parallel
//! - [`error`]: error type for the fallible helpers

pub mod collection;
pub mod error;
pub mod execution;
pub mod processing;
pub mod types;

pub use error::{MathError, MathResult};
