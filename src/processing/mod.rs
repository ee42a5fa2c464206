//! Aggregations and transformations over [`crate::collection::Collection`]s.
//!
//! Every operation is two-stage: calling it configures a closure, calling the closure with a
//! collection computes the result. The closure can be reused across inputs, and can be passed to
//! [`crate::collection::Collection::update`] to keep a chain going.
//!
//! - [`aggregations`]: `min`, `max`, `sum`, `average`/`mean`, `median` and their `*_by` variants
//! - [`transformations`]: `percent`, `percent_by`, `percent_by_with`
//! - [`reduce()`]: named [`AggregateOp`]s and column reductions over a [`crate::types::DataSet`]
//! - [`with_percent_column()`]: percent-of-total as a new dataset column
//!
//! ## Example: dataset column statistics
//!
//! ```rust
//! use immutable_math::processing::{reduce, with_percent_column, AggregateOp};
//! use immutable_math::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("id", DataType::Int64),
//!     Field::new("score", DataType::Float64),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Int64(1), Value::Float64(10.0)],
//!         vec![Value::Int64(2), Value::Float64(30.0)],
//!         vec![Value::Int64(3), Value::Null],
//!     ],
//! );
//!
//! // Nulls are skipped by column reductions.
//! assert_eq!(reduce(&ds, "score", AggregateOp::Average), Some(20.0));
//!
//! let op: AggregateOp = "median".parse().unwrap();
//! assert_eq!(reduce(&ds, "id", op), Some(2.0));
//!
//! let with_share = with_percent_column(&ds, "id", "id_share").unwrap();
//! assert_eq!(with_share.rows[2][2], Value::Float64(0.5));
//! ```

pub mod aggregations;
pub mod map;
pub mod reduce;
pub mod transformations;

pub use aggregations::{
    average, average_by, max, max_by, mean, mean_by, median, median_by, min, min_by, sum, sum_by,
};
pub use map::with_percent_column;
pub use reduce::{reduce, AggregateOp};
pub use transformations::{percent, percent_by, percent_by_with};
