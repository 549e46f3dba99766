//! # sanity
//!
//! Declarative field-rule validation for nested records.
//!
//! A [`Schema`] attaches a rule vocabulary to each record member; a
//! [`Checker`] walks a [`Value`] tree against it and returns a [`Report`]
//! mapping dotted paths to [`FailureKind`]s.
//!
//! ## Quick Start
//!
//! ```
//! use sanity::prelude::*;
//!
//! let schema = Schema::new()
//!     .field("Id", FieldSchema::new().display_name("id").not_null().max_length(5))
//!     .field(
//!         "Order",
//!         FieldSchema::record(
//!             Schema::new().field("Items", FieldSchema::new().display_name("items").max_length(4)),
//!         )
//!         .display_name("order"),
//!     );
//!
//! let value = Record::new()
//!     .with("Id", "a1")
//!     .with("Order", Record::new().with("Items", vec!["pen", "notebook"]))
//!     .into();
//!
//! let (report, valid) = sanity::check(&schema, &value);
//! assert!(!valid);
//! assert_eq!(report.errors.get("order.items.1"), Some(FailureKind::MaxLengthExceeded));
//! ```
//!
//! ## Rules
//!
//! | Name | Applies to | Fails when |
//! |---|---|---|
//! | `notnull` | any | value is empty, zero, `false`, absent, or an empty sequence |
//! | `gt` | signed integers | value is below the threshold |
//! | `lt` | signed integers | value is above the threshold |
//! | `regex` | strings | pattern finds no match |
//! | `maxlen` | strings | length exceeds the limit |
//! | `minlen` | strings | length is under the limit |
//!
//! Only the last failing rule of a member is reported. Members of unsigned,
//! float, map, or array kind are never validated.

pub mod engine;
pub mod error;
pub mod evaluate;
pub mod failure;
pub mod instruction;
pub mod options;
pub mod path;
pub mod prelude;
pub mod rule;
pub mod schema;
pub mod value;

pub use engine::{Checker, check};
pub use error::SchemaError;
pub use failure::{FailureKind, FailureMap, Report};
pub use instruction::InstructionSet;
pub use options::{CheckOptions, LengthMode, UnannotatedPolicy};
pub use path::{Path, Segment};
pub use rule::Rule;
pub use schema::{FieldSchema, Schema};
pub use value::{Int, Record, Value};
