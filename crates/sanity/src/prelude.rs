//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use sanity::prelude::*;
//! ```

pub use crate::engine::{Checker, check};
pub use crate::failure::{FailureKind, FailureMap, Report};
pub use crate::options::{CheckOptions, LengthMode, UnannotatedPolicy};
pub use crate::rule::Rule;
pub use crate::schema::{FieldSchema, Schema};
pub use crate::value::{Int, Record, Value};
