//! Integration tests for sanity.

mod flat_record;
mod traversal;
