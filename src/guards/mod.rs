//! Guards - Runtime Type Guards
//!
//! Total predicates for branching safely on untrusted data. Guards answer
//! `bool`; the `narrow_*` functions turn an accepted value into a typed one.

pub mod api;
pub mod common;

pub use api::*;
pub use common::*;
