//! Deals Feature
//!
//! The dashboard page with transactions, documents, parties and the
//! commission split.

pub mod columns;
pub mod controller;
pub mod page;
