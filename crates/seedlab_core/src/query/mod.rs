//! Filters, update documents and aggregation pipelines.
//!
//! # Responsibility
//! - Build every query document the showcase sends to MongoDB.
//! - Keep query shapes free of I/O so they can be inspected in tests.
//!
//! # Invariants
//! - Builders are pure; the same inputs always produce the same documents.

pub mod articles;
pub mod students;
pub mod users;
