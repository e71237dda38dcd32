// src/specs/mod.rs
//! # Source page specs
//!
//! Each spec knows *where the ground truth lives* on one remote page and how
//! to lift it into a plain [`DataSet`](crate::data::DataSet). Cleaning, typing
//! and joining happen in later stages.
//!
//! ## Conventions
//! - One page, one table. The page module picks the table; `core::html` reads it.
//! - No persistence: a spec either fetches or parses a file handed to it.
//! - Specs should be testable offline against saved HTML.
pub mod production;
