//! # Resources Module
//!
//! Bilingual directory of mental health support organisations and its search.

pub mod index;
pub mod model;

pub use index::ResourceIndex;
pub use model::{Category, CategoryFilter, Contact, Resource};
