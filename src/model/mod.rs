//! Catalogue data model
//!
//! Categories and listing summaries are transient traversal values; a
//! [`BookRecord`] is the unit of output and is collected in a [`ResultSet`].

mod rating;
mod record;

pub use rating::Rating;
pub use record::{BookRecord, Category, DetailInfo, ListingItem, ResultSet};
