//! Field-based comparator chains for sorting bibliographic entries.
//!
//! A [search::Sort] is an ordered list of [search::SortField]s. Entries are compared on the first
//! field; ties fall through to the next field and, after the last one, to the entries' unique ids.
//!
//! ```
//! use bibsort_core::{entry::BibEntry, field::StandardField, search::Sort};
//!
//! let sort = Sort::parse("author, year:desc").unwrap();
//! let mut entries = vec![
//!     BibEntry::new("article")
//!         .with_field(StandardField::Author, "John Smith")
//!         .with_field(StandardField::Year, "1999"),
//!     BibEntry::new("book").with_field(StandardField::Author, "Smith, Jane"),
//! ];
//! sort.sort(&mut entries);
//! assert_eq!(entries[0].to_string().lines().nth(1), Some("  author = {Smith, Jane}"));
//! ```

#![warn(clippy::all)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]

mod error;
mod id;

/// Bibliographic entries.
pub mod entry;

/// Field metadata.
pub mod field;

/// Person-name normalization.
pub mod name;

/// Sorting entries.
pub mod search;

pub use {error::*, id::*};
