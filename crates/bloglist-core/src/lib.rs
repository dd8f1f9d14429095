//! Core types and aggregate statistics for the bloglist API.
//!
//! This crate provides:
//! - The blog record shape shared with the document store
//! - Pure aggregation helpers (total likes, favorite blog, top authors)
//! - A reader for blog collections exported as JSON or JSON Lines
//! - Shared error types
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Export files   │  (JSON arrays, JSONL, or a directory of either)
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   BlogSource    │  Parses records, counts/skips invalid ones
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   aggregate     │  Pure functions over &[BlogRecord]
//! └─────────────────┘
//! ```

pub mod aggregate;
mod blog;
mod error;
pub mod source;

pub use aggregate::{favorite_blog, most_blogs, most_likes, summarize, total_likes};
pub use blog::{AuthorStat, BlogRecord, BlogStats, FavoriteSummary};
pub use error::{Error, Result};
pub use source::{BlogSource, LoadedBlogs, SourceConfig, SourceStats};
