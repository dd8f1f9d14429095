//! Bloglist Stats - reporting for blog collection statistics.
//!
//! Reads a blog collection exported from the bloglist document store and
//! reports the aggregate statistics computed by [`bloglist_core`]: total
//! likes, the favorite blog, and the authors with the most blogs and the
//! most likes.
//!
//! # Configuration
//!
//! Settings come from environment variables (typically in a `.env` file),
//! overridable by command-line flags. See [`Config::from_env`].

pub mod config;
pub mod report;

pub use self::config::{Config, OutputFormat};
pub use self::report::{StatSelection, StatsReport, render};
