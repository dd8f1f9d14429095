//! Blog collection reader.
//!
//! Reads blog records exported from the document store. Two layouts are
//! accepted per file:
//! - a JSON array of blog documents (the shape of a `GET /api/blogs` dump)
//! - JSON Lines, one blog document per line
//!
//! The layout is picked from the first non-whitespace byte of the file.
//! Input may be a single file or a directory; directory entries ending in
//! `.json`, `.jsonl` or `.ndjson` are read in sorted path order.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::blog::BlogRecord;
use crate::{Error, Result};

/// Configuration for the blog source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Input file or directory path.
    pub input: PathBuf,

    /// Continue past invalid records and unparseable files (log and skip).
    pub continue_on_error: bool,

    /// Limit number of files to process.
    pub limit: Option<usize>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            continue_on_error: true,
            limit: None,
        }
    }
}

/// Counters from a load run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceStats {
    /// Files read successfully.
    pub files_processed: usize,

    /// Files skipped because they could not be read or parsed.
    pub files_skipped: usize,

    /// Records encountered, valid or not.
    pub total_records: usize,

    pub valid_records: usize,
    pub invalid_records: usize,
}

/// Records read from the input, in input order.
#[derive(Debug, Clone, Default)]
pub struct LoadedBlogs {
    pub blogs: Vec<BlogRecord>,
    pub stats: SourceStats,
}

/// File-backed blog collection.
pub struct BlogSource {
    config: SourceConfig,
}

impl BlogSource {
    /// Create a new blog source with the given configuration.
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Read every record from the configured input.
    pub fn load(&self) -> Result<LoadedBlogs> {
        let files = self.collect_files()?;
        tracing::info!(files = files.len(), input = %self.config.input.display(), "loading blogs");

        let mut loaded = LoadedBlogs::default();

        for file_path in &files {
            match self.load_file(file_path, &mut loaded) {
                Ok(()) => loaded.stats.files_processed += 1,
                Err(e) if self.config.continue_on_error => {
                    tracing::warn!(file = %file_path.display(), error = %e, "skipping file");
                    loaded.stats.files_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            files_processed = loaded.stats.files_processed,
            files_skipped = loaded.stats.files_skipped,
            valid = loaded.stats.valid_records,
            invalid = loaded.stats.invalid_records,
            "blogs loaded"
        );

        Ok(loaded)
    }

    /// Collect files to process based on input path.
    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let input = &self.config.input;

        let mut files = if input.is_file() {
            vec![input.clone()]
        } else if input.is_dir() {
            let mut entries: Vec<_> = fs::read_dir(input)?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|path| {
                    path.is_file()
                        && path
                            .extension()
                            .is_some_and(|ext| ext == "json" || ext == "jsonl" || ext == "ndjson")
                })
                .collect();

            // Sort for deterministic record order
            entries.sort();
            entries
        } else {
            return Err(Error::InputNotFound(input.clone()));
        };

        if let Some(limit) = self.config.limit {
            files.truncate(limit);
        }

        Ok(files)
    }

    fn load_file(&self, file_path: &Path, loaded: &mut LoadedBlogs) -> Result<()> {
        let content = fs::read_to_string(file_path)?;
        let name = file_path.display();

        if content.trim_start().starts_with('[') {
            let documents: Vec<serde_json::Value> = serde_json::from_str(&content)?;
            tracing::debug!(file = %name, records = documents.len(), "reading JSON array");

            for (index, document) in documents.into_iter().enumerate() {
                let parsed = serde_json::from_value::<BlogRecord>(document);
                self.accept(parsed, || format!("{name}[{index}]"), loaded)?;
            }
        } else {
            tracing::debug!(file = %name, "reading JSON lines");

            for (line_num, line) in content.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let parsed = serde_json::from_str::<BlogRecord>(line);
                self.accept(parsed, || format!("{name}:{}", line_num + 1), loaded)?;
            }
        }

        Ok(())
    }

    fn accept<L>(
        &self,
        parsed: serde_json::Result<BlogRecord>,
        location: L,
        loaded: &mut LoadedBlogs,
    ) -> Result<()>
    where
        L: FnOnce() -> String,
    {
        loaded.stats.total_records += 1;

        let parsed = parsed.map_err(|e| e.to_string()).and_then(|blog| {
            if blog.title.is_empty() {
                Err("title is empty".to_string())
            } else {
                Ok(blog)
            }
        });

        match parsed {
            Ok(blog) => {
                loaded.stats.valid_records += 1;
                loaded.blogs.push(blog);
                Ok(())
            }
            Err(e) => {
                loaded.stats.invalid_records += 1;
                let location = location();
                if self.config.continue_on_error {
                    tracing::warn!(%location, error = %e, "skipping invalid blog record");
                    Ok(())
                } else {
                    Err(Error::InvalidRecord {
                        location,
                        reason: e,
                    })
                }
            }
        }
    }
}
