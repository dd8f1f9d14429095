//! Aggregate statistics over a blog collection.
//!
//! Every function here is pure: it borrows the slice, performs no I/O and
//! returns a fresh value. An empty collection yields `0` for
//! [`total_likes`] and `None` for the others, since a real statistic can
//! itself be zero.
//!
//! Like sums saturate at `u64::MAX` instead of overflowing.
//!
//! Ties always go to the first occurrence. For the per-author statistics,
//! authors are ordered by the position of their first blog in the input.

use std::collections::HashMap;

use crate::blog::{AuthorStat, BlogRecord, BlogStats, FavoriteSummary};

// ═══════════════════════════════════════════════════════════════════════════
// Collection-wide
// ═══════════════════════════════════════════════════════════════════════════

/// Sum of likes across all blogs.
pub fn total_likes(blogs: &[BlogRecord]) -> u64 {
    blogs
        .iter()
        .fold(0u64, |sum, blog| sum.saturating_add(blog.likes))
}

/// The blog with the most likes, or `None` for an empty collection.
pub fn favorite_blog(blogs: &[BlogRecord]) -> Option<FavoriteSummary> {
    first_max_by_key(blogs, |blog| blog.likes).map(FavoriteSummary::from)
}

// ═══════════════════════════════════════════════════════════════════════════
// Per author
// ═══════════════════════════════════════════════════════════════════════════

/// The author with the most blogs, with their blog count.
pub fn most_blogs(blogs: &[BlogRecord]) -> Option<AuthorStat> {
    top_author(blogs, |_| 1)
}

/// The author whose blogs have the most likes in total, with that sum.
pub fn most_likes(blogs: &[BlogRecord]) -> Option<AuthorStat> {
    top_author(blogs, |blog| blog.likes)
}

/// Compute every statistic for the collection.
pub fn summarize(blogs: &[BlogRecord]) -> BlogStats {
    BlogStats {
        blog_count: blogs.len() as u64,
        total_likes: total_likes(blogs),
        favorite: favorite_blog(blogs),
        most_blogs: most_blogs(blogs),
        most_likes: most_likes(blogs),
    }
}

fn top_author<F>(blogs: &[BlogRecord], value: F) -> Option<AuthorStat>
where
    F: Fn(&BlogRecord) -> u64,
{
    first_max_by_key(author_totals(blogs, value), |(_, total)| *total).map(|(author, total)| {
        AuthorStat {
            author: author.to_string(),
            total,
        }
    })
}

/// Group blogs by author in a single pass, summing `value` per author.
///
/// The returned groups are in order of each author's first appearance.
fn author_totals<F>(blogs: &[BlogRecord], value: F) -> Vec<(&str, u64)>
where
    F: Fn(&BlogRecord) -> u64,
{
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, u64)> = Vec::new();

    for blog in blogs {
        let slot = *slots.entry(blog.author.as_str()).or_insert_with(|| {
            totals.push((blog.author.as_str(), 0));
            totals.len() - 1
        });
        let total = &mut totals[slot].1;
        *total = total.saturating_add(value(blog));
    }

    totals
}

/// Like [`Iterator::max_by_key`], but keeps the first of equal maxima.
fn first_max_by_key<I, F>(items: I, key: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: Fn(&I::Item) -> u64,
{
    let mut best: Option<(u64, I::Item)> = None;
    for item in items {
        let k = key(&item);
        if best.as_ref().is_none_or(|(best_key, _)| k > *best_key) {
            best = Some((k, item));
        }
    }
    best.map(|(_, item)| item)
}
