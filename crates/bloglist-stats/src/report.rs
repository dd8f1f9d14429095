//! Report assembly and rendering.

use bloglist_core::{AuthorStat, BlogStats, LoadedBlogs, SourceStats, summarize};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

use crate::config::OutputFormat;

/// Which statistic to report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StatSelection {
    #[default]
    All,
    TotalLikes,
    Favorite,
    MostBlogs,
    MostLikes,
}

/// JSON report body.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub generated_at: DateTime<Utc>,
    pub source: SourceStats,
    /// Full [`BlogStats`] for `all`, otherwise the single selected value
    /// (`null` when the collection is empty).
    pub stats: serde_json::Value,
}

impl StatsReport {
    pub fn build(loaded: &LoadedBlogs, selection: StatSelection) -> serde_json::Result<Self> {
        let stats = summarize(&loaded.blogs);

        let value = match selection {
            StatSelection::All => serde_json::to_value(&stats)?,
            StatSelection::TotalLikes => serde_json::to_value(stats.total_likes)?,
            StatSelection::Favorite => serde_json::to_value(&stats.favorite)?,
            StatSelection::MostBlogs => serde_json::to_value(&stats.most_blogs)?,
            StatSelection::MostLikes => serde_json::to_value(&stats.most_likes)?,
        };

        Ok(Self {
            generated_at: Utc::now(),
            source: loaded.stats.clone(),
            stats: value,
        })
    }
}

/// Render the selected statistics in the requested format.
pub fn render(
    loaded: &LoadedBlogs,
    selection: StatSelection,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string(&StatsReport::build(loaded, selection)?)?,
        OutputFormat::Pretty => {
            serde_json::to_string_pretty(&StatsReport::build(loaded, selection)?)?
        }
        OutputFormat::Text => text_lines(&summarize(&loaded.blogs), selection).join("\n"),
    };

    Ok(output)
}

fn text_lines(stats: &BlogStats, selection: StatSelection) -> Vec<String> {
    let favorite = || match &stats.favorite {
        Some(blog) => format!(
            "favorite: \"{}\" by {} ({} likes)",
            blog.title, blog.author, blog.likes
        ),
        None => "favorite: none".to_string(),
    };
    let most_blogs = || author_line("most blogs", stats.most_blogs.as_ref());
    let most_likes = || author_line("most likes", stats.most_likes.as_ref());
    let total_likes = || format!("total likes: {}", stats.total_likes);

    match selection {
        StatSelection::All => vec![
            format!("blogs: {}", stats.blog_count),
            total_likes(),
            favorite(),
            most_blogs(),
            most_likes(),
        ],
        StatSelection::TotalLikes => vec![total_likes()],
        StatSelection::Favorite => vec![favorite()],
        StatSelection::MostBlogs => vec![most_blogs()],
        StatSelection::MostLikes => vec![most_likes()],
    }
}

fn author_line(label: &str, stat: Option<&AuthorStat>) -> String {
    match stat {
        Some(stat) => format!("{label}: {} ({})", stat.author, stat.total),
        None => format!("{label}: none"),
    }
}
