//! Blog record and statistic result types.

use serde::{Deserialize, Deserializer, Serialize};

/// A single blog post as exported by the document store.
///
/// Extra document fields (`id`, `user`, `__v`, ...) are ignored on
/// deserialization. A missing or `null` `likes` field reads as 0, the same
/// default the API applies when a blog is created without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogRecord {
    pub title: String,
    pub author: String,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub likes: u64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}

impl BlogRecord {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
        likes: u64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url: url.into(),
            likes,
        }
    }
}

/// The most-liked blog, without its URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSummary {
    pub title: String,
    pub author: String,
    pub likes: u64,
}

impl From<&BlogRecord> for FavoriteSummary {
    fn from(blog: &BlogRecord) -> Self {
        Self {
            title: blog.title.clone(),
            author: blog.author.clone(),
            likes: blog.likes,
        }
    }
}

/// Per-author aggregate: either a blog count or a like sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorStat {
    pub author: String,
    pub total: u64,
}

/// All collection statistics in one value.
///
/// The optional fields are `None` (serialized as `null`) only when the
/// collection is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogStats {
    pub blog_count: u64,
    pub total_likes: u64,
    pub favorite: Option<FavoriteSummary>,
    pub most_blogs: Option<AuthorStat>,
    pub most_likes: Option<AuthorStat>,
}
