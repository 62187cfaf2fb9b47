use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::model::Article;
use crate::core::BdError;

#[derive(Deserialize)]
pub(crate) struct ArticleNode {
    pub(crate) id: String,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) summary: String,
    #[serde(default)]
    pub(crate) content: String,
    pub(crate) category: String,
    #[serde(default)]
    pub(crate) source: String,
    #[serde(default)]
    pub(crate) url: String,
    #[serde(default)]
    pub(crate) image_url: Option<String>,
    pub(crate) published_at: DateTime<Utc>,
    #[serde(default)]
    pub(crate) keywords: Vec<String>,
}

impl TryFrom<ArticleNode> for Article {
    type Error = BdError;

    fn try_from(node: ArticleNode) -> Result<Self, Self::Error> {
        Ok(Self {
            category: node.category.parse()?,
            id: node.id,
            title: node.title,
            summary: node.summary,
            content: node.content,
            source: node.source,
            url: node.url,
            image_url: node.image_url,
            published_at: node.published_at,
            keywords: node.keywords,
        })
    }
}

pub(crate) fn into_articles(nodes: Vec<ArticleNode>) -> Result<Vec<Article>, BdError> {
    nodes.into_iter().map(Article::try_from).collect()
}

#[derive(Deserialize)]
pub(crate) struct CategoriesEnvelope {
    pub(crate) categories: Vec<String>,
}
