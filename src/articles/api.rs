use crate::{
    articles::{
        model::{Article, Category},
        wire,
    },
    core::{BdClient, BdError, RefreshOutcome, net},
};

pub(super) async fn fetch_articles(
    client: &BdClient,
    category: Option<Category>,
    limit: Option<u32>,
) -> Result<Vec<Article>, BdError> {
    let mut url = client.endpoint("articles")?;
    if category.is_some() || limit.is_some() {
        let mut qp = url.query_pairs_mut();
        if let Some(cat) = category {
            qp.append_pair("category", cat.as_str());
        }
        if let Some(n) = limit {
            qp.append_pair("limit", &n.to_string());
        }
    }

    let nodes: Vec<wire::ArticleNode> = net::recv_json(client.http().get(url)).await?;
    wire::into_articles(nodes)
}

pub(super) async fn fetch_article(client: &BdClient, id: &str) -> Result<Article, BdError> {
    let url = client.endpoint(&format!("articles/{id}"))?;
    let node: wire::ArticleNode = net::recv_json(client.http().get(url)).await?;
    node.try_into()
}

pub(super) async fn fetch_categories(client: &BdClient) -> Result<Vec<String>, BdError> {
    let url = client.endpoint("categories")?;
    let envelope: wire::CategoriesEnvelope = net::recv_json(client.http().get(url)).await?;
    Ok(envelope.categories)
}

pub(super) async fn refresh_articles(client: &BdClient) -> Result<RefreshOutcome, BdError> {
    let url = client.endpoint("articles/refresh")?;
    net::recv_json(client.http().post(url)).await
}
