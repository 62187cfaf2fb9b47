use crate::{
    core::{BdClient, BdError, RefreshOutcome, net},
    stocks::{StockView, model::Stock, wire},
};

pub(super) async fn fetch_stocks(client: &BdClient, view: StockView) -> Result<Vec<Stock>, BdError> {
    let url = client.endpoint(view.endpoint_path())?;
    let nodes: Vec<wire::StockNode> = net::recv_json(client.http().get(url)).await?;
    Ok(nodes.into_iter().map(Stock::from).collect())
}

pub(super) async fn refresh_stocks(client: &BdClient) -> Result<RefreshOutcome, BdError> {
    let url = client.endpoint("stocks/refresh")?;
    net::recv_json(client.http().post(url)).await
}
