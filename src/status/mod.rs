mod model;
mod wire;

pub use model::{ApiInfo, SystemStatus};

use crate::core::{BdClient, BdError, net};

/// Fetch the aggregate system status (`GET /status`).
///
/// # Errors
///
/// Returns a `BdError` if the request fails, the backend answers with a
/// non-2xx status, or the response cannot be decoded.
pub async fn get(client: &BdClient) -> Result<SystemStatus, BdError> {
    let url = client.endpoint("status")?;
    let node: wire::StatusNode = net::recv_json(client.http().get(url)).await?;
    Ok(node.into())
}

/// Fetch the API identification payload from the root endpoint (`GET /`).
///
/// # Errors
///
/// Returns a `BdError` if the request fails or the response cannot be decoded.
pub async fn api_info(client: &BdClient) -> Result<ApiInfo, BdError> {
    let url = client.endpoint("")?;
    net::recv_json(client.http().get(url)).await
}
