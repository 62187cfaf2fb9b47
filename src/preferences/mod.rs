mod model;

pub use model::UserPreferences;

use crate::{
    articles::Category,
    core::{BdClient, BdError, net},
};

/// Save a user's preferred categories (`POST /preferences?user_id=`).
///
/// Returns the stored record; invalid categories are dropped server-side.
///
/// # Errors
///
/// Returns a `BdError` if the request fails, the backend answers with a
/// non-2xx status, or the response cannot be decoded.
pub async fn save(
    client: &BdClient,
    user_id: &str,
    categories: &[Category],
) -> Result<UserPreferences, BdError> {
    let mut url = client.endpoint("preferences")?;
    url.query_pairs_mut().append_pair("user_id", user_id);
    net::recv_json(client.http().post(url).json(&categories)).await
}

/// Fetch a user's preferred categories (`GET /preferences/{user_id}`).
///
/// Unknown users get the backend's default preference set rather than an
/// error.
///
/// # Errors
///
/// Returns a `BdError` if the request fails, the backend answers with a
/// non-2xx status, or the response cannot be decoded.
pub async fn get(client: &BdClient, user_id: &str) -> Result<UserPreferences, BdError> {
    let url = client.endpoint(&format!("preferences/{user_id}"))?;
    net::recv_json(client.http().get(url)).await
}
