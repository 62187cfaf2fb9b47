use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::core::BdError;

/// Send a request and decode the JSON body.
///
/// Non-2xx responses are mapped to [`BdError::Status`] before any parse is
/// attempted, so a backend error page never surfaces as a decode failure.
pub(crate) async fn recv_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, BdError> {
    let resp = req.send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(BdError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}
