use crate::core::FeedError;

/// Check the status code and read the response body as text.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, FeedError> {
    if !resp.status().is_success() {
        return Err(FeedError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp.text().await?)
}
