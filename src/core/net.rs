/// Read the response body as text.
/// With the `tracing` feature, the body size is logged against the final URL.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, reqwest::Error> {
    #[cfg(feature = "tracing")]
    let url = resp.url().clone();

    let text = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::trace!(url = %url, bytes = text.len(), "read ISS response body");

    Ok(text)
}
