use axum::body::Body;
use http_body_util::BodyExt;

use crate::errors::ApiError;

/// Read at most `limit` bytes of the request body; anything past the cap is
/// dropped rather than rejected.
pub async fn read_capped(mut body: Body, limit: usize) -> Result<Vec<u8>, ApiError> {
    let mut buf = Vec::new();
    while buf.len() < limit {
        let Some(frame) = body.frame().await else { break };
        let frame = frame.map_err(|e| ApiError::BodyRead(e.to_string()))?;
        if let Ok(data) = frame.into_data() {
            let take = data.len().min(limit - buf.len());
            buf.extend_from_slice(&data[..take]);
        }
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn short_body_read_whole() -> anyhow::Result<()> {
        let raw = read_capped(Body::from("hello"), 1024).await?;
        assert_eq!(raw, b"hello");
        Ok(())
    }

    #[tokio::test]
    async fn long_body_truncated_at_cap() -> anyhow::Result<()> {
        let raw = read_capped(Body::from(vec![b'x'; 4096]), 100).await?;
        assert_eq!(raw.len(), 100);
        Ok(())
    }

    #[tokio::test]
    async fn empty_body() -> anyhow::Result<()> {
        assert!(read_capped(Body::empty(), 10).await?.is_empty());
        Ok(())
    }
}
