use alloy::providers::{DynProvider, Provider, ProviderBuilder, WsConnect};
use anyhow::Error;
use tracing::debug;

/// Read-only provider for a single http(s) or ws(s) endpoint.
pub async fn create_alloy_provider_without_wallet(url: &str) -> Result<DynProvider, Error> {
    debug!("Creating alloy provider with URL: {url}");
    if url.starts_with("ws://") || url.starts_with("wss://") {
        let ws = WsConnect::new(url);
        Ok(ProviderBuilder::new()
            .connect_ws(ws)
            .await
            .map_err(|e| Error::msg(format!("Execution layer: Failed to connect to WS: {e}")))?
            .erased())
    } else if url.starts_with("http://") || url.starts_with("https://") {
        Ok(ProviderBuilder::new()
            .connect_http(url.parse::<reqwest::Url>()?)
            .erased())
    } else {
        Err(anyhow::anyhow!(
            "Invalid URL, only websocket and http are supported: {}",
            url
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_unsupported_scheme() {
        let err = create_alloy_provider_without_wallet("ipc:///tmp/geth.ipc")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid URL, only websocket and http are supported: ipc:///tmp/geth.ipc"
        );
    }

    #[tokio::test]
    async fn test_http_provider_does_not_connect_eagerly() {
        assert!(
            create_alloy_provider_without_wallet("http://127.0.0.1:1")
                .await
                .is_ok()
        );
    }
}
