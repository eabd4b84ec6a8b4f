//! コンポーネントソースクライアント
//!
//! 公開リポジトリの raw URL からコンポーネントファイルを1件ずつ取得する。
//! 取得は常に逐次で、リトライやキャッシュは行わない。

use crate::error::{Result, VesperError};
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// 既定の取得元（raw.githubusercontent.com 上のコンポーネントルート）
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/vesper-ui/vesper-ui/main/packages/ui/src/components";

/// 取得元を差し替える環境変数（ミラーやテスト用）
pub const BASE_URL_ENV: &str = "VESPER_UI_BASE_URL";

const USER_AGENT: &str = "vesper-ui-cli";

/// コンポーネントファイルの取得元 trait
pub trait SourceClient: Send + Sync {
    /// 単一コンポーネントファイルの本文を取得
    fn fetch_file<'a>(
        &'a self,
        component: &'a str,
        file: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}

/// raw URL 直取得のソースクライアント
pub struct GitHubSource {
    client: Client,
    base_url: String,
}

impl GitHubSource {
    /// 既定の取得元で作成（環境変数があればそちらを優先）
    pub fn new() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// 取得元 URL を指定して作成
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// コンポーネントファイルの取得先 URL
    pub fn file_url(&self, component: &str, file: &str) -> String {
        format!("{}/{}/{}", self.base_url, component, file)
    }
}

impl Default for GitHubSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceClient for GitHubSource {
    fn fetch_file<'a>(
        &'a self,
        component: &'a str,
        file: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.file_url(component, file);
            let response = self.client.get(&url).send().await?;

            if !response.status().is_success() {
                return Err(VesperError::Fetch {
                    status: response.status().as_u16(),
                    url,
                });
            }

            Ok(response.text().await?)
        })
    }
}

#[cfg(test)]
pub mod mock;

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
