use crate::core::parse;
use crate::core::{ConfigProvider, Pipeline, Snapshot, Storage, TransformResult};
use crate::utils::error::Result;
use chrono::Local;
use reqwest::Client;
use std::time::Duration;

pub struct SnapshotPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> SnapshotPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()?;

        Ok(Self {
            storage,
            config,
            client,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SnapshotPipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        tracing::debug!("Fetching ranking page: {}", self.config.source_url());
        let response = self.client.get(self.config.source_url()).send().await?;

        tracing::debug!("Response status: {}", response.status());

        // 非 2xx 視為致命錯誤，不重試、不產生部分輸出
        let body = response.error_for_status()?.text().await?;
        Ok(body)
    }

    async fn transform(&self, html: String) -> Result<TransformResult> {
        let result = parse::parse_ranking_tables(&html)?;

        tracing::debug!(
            "Parsed {} conferences and {} journals",
            result.conferences.len(),
            result.journals.len()
        );

        Ok(result)
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let snapshot = Snapshot {
            version: self.config.version_tag().to_string(),
            update_date: Local::now().format("%Y-%m-%d").to_string(),
            conferences: result.conferences,
            journals: result.journals,
        };

        // serde_json 不轉義非 ASCII 字元，中文原樣寫出
        let json = serde_json::to_string_pretty(&snapshot)?;

        tracing::debug!("Writing snapshot ({} bytes) to storage", json.len());
        self.storage
            .write_file(self.config.output_file(), json.as_bytes())
            .await?;

        let output_path = format!(
            "{}/{}",
            self.config.output_path(),
            self.config.output_file()
        );
        Ok(output_path)
    }
}
