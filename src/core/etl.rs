use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Fetching CCF ranking data...");

        // Extract
        let html = self.pipeline.extract().await?;
        tracing::info!("Fetched {} bytes of HTML", html.len());

        // Transform
        let result = self.pipeline.transform(html).await?;
        let conference_count = result.conferences.len();
        let journal_count = result.journals.len();

        // Load
        let output_path = self.pipeline.load(result).await?;
        println!(
            "Done: {} conferences, {} journals -> {}",
            conference_count, journal_count, output_path
        );

        Ok(output_path)
    }
}
