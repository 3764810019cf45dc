use crate::core::report::{StatsReport, DEFAULT_TOP_UNIVERSITIES};
use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;
use std::time::Instant;

const RULE: &str = "================================================================================";

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
    top_universities: usize,
    dry_run: bool,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            top_universities: DEFAULT_TOP_UNIVERSITIES,
            dry_run: false,
        }
    }

    pub fn with_top_universities(mut self, top_universities: usize) -> Self {
        self.top_universities = top_universities;
        self
    }

    /// Parse and report without writing the output file.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();

        println!("{}", RULE);
        println!("Contract data converter");
        println!("{}", RULE);
        println!();

        // Extract
        println!("📖 Reading contract data...");
        let raw = self.pipeline.extract().await?;
        println!("✅ Read {} lines from {}", raw.lines.len(), raw.source);
        println!();

        // Transform
        println!("🔄 Processing data...");
        let transformed = self.pipeline.transform(raw).await?;
        println!(
            "✅ Processed {} contracts successfully",
            transformed.records.len()
        );
        if transformed.error_count() > 0 {
            println!("⚠️ Invalid lines: {}", transformed.error_count());
        }
        println!();

        // Load
        let output_path = if self.dry_run {
            println!("💾 Dry run: output file skipped");
            tracing::info!("Dry run requested, nothing written");
            None
        } else {
            println!("💾 Writing output...");
            let path = self.pipeline.load(&transformed).await?;
            println!("✅ Created {}", path);
            Some(path)
        };
        println!();

        let report = StatsReport::build(&transformed.records, self.top_universities);
        print!("{}", report);

        println!("{}", RULE);
        println!("✅ Conversion completed successfully!");
        println!();
        println!("Next steps:");
        println!("1. Open index.html in your browser");
        println!("2. Make sure all files are in the same folder");
        println!("3. Enjoy the dashboard! 🎉");
        println!("{}", RULE);

        tracing::info!(
            records = transformed.records.len(),
            invalid = transformed.error_count(),
            elapsed = ?started.elapsed(),
            "Conversion finished"
        );

        Ok(RunSummary {
            output_path,
            record_count: transformed.records.len(),
            invalid_lines: transformed.invalid_lines,
            report,
        })
    }
}
