use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use resit_core::{DraftField, ReceiptDraft, ReferenceList, ReferenceOption};
use resit_ocr::{ExtractionResult, Extractor, ReceiptPipeline, ScanResult};
use serde::Serialize;

use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// File holding raw OCR text; reads stdin when omitted
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Receipt photo to run through OCR
    pub image: PathBuf,
}

/// What `scan` prints: the extraction, the form options it maps to, and
/// what the reviewer still has to fill in.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub content_hash: String,
    pub extracted: ExtractionResult,
    pub category_option: Option<ReferenceOption>,
    pub payment_method_option: Option<ReferenceOption>,
    pub missing_fields: Vec<DraftField>,
}

#[derive(Debug, Serialize)]
struct Labels<'a> {
    categories: &'a [ReferenceOption],
    payment_methods: &'a [ReferenceOption],
}

pub async fn parse(args: ParseArgs) -> Result<()> {
    let text = match &args.file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read OCR text from stdin")?;
            buf
        }
    };

    let result = parse_text(&text)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub async fn scan(args: ScanArgs, config: &AppConfig) -> Result<()> {
    let report = scan_file(&args.image, config).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn labels(config: &AppConfig) -> Result<()> {
    let categories = config.category_list()?;
    let payment_methods = config.payment_method_list()?;
    let labels = Labels {
        categories: categories.options(),
        payment_methods: payment_methods.options(),
    };
    println!("{}", serde_json::to_string_pretty(&labels)?);
    Ok(())
}

/// Blank input is refused rather than reported as "nothing found".
pub fn parse_text(text: &str) -> Result<ExtractionResult> {
    if text.trim().is_empty() {
        bail!("No OCR text to parse");
    }
    Ok(Extractor::extract(text))
}

pub async fn scan_file(image: &Path, config: &AppConfig) -> Result<ScanReport> {
    let pipeline = ReceiptPipeline::new(config.recognizer()?);
    let scan = pipeline
        .process_file(image)
        .await
        .with_context(|| format!("Failed to scan {}", image.display()))?;
    Ok(build_report(
        scan,
        &config.category_list()?,
        &config.payment_method_list()?,
    ))
}

pub fn build_report(
    scan: ScanResult,
    categories: &ReferenceList,
    payment_methods: &ReferenceList,
) -> ScanReport {
    let extracted = scan.extracted;

    let category_option = extracted
        .category
        .and_then(|c| categories.resolve(c.as_str()).cloned());
    let payment_method_option = extracted
        .payment_method
        .and_then(|m| payment_methods.resolve(m.as_str()).cloned());

    if extracted.category.is_some() && category_option.is_none() {
        tracing::warn!(category = ?extracted.category, "category has no matching option");
    }
    if extracted.payment_method.is_some() && payment_method_option.is_none() {
        tracing::warn!(payment_method = ?extracted.payment_method, "payment method has no matching option");
    }

    let missing_fields = ReceiptDraft::from(extracted.clone()).missing_fields();

    ScanReport {
        content_hash: scan.content_hash,
        extracted,
        category_option,
        payment_method_option,
        missing_fields,
    }
}
