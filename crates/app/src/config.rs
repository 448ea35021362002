use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use resit_core::{ReferenceList, ReferenceOption};
use resit_ocr::{MockRecognizer, OcrBackend};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "resit.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OcrBackendKind {
    /// Answers with `mock_text`; no OCR engine needed.
    #[default]
    Mock,
    Tesseract,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    pub backend: OcrBackendKind,
    /// Directory holding `<language>.traineddata`; system default when unset.
    pub tessdata_path: Option<String>,
    pub language: String,
    pub mock_text: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            backend: OcrBackendKind::Mock,
            tessdata_path: None,
            language: "eng".to_string(),
            mock_text: String::new(),
        }
    }
}

/// Contents of `resit.toml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ocr: OcrConfig,
    /// Replaces the built-in category options when present.
    pub categories: Option<Vec<ReferenceOption>>,
    /// Replaces the built-in payment method options when present.
    pub payment_methods: Option<Vec<ReferenceOption>>,
}

impl AppConfig {
    /// An explicit path must exist; otherwise the per-user config file is
    /// read if there is one, and defaults are used if not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::info!("Loaded config: {}", path.display());
        Ok(config)
    }

    pub fn category_list(&self) -> Result<ReferenceList> {
        match &self.categories {
            Some(options) => ReferenceList::new(options.clone()).context("Invalid [[categories]]"),
            None => Ok(ReferenceList::categories()),
        }
    }

    pub fn payment_method_list(&self) -> Result<ReferenceList> {
        match &self.payment_methods {
            Some(options) => {
                ReferenceList::new(options.clone()).context("Invalid [[payment_methods]]")
            }
            None => Ok(ReferenceList::payment_methods()),
        }
    }

    /// Build the OCR backend named in `[ocr]`.
    pub fn recognizer(&self) -> Result<Box<dyn OcrBackend>> {
        match self.ocr.backend {
            OcrBackendKind::Mock => Ok(Box::new(MockRecognizer::new(self.ocr.mock_text.clone()))),
            OcrBackendKind::Tesseract => tesseract(&self.ocr),
        }
    }
}

#[cfg(feature = "tesseract")]
fn tesseract(ocr: &OcrConfig) -> Result<Box<dyn OcrBackend>> {
    use resit_ocr::recognizer::tesseract_backend::TesseractRecognizer;
    Ok(Box::new(TesseractRecognizer::new(ocr.tessdata_path.clone(), &ocr.language)))
}

#[cfg(not(feature = "tesseract"))]
fn tesseract(_ocr: &OcrConfig) -> Result<Box<dyn OcrBackend>> {
    Err(resit_ocr::OcrError::NotAvailable.into())
}

/// `<config dir>/resit.toml`, e.g. `~/.config/resit/resit.toml` on Linux.
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "resit", "Resit")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
