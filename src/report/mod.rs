//! Plain-text conversion reports
//!
//! A report records one conversion: the scale, the sargam input and the
//! Western output, each under a dashed header. `save_report` writes it next
//! to the path the user picked, with a `.txt` suffix added.

pub mod templates;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::convert::{ConversionError, Converter};
use templates::{render_template, ReportContext, ReportTemplate};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report template error: {0}")]
    Template(#[from] mustache::Error),

    #[error("Could not write report to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One conversion, ready to be written out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub scale: String,
    pub indian: String,
    pub western: String,
}

impl ConversionReport {
    pub fn new(scale: impl Into<String>, indian: impl Into<String>, western: impl Into<String>) -> Self {
        Self {
            scale: scale.into(),
            indian: indian.into(),
            western: western.into(),
        }
    }

    /// Run a conversion and capture it as a report
    pub fn generate(converter: &Converter, indian: &str, scale: &str) -> Result<Self, ConversionError> {
        let western = converter.convert(indian, scale)?;
        Ok(Self::new(scale, indian, western))
    }

    fn context(&self) -> ReportContext {
        ReportContext {
            scale: self.scale.clone(),
            indian: self.indian.clone(),
            western: self.western.clone(),
        }
    }
}

/// Render the report text
pub fn render_report(report: &ConversionReport) -> Result<String, ReportError> {
    Ok(render_template(ReportTemplate::PlainText, &report.context())?)
}

/// Path the report is written to: the chosen path with `.txt` appended
pub fn report_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".txt");
    PathBuf::from(name)
}

/// Write the report and return the path actually written
///
/// Failures are returned to the caller to report; nothing else depends on
/// the write succeeding.
pub fn save_report(path: &Path, report: &ConversionReport) -> Result<PathBuf, ReportError> {
    let text = render_report(report)?;
    let target = report_path(path);

    fs::write(&target, text).map_err(|source| ReportError::Io {
        path: target.clone(),
        source,
    })?;

    log::info!("report saved to {}", target.display());
    Ok(target)
}
