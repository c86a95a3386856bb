//! Report template rendering
//!
//! The plain-text report is a Mustache template so the layout lives in one
//! file (`templates/report.txt.mustache`). Values use triple braces: notation
//! text is never HTML-escaped.

use serde::Serialize;

/// Template selection for report output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTemplate {
    /// Scale header, Indian notation block, standard notation block
    PlainText,
}

/// Context data for template rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportContext {
    /// Scale as typed by the user
    pub scale: String,
    /// Original sargam text
    pub indian: String,
    /// Converted Western text
    pub western: String,
}

/// Get template content by type
pub fn get_template_content(template_type: ReportTemplate) -> &'static str {
    match template_type {
        ReportTemplate::PlainText => include_str!("templates/report.txt.mustache"),
    }
}

/// Render a report using a template
pub fn render_template(
    template_type: ReportTemplate,
    context: &ReportContext,
) -> Result<String, mustache::Error> {
    let template = mustache::compile_str(get_template_content(template_type))?;
    template.render_to_string(context)
}
