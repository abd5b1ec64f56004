//! Inline notices shown in place of fetched content.

use crate::core::error::LoadError;
use crate::core::escape_html;

stylance::import_crate_style!(css, "src/components/notice/notice.module.css");

/// Neutral notice, e.g. for an empty list.
pub fn render_info(message: &str) -> String {
    format!(
        r#"<p class="{}">{}</p>"#,
        css::notice,
        escape_html(message)
    )
}

/// Error notice for a failed fetch-and-render cycle.
pub fn render_error(err: &LoadError) -> String {
    format!(
        r#"<p class="{} {}" role="alert">{}</p>"#,
        css::notice,
        css::error,
        escape_html(&err.to_string())
    )
}
