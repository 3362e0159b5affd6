//! Command-line page localization.

use std::fs;
use std::path::Path;

use afa_i18n::binding::{ApplyReport, BindingRegistry, apply_bindings};
use afa_i18n::document::MemoryDocument;
use afa_i18n::i18n::{Language, TranslationStore};

use crate::args::utils::print_json;

/// What: Localize one HTML page.
///
/// Inputs:
/// - `html`: Page markup
/// - `store`: Translation store
/// - `lang`: Target language
///
/// Output:
/// - Rendered markup and the pass counts
///
/// Details:
/// - Runs the same pass as a language switch on the site, without persisting anything
#[must_use]
pub fn render_page(html: &str, store: &TranslationStore, lang: Language) -> (String, ApplyReport) {
    let mut doc = MemoryDocument::parse_html(html);
    let mut registry = BindingRegistry::new();
    let report = apply_bindings(&mut doc, &mut registry, store, lang);
    (doc.to_html(), report)
}

/// What: Render `input` and write the result.
///
/// Inputs:
/// - `store`: Translation store
/// - `input`: Page to read
/// - `output`: File to write; stdout when `None`
/// - `lang`: Target language
/// - `json`: Print the pass report as JSON (only when writing to a file)
///
/// # Errors
/// - Returns a message when the page cannot be read or the output cannot be written
pub fn handle_render(
    store: &TranslationStore,
    input: &Path,
    output: Option<&Path>,
    lang: Language,
    json: bool,
) -> Result<(), String> {
    let html = fs::read_to_string(input)
        .map_err(|e| format!("Failed to read {}: {e}", input.display()))?;
    let (rendered, report) = render_page(&html, store, lang);
    tracing::info!(
        input = %input.display(),
        lang = %lang,
        rendered = report.rendered,
        "page rendered"
    );

    let Some(output) = output else {
        println!("{rendered}");
        return Ok(());
    };
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
    }
    fs::write(output, rendered).map_err(|e| format!("Failed to write {}: {e}", output.display()))?;
    if json {
        print_json(&report)
    } else {
        println!(
            "Rendered {} bindings in {} -> {}",
            report.rendered,
            lang,
            output.display()
        );
        Ok(())
    }
}
