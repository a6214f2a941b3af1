//! HTML post-processing on the rendered page.

use d2lmd_core::D2lError;
use lol_html::{RewriteStrSettings, element, rewrite_str};

/// Makes every outbound link open in a new browser tab.
///
/// In-page anchors (`href="#..."`) are left alone.
pub fn open_links_in_new_tab(html: &str) -> Result<String, D2lError> {
    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!("a[href]", |el| {
                if el
                    .get_attribute("href")
                    .is_some_and(|href| href.starts_with('#'))
                {
                    return Ok(());
                }
                el.set_attribute("target", "_blank")?;
                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    )
    .map_err(|err| D2lError::Rewrite(err.to_string()))
}
