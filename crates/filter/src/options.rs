//! Filter and rendering options, loadable from YAML or JSON.

use crate::transform::code_block::DEFAULT_LANGUAGES;
use d2lmd_core::{D2lError, ParseOptions};
use serde::Deserialize;
use std::fmt::Write as _;
use std::path::Path;

/// Options controlling a conversion run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Replace smart punctuation in text leaves with ASCII.
    pub normalize_text: bool,
    /// Delete raw HTML nodes that hold only an empty comment.
    pub strip_comments: bool,
    /// Turn code blocks with an accepted language into Brightspace code samples.
    pub retemplate_code: bool,
    /// Wrap the document in the HTML page template.
    pub wrap_document: bool,
    /// Accepted code block languages.
    pub languages: Vec<String>,
    /// Page template used by the document wrapper.
    pub template: WrapperTemplate,
    /// Add `target="_blank"` to links after rendering.
    pub links_in_new_tab: bool,
    /// Markdown parser options.
    pub parse: ParseOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            normalize_text: true,
            strip_comments: true,
            retemplate_code: true,
            wrap_document: true,
            languages: DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            template: WrapperTemplate::default(),
            links_in_new_tab: true,
            parse: ParseOptions::default(),
        }
    }
}

impl Options {
    /// Parses options from YAML (or JSON) text. Missing keys keep their defaults.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Reads options from a YAML or JSON file.
    pub fn load(path: &Path) -> Result<Self, D2lError> {
        let text = std::fs::read_to_string(path).map_err(|err| D2lError::io_at(path, err))?;
        Self::from_yaml(&text).map_err(|err| D2lError::config(path, err.to_string()))
    }
}

/// HTML page template wrapped around the document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WrapperTemplate {
    /// `lang` attribute of the `<html>` element.
    pub lang: String,
    /// Stylesheet URLs linked from `<head>`.
    pub stylesheets: Vec<String>,
    /// CSS embedded in a `<style>` block.
    pub style: String,
    /// Inline style of the `<body>` element.
    pub body_style: String,
}

const BRIGHTSPACE_FONTS: &str = "https://s.brightspace.com/lib/fonts/0.6.1/fonts.css";
const PRISM_THEME: &str = "https://s.brightspace.com/lib/prismjs/1.28.0/themes/prism.css";

const EMBEDDED_STYLE: &str = "\
body { max-width: 56em; margin: 0 auto; padding: 0 1em; line-height: 1.5; }
h1, h2, h3, h4 { font-family: 'Lato', sans-serif; }
code { font-family: Consolas, Menlo, monospace; }
pre.d2l-code { font-size: 0.9em; border-radius: 4px; }
table { border-collapse: collapse; }
th, td { border: 1px solid #d3d9e3; padding: 0.25em 0.5em; }";

const BODY_STYLE: &str = "color: rgb(32, 33, 34); font-family: verdana, sans-serif; font-size: 10pt;";

impl Default for WrapperTemplate {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            stylesheets: vec![BRIGHTSPACE_FONTS.to_string(), PRISM_THEME.to_string()],
            style: EMBEDDED_STYLE.to_string(),
            body_style: BODY_STYLE.to_string(),
        }
    }
}

impl WrapperTemplate {
    /// Everything up to and including the opening `<body>` tag.
    pub fn header(&self) -> String {
        let mut head = String::from("<!DOCTYPE html>\n");
        let _ = writeln!(head, "<html lang=\"{}\">", self.lang);
        head.push_str("<head>\n<meta charset=\"utf-8\">\n");
        for href in &self.stylesheets {
            let _ = writeln!(head, "<link rel=\"stylesheet\" href=\"{}\">", href);
        }
        head.push_str("<style>\n");
        head.push_str(self.style.trim_end());
        head.push_str("\n</style>\n</head>\n");
        let _ = write!(head, "<body style=\"{}\">", self.body_style);
        head
    }

    /// Closing `</body>` and `</html>` tags.
    pub fn footer(&self) -> &'static str {
        "</body>\n</html>"
    }
}
