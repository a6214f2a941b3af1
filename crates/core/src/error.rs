use std::path::Path;
use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Optional file path
    pub file: Option<String>,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            file: None,
            line,
            column,
        }
    }

    /// Create a source location with file information
    pub fn with_file(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: Some(file.into()),
            line,
            column,
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{}:{}:{}", file, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Errors raised around the filter: parsing, configuration, I/O and HTML rewriting.
///
/// The filter callbacks themselves never fail.
#[derive(Debug, Error)]
pub enum D2lError {
    /// IO error while reading sources or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// IO error tied to a specific path.
    #[error("IO error on {path}: {source}")]
    IoAt {
        /// Path being read or written
        path: String,
        /// Underlying error
        source: std::io::Error,
    },
    /// markdown-rs parser error surfaced through the adapter.
    #[error("Parse error at {location}: {message}")]
    MarkdownAdapter {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// Configuration file could not be read or deserialized.
    #[error("Invalid configuration in {path}: {message}")]
    Config {
        /// Configuration file path
        path: String,
        /// Error message
        message: String,
    },
    /// HTML post-processing failed.
    #[error("HTML rewrite error: {0}")]
    Rewrite(String),
    /// A chapter folder path does not point at a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(String),
    /// A chapter folder holds no Markdown files.
    #[error("No Markdown files in {0}")]
    EmptyChapter(String),
}

impl D2lError {
    /// Create a parse error with location
    pub fn parse_error(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::MarkdownAdapter {
            message: message.into(),
            location: SourceLocation::new(line, column),
        }
    }

    /// Wrap an IO error with the path it happened on
    pub fn io_at(path: &Path, source: std::io::Error) -> Self {
        Self::IoAt {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a configuration error for the given file
    pub fn config(path: &Path, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Attach a file name to the location of a parse error.
    ///
    /// Other variants are returned untouched.
    pub fn in_file(self, file: &Path) -> Self {
        match self {
            Self::MarkdownAdapter { message, location } => Self::MarkdownAdapter {
                message,
                location: SourceLocation::with_file(
                    file.display().to_string(),
                    location.line,
                    location.column,
                ),
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display_with_and_without_file() {
        assert_eq!(SourceLocation::new(3, 7).to_string(), "3:7");
        assert_eq!(
            SourceLocation::with_file("ch1.md", 3, 7).to_string(),
            "ch1.md:3:7"
        );
    }

    #[test]
    fn in_file_only_touches_parse_errors() {
        let err = D2lError::parse_error("bad", 2, 1).in_file(Path::new("ch2.md"));
        assert_eq!(err.to_string(), "Parse error at ch2.md:2:1: bad");

        let err = D2lError::Rewrite("oops".into()).in_file(Path::new("ch2.md"));
        assert_eq!(err.to_string(), "HTML rewrite error: oops");
    }
}
