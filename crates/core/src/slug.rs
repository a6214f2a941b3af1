use std::collections::HashSet;

/// Builds a Pandoc-style identifier for heading text.
///
/// Whitespace runs become single hyphens, everything except alphanumerics,
/// `_`, `-` and `.` is dropped, letters are lowercased, and anything before the
/// first letter is removed. Text with no letters yields `"section"`.
///
/// # Examples
///
/// ```
/// use d2lmd_core::slug::identifier;
///
/// assert_eq!(identifier("Dogs?--in my house?"), "dogs--in-my-house");
/// assert_eq!(identifier("3. Applications"), "applications");
/// assert_eq!(identifier("33"), "section");
/// ```
pub fn identifier(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            id.push('-');
        }
        for c in word.chars() {
            if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') {
                id.extend(c.to_lowercase());
            }
        }
    }

    match id.find(char::is_alphabetic) {
        Some(start) => id[start..].to_string(),
        None => "section".to_string(),
    }
}

/// Hands out unique heading identifiers for one document.
#[derive(Debug, Default)]
pub struct Slugger {
    used: HashSet<String>,
}

impl Slugger {
    /// Creates a new slugger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identifier for `text`, suffixed with `-1`, `-2`, ... when
    /// the plain identifier was already handed out.
    pub fn slug(&mut self, text: &str) -> String {
        let base = identifier(text);
        if self.used.insert(base.clone()) {
            return base;
        }

        let mut n = 1usize;
        loop {
            let candidate = format!("{}-{}", base, n);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
