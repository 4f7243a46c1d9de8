//! Token-set view over an element's `class` attribute.
//!
//! State labels are CSS class names. Matching is done on whitespace-separated
//! tokens, never on substrings, so a label like `active` leaves an unrelated
//! `inactive` class alone.

#[cfg(test)]
#[path = "classes_test.rs"]
mod classes_test;

/// Trim `label` to a single class token.
///
/// Returns `None` for blank labels and ones with inner whitespace, which can
/// never be one token of a `class` attribute.
#[must_use]
pub fn normalize_label(label: &str) -> Option<&str> {
    let label = label.trim();
    if label.is_empty() || label.chars().any(char::is_whitespace) {
        None
    } else {
        Some(label)
    }
}

/// Ordered, de-duplicated class tokens parsed from a `class` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassTokens {
    tokens: Vec<String>,
}

impl ClassTokens {
    /// Parse a raw `class` attribute value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut out = Self::default();
        for token in raw.split_ascii_whitespace() {
            out.add(token);
        }
        out
    }

    /// Arguments go through [`normalize_label`] in every method below.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        normalize_label(token).is_some_and(|token| self.tokens.iter().any(|t| t == token))
    }

    /// Append `token` unless it is already present. Returns `false` when it
    /// was present or is not a valid token.
    pub fn add(&mut self, token: &str) -> bool {
        let Some(token) = normalize_label(token) else {
            return false;
        };
        if self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_owned());
        true
    }

    /// Remove `token`, returning whether it was present.
    pub fn remove(&mut self, token: &str) -> bool {
        let Some(token) = normalize_label(token) else {
            return false;
        };
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    /// Remove every token in `labels`.
    pub fn remove_all<S: AsRef<str>>(&mut self, labels: &[S]) {
        let labels: Vec<&str> = labels.iter().filter_map(|l| normalize_label(l.as_ref())).collect();
        self.tokens.retain(|t| !labels.contains(&t.as_str()));
    }

    #[must_use]
    pub fn iter(&self) -> std::iter::Map<std::slice::Iter<'_, String>, fn(&String) -> &str> {
        self.tokens.iter().map(String::as_str as fn(&String) -> &str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> IntoIterator for &'a ClassTokens {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for ClassTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}
