//! Category patterns loaded from the skill's resource directory

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use regex::Regex;

use super::types::RequestType;

const PATTERN_EXTENSION: &str = "regex";

/// Compiled pattern per search category, built once at load time
#[derive(Clone, Debug, Default)]
pub struct PatternSet {
    patterns: HashMap<RequestType, Regex>,
}

impl PatternSet {
    /// Load `<category>.type.regex` for every category from `dir`.
    ///
    /// A missing or unparsable file leaves that category without a pattern;
    /// the classifier then never reports it.
    pub fn load(dir: &Path) -> Self {
        let mut set = Self::default();

        for kind in RequestType::PRIORITY {
            let path = dir.join(format!("{}.{}", kind.resource_name(), PATTERN_EXTENSION));
            match fs::read_to_string(&path) {
                Ok(content) => set.insert(kind, content.trim()),
                Err(e) => {
                    tracing::warn!(category = %kind, path = %path.display(), error = %e, "Pattern file unavailable");
                }
            }
        }

        if set.is_empty() {
            tracing::warn!(dir = %dir.display(), "No request patterns loaded, every query will go unmatched");
        } else {
            tracing::info!(loaded = set.len(), dir = %dir.display(), "Request patterns loaded");
        }
        set
    }

    pub fn from_patterns<'a>(patterns: impl IntoIterator<Item = (RequestType, &'a str)>) -> Self {
        let mut set = Self::default();
        for (kind, pattern) in patterns {
            set.insert(kind, pattern);
        }
        set
    }

    /// Compile `pattern` so that it only matches at the start of a phrase
    fn insert(&mut self, kind: RequestType, pattern: &str) {
        match Regex::new(&format!("^(?:{pattern})")) {
            Ok(compiled) => {
                if compiled.capture_names().flatten().all(|name| name != kind.as_str()) {
                    tracing::warn!(category = %kind, "Pattern has no capture group named after its category");
                }
                self.patterns.insert(kind, compiled);
            }
            Err(e) => {
                tracing::error!(category = %kind, error = %e, "Invalid request pattern");
            }
        }
    }

    pub fn get(&self, kind: RequestType) -> Option<&Regex> {
        self.patterns.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
