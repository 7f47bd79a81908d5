//! Header line detection
//!
//! A header line names the platform whose rows follow it, either as a section
//! title ("FACEBOOK") or through the export's own column titles. Header lines
//! switch the scan mode and are never read as data.

use crate::app::models::Platform;
use crate::config::HeaderRule;

/// Header rule with its patterns prepared for matching
#[derive(Debug, Clone)]
struct PreparedRule {
    platform: Platform,
    patterns: Vec<String>,
    ignore_case: bool,
}

impl PreparedRule {
    fn matches(&self, line: &str, lowered: &str) -> bool {
        let haystack = if self.ignore_case { lowered } else { line };
        self.patterns.iter().all(|p| haystack.contains(p.as_str()))
    }
}

/// Ordered set of header rules; the first matching rule wins
#[derive(Debug, Clone)]
pub struct HeaderMatcher {
    rules: Vec<PreparedRule>,
}

impl HeaderMatcher {
    /// Prepare header rules for matching
    pub fn new(rules: &[HeaderRule]) -> Self {
        let rules = rules
            .iter()
            .filter(|rule| !rule.patterns.is_empty())
            .map(|rule| PreparedRule {
                platform: rule.platform,
                patterns: rule
                    .patterns
                    .iter()
                    .map(|p| {
                        if rule.ignore_case {
                            p.to_lowercase()
                        } else {
                            p.clone()
                        }
                    })
                    .collect(),
                ignore_case: rule.ignore_case,
            })
            .collect();

        Self { rules }
    }

    /// Return the platform a header line switches to, if the line is a header
    pub fn detect(&self, line: &str) -> Option<Platform> {
        let lowered = line.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(line, &lowered))
            .map(|rule| rule.platform)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}
