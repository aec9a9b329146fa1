// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt moderation using a keyword blocklist
//!
//! A deliberately simple substring check: the prompt is lowercased once and
//! scanned against a fixed term list. No tokenization or stemming, so a
//! blocked term embedded inside a longer word also triggers.

use serde::{Deserialize, Serialize};

/// Built-in blocked terms. Matched as substrings of the lowercased prompt.
pub const KEYWORD_BLOCKLIST: &[&str] = &[
    "explicit", "nsfw", "nudity", "nude", "gore", "violence", "blood", "sexual",
];

/// Outcome of a moderation check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModerationVerdict {
    /// Whether the prompt is blocked
    pub blocked: bool,
    /// The term that triggered the block, if any
    pub matched_term: Option<String>,
}

impl ModerationVerdict {
    fn clean() -> Self {
        Self {
            blocked: false,
            matched_term: None,
        }
    }

    fn blocked_by(term: &str) -> Self {
        Self {
            blocked: true,
            matched_term: Some(term.to_string()),
        }
    }
}

/// Checks generation prompts against the blocklist.
pub struct PromptModerator {
    custom_terms: Vec<String>,
}

impl PromptModerator {
    /// Create a moderator with extra terms appended to the built-in blocklist.
    /// Custom terms are lowercased once at construction.
    pub fn new(custom_terms: &[String]) -> Self {
        Self {
            custom_terms: custom_terms
                .iter()
                .map(|t| t.to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Check a prompt. First matching term wins.
    pub fn check(&self, prompt: &str) -> ModerationVerdict {
        let lower = prompt.to_lowercase();
        for &term in KEYWORD_BLOCKLIST {
            if lower.contains(term) {
                return ModerationVerdict::blocked_by(term);
            }
        }
        for term in &self.custom_terms {
            if lower.contains(term.as_str()) {
                return ModerationVerdict::blocked_by(term);
            }
        }
        ModerationVerdict::clean()
    }
}

impl Default for PromptModerator {
    fn default() -> Self {
        Self::new(&[])
    }
}
