//! Rule selection
//!
//! Scoring and keyboard merging each have a literal mode, matching the
//! classic behavior, and a corrected mode. Defaults are the literal ones.

use crate::core::{KeyboardRule, ScoringRule};

/// Rule set applied by the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rules {
    pub scoring: ScoringRule,
    pub keyboard: KeyboardRule,
}

impl Rules {
    /// Duplicate-aware scoring with a never-downgrading keyboard
    #[must_use]
    pub const fn corrected() -> Self {
        Self {
            scoring: ScoringRule::Strict,
            keyboard: KeyboardRule::Priority,
        }
    }
}
