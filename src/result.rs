//! The parsed outcome of a single duration expression.

use crate::model::{FailureFlag, Scale};

/// One accepted `(value, scale)` pair, in source order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valid {
    pub value: f64,
    pub scale: Scale,
}

/// One rejected fragment, tagged with every reason it was rejected for.
#[derive(Debug, Clone, PartialEq)]
pub struct Invalid {
    pub fragment: String,
    pub flags: FailureFlag,
}

/// The full result of parsing one duration expression.
///
/// `seconds`, `valid` and `invalid` are populated incrementally while
/// parsing; `success` is computed once at the very end by the finalizer.
/// Lists preserve the order fragments/pairs were produced in.
#[derive(Debug, Clone, Default)]
pub struct ParsedResult {
    pub success: bool,
    pub seconds: f64,
    pub valid: Vec<Valid>,
    pub invalid: Vec<Invalid>,
}

impl ParsedResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the empty state, as if nothing had ever been parsed. Used
    /// when a [`crate::Query`] is reparsed.
    pub fn reset(&mut self) {
        self.success = false;
        self.seconds = 0.0;
        self.valid.clear();
        self.invalid.clear();
    }

    pub(crate) fn push_valid(&mut self, value: f64, scale: Scale) {
        self.seconds += value * scale.seconds_per_unit;
        self.valid.push(Valid { value, scale });
    }

    pub(crate) fn push_invalid(&mut self, fragment: impl Into<String>, flags: FailureFlag) {
        self.invalid.push(Invalid {
            fragment: fragment.into(),
            flags,
        });
    }

    /// `success` holds iff at least one valid pair was produced and none of
    /// the recorded invalid flags intersect `mask`.
    pub(crate) fn finalize(&mut self, mask: FailureFlag) {
        let any_masked = self
            .invalid
            .iter()
            .any(|inv| !(inv.flags & mask).is_empty());
        self.success = !self.valid.is_empty() && !any_masked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::canonical;

    #[test]
    fn success_requires_at_least_one_valid() {
        let mut r = ParsedResult::new();
        r.finalize(FailureFlag::NONE);
        assert!(!r.success);
    }

    #[test]
    fn success_fails_when_an_invalid_flag_is_in_the_mask() {
        let mut r = ParsedResult::new();
        let scale = Scale {
            seconds_per_unit: canonical::SECOND,
            singular: "second",
            plural: "seconds",
            terms: &["s"],
        };
        r.push_valid(5.0, scale);
        r.push_invalid("3", FailureFlag::LONELY_VALUE);
        r.finalize(FailureFlag::LONELY_VALUE);
        assert!(!r.success);
        r.finalize(FailureFlag::NONE);
        assert!(r.success);
    }
}
