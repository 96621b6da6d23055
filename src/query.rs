//! The public, stateful convenience wrapper over the free-function parser.

use crate::locale::Locale;
use crate::model::{FailureFlag, ParserSettings};
use crate::result::ParsedResult;

/// Holds the input string, the chosen locale, the tunable settings, the
/// strictness mask, and the outcome of parsing them together.
///
/// Calling [`Query::new`] parses immediately; changing settings or the
/// mask through the builder methods reparses from scratch - parsing is a
/// pure function of its inputs, so there is nothing incremental to do.
#[derive(Debug, Clone)]
pub struct Query {
    pub content: String,
    pub locale: Locale,
    pub settings: ParserSettings,
    pub mask: FailureFlag,
    pub result: ParsedResult,
}

impl Query {
    /// Parse `content` against `locale` with default (tolerant) settings
    /// and no strictness mask.
    pub fn new(content: impl Into<String>, locale: Locale) -> Self {
        let mut query = Query {
            content: content.into(),
            locale,
            settings: ParserSettings::default(),
            mask: FailureFlag::NONE,
            result: ParsedResult::new(),
        };
        query.reparse();
        query
    }

    /// Parse in strict mode: every `FailureFlag` forces `success = false`.
    pub fn strict(content: impl Into<String>, locale: Locale) -> Self {
        let mut query = Self::new(content, locale);
        query.mask = FailureFlag::ALL;
        query.reparse();
        query
    }

    pub fn with_settings(mut self, settings: ParserSettings) -> Self {
        self.settings = settings;
        self.reparse();
        self
    }

    pub fn with_mask(mut self, mask: FailureFlag) -> Self {
        self.mask = mask;
        self.reparse();
        self
    }

    /// Re-run the parse against the current `content`/`locale`/
    /// `settings`/`mask`, discarding any previous result.
    pub fn reparse(&mut self) {
        self.result.reset();
        crate::parse_into(&self.content, &self.locale, &self.settings, self.mask, &mut self.result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerant_by_default() {
        let q = Query::new("1h5m30s", Locale::english());
        assert!(q.result.success);
        assert_eq!(q.result.seconds, 3930.0);
    }

    #[test]
    fn strict_mode_rejects_trailing_lonely_values() {
        let q = Query::strict("5 seconds 3", Locale::english());
        assert!(!q.result.success);
    }

    #[test]
    fn reparse_after_changing_settings_updates_the_result() {
        let mut settings = ParserSettings::default();
        settings.allow_duplicate_scales = false;
        let q = Query::new("1 minute 2 minutes", Locale::english()).with_settings(settings);
        assert!(q.result.invalid.iter().any(|i| i.flags.contains(FailureFlag::DUPLICATE_SCALE)));
    }
}
