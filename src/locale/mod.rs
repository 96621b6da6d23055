/*!
Locale tables and their lookup services.

See the [crate level documentation](super) for an overview of how a locale
feeds the parser.

# How to add support for a new locale

A locale is just an empty (stateless) type that implements [`LocaleTable`].
Everything else - the scale list, the numeral list, the delimiter/connector/
segmentor alphabets - is exposed through the trait's methods, backed by
`phf` maps and sets built once at compile time. Look at [`English`] and
[`Spanish`] as examples.
*/
mod english;
mod spanish;

pub use english::English;
pub use spanish::Spanish;

use crate::model::{Numeral, Scale};

/// The linguistic services a locale must provide to the tokenizer and
/// combiner. Implementations are stateless: all data is `'static`.
pub trait LocaleTable {
    /// The locale's scales, in ascending seconds-per-unit order.
    fn scales(&self) -> &'static [Scale];
    /// The locale's numerals, grouped by kind but otherwise unordered.
    fn numerals(&self) -> &'static [Numeral];
    /// Resolve a lowercase, diacritic-stripped term to a scale.
    fn lookup_scale(&self, term: &str) -> Option<&'static Scale>;
    /// Resolve a lowercase, diacritic-stripped term to a numeral.
    fn lookup_numeral(&self, term: &str) -> Option<&'static Numeral>;
    /// Whitespace-like glue that does not end a segment (space, hyphen,
    /// tab, plus, "and", ...).
    fn is_connector(&self, term: &str) -> bool;
    /// Punctuation/words that end a segment (comma, "&", "y", ...).
    fn is_segmentor(&self, term: &str) -> bool;
    /// Decimal-point delimiters (".").
    fn is_decimal_delimiter(&self, term: &str) -> bool;
    /// Thousands-grouping delimiters (",").
    fn is_thousand_delimiter(&self, term: &str) -> bool;
    /// Clock-group delimiters (":").
    fn is_hhmmss_delimiter(&self, term: &str) -> bool;
    /// Punctuation allowed at most once per segment under
    /// `limit_allowed_terms` (e.g. the fraction slash).
    fn is_allowed_term(&self, term: &str) -> bool;
    /// The full alphabet of non-alphanumeric terms this locale recognizes
    /// at all; anything outside it is `MISPLACED_SPECIAL` or unknown.
    fn is_special(&self, term: &str) -> bool;
    /// The seconds scale, used by the `assume_seconds` policy. Falls back
    /// to [`Self::smallest_enabled_scale`] when seconds has been disabled.
    fn seconds_scale(&self) -> &'static Scale {
        let seconds = self
            .scales()
            .iter()
            .find(|s| s.seconds_per_unit == crate::model::canonical::SECOND);
        match seconds {
            Some(s) if s.is_enabled() => s,
            _ => self.smallest_enabled_scale(),
        }
    }
    /// The smallest-seconds-per-unit enabled scale, used both by the
    /// `assume_seconds` fallback and by clock-group binding.
    fn smallest_enabled_scale(&self) -> &'static Scale {
        self.scales()
            .iter()
            .filter(|s| s.is_enabled())
            .min_by(|a, b| a.seconds_per_unit.partial_cmp(&b.seconds_per_unit).unwrap())
            .unwrap_or(&Scale::EMPTY)
    }
    /// The locale's enabled scales ordered smallest-seconds-per-unit first,
    /// used to bind a clock group of fewer than N segments to the smallest
    /// N scales.
    fn ascending_scales(&self) -> Vec<&'static Scale> {
        let mut scales: Vec<&'static Scale> =
            self.scales().iter().filter(|s| s.is_enabled()).collect();
        scales.sort_by(|a, b| a.seconds_per_unit.partial_cmp(&b.seconds_per_unit).unwrap());
        scales
    }
    /// Check the structural invariants a locale table must hold: its
    /// connectors and segmentors must be disjoint, and so must its decimal
    /// and thousand delimiters. Builtin locales are exercised against this
    /// in their test suites; a hand-rolled [`LocaleTable`] should call it
    /// once at startup before handing the locale to [`crate::parse`].
    fn validate(&self) -> Result<(), crate::error::ConfigError> {
        for term in [" ", "-", "\t", "+", ",", "&", ".", ":", "/", "and", "y"] {
            if self.is_connector(term) && self.is_segmentor(term) {
                return Err(crate::error::ConfigError::ConnectorSegmentorOverlap);
            }
            if self.is_decimal_delimiter(term) && self.is_thousand_delimiter(term) {
                return Err(crate::error::ConfigError::DecimalThousandOverlap);
            }
        }
        Ok(())
    }
}

/// A convenience enum wrapping the builtin locales in a single type, so
/// callers can pick a locale at runtime without a trait object.
#[derive(Debug, Clone, Copy)]
pub enum Locale {
    English(English),
    Spanish(Spanish),
}

impl Locale {
    pub fn english() -> Self {
        Locale::English(English::default())
    }

    pub fn spanish() -> Self {
        Locale::Spanish(Spanish::default())
    }
}

macro_rules! delegate {
    ($($variant:ident), +) => {
        fn scales(&self) -> &'static [Scale] {
            match self {
                $(Locale::$variant(l) => l.scales(),)*
            }
        }
        fn numerals(&self) -> &'static [Numeral] {
            match self {
                $(Locale::$variant(l) => l.numerals(),)*
            }
        }
        fn lookup_scale(&self, term: &str) -> Option<&'static Scale> {
            match self {
                $(Locale::$variant(l) => l.lookup_scale(term),)*
            }
        }
        fn lookup_numeral(&self, term: &str) -> Option<&'static Numeral> {
            match self {
                $(Locale::$variant(l) => l.lookup_numeral(term),)*
            }
        }
        fn is_connector(&self, term: &str) -> bool {
            match self {
                $(Locale::$variant(l) => l.is_connector(term),)*
            }
        }
        fn is_segmentor(&self, term: &str) -> bool {
            match self {
                $(Locale::$variant(l) => l.is_segmentor(term),)*
            }
        }
        fn is_decimal_delimiter(&self, term: &str) -> bool {
            match self {
                $(Locale::$variant(l) => l.is_decimal_delimiter(term),)*
            }
        }
        fn is_thousand_delimiter(&self, term: &str) -> bool {
            match self {
                $(Locale::$variant(l) => l.is_thousand_delimiter(term),)*
            }
        }
        fn is_hhmmss_delimiter(&self, term: &str) -> bool {
            match self {
                $(Locale::$variant(l) => l.is_hhmmss_delimiter(term),)*
            }
        }
        fn is_allowed_term(&self, term: &str) -> bool {
            match self {
                $(Locale::$variant(l) => l.is_allowed_term(term),)*
            }
        }
        fn is_special(&self, term: &str) -> bool {
            match self {
                $(Locale::$variant(l) => l.is_special(term),)*
            }
        }
    };
}

impl LocaleTable for Locale {
    delegate!(English, Spanish);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_resolves_scale_terms() {
        let en = Locale::english();
        assert_eq!(en.lookup_scale("hours").unwrap().singular, "hour");
        assert_eq!(en.lookup_scale("hr").unwrap().singular, "hour");
    }

    #[test]
    fn spanish_resolves_scale_terms() {
        let es = Locale::spanish();
        assert_eq!(es.lookup_scale("horas").unwrap().singular, "hora");
    }

    #[test]
    fn connectors_and_segmentors_do_not_overlap() {
        for locale in [Locale::english(), Locale::spanish()] {
            for s in locale.scales() {
                for term in s.terms {
                    assert!(!locale.is_connector(term));
                }
            }
        }
    }

    #[test]
    fn builtin_locales_pass_validation() {
        assert!(Locale::english().validate().is_ok());
        assert!(Locale::spanish().validate().is_ok());
    }
}
