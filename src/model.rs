//! Core data types shared by the tokenizer, combiner and finalizer.

use bitflags::bitflags;

/// A unit of time: seconds-per-unit plus the surface forms that spell it.
///
/// Two scales are equal iff their `seconds_per_unit` match; this is what the
/// combiner uses for duplicate-scale detection, so a custom scale that
/// happens to use the same seconds-per-unit as a builtin one is considered
/// the same scale.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    pub seconds_per_unit: f64,
    pub singular: &'static str,
    pub plural: &'static str,
    pub terms: &'static [&'static str],
}

impl Scale {
    /// A scale is enabled when all four fields are meaningfully set. The
    /// empty scale (used to represent a disabled builtin scale) has a zero
    /// `seconds_per_unit` and an empty terms list.
    pub fn is_enabled(&self) -> bool {
        self.seconds_per_unit != 0.0
            && !self.singular.is_empty()
            && !self.plural.is_empty()
            && !self.terms.is_empty()
    }

    pub const EMPTY: Scale = Scale {
        seconds_per_unit: 0.0,
        singular: "",
        plural: "",
        terms: &[],
    };
}

impl PartialEq for Scale {
    fn eq(&self, other: &Self) -> bool {
        self.seconds_per_unit == other.seconds_per_unit
    }
}

/// The syntactic role a numeral word plays in the combinator grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralKind {
    Digit,
    Teen,
    Ten,
    Hundred,
    Thousand,
    Multiplier,
    Operator,
}

/// A word (or family of words, e.g. "hour"/"hours") that denotes a number or
/// a combinator like "of"/"half".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Numeral {
    pub name: &'static str,
    pub kind: NumeralKind,
    pub value: f64,
    pub terms: &'static [&'static str],
}

/// How trailing, scale-less values are treated when the token stream runs
/// out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssumeSeconds {
    /// Always bind a trailing lonely value to the seconds scale.
    Last,
    /// Only bind it when the whole input was a single token, or nothing
    /// valid or invalid had been produced before it.
    Single,
    /// Never bind it; always record `LONELY_VALUE`.
    Never,
}

impl Default for AssumeSeconds {
    fn default() -> Self {
        AssumeSeconds::Single
    }
}

/// Tunable parsing behaviour. All fields have the defaults the tolerant
/// (non-strict) mode uses.
#[derive(Debug, Clone, Copy)]
pub struct ParserSettings {
    /// Governs whether a trailing value with no scale is assumed to be
    /// seconds.
    pub assume_seconds: AssumeSeconds,
    /// When true, an allowed-term character appearing mid-segment abandons
    /// the segment instead of being silently absorbed.
    pub limit_allowed_terms: bool,
    /// When false, a scale seen more than once is flagged `DUPLICATE_SCALE`.
    pub allow_duplicate_scales: bool,
    /// When true, a thousand-group with more than 3 digits after the
    /// delimiter is accepted, taking all of them (`1,2345` -> 12345).
    pub allow_thousands_extra_digits: bool,
    /// When true, a thousand-group with fewer than 3 digits after the
    /// delimiter is accepted (`1,23` -> 123).
    pub allow_thousands_lacking_digits: bool,
    /// When true, a decimal with no digits after the point is accepted
    /// (`1.` -> 1.0).
    pub allow_decimals_lacking_digits: bool,
}

impl Default for ParserSettings {
    fn default() -> Self {
        ParserSettings {
            assume_seconds: AssumeSeconds::Single,
            limit_allowed_terms: true,
            allow_duplicate_scales: true,
            allow_thousands_extra_digits: false,
            allow_thousands_lacking_digits: false,
            allow_decimals_lacking_digits: true,
        }
    }
}

bitflags! {
    /// Every way an input fragment can be rejected, plus the strictness
    /// mask mechanism: the set of flags passed to a parse doubles as the
    /// subset of anomalies that are allowed to still report `success`.
    pub struct FailureFlag: u32 {
        const NONE                   = 0;
        const MALFORMED_CONTENT      = 1 << 0;
        const UNKNOWN_TERM           = 1 << 1;
        const MALFORMED_DECIMAL      = 1 << 2;
        const MALFORMED_THOUSAND     = 1 << 3;
        const MALFORMED_FRACTION     = 1 << 4;
        const MALFORMED_HHMMSS       = 1 << 5;
        const LONELY_VALUE           = 1 << 6;
        const LONELY_SCALE           = 1 << 7;
        const DUPLICATE_SCALE        = 1 << 8;
        const CONSECUTIVE_CONNECTOR  = 1 << 9;
        const CONSECUTIVE_SEGMENTOR  = 1 << 10;
        const CONSECUTIVE_SPECIAL    = 1 << 11;
        const MISPLACED_ALLOWED_TERM = 1 << 12;
        const MISPLACED_SPECIAL      = 1 << 13;
        const UNUSED_OPERATOR        = 1 << 14;
        const AMBIGUOUS_MULTIPLIER   = 1 << 15;
        const ALL = Self::MALFORMED_CONTENT.bits
            | Self::UNKNOWN_TERM.bits
            | Self::MALFORMED_DECIMAL.bits
            | Self::MALFORMED_THOUSAND.bits
            | Self::MALFORMED_FRACTION.bits
            | Self::MALFORMED_HHMMSS.bits
            | Self::LONELY_VALUE.bits
            | Self::LONELY_SCALE.bits
            | Self::DUPLICATE_SCALE.bits
            | Self::CONSECUTIVE_CONNECTOR.bits
            | Self::CONSECUTIVE_SEGMENTOR.bits
            | Self::CONSECUTIVE_SPECIAL.bits
            | Self::MISPLACED_ALLOWED_TERM.bits
            | Self::MISPLACED_SPECIAL.bits
            | Self::UNUSED_OPERATOR.bits
            | Self::AMBIGUOUS_MULTIPLIER.bits;
    }
}

impl Default for FailureFlag {
    fn default() -> Self {
        FailureFlag::NONE
    }
}

/// Canonical scale values, fixed regardless of locale.
pub mod canonical {
    pub const MILLISECOND: f64 = 0.001;
    pub const SECOND: f64 = 1.0;
    pub const MINUTE: f64 = 60.0;
    pub const HOUR: f64 = 3600.0;
    pub const DAY: f64 = 86400.0;
    pub const WEEK: f64 = 604_800.0;
    pub const MONTH: f64 = 2_635_200.0;
    pub const YEAR: f64 = 31_536_000.0;
    pub const DECADE: f64 = YEAR * 10.0;
    pub const CENTURY: f64 = YEAR * 100.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_equality_is_by_seconds_per_unit() {
        let a = Scale {
            seconds_per_unit: 60.0,
            singular: "minute",
            plural: "minutes",
            terms: &["m", "min"],
        };
        let b = Scale {
            seconds_per_unit: 60.0,
            singular: "minuto",
            plural: "minutos",
            terms: &["min"],
        };
        assert_eq!(a, b);
    }

    #[test]
    fn empty_scale_is_disabled() {
        assert!(!Scale::EMPTY.is_enabled());
    }

    #[test]
    fn strictness_mask_is_monotone_by_construction() {
        let tolerant = FailureFlag::NONE;
        let strict = FailureFlag::ALL;
        assert!(tolerant.bits() & strict.bits() == tolerant.bits());
    }
}
