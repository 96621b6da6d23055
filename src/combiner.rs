//! Pass B: the semantic combiner.
//!
//! Consumes the token stream Pass A produced and folds numerals and
//! numbers into a running value, attaching each value to the next scale
//! it meets, and emitting `(value, scale)` pairs or `(fragment, flag)`
//! rejections in source order.

use crate::lexer::{LexToken, TokenKind};
use crate::locale::LocaleTable;
use crate::model::{FailureFlag, NumeralKind, ParserSettings, Scale};
use crate::result::ParsedResult;

/// What the previous *meaningful* token was, for the adjacency checks
/// (`LONELY_SCALE`, `LONELY_VALUE`, the digit/teen/ten/hundred table).
/// Connectors and segmentors are glue: segmentors reset this to `None`,
/// connectors pass through it untouched.
#[derive(Clone, Copy, PartialEq)]
enum Prev {
    None,
    Number,
    Numeral(NumeralKind),
    Scale,
}

enum DigitOutcome {
    Set(f64),
    Concat(f64),
    LonelyThenSet(f64, f64),
}

fn concat_digits(prev: f64, curr: f64) -> f64 {
    let prev_s = format!("{:.0}", prev);
    let curr_s = format!("{:.0}", curr);
    format!("{prev_s}{curr_s}").parse().unwrap_or(curr)
}

/// The DIGIT/TEEN/TEN/HUNDRED adjacency combination table. THOUSAND is
/// handled separately (it cascades and needs lookahead), and the "no
/// previous numeral" case is handled by the caller.
fn combine_digit_like(prev_kind: NumeralKind, prev_value: f64, curr_kind: NumeralKind, curr_value: f64) -> DigitOutcome {
    use NumeralKind::*;
    match (prev_kind, curr_kind) {
        (Digit, Digit) | (Digit, Teen) | (Digit, Ten) => DigitOutcome::Concat(concat_digits(prev_value, curr_value)),
        (Digit, Hundred) | (Teen, Hundred) | (Ten, Hundred) => DigitOutcome::Set(prev_value * curr_value),
        (Teen, Digit) => DigitOutcome::LonelyThenSet(prev_value, curr_value),
        (Teen, Teen) | (Teen, Ten) => DigitOutcome::Concat(concat_digits(prev_value, curr_value)),
        (Ten, Digit) => DigitOutcome::Set(prev_value + curr_value),
        (Ten, Teen) | (Ten, Ten) => DigitOutcome::LonelyThenSet(prev_value, curr_value),
        (Hundred, Digit) | (Hundred, Teen) | (Hundred, Ten) => DigitOutcome::Set(prev_value + curr_value),
        (Hundred, Hundred) => DigitOutcome::Set(prev_value * curr_value),
        _ => DigitOutcome::Set(curr_value),
    }
}

#[derive(Default)]
struct SpecialRun {
    lexeme: Option<String>,
    len: u32,
}

impl SpecialRun {
    fn bump(&mut self, lexeme: &str) -> u32 {
        if self.lexeme.as_deref() == Some(lexeme) {
            self.len += 1;
        } else {
            self.lexeme = Some(lexeme.to_string());
            self.len = 1;
        }
        self.len
    }

    fn reset(&mut self) {
        self.lexeme = None;
        self.len = 0;
    }
}

struct Segment {
    /// The currently open numeral/number value, not yet folded into
    /// `value` by a thousand cascade or segment close.
    parsed_value: Option<f64>,
    /// Sub-totals already closed within this segment (thousand cascades).
    value: f64,
    /// The product of every multiplier word seen in this segment.
    modifier: Option<f64>,
    text: String,
    operator_pending: bool,
    highest_thousand: Option<f64>,
    had_hundred_or_thousand: bool,
    /// Set when a multiplier has been seen but no value-bearing token
    /// (number or digit/teen/ten/hundred numeral) has consumed it yet. A
    /// further multiplier while this is still set is ambiguous, even
    /// across an intervening operator like "of".
    multiplier_pending: bool,
}

impl Segment {
    fn new() -> Self {
        Segment {
            parsed_value: None,
            value: 0.0,
            modifier: None,
            text: String::new(),
            operator_pending: false,
            highest_thousand: None,
            had_hundred_or_thousand: false,
            multiplier_pending: false,
        }
    }

    fn is_empty(&self) -> bool {
        self.parsed_value.is_none() && self.value == 0.0 && self.modifier.is_none() && self.text.is_empty()
    }

    fn push_text(&mut self, s: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(s);
    }

    /// "If only a modifier exists (no value, no scale), treat the
    /// modifier as the value" - e.g. `"half min"` is 0.5 minutes, not 0.
    fn total(&self) -> f64 {
        if self.parsed_value.is_none() && self.value == 0.0 {
            if let Some(modifier) = self.modifier {
                return modifier;
            }
        }
        let base = self.parsed_value.unwrap_or(0.0) + self.value;
        base * self.modifier.unwrap_or(1.0)
    }
}

pub fn combine(tokens: &[LexToken], locale: &dyn LocaleTable, settings: &ParserSettings, result: &mut ParsedResult) {
    let mut seg = Segment::new();
    let mut prev = Prev::None;
    let mut seen_scales: Vec<&'static Scale> = Vec::new();
    let mut connector_run = SpecialRun::default();
    let mut segmentor_run = SpecialRun::default();
    let mut other_run = SpecialRun::default();

    for tok in tokens {
        seg.push_text(&tok.lexeme);
        match &tok.kind {
            TokenKind::Invalid(flags) => {
                result.push_invalid(tok.lexeme.clone(), *flags);
            }
            TokenKind::Unknown => {
                result.push_invalid(tok.lexeme.clone(), FailureFlag::UNKNOWN_TERM);
            }
            TokenKind::Number(value) => {
                connector_run.reset();
                other_run.reset();
                if matches!(prev, Prev::Number) {
                    if let Some(old) = seg.parsed_value.take() {
                        result.push_invalid(seg.text.clone(), FailureFlag::LONELY_VALUE);
                        let _ = old;
                    }
                }
                seg.parsed_value = Some(*value);
                seg.multiplier_pending = false;
                prev = Prev::Number;
            }
            TokenKind::Numeral(numeral) => {
                connector_run.reset();
                other_run.reset();
                match numeral.kind {
                    NumeralKind::Operator => {
                        seg.operator_pending = true;
                    }
                    NumeralKind::Multiplier => {
                        // A multiplier is ambiguous if an earlier multiplier in
                        // this segment hasn't yet been "spent" on a value - this
                        // survives an intervening operator ("half of half ...").
                        // The source's handling reports the flag but still
                        // yields the unmultiplied scale value, so the pending
                        // modifier is discarded rather than multiplied in.
                        if seg.multiplier_pending {
                            result.push_invalid(seg.text.clone(), FailureFlag::AMBIGUOUS_MULTIPLIER);
                            seg.modifier = None;
                        } else {
                            seg.modifier = Some(seg.modifier.unwrap_or(1.0) * numeral.value);
                        }
                        seg.multiplier_pending = true;
                        seg.operator_pending = false;
                    }
                    NumeralKind::Thousand => {
                        let base = seg.parsed_value.take().unwrap_or(1.0);
                        if let Some(prior) = seg.highest_thousand {
                            if numeral.value >= prior {
                                result.push_invalid(seg.text.clone(), FailureFlag::LONELY_VALUE);
                            }
                        }
                        seg.highest_thousand = Some(numeral.value);
                        seg.value += base * numeral.value;
                        seg.had_hundred_or_thousand = true;
                        seg.multiplier_pending = false;
                        seg.operator_pending = false;
                    }
                    NumeralKind::Digit | NumeralKind::Teen | NumeralKind::Ten | NumeralKind::Hundred => {
                        if numeral.kind == NumeralKind::Hundred {
                            seg.had_hundred_or_thousand = true;
                        }
                        match prev {
                            Prev::Numeral(prev_kind)
                                if matches!(
                                    prev_kind,
                                    NumeralKind::Digit | NumeralKind::Teen | NumeralKind::Ten | NumeralKind::Hundred
                                ) =>
                            {
                                let prev_value = seg.parsed_value.unwrap_or(0.0);
                                let outcome = if seg.had_hundred_or_thousand
                                    && matches!(
                                        prev_kind,
                                        NumeralKind::Digit | NumeralKind::Teen | NumeralKind::Ten
                                    )
                                    && matches!(
                                        numeral.kind,
                                        NumeralKind::Digit | NumeralKind::Teen | NumeralKind::Ten
                                    )
                                {
                                    // concatenation is suppressed once a
                                    // hundred/thousand has been seen in
                                    // this segment; numerals only add.
                                    DigitOutcome::Set(prev_value + numeral.value)
                                } else {
                                    combine_digit_like(prev_kind, prev_value, numeral.kind, numeral.value)
                                };
                                match outcome {
                                    DigitOutcome::Set(v) | DigitOutcome::Concat(v) => {
                                        seg.parsed_value = Some(v);
                                    }
                                    DigitOutcome::LonelyThenSet(lonely, v) => {
                                        result.push_invalid(format!("{lonely:.0}"), FailureFlag::LONELY_VALUE);
                                        seg.parsed_value = Some(v);
                                    }
                                }
                            }
                            _ => {
                                seg.parsed_value = Some(numeral.value);
                            }
                        }
                        seg.multiplier_pending = false;
                        seg.operator_pending = false;
                    }
                }
                prev = Prev::Numeral(numeral.kind);
            }
            TokenKind::Scale(scale) => {
                connector_run.reset();
                other_run.reset();
                let leading = prev == Prev::None && seg.parsed_value.is_none() && seg.value == 0.0 && seg.modifier.is_none();
                if leading || prev == Prev::Scale {
                    result.push_invalid(tok.lexeme.clone(), FailureFlag::LONELY_SCALE);
                    prev = Prev::Scale;
                    continue;
                }
                if !settings.allow_duplicate_scales && seen_scales.iter().any(|s| *s == *scale) {
                    result.push_invalid(seg.text.clone(), FailureFlag::DUPLICATE_SCALE);
                } else {
                    let total = seg.total();
                    result.push_valid(total, **scale);
                    seen_scales.push(*scale);
                }
                seg = Segment::new();
                prev = Prev::None;
            }
            TokenKind::Special => {
                let s = tok.lexeme.as_str();
                if locale.is_connector(s) && !locale.is_segmentor(s) {
                    segmentor_run.reset();
                    other_run.reset();
                    if connector_run.bump(s) > 2 {
                        result.push_invalid(seg.text.clone(), FailureFlag::CONSECUTIVE_CONNECTOR);
                    }
                } else if locale.is_segmentor(s) {
                    connector_run.reset();
                    other_run.reset();
                    if segmentor_run.bump(s) > 1 {
                        result.push_invalid(seg.text.clone(), FailureFlag::CONSECUTIVE_SEGMENTOR);
                    }
                    if let Some(v) = seg.parsed_value.take() {
                        if prev != Prev::Scale {
                            result.push_invalid(format!("{v:.0}"), FailureFlag::LONELY_VALUE);
                        }
                    }
                    seg = Segment::new();
                    prev = Prev::None;
                } else if locale.is_allowed_term(s) {
                    connector_run.reset();
                    segmentor_run.reset();
                    if settings.limit_allowed_terms && !seg.is_empty() {
                        result.push_invalid(seg.text.clone(), FailureFlag::MISPLACED_ALLOWED_TERM);
                        seg = Segment::new();
                        prev = Prev::None;
                    }
                } else if locale.is_special(s) {
                    connector_run.reset();
                    segmentor_run.reset();
                    if other_run.bump(s) > 1 {
                        result.push_invalid(seg.text.clone(), FailureFlag::CONSECUTIVE_SPECIAL);
                    } else {
                        result.push_invalid(s.to_string(), FailureFlag::MISPLACED_SPECIAL);
                    }
                } else if !s.chars().all(char::is_whitespace) {
                    result.push_invalid(s.to_string(), FailureFlag::MISPLACED_SPECIAL);
                }
            }
        }
    }

    if seg.operator_pending {
        result.push_invalid(seg.text.clone(), FailureFlag::UNUSED_OPERATOR);
    }

    if !seg.is_empty() {
        close_tail(seg, locale, settings, tokens.len(), result);
    }
}

fn close_tail(
    seg: Segment,
    locale: &dyn LocaleTable,
    settings: &ParserSettings,
    token_count: usize,
    result: &mut ParsedResult,
) {
    use crate::model::AssumeSeconds;
    let bind = match settings.assume_seconds {
        AssumeSeconds::Never => false,
        AssumeSeconds::Last => true,
        AssumeSeconds::Single => token_count == 1 || (result.valid.is_empty() && result.invalid.is_empty()),
    };
    if bind {
        let scale = locale.seconds_scale();
        result.push_valid(seg.total(), *scale);
    } else {
        result.push_invalid(seg.text, FailureFlag::LONELY_VALUE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use crate::locale::Locale;

    fn run(input: &str, locale: &Locale, settings: &ParserSettings, mask: FailureFlag) -> ParsedResult {
        let tokens = lex(input, locale, settings);
        let mut result = ParsedResult::new();
        combine(&tokens, locale, settings, &mut result);
        result.finalize(mask);
        result
    }

    #[test]
    fn simple_abbreviations_sum_correctly() {
        let r = run("1h5m30s", &Locale::english(), &ParserSettings::default(), FailureFlag::NONE);
        assert!(r.success);
        assert_eq!(r.seconds, 3930.0);
    }

    #[test]
    fn verbose_form_with_connectors_and_segmentors() {
        let r = run(
            "1 hour, 5 minutes, and 30 seconds & 7ms",
            &Locale::english(),
            &ParserSettings::default(),
            FailureFlag::NONE,
        );
        assert!(r.success);
        assert!((r.seconds - 3930.007).abs() < 1e-9);
    }

    #[test]
    fn clock_group_with_fractional_seconds() {
        let r = run("12:30:15.25", &Locale::english(), &ParserSettings::default(), FailureFlag::NONE);
        assert!(r.success);
        assert_eq!(r.seconds, 45015.25);
    }

    #[test]
    fn fraction_of_a_minute() {
        let r = run("1/2 of a min", &Locale::english(), &ParserSettings::default(), FailureFlag::NONE);
        assert!(r.success);
        assert_eq!(r.seconds, 30.0);
    }

    #[test]
    fn zero_denominator_fails_and_lonely_scale_is_flagged() {
        let r = run("1/0 sec", &Locale::english(), &ParserSettings::default(), FailureFlag::ALL);
        assert!(!r.success);
        assert!(r.invalid.iter().any(|i| i.flags.contains(FailureFlag::MALFORMED_FRACTION)));
        assert!(r.invalid.iter().any(|i| i.flags.contains(FailureFlag::LONELY_SCALE)));
    }

    #[test]
    fn trailing_lonely_value_in_strict_mode() {
        let r = run("5 seconds 3", &Locale::english(), &ParserSettings::default(), FailureFlag::ALL);
        assert!(!r.success);
        assert_eq!(r.seconds, 5.0);
        assert!(r.invalid.iter().any(|i| i.flags.contains(FailureFlag::LONELY_VALUE)));
    }

    #[test]
    fn duplicate_scales_rejected_when_disabled() {
        let mut settings = ParserSettings::default();
        settings.allow_duplicate_scales = false;
        let r = run(
            "2 minutes and 3 minutes, 5 minutes",
            &Locale::english(),
            &settings,
            FailureFlag::DUPLICATE_SCALE,
        );
        assert!(!r.success);
        assert_eq!(r.seconds, 120.0);
        assert_eq!(
            r.invalid.iter().filter(|i| i.flags.contains(FailureFlag::DUPLICATE_SCALE)).count(),
            2
        );
    }

    #[test]
    fn compound_cardinal_with_hundred_and_thousand_cascades() {
        let r = run(
            "twenty-five hundred minutes and half of one million two hundred and fifty-six thousand seconds",
            &Locale::english(),
            &ParserSettings::default(),
            FailureFlag::NONE,
        );
        assert!(r.success);
        assert_eq!(r.seconds, 778_000.0);
    }

    #[test]
    fn single_bare_number_is_assumed_seconds_in_single_mode() {
        let r = run("45", &Locale::english(), &ParserSettings::default(), FailureFlag::NONE);
        assert!(r.success);
        assert_eq!(r.seconds, 45.0);
    }

    #[test]
    fn diacritic_insensitive_spanish_parse() {
        let settings = ParserSettings::default();
        let plain = run("2 anos", &Locale::spanish(), &settings, FailureFlag::NONE);
        let accented = run("2 años", &Locale::spanish(), &settings, FailureFlag::NONE);
        assert_eq!(plain.seconds, accented.seconds);
        assert!(plain.success && accented.success);
    }

    #[test]
    fn lone_multiplier_is_treated_as_the_value() {
        let r = run("half min", &Locale::english(), &ParserSettings::default(), FailureFlag::NONE);
        assert!(r.success);
        assert_eq!(r.seconds, 30.0);
    }

    #[test]
    fn lone_multiplier_with_no_scale_assumes_seconds() {
        let r = run("half", &Locale::english(), &ParserSettings::default(), FailureFlag::NONE);
        assert!(r.success);
        assert_eq!(r.seconds, 0.5);
    }

    #[test]
    fn multiplier_chain_across_an_operator_is_ambiguous_and_unmultiplied() {
        for input in [
            "half half twenty three min",
            "half of half of twenty three min",
            "half of half twenty three min",
            "half half of twenty three min",
        ] {
            let r = run(input, &Locale::english(), &ParserSettings::default(), FailureFlag::NONE);
            assert!(r.success, "{input}");
            assert_eq!(r.seconds, 1380.0, "{input}");
            assert!(
                r.invalid.iter().any(|i| i.flags.contains(FailureFlag::AMBIGUOUS_MULTIPLIER)),
                "{input}"
            );
        }
    }
}
