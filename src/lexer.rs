//! Pass A: a character-class tokenizer with an embedded number-segment
//! sub-lexer.
//!
//! The tokenizer never fails outright: a malformed number segment is
//! pushed to the token stream as a `TokenKind::Invalid` marker (carrying
//! the flags that describe *why*) so the combiner can report it in
//! source order without needing a side channel.

use crate::diacritics::strip_diacritics;
use crate::locale::LocaleTable;
use crate::model::{FailureFlag, Numeral, ParserSettings, Scale};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Numeral(&'static Numeral),
    Scale(&'static Scale),
    /// Glue or punctuation: a connector, segmentor, allowed term, or other
    /// special, whether spelled as punctuation (`","`) or a word (`"and"`,
    /// `"y"`). The combiner re-derives which category it is from the
    /// locale, keyed by `lexeme`.
    Special,
    /// An alphabetic run or stray character that resolves to nothing the
    /// locale knows about.
    Unknown,
    /// A number segment that failed its inner validation; `lexeme` is the
    /// raw text that was rejected.
    Invalid(FailureFlag),
}

#[derive(Debug, Clone)]
pub struct LexToken {
    pub lexeme: String,
    pub kind: TokenKind,
}

/// Run Pass A over `content`, producing the ordered token stream Pass B
/// consumes. Diacritics are stripped and the text lowercased first, so
/// `"número"` and `"NUMERO"` tokenize identically.
pub fn lex(content: &str, locale: &dyn LocaleTable, settings: &ParserSettings) -> Vec<LexToken> {
    let normalized = strip_diacritics(content).to_lowercase();
    let chars: Vec<char> = normalized.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0usize;
    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            i = lex_number(&chars, i, false, locale, settings, &mut tokens);
            continue;
        }
        let prev_is_digit = i > 0 && chars[i - 1].is_ascii_digit();
        if !prev_is_digit
            && is_decimal_delim_char(c, locale)
            && i + 1 < chars.len()
            && chars[i + 1].is_ascii_digit()
        {
            i = lex_number(&chars, i, true, locale, settings, &mut tokens);
            continue;
        }
        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let lexeme: String = chars[start..i].iter().collect();
            push_word_token(lexeme, locale, &mut tokens);
            continue;
        }
        let s = c.to_string();
        if locale.is_special(&s) || c.is_whitespace() {
            tokens.push(LexToken {
                lexeme: s,
                kind: TokenKind::Special,
            });
        } else {
            tokens.push(LexToken {
                lexeme: s,
                kind: TokenKind::Unknown,
            });
        }
        i += 1;
    }
    tokens
}

fn push_word_token(lexeme: String, locale: &dyn LocaleTable, tokens: &mut Vec<LexToken>) {
    let kind = if let Some(scale) = locale.lookup_scale(&lexeme) {
        TokenKind::Scale(scale)
    } else if let Some(numeral) = locale.lookup_numeral(&lexeme) {
        TokenKind::Numeral(numeral)
    } else if locale.is_connector(&lexeme) || locale.is_segmentor(&lexeme) {
        TokenKind::Special
    } else {
        TokenKind::Unknown
    };
    tokens.push(LexToken { lexeme, kind });
}

fn is_decimal_delim_char(c: char, locale: &dyn LocaleTable) -> bool {
    locale.is_decimal_delimiter(&c.to_string())
}

fn is_thousand_delim_char(c: char, locale: &dyn LocaleTable) -> bool {
    locale.is_thousand_delimiter(&c.to_string())
}

fn is_hhmmss_delim_char(c: char, locale: &dyn LocaleTable) -> bool {
    locale.is_hhmmss_delimiter(&c.to_string())
}

fn is_connector_char(c: char, locale: &dyn LocaleTable) -> bool {
    locale.is_connector(&c.to_string())
}

fn is_segmentor_char(c: char, locale: &dyn LocaleTable) -> bool {
    locale.is_segmentor(&c.to_string())
}

fn is_numberish(c: char, locale: &dyn LocaleTable) -> bool {
    c.is_ascii_digit()
        || is_decimal_delim_char(c, locale)
        || is_thousand_delim_char(c, locale)
        || is_hhmmss_delim_char(c, locale)
}

/// Greedily consume the run starting at `start` that a number segment may
/// contain: digits, the three delimiter families, and connectors, but only
/// when a connector is itself followed (after skipping further connectors)
/// by more number-ish material - a connector trailing into a word is left
/// for the word tokenizer instead of being swallowed into the segment.
fn gather_segment(chars: &[char], start: usize, locale: &dyn LocaleTable) -> (usize, Vec<char>) {
    let mut i = start;
    let mut buf = Vec::new();
    while i < chars.len() {
        let c = chars[i];
        if is_numberish(c, locale) {
            buf.push(c);
            i += 1;
            continue;
        }
        if is_connector_char(c, locale) && !is_segmentor_char(c, locale) {
            let mut j = i;
            while j < chars.len() && is_connector_char(chars[j], locale) && !is_segmentor_char(chars[j], locale) {
                j += 1;
            }
            if j < chars.len() && is_numberish(chars[j], locale) {
                buf.extend_from_slice(&chars[i..j]);
                i = j;
                continue;
            }
        }
        break;
    }
    (i, buf)
}

enum Shape {
    Plain(f64),
    Clock(Vec<f64>),
}

/// Lex one number segment (and, transitively, a trailing fraction
/// denominator) starting at `start`. `synth_leading_zero` is set when the
/// segment begins with a bare decimal delimiter (the leading-decimal
/// rule), in which case a `'0'` is prepended before validation.
fn lex_number(
    chars: &[char],
    start: usize,
    synth_leading_zero: bool,
    locale: &dyn LocaleTable,
    settings: &ParserSettings,
    tokens: &mut Vec<LexToken>,
) -> usize {
    let (mut end, mut raw) = gather_segment(chars, start, locale);
    if synth_leading_zero {
        raw.insert(0, '0');
    }
    match parse_segment(&raw, locale, settings) {
        Ok(Shape::Clock(parts)) => {
            let text: String = chars[start..end].iter().collect();
            expand_clock_group(&parts, &text, locale, tokens);
            end
        }
        Ok(Shape::Plain(value)) => {
            match try_fraction(chars, start, end, value, locale, settings) {
                FractionOutcome::None => {
                    let text: String = chars[start..end].iter().collect();
                    tokens.push(LexToken {
                        lexeme: text,
                        kind: TokenKind::Number(value),
                    });
                    end
                }
                FractionOutcome::Ok { end: new_end, value, text } => {
                    tokens.push(LexToken {
                        lexeme: text,
                        kind: TokenKind::Number(value),
                    });
                    new_end
                }
                FractionOutcome::Err { end: new_end, text, flags } => {
                    tokens.push(LexToken {
                        lexeme: text,
                        kind: TokenKind::Invalid(flags),
                    });
                    end = new_end;
                    end
                }
            }
        }
        Err(flags) => {
            let text: String = chars[start..end].iter().collect();
            tokens.push(LexToken {
                lexeme: text,
                kind: TokenKind::Invalid(flags),
            });
            end
        }
    }
}

enum FractionOutcome {
    None,
    Ok { end: usize, value: f64, text: String },
    Err { end: usize, text: String, flags: FailureFlag },
}

/// Try to extend a just-parsed numerator `numerator` (spanning
/// `[start, numerator_end)`) into `a/b` by looking past connectors for a
/// `/` and a further number segment.
fn try_fraction(
    chars: &[char],
    start: usize,
    numerator_end: usize,
    numerator: f64,
    locale: &dyn LocaleTable,
    settings: &ParserSettings,
) -> FractionOutcome {
    let mut i = numerator_end;
    while i < chars.len() && is_connector_char(chars[i], locale) && !is_segmentor_char(chars[i], locale) {
        i += 1;
    }
    if i >= chars.len() || !locale.is_allowed_term("/") || chars[i] != '/' {
        return FractionOutcome::None;
    }
    let mut j = i + 1;
    while j < chars.len() && is_connector_char(chars[j], locale) && !is_segmentor_char(chars[j], locale) {
        j += 1;
    }
    if j >= chars.len() || !chars[j].is_ascii_digit() {
        let text: String = chars[start..=i].iter().collect();
        return FractionOutcome::Err {
            end: i + 1,
            text,
            flags: FailureFlag::MALFORMED_FRACTION,
        };
    }
    let (denom_end, denom_raw) = gather_segment(chars, j, locale);
    let denom_value = match parse_segment(&denom_raw, locale, settings) {
        Ok(Shape::Plain(v)) => v,
        _ => {
            let text: String = chars[start..denom_end].iter().collect();
            return FractionOutcome::Err {
                end: denom_end,
                text,
                flags: FailureFlag::MALFORMED_FRACTION,
            };
        }
    };
    // A second '/' immediately following the denominator makes the whole
    // fraction malformed (only one '/' is allowed).
    let mut k = denom_end;
    while k < chars.len() && is_connector_char(chars[k], locale) && !is_segmentor_char(chars[k], locale) {
        k += 1;
    }
    if k < chars.len() && chars[k] == '/' {
        let mut m = k + 1;
        while m < chars.len() && (chars[m].is_ascii_digit() || is_connector_char(chars[m], locale)) {
            m += 1;
        }
        let text: String = chars[start..m].iter().collect();
        return FractionOutcome::Err {
            end: m,
            text,
            flags: FailureFlag::MALFORMED_FRACTION,
        };
    }
    let text: String = chars[start..denom_end].iter().collect();
    if denom_value == 0.0 {
        FractionOutcome::Err {
            end: denom_end,
            text,
            flags: FailureFlag::MALFORMED_FRACTION,
        }
    } else {
        FractionOutcome::Ok {
            end: denom_end,
            value: numerator / denom_value,
            text,
        }
    }
}

/// Validate a gathered segment as a decimal, thousand-grouped, or clock
/// shape. These three shapes are mutually exclusive: mixing a decimal
/// delimiter and a thousand delimiter in the same segment is rejected as
/// `MALFORMED_CONTENT`.
fn parse_segment(seg: &[char], locale: &dyn LocaleTable, settings: &ParserSettings) -> Result<Shape, FailureFlag> {
    if seg.iter().any(|&c| is_hhmmss_delim_char(c, locale)) {
        return parse_clock(seg, locale, settings).map(Shape::Clock);
    }
    parse_plain(seg, locale, settings).map(Shape::Plain)
}

fn parse_plain(seg: &[char], locale: &dyn LocaleTable, settings: &ParserSettings) -> Result<f64, FailureFlag> {
    let filtered: Vec<char> = seg
        .iter()
        .copied()
        .filter(|&c| !is_connector_char(c, locale))
        .collect();
    if filtered.is_empty() {
        return Err(FailureFlag::MALFORMED_CONTENT);
    }
    let decimal_positions: Vec<usize> = filtered
        .iter()
        .enumerate()
        .filter(|(_, &c)| is_decimal_delim_char(c, locale))
        .map(|(i, _)| i)
        .collect();
    let thousand_positions: Vec<usize> = filtered
        .iter()
        .enumerate()
        .filter(|(_, &c)| is_thousand_delim_char(c, locale))
        .map(|(i, _)| i)
        .collect();

    if !decimal_positions.is_empty() && !thousand_positions.is_empty() {
        return Err(FailureFlag::MALFORMED_CONTENT);
    }

    if decimal_positions.len() > 1 {
        return Err(FailureFlag::MALFORMED_DECIMAL);
    }

    if let Some(&pos) = decimal_positions.first() {
        let before = &filtered[..pos];
        let after = &filtered[pos + 1..];
        if before.is_empty() || !before.iter().all(|c| c.is_ascii_digit()) {
            return Err(FailureFlag::MALFORMED_DECIMAL);
        }
        if !after.iter().all(|c| c.is_ascii_digit()) {
            return Err(FailureFlag::MALFORMED_DECIMAL);
        }
        if after.is_empty() && !settings.allow_decimals_lacking_digits {
            return Err(FailureFlag::MALFORMED_DECIMAL);
        }
        let before_s: String = before.iter().collect();
        let after_s: String = if after.is_empty() {
            "0".to_string()
        } else {
            after.iter().collect()
        };
        return format!("{before_s}.{after_s}")
            .parse::<f64>()
            .map_err(|_| FailureFlag::MALFORMED_DECIMAL);
    }

    if !thousand_positions.is_empty() {
        let mut groups: Vec<Vec<char>> = Vec::new();
        let mut cur = Vec::new();
        for &c in &filtered {
            if is_thousand_delim_char(c, locale) {
                groups.push(std::mem::take(&mut cur));
            } else {
                cur.push(c);
            }
        }
        groups.push(cur);
        if groups[0].is_empty() || !groups[0].iter().all(|c| c.is_ascii_digit()) {
            return Err(FailureFlag::MALFORMED_THOUSAND);
        }
        for g in &groups[1..] {
            if !g.iter().all(|c| c.is_ascii_digit()) {
                return Err(FailureFlag::MALFORMED_THOUSAND);
            }
            let ok = g.len() == 3
                || (settings.allow_thousands_lacking_digits && !g.is_empty() && g.len() < 3)
                || (settings.allow_thousands_extra_digits && g.len() > 3);
            if !ok {
                return Err(FailureFlag::MALFORMED_THOUSAND);
            }
        }
        let joined: String = groups.into_iter().flatten().collect();
        return joined
            .parse::<f64>()
            .map_err(|_| FailureFlag::MALFORMED_THOUSAND);
    }

    if !filtered.iter().all(|c| c.is_ascii_digit()) {
        return Err(FailureFlag::MALFORMED_CONTENT);
    }
    let s: String = filtered.iter().collect();
    s.parse::<f64>().map_err(|_| FailureFlag::MALFORMED_CONTENT)
}

/// A clock group is one or more plain numbers separated by `HH:MM:SS`
/// delimiters, with at most two distinct connector characters tolerated
/// between consecutive parts.
fn parse_clock(seg: &[char], locale: &dyn LocaleTable, settings: &ParserSettings) -> Result<Vec<f64>, FailureFlag> {
    let mut parts: Vec<Vec<char>> = vec![Vec::new()];
    let mut connector_runs: Vec<Vec<char>> = vec![Vec::new()];
    for &c in seg {
        if is_hhmmss_delim_char(c, locale) {
            parts.push(Vec::new());
            connector_runs.push(Vec::new());
        } else if is_connector_char(c, locale) {
            connector_runs.last_mut().unwrap().push(c);
        } else {
            parts.last_mut().unwrap().push(c);
        }
    }
    if parts.len() < 2 {
        return Err(FailureFlag::MALFORMED_HHMMSS);
    }
    for run in &connector_runs {
        let distinct: std::collections::HashSet<char> = run.iter().copied().collect();
        if distinct.len() > 2 {
            return Err(FailureFlag::MALFORMED_HHMMSS);
        }
    }
    let mut values = Vec::with_capacity(parts.len());
    for part in &parts {
        match parse_plain(part, locale, settings) {
            Ok(v) => values.push(v),
            Err(_) => return Err(FailureFlag::MALFORMED_HHMMSS),
        }
    }
    Ok(values)
}

/// Pick which scales a clock group of `k` parts binds to: the smallest `k`
/// enabled scales (excluding milliseconds, unless `k` covers every enabled
/// scale including it), assigned most-significant-part-first.
fn clock_scales(k: usize, locale: &dyn LocaleTable) -> Vec<&'static Scale> {
    let ascending = locale.ascending_scales();
    let pool: Vec<&'static Scale> = if k >= ascending.len() {
        ascending
    } else {
        ascending
            .into_iter()
            .filter(|s| s.seconds_per_unit != crate::model::canonical::MILLISECOND)
            .collect()
    };
    let mut chosen: Vec<&'static Scale> = pool.into_iter().take(k).collect();
    chosen.reverse();
    chosen
}

/// Rewrite a successful clock group into alternating `Number`/`Scale`
/// tokens, exactly as if the user had spelled out each unit - this is what
/// lets the combiner stay free of clock-specific logic.
fn expand_clock_group(values: &[f64], text: &str, locale: &dyn LocaleTable, tokens: &mut Vec<LexToken>) {
    let scales = clock_scales(values.len(), locale);
    for (value, scale) in values.iter().zip(scales.iter()) {
        tokens.push(LexToken {
            lexeme: text.to_string(),
            kind: TokenKind::Number(*value),
        });
        tokens.push(LexToken {
            lexeme: text.to_string(),
            kind: TokenKind::Scale(*scale),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::model::ParserSettings;

    fn toks(input: &str) -> Vec<LexToken> {
        lex(input, &Locale::english(), &ParserSettings::default())
    }

    #[test]
    fn lexes_abbreviated_units() {
        let tokens = toks("1h5m30s");
        let numbers: Vec<f64> = tokens
            .iter()
            .filter_map(|t| match t.kind {
                TokenKind::Number(v) => Some(v),
                _ => None,
            })
            .collect();
        assert_eq!(numbers, vec![1.0, 5.0, 30.0]);
    }

    #[test]
    fn lexes_clock_group_with_decimal_tail() {
        let tokens = toks("12:30:15.25");
        let numbers: Vec<f64> = tokens
            .iter()
            .filter_map(|t| match t.kind {
                TokenKind::Number(v) => Some(v),
                _ => None,
            })
            .collect();
        assert_eq!(numbers, vec![12.0, 30.0, 15.25]);
    }

    #[test]
    fn two_part_clock_group_binds_to_minute_and_second() {
        let tokens = toks("2:30");
        let scales: Vec<&str> = tokens
            .iter()
            .filter_map(|t| match t.kind {
                TokenKind::Scale(s) => Some(s.singular),
                _ => None,
            })
            .collect();
        assert_eq!(scales, vec!["minute", "second"]);
    }

    #[test]
    fn leading_decimal_gets_a_zero() {
        let tokens = toks(".5 min");
        assert!(matches!(tokens[0].kind, TokenKind::Number(v) if (v - 0.5).abs() < 1e-9));
    }

    #[test]
    fn fraction_composes_across_connectors() {
        let tokens = toks("1 / 2 of a min");
        assert!(matches!(tokens[0].kind, TokenKind::Number(v) if (v - 0.5).abs() < 1e-9));
    }

    #[test]
    fn zero_denominator_is_malformed_fraction() {
        let tokens = toks("1/0 sec");
        assert!(matches!(&tokens[0].kind, TokenKind::Invalid(f) if f.contains(FailureFlag::MALFORMED_FRACTION)));
    }

    #[test]
    fn thousand_grouping_requires_three_digits() {
        let tokens = toks("1,23 sec");
        assert!(matches!(&tokens[0].kind, TokenKind::Invalid(f) if f.contains(FailureFlag::MALFORMED_THOUSAND)));
    }

    #[test]
    fn thousand_grouping_accepted_with_three_digits() {
        let tokens = toks("1,234 sec");
        assert!(matches!(tokens[0].kind, TokenKind::Number(v) if (v - 1234.0).abs() < 1e-9));
    }
}
