/*!
This crate parses free-form, human-written duration expressions - mixing
digits, number words, fractions, scale names, clock-style `HH:MM:SS`
groups, multipliers ("half", "third"), and operators ("of") - into a
total number of seconds, plus a structured list of the `(value, scale)`
pairs it recognized and a parallel list of the fragments it rejected,
each tagged with the reason it was rejected for.

# Usage

This crate is [on crates.io](https://crates.io/crates/timelength) and can be
used by adding `timelength` to your dependencies in your project's `Cargo.toml`.

```toml
[dependencies]
timelength = "0.1"
```

# Example: a quick, tolerant parse

```rust
use timelength::{parse, Locale};
use timelength::model::{FailureFlag, ParserSettings};

let result = parse("1h5m30s", &Locale::english(), &ParserSettings::default(), FailureFlag::NONE);

assert!(result.success);
assert_eq!(result.seconds, 3930.0);
```

# Example: mixing number words, fractions and scales

```rust
use timelength::{parse, Locale};
use timelength::model::{FailureFlag, ParserSettings};

let result = parse(
    "twenty-five hundred minutes and half of one million two hundred and fifty-six thousand seconds",
    &Locale::english(),
    &ParserSettings::default(),
    FailureFlag::NONE,
);

assert!(result.success);
assert_eq!(result.seconds, 778_000.0);
```

# Example: strict mode rejects what tolerant mode lets slide

A trailing number with no scale attached is always recorded as a
`LONELY_VALUE`; whether that makes the whole parse fail depends on the
strictness mask you pass in.

```rust
use timelength::{parse, Locale};
use timelength::model::{FailureFlag, ParserSettings};

let tolerant = parse("5 seconds 3", &Locale::english(), &ParserSettings::default(), FailureFlag::NONE);
assert!(tolerant.success);

let strict = parse("5 seconds 3", &Locale::english(), &ParserSettings::default(), FailureFlag::ALL);
assert!(!strict.success);
```

# Example: the stateful `Query` wrapper

For callers who want to hold on to the input, the locale and the result
together (and reparse after tweaking a setting), [`Query`] is a thin
wrapper over [`parse`].

```rust
use timelength::{Query, Locale};

let query = Query::new("2:30", Locale::english());
assert_eq!(query.result.seconds, 150.0);
```

# Locales

Two builtin locales ship with this crate: [`Locale::english`] and
[`Locale::spanish`]. Both are stateless, so they can be constructed
freely and shared across threads. See the [`locale`] module to add a new
one.
*/

mod combiner;
mod diacritics;
mod lexer;
pub mod convert;
pub mod error;
pub mod locale;
pub mod model;
pub mod query;
pub mod result;

pub use error::ConfigError;
pub use locale::{Locale, LocaleTable};
pub use model::{FailureFlag, ParserSettings};
pub use query::Query;
pub use result::{Invalid, ParsedResult, Valid};

/// Parse `content` against `locale`, returning a fresh [`ParsedResult`].
///
/// This is a pure function: it never mutates `locale`, and calling it
/// twice with the same arguments produces byte-identical output. No
/// panics, no I/O, no global state - the token stream and combiner
/// accumulators live entirely on this call's stack for its duration.
pub fn parse(
    content: &str,
    locale: &dyn LocaleTable,
    settings: &ParserSettings,
    mask: FailureFlag,
) -> ParsedResult {
    let mut result = ParsedResult::new();
    parse_into(content, locale, settings, mask, &mut result);
    result
}

/// Same as [`parse`], but writes into a caller-supplied, already-reset
/// [`ParsedResult`]. [`Query::reparse`] uses this to avoid reallocating
/// its `valid`/`invalid` vectors on every call.
pub fn parse_into(
    content: &str,
    locale: &dyn LocaleTable,
    settings: &ParserSettings,
    mask: FailureFlag,
    result: &mut ParsedResult,
) {
    let tokens = lexer::lex(content, locale, settings);
    combiner::combine(&tokens, locale, settings, result);
    result.finalize(mask);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AssumeSeconds;

    #[test]
    fn idempotent_on_identical_input() {
        let settings = ParserSettings::default();
        let a = parse("3 hours 5 minutes 30 seconds", &Locale::english(), &settings, FailureFlag::NONE);
        let b = parse("3 hours 5 minutes 30 seconds", &Locale::english(), &settings, FailureFlag::NONE);
        assert_eq!(a.seconds, b.seconds);
        assert_eq!(a.valid.len(), b.valid.len());
    }

    #[test]
    fn permuting_segmentor_separated_clauses_preserves_total() {
        let settings = ParserSettings::default();
        let a = parse("3 hours, 5 minutes, 30 seconds", &Locale::english(), &settings, FailureFlag::NONE);
        let b = parse("30 seconds, 5 minutes, 3 hours", &Locale::english(), &settings, FailureFlag::NONE);
        assert_eq!(a.seconds, b.seconds);
    }

    #[test]
    fn diacritic_insensitive() {
        let settings = ParserSettings::default();
        let plain = parse("2 anos", &Locale::spanish(), &settings, FailureFlag::NONE);
        let accented = parse("2 a\u{f1}os", &Locale::spanish(), &settings, FailureFlag::NONE);
        assert_eq!(plain.seconds, accented.seconds);
    }

    #[test]
    fn strictness_is_monotone() {
        let settings = ParserSettings::default();
        let narrow = FailureFlag::LONELY_VALUE;
        let wide = FailureFlag::ALL;
        let narrow_result = parse("5 seconds 3", &Locale::english(), &settings, narrow);
        let wide_result = parse("5 seconds 3", &Locale::english(), &settings, wide);
        if wide_result.success {
            assert!(narrow_result.success);
        }
    }

    #[test]
    fn assume_seconds_never_always_flags_trailing_value() {
        let mut settings = ParserSettings::default();
        settings.assume_seconds = AssumeSeconds::Never;
        let result = parse("45", &Locale::english(), &settings, FailureFlag::NONE);
        assert!(!result.success);
        assert!(result.invalid.iter().any(|i| i.flags.contains(FailureFlag::LONELY_VALUE)));
    }

    #[test]
    fn seconds_equals_sum_of_valid_pairs() {
        let settings = ParserSettings::default();
        let result = parse("1 hour, 5 minutes, and 30 seconds & 7ms", &Locale::english(), &settings, FailureFlag::NONE);
        let recomputed: f64 = result.valid.iter().map(|v| v.value * v.scale.seconds_per_unit).sum();
        assert_eq!(result.seconds, recomputed);
    }
}
