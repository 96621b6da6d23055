use phf::{phf_map, phf_set, Map, Set};

use super::LocaleTable;
use crate::model::{canonical, Numeral, NumeralKind, Scale};

#[derive(Debug, Clone, Copy, Default)]
pub struct English {}

static SCALES: &[Scale] = &[
    Scale {
        seconds_per_unit: canonical::MILLISECOND,
        singular: "millisecond",
        plural: "milliseconds",
        terms: &[
            "ms", "millisecond", "milliseconds", "mil", "mils", "milsec", "milsecs",
        ],
    },
    Scale {
        seconds_per_unit: canonical::SECOND,
        singular: "second",
        plural: "seconds",
        terms: &["s", "second", "seconds", "sc", "scs", "sec", "secs"],
    },
    Scale {
        seconds_per_unit: canonical::MINUTE,
        singular: "minute",
        plural: "minutes",
        terms: &["m", "minute", "minutes", "mn", "mns", "min", "mins"],
    },
    Scale {
        seconds_per_unit: canonical::HOUR,
        singular: "hour",
        plural: "hours",
        terms: &["h", "hour", "hours", "hr", "hrs"],
    },
    Scale {
        seconds_per_unit: canonical::DAY,
        singular: "day",
        plural: "days",
        terms: &["d", "day", "days", "dy", "dys"],
    },
    Scale {
        seconds_per_unit: canonical::WEEK,
        singular: "week",
        plural: "weeks",
        terms: &["w", "week", "weeks", "wk", "wks"],
    },
    Scale {
        seconds_per_unit: canonical::MONTH,
        singular: "month",
        plural: "months",
        terms: &["month", "months", "mth", "mths", "mnth", "mnths"],
    },
    Scale {
        seconds_per_unit: canonical::YEAR,
        singular: "year",
        plural: "years",
        terms: &["y", "year", "years", "yr", "yrs"],
    },
    Scale {
        seconds_per_unit: canonical::DECADE,
        singular: "decade",
        plural: "decades",
        terms: &["decade", "decades", "dc", "dcs", "dec", "decs"],
    },
    Scale {
        seconds_per_unit: canonical::CENTURY,
        singular: "century",
        plural: "centuries",
        terms: &["c", "century", "centuries", "cn", "cns", "ct", "cts", "cent", "cents"],
    },
];

static SCALE_TERMS: Map<&'static str, usize> = phf_map! {
    "ms" => 0, "millisecond" => 0, "milliseconds" => 0, "mil" => 0, "mils" => 0,
    "milsec" => 0, "milsecs" => 0,
    "s" => 1, "second" => 1, "seconds" => 1, "sc" => 1, "scs" => 1, "sec" => 1, "secs" => 1,
    "m" => 2, "minute" => 2, "minutes" => 2, "mn" => 2, "mns" => 2, "min" => 2, "mins" => 2,
    "h" => 3, "hour" => 3, "hours" => 3, "hr" => 3, "hrs" => 3,
    "d" => 4, "day" => 4, "days" => 4, "dy" => 4, "dys" => 4,
    "w" => 5, "week" => 5, "weeks" => 5, "wk" => 5, "wks" => 5,
    "month" => 6, "months" => 6, "mth" => 6, "mths" => 6, "mnth" => 6, "mnths" => 6,
    "y" => 7, "year" => 7, "years" => 7, "yr" => 7, "yrs" => 7,
    "decade" => 8, "decades" => 8, "dc" => 8, "dcs" => 8, "dec" => 8, "decs" => 8,
    "c" => 9, "century" => 9, "centuries" => 9, "cn" => 9, "cns" => 9, "ct" => 9, "cts" => 9,
    "cent" => 9, "cents" => 9,
};

static NUMERALS: &[Numeral] = &[
    Numeral { name: "zero", kind: NumeralKind::Digit, value: 0.0, terms: &["zero"] },
    Numeral { name: "one", kind: NumeralKind::Digit, value: 1.0, terms: &["one"] },
    Numeral { name: "two", kind: NumeralKind::Digit, value: 2.0, terms: &["two"] },
    Numeral { name: "three", kind: NumeralKind::Digit, value: 3.0, terms: &["three"] },
    Numeral { name: "four", kind: NumeralKind::Digit, value: 4.0, terms: &["four"] },
    Numeral { name: "five", kind: NumeralKind::Digit, value: 5.0, terms: &["five"] },
    Numeral { name: "six", kind: NumeralKind::Digit, value: 6.0, terms: &["six"] },
    Numeral { name: "seven", kind: NumeralKind::Digit, value: 7.0, terms: &["seven"] },
    Numeral { name: "eight", kind: NumeralKind::Digit, value: 8.0, terms: &["eight"] },
    Numeral { name: "nine", kind: NumeralKind::Digit, value: 9.0, terms: &["nine"] },
    Numeral { name: "ten", kind: NumeralKind::Teen, value: 10.0, terms: &["ten"] },
    Numeral { name: "eleven", kind: NumeralKind::Teen, value: 11.0, terms: &["eleven"] },
    Numeral { name: "twelve", kind: NumeralKind::Teen, value: 12.0, terms: &["twelve"] },
    Numeral { name: "thirteen", kind: NumeralKind::Teen, value: 13.0, terms: &["thirteen"] },
    Numeral { name: "fourteen", kind: NumeralKind::Teen, value: 14.0, terms: &["fourteen"] },
    Numeral { name: "fifteen", kind: NumeralKind::Teen, value: 15.0, terms: &["fifteen"] },
    Numeral { name: "sixteen", kind: NumeralKind::Teen, value: 16.0, terms: &["sixteen"] },
    Numeral { name: "seventeen", kind: NumeralKind::Teen, value: 17.0, terms: &["seventeen"] },
    Numeral { name: "eighteen", kind: NumeralKind::Teen, value: 18.0, terms: &["eighteen"] },
    Numeral { name: "nineteen", kind: NumeralKind::Teen, value: 19.0, terms: &["nineteen"] },
    Numeral { name: "twenty", kind: NumeralKind::Ten, value: 20.0, terms: &["twenty"] },
    Numeral { name: "thirty", kind: NumeralKind::Ten, value: 30.0, terms: &["thirty"] },
    Numeral { name: "forty", kind: NumeralKind::Ten, value: 40.0, terms: &["forty", "fourty"] },
    Numeral { name: "fifty", kind: NumeralKind::Ten, value: 50.0, terms: &["fifty"] },
    Numeral { name: "sixty", kind: NumeralKind::Ten, value: 60.0, terms: &["sixty"] },
    Numeral { name: "seventy", kind: NumeralKind::Ten, value: 70.0, terms: &["seventy"] },
    Numeral { name: "eighty", kind: NumeralKind::Ten, value: 80.0, terms: &["eighty"] },
    Numeral { name: "ninety", kind: NumeralKind::Ten, value: 90.0, terms: &["ninety"] },
    Numeral { name: "hundred", kind: NumeralKind::Hundred, value: 100.0, terms: &["hundred", "hundreds"] },
    Numeral { name: "thousand", kind: NumeralKind::Thousand, value: 1_000.0, terms: &["thousand", "thousands"] },
    Numeral { name: "million", kind: NumeralKind::Thousand, value: 1_000_000.0, terms: &["million", "millions"] },
    Numeral { name: "billion", kind: NumeralKind::Thousand, value: 1_000_000_000.0, terms: &["billion", "billions"] },
    Numeral { name: "half", kind: NumeralKind::Multiplier, value: 0.5, terms: &["half"] },
    Numeral { name: "third", kind: NumeralKind::Multiplier, value: 1.0 / 3.0, terms: &["third"] },
    Numeral { name: "quarter", kind: NumeralKind::Multiplier, value: 0.25, terms: &["quarter"] },
    Numeral { name: "of", kind: NumeralKind::Operator, value: 0.0, terms: &["of"] },
    Numeral { name: "a", kind: NumeralKind::Operator, value: 1.0, terms: &["a", "an"] },
];

static NUMERAL_TERMS: Map<&'static str, usize> = phf_map! {
    "zero" => 0,
    "one" => 1,
    "two" => 2,
    "three" => 3,
    "four" => 4,
    "five" => 5,
    "six" => 6,
    "seven" => 7,
    "eight" => 8,
    "nine" => 9,
    "ten" => 10,
    "eleven" => 11,
    "twelve" => 12,
    "thirteen" => 13,
    "fourteen" => 14,
    "fifteen" => 15,
    "sixteen" => 16,
    "seventeen" => 17,
    "eighteen" => 18,
    "nineteen" => 19,
    "twenty" => 20,
    "thirty" => 21,
    "forty" => 22,
    "fourty" => 22,
    "fifty" => 23,
    "sixty" => 24,
    "seventy" => 25,
    "eighty" => 26,
    "ninety" => 27,
    "hundred" => 28,
    "hundreds" => 28,
    "thousand" => 29,
    "thousands" => 29,
    "million" => 30,
    "millions" => 30,
    "billion" => 31,
    "billions" => 31,
    "half" => 32,
    "third" => 33,
    "quarter" => 34,
    "of" => 35,
    "a" => 36,
    "an" => 36,
};

static CONNECTORS: Set<&'static str> = phf_set! { " ", "-", "\t", "+", "and" };
static SEGMENTORS: Set<&'static str> = phf_set! { ",", "&" };
static DECIMAL_DELIMITERS: Set<&'static str> = phf_set! { "." };
static THOUSAND_DELIMITERS: Set<&'static str> = phf_set! { "," };
static HHMMSS_DELIMITERS: Set<&'static str> = phf_set! { ":" };
static ALLOWED_TERMS: Set<&'static str> = phf_set! { "/" };
static SPECIALS: Set<&'static str> = phf_set! {
    " ", "-", "\t", "+", ",", "&", ".", ":", "/",
};

impl LocaleTable for English {
    fn scales(&self) -> &'static [Scale] {
        SCALES
    }

    fn numerals(&self) -> &'static [Numeral] {
        NUMERALS
    }

    fn lookup_scale(&self, term: &str) -> Option<&'static Scale> {
        SCALE_TERMS.get(term).map(|&i| &SCALES[i])
    }

    fn lookup_numeral(&self, term: &str) -> Option<&'static Numeral> {
        NUMERAL_TERMS.get(term).map(|&i| &NUMERALS[i])
    }

    fn is_connector(&self, term: &str) -> bool {
        CONNECTORS.contains(term)
    }

    fn is_segmentor(&self, term: &str) -> bool {
        SEGMENTORS.contains(term)
    }

    fn is_decimal_delimiter(&self, term: &str) -> bool {
        DECIMAL_DELIMITERS.contains(term)
    }

    fn is_thousand_delimiter(&self, term: &str) -> bool {
        THOUSAND_DELIMITERS.contains(term)
    }

    fn is_hhmmss_delimiter(&self, term: &str) -> bool {
        HHMMSS_DELIMITERS.contains(term)
    }

    fn is_allowed_term(&self, term: &str) -> bool {
        ALLOWED_TERMS.contains(term)
    }

    fn is_special(&self, term: &str) -> bool {
        SPECIALS.contains(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_scale_term() {
        let en = English::default();
        for scale in SCALES {
            for term in scale.terms {
                assert_eq!(en.lookup_scale(term), Some(scale), "term {term}");
            }
        }
    }

    #[test]
    fn resolves_every_numeral_term() {
        let en = English::default();
        for numeral in NUMERALS {
            for term in numeral.terms {
                let found = en.lookup_numeral(term).expect("term should resolve");
                assert_eq!(found.name, numeral.name);
            }
        }
    }

    #[test]
    fn and_is_a_connector_not_an_operator() {
        let en = English::default();
        assert!(en.is_connector("and"));
        assert!(en.lookup_numeral("and").is_none());
    }
}
