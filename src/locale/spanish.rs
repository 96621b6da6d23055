use phf::{phf_map, phf_set, Map, Set};

use super::LocaleTable;
use crate::model::{canonical, Numeral, NumeralKind, Scale};

#[derive(Debug, Clone, Copy, Default)]
pub struct Spanish {}

static SCALES: &[Scale] = &[
    Scale {
        seconds_per_unit: canonical::MILLISECOND,
        singular: "milisegundo",
        plural: "milisegundos",
        terms: &["ms", "milisegundo", "milisegundos"],
    },
    Scale {
        seconds_per_unit: canonical::SECOND,
        singular: "segundo",
        plural: "segundos",
        terms: &["s", "segundo", "segundos", "seg", "segs"],
    },
    Scale {
        seconds_per_unit: canonical::MINUTE,
        singular: "minuto",
        plural: "minutos",
        terms: &["m", "minuto", "minutos", "min", "mins"],
    },
    Scale {
        seconds_per_unit: canonical::HOUR,
        singular: "hora",
        plural: "horas",
        terms: &["h", "hora", "horas", "hr", "hrs"],
    },
    Scale {
        seconds_per_unit: canonical::DAY,
        singular: "dia",
        plural: "dias",
        terms: &["d", "dia", "dias"],
    },
    Scale {
        seconds_per_unit: canonical::WEEK,
        singular: "semana",
        plural: "semanas",
        terms: &["semana", "semanas"],
    },
    Scale {
        seconds_per_unit: canonical::MONTH,
        singular: "mes",
        plural: "meses",
        terms: &["mes", "meses"],
    },
    Scale {
        seconds_per_unit: canonical::YEAR,
        singular: "ano",
        plural: "anos",
        terms: &["ano", "anos"],
    },
    Scale {
        seconds_per_unit: canonical::DECADE,
        singular: "decada",
        plural: "decadas",
        terms: &["decada", "decadas"],
    },
    Scale {
        seconds_per_unit: canonical::CENTURY,
        singular: "siglo",
        plural: "siglos",
        terms: &["c", "siglo", "siglos"],
    },
];

static SCALE_TERMS: Map<&'static str, usize> = phf_map! {
    "ms" => 0, "milisegundo" => 0, "milisegundos" => 0,
    "s" => 1, "segundo" => 1, "segundos" => 1, "seg" => 1, "segs" => 1,
    "m" => 2, "minuto" => 2, "minutos" => 2, "min" => 2, "mins" => 2,
    "h" => 3, "hora" => 3, "horas" => 3, "hr" => 3, "hrs" => 3,
    "d" => 4, "dia" => 4, "dias" => 4,
    "semana" => 5, "semanas" => 5,
    "mes" => 6, "meses" => 6,
    "ano" => 7, "anos" => 7,
    "decada" => 8, "decadas" => 8,
    "c" => 9, "siglo" => 9, "siglos" => 9,
};

static NUMERALS: &[Numeral] = &[
    Numeral { name: "cero", kind: NumeralKind::Digit, value: 0.0, terms: &["cero"] },
    Numeral { name: "uno", kind: NumeralKind::Digit, value: 1.0, terms: &["uno", "un", "una"] },
    Numeral { name: "dos", kind: NumeralKind::Digit, value: 2.0, terms: &["dos"] },
    Numeral { name: "tres", kind: NumeralKind::Digit, value: 3.0, terms: &["tres"] },
    Numeral { name: "cuatro", kind: NumeralKind::Digit, value: 4.0, terms: &["cuatro"] },
    Numeral { name: "cinco", kind: NumeralKind::Digit, value: 5.0, terms: &["cinco"] },
    Numeral { name: "seis", kind: NumeralKind::Digit, value: 6.0, terms: &["seis"] },
    Numeral { name: "siete", kind: NumeralKind::Digit, value: 7.0, terms: &["siete"] },
    Numeral { name: "ocho", kind: NumeralKind::Digit, value: 8.0, terms: &["ocho"] },
    Numeral { name: "nueve", kind: NumeralKind::Digit, value: 9.0, terms: &["nueve"] },
    Numeral { name: "diez", kind: NumeralKind::Teen, value: 10.0, terms: &["diez"] },
    Numeral { name: "once", kind: NumeralKind::Teen, value: 11.0, terms: &["once"] },
    Numeral { name: "doce", kind: NumeralKind::Teen, value: 12.0, terms: &["doce"] },
    Numeral { name: "trece", kind: NumeralKind::Teen, value: 13.0, terms: &["trece"] },
    Numeral { name: "catorce", kind: NumeralKind::Teen, value: 14.0, terms: &["catorce"] },
    Numeral { name: "quince", kind: NumeralKind::Teen, value: 15.0, terms: &["quince"] },
    Numeral { name: "dieciseis", kind: NumeralKind::Teen, value: 16.0, terms: &["dieciseis"] },
    Numeral { name: "diecisiete", kind: NumeralKind::Teen, value: 17.0, terms: &["diecisiete"] },
    Numeral { name: "dieciocho", kind: NumeralKind::Teen, value: 18.0, terms: &["dieciocho"] },
    Numeral { name: "diecinueve", kind: NumeralKind::Teen, value: 19.0, terms: &["diecinueve"] },
    Numeral { name: "veinte", kind: NumeralKind::Ten, value: 20.0, terms: &["veinte"] },
    Numeral { name: "veintiuno", kind: NumeralKind::Digit, value: 21.0, terms: &["veintiuno", "veintiun"] },
    Numeral { name: "veintidos", kind: NumeralKind::Digit, value: 22.0, terms: &["veintidos"] },
    Numeral { name: "veintitres", kind: NumeralKind::Digit, value: 23.0, terms: &["veintitres"] },
    Numeral { name: "veinticuatro", kind: NumeralKind::Digit, value: 24.0, terms: &["veinticuatro"] },
    Numeral { name: "veinticinco", kind: NumeralKind::Digit, value: 25.0, terms: &["veinticinco"] },
    Numeral { name: "veintiseis", kind: NumeralKind::Digit, value: 26.0, terms: &["veintiseis"] },
    Numeral { name: "veintisiete", kind: NumeralKind::Digit, value: 27.0, terms: &["veintisiete"] },
    Numeral { name: "veintiocho", kind: NumeralKind::Digit, value: 28.0, terms: &["veintiocho"] },
    Numeral { name: "veintinueve", kind: NumeralKind::Digit, value: 29.0, terms: &["veintinueve"] },
    Numeral { name: "treinta", kind: NumeralKind::Ten, value: 30.0, terms: &["treinta"] },
    Numeral { name: "cuarenta", kind: NumeralKind::Ten, value: 40.0, terms: &["cuarenta"] },
    Numeral { name: "cincuenta", kind: NumeralKind::Ten, value: 50.0, terms: &["cincuenta"] },
    Numeral { name: "sesenta", kind: NumeralKind::Ten, value: 60.0, terms: &["sesenta"] },
    Numeral { name: "setenta", kind: NumeralKind::Ten, value: 70.0, terms: &["setenta"] },
    Numeral { name: "ochenta", kind: NumeralKind::Ten, value: 80.0, terms: &["ochenta"] },
    Numeral { name: "noventa", kind: NumeralKind::Ten, value: 90.0, terms: &["noventa"] },
    Numeral { name: "cien", kind: NumeralKind::Hundred, value: 100.0, terms: &["cien", "ciento"] },
    Numeral { name: "mil", kind: NumeralKind::Thousand, value: 1_000.0, terms: &["mil"] },
    Numeral { name: "millon", kind: NumeralKind::Thousand, value: 1_000_000.0, terms: &["millon", "millones"] },
    Numeral {
        name: "millardo",
        kind: NumeralKind::Thousand,
        value: 1_000_000_000.0,
        terms: &["millardo", "millardos"],
    },
    Numeral { name: "medio", kind: NumeralKind::Multiplier, value: 0.5, terms: &["medio", "mitad"] },
    Numeral { name: "tercio", kind: NumeralKind::Multiplier, value: 1.0 / 3.0, terms: &["tercio"] },
    Numeral { name: "cuarto", kind: NumeralKind::Multiplier, value: 0.25, terms: &["cuarto"] },
    Numeral { name: "de", kind: NumeralKind::Operator, value: 0.0, terms: &["de"] },
];

static NUMERAL_TERMS: Map<&'static str, usize> = phf_map! {
    "cero" => 0,
    "uno" => 1, "un" => 1, "una" => 1,
    "dos" => 2,
    "tres" => 3,
    "cuatro" => 4,
    "cinco" => 5,
    "seis" => 6,
    "siete" => 7,
    "ocho" => 8,
    "nueve" => 9,
    "diez" => 10,
    "once" => 11,
    "doce" => 12,
    "trece" => 13,
    "catorce" => 14,
    "quince" => 15,
    "dieciseis" => 16,
    "diecisiete" => 17,
    "dieciocho" => 18,
    "diecinueve" => 19,
    "veinte" => 20,
    "veintiuno" => 21, "veintiun" => 21,
    "veintidos" => 22,
    "veintitres" => 23,
    "veinticuatro" => 24,
    "veinticinco" => 25,
    "veintiseis" => 26,
    "veintisiete" => 27,
    "veintiocho" => 28,
    "veintinueve" => 29,
    "treinta" => 30,
    "cuarenta" => 31,
    "cincuenta" => 32,
    "sesenta" => 33,
    "setenta" => 34,
    "ochenta" => 35,
    "noventa" => 36,
    "cien" => 37, "ciento" => 37,
    "mil" => 38,
    "millon" => 39, "millones" => 39,
    "millardo" => 40, "millardos" => 40,
    "medio" => 41, "mitad" => 41,
    "tercio" => 42,
    "cuarto" => 43,
    "de" => 44,
};

static CONNECTORS: Set<&'static str> = phf_set! { " ", "-", "\t", "+" };
static SEGMENTORS: Set<&'static str> = phf_set! { ",", "&", "y" };
static DECIMAL_DELIMITERS: Set<&'static str> = phf_set! { "." };
static THOUSAND_DELIMITERS: Set<&'static str> = phf_set! { "," };
static HHMMSS_DELIMITERS: Set<&'static str> = phf_set! { ":" };
static ALLOWED_TERMS: Set<&'static str> = phf_set! { "/" };
static SPECIALS: Set<&'static str> = phf_set! {
    " ", "-", "\t", "+", ",", "&", ".", ":", "/",
};

impl LocaleTable for Spanish {
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
        let es = Spanish::default();
        for scale in SCALES {
            for term in scale.terms {
                assert_eq!(es.lookup_scale(term), Some(scale), "term {term}");
            }
        }
    }

    #[test]
    fn y_is_a_segmentor() {
        let es = Spanish::default();
        assert!(es.is_segmentor("y"));
    }

    #[test]
    fn y_does_not_also_resolve_as_a_scale_term() {
        let es = Spanish::default();
        assert!(es.lookup_scale("y").is_none());
    }

    #[test]
    fn medio_and_mitad_are_the_same_multiplier() {
        let es = Spanish::default();
        let medio = es.lookup_numeral("medio").unwrap();
        let mitad = es.lookup_numeral("mitad").unwrap();
        assert_eq!(medio.name, mitad.name);
        assert_eq!(medio.value, 0.5);
    }
}
