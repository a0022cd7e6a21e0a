//! Numeric coercion and display helpers shared by every rating formula.

use serde::Serialize;

use crate::spl::types::StatValue;

/// Placeholder printed for missing values.
pub const MISSING_DISPLAY: &str = "—";

/// Coerce a feed value to a finite number, or `fallback` when it is
/// missing or not numeric.
pub fn safe_number(value: Option<&StatValue>, fallback: f64) -> f64 {
    value.and_then(StatValue::as_f64).unwrap_or(fallback)
}

/// Render a feed value for display. Non-integral numbers get two decimals.
pub fn display_string(value: Option<&StatValue>, fallback: &str) -> String {
    match value {
        None => fallback.to_string(),
        Some(StatValue::Number(n)) => display_number(*n),
        Some(StatValue::Text(s)) => s.clone(),
        Some(StatValue::Flag(b)) => b.to_string(),
        Some(StatValue::Other(v)) => v.to_string(),
    }
}

/// Integral values print bare, everything else to two decimals.
pub fn display_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{}", n)
    } else {
        format!("{:.2}", n)
    }
}

/// Round to the cent, halves upward.
pub fn round2(x: f64) -> f64 {
    (x * 100.0 + 0.5).floor() / 100.0
}

/// A bowler's best single-match figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BestSpell {
    pub wickets: i64,
    pub runs: i64,
}

/// Parse a best-spell string such as `"4-23"` or `"3/12"`.
///
/// Anything unparseable degrades to zero; `"0-0"` is the feed's explicit
/// "no data" marker.
pub fn parse_best_spell(spell: Option<&StatValue>) -> BestSpell {
    match spell.and_then(StatValue::as_str) {
        Some(text) => parse_spell_text(text),
        None => BestSpell::default(),
    }
}

fn parse_spell_text(text: &str) -> BestSpell {
    let s = text.trim();
    if s.is_empty() || s == "0-0" {
        return BestSpell::default();
    }

    let (wickets, runs) = if s.contains('-') {
        let mut parts = s.split('-');
        (parts.next(), parts.next())
    } else if s.contains('/') {
        let mut parts = s.split('/');
        (parts.next(), parts.next())
    } else {
        (Some(s), None)
    };

    BestSpell {
        wickets: wickets.and_then(parse_int_prefix).unwrap_or(0),
        runs: runs.and_then(parse_int_prefix).unwrap_or(0),
    }
}

/// Leading base-10 integer of `s`, ignoring leading whitespace and any
/// trailing garbage (`"23 runs"` is 23).
fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(s: &str) -> StatValue {
        StatValue::from(s)
    }

    #[test]
    fn test_safe_number() {
        assert_eq!(safe_number(Some(&StatValue::Number(7.0)), 0.0), 7.0);
        assert_eq!(safe_number(Some(&text("12")), 0.0), 12.0);
        assert_eq!(safe_number(Some(&text("abc")), 3.0), 3.0);
        assert_eq!(safe_number(None, 5.0), 5.0);
        assert_eq!(safe_number(Some(&StatValue::Other(json!({}))), 0.0), 0.0);
    }

    #[test]
    fn test_display_string() {
        assert_eq!(display_string(None, MISSING_DISPLAY), "—");
        assert_eq!(display_string(Some(&StatValue::Number(45.0)), "-"), "45");
        assert_eq!(display_string(Some(&StatValue::Number(31.256)), "-"), "31.26");
        assert_eq!(display_string(Some(&text("80*")), "-"), "80*");
        assert_eq!(display_string(Some(&StatValue::Flag(false)), "-"), "false");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.345678), 2.35);
        assert_eq!(round2(-2.345678), -2.35);
        assert_eq!(round2(-0.125), -0.12);
        assert_eq!(round2(740.0000000000001), 740.0);
    }

    #[test]
    fn test_parse_best_spell_dash_and_slash() {
        assert_eq!(
            parse_best_spell(Some(&text("5-23"))),
            BestSpell { wickets: 5, runs: 23 }
        );
        assert_eq!(
            parse_best_spell(Some(&text("3/12"))),
            BestSpell { wickets: 3, runs: 12 }
        );
    }

    #[test]
    fn test_parse_best_spell_empty_cases() {
        assert_eq!(parse_best_spell(Some(&text("0-0"))), BestSpell::default());
        assert_eq!(parse_best_spell(Some(&text(""))), BestSpell::default());
        assert_eq!(parse_best_spell(Some(&text("   "))), BestSpell::default());
        assert_eq!(parse_best_spell(None), BestSpell::default());
        assert_eq!(
            parse_best_spell(Some(&StatValue::Number(4.0))),
            BestSpell::default()
        );
    }

    #[test]
    fn test_parse_best_spell_malformed() {
        assert_eq!(
            parse_best_spell(Some(&text("4"))),
            BestSpell { wickets: 4, runs: 0 }
        );
        assert_eq!(
            parse_best_spell(Some(&text("x-y"))),
            BestSpell { wickets: 0, runs: 0 }
        );
        assert_eq!(
            parse_best_spell(Some(&text(" 2 - 17 runs"))),
            BestSpell { wickets: 2, runs: 17 }
        );
        assert_eq!(
            parse_best_spell(Some(&text("-9"))),
            BestSpell { wickets: 0, runs: 9 }
        );
        assert_eq!(
            parse_best_spell(Some(&text("99999999999999999999999-1"))),
            BestSpell {
                wickets: i64::MAX,
                runs: 1
            }
        );
    }
}
