//! Parking requirement parsing.
//!
//! Districts express parking rules as free text: `"2 spaces per unit"`,
//! `"1 space per 100m²"`, sometimes just `"10"`. This module extracts a
//! numeric requirement from whichever form appears. An unmatchable rule
//! parses to `None`, which callers must treat as "cannot verify", never
//! as "zero spaces required".

use regex::Regex;
use std::sync::LazyLock;

/// Regex for per-unit rules (e.g. "2 spaces per unit", "1 space per 2 units").
static PER_UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*spaces?\s+per\s+(?:(\d+(?:\.\d+)?)\s*)?units?")
        .expect("valid regex")
});

/// Regex for per-area rules (e.g. "1 space per 100m²", "1 space per 50 m2").
static PER_AREA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*spaces?\s+per\s+(\d+(?:\.\d+)?)\s*m(?:²|\^?2)")
        .expect("valid regex")
});

/// Regex for a bare integer anywhere in the rule text.
static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Extracts a numeric parking requirement from a district's rule text.
///
/// Rules are tried in priority order:
/// 1. `"N space(s) per M unit(s)"` → `N / M` spaces per unit (the caller
///    scales by the unit count);
/// 2. `"N space(s) per M m²"` → total spaces for `construction_area_m2`
///    when supplied, otherwise fall through;
/// 3. the first bare integer anywhere in the text;
/// 4. `None` when nothing matches or the input is missing/empty.
#[must_use]
pub fn parse_parking_requirement(
    text: Option<&str>,
    construction_area_m2: Option<f64>,
) -> Option<f64> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }
    if let Some(rate) = per_unit_rate(text) {
        return Some(rate);
    }
    if let (Some(rate), Some(area)) = (per_area_rate(text), construction_area_m2) {
        return Some(rate * area);
    }
    first_integer(text)
}

/// Extracts the per-unit rate when the rule is of the per-unit form.
pub(crate) fn per_unit_rate(text: &str) -> Option<f64> {
    let caps = PER_UNIT_RE.captures(text)?;
    let spaces: f64 = caps[1].parse().ok()?;
    let per_units: f64 = caps
        .get(2)
        .map_or(Ok(1.0), |group| group.as_str().parse())
        .ok()?;
    if per_units <= 0.0 {
        return None;
    }
    Some(spaces / per_units)
}

fn per_area_rate(text: &str) -> Option<f64> {
    let caps = PER_AREA_RE.captures(text)?;
    let spaces: f64 = caps[1].parse().ok()?;
    let per_area: f64 = caps[2].parse().ok()?;
    if per_area <= 0.0 {
        return None;
    }
    Some(spaces / per_area)
}

fn first_integer(text: &str) -> Option<f64> {
    INTEGER_RE.find(text).and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_per_unit_rule() {
        assert_eq!(parse_parking_requirement(Some("2 spaces per unit"), None), Some(2.0));
    }

    #[test]
    fn parses_per_unit_rule_with_divisor() {
        assert_eq!(
            parse_parking_requirement(Some("1 space per 2 units"), None),
            Some(0.5)
        );
    }

    #[test]
    fn per_unit_rule_is_case_insensitive() {
        assert_eq!(
            parse_parking_requirement(Some("2 Spaces Per Unit"), None),
            Some(2.0)
        );
    }

    #[test]
    fn parses_per_area_rule_with_area() {
        assert_eq!(
            parse_parking_requirement(Some("1 space per 100m²"), Some(250.0)),
            Some(2.5)
        );
    }

    #[test]
    fn parses_per_area_rule_with_ascii_unit() {
        assert_eq!(
            parse_parking_requirement(Some("1 space per 50 m2"), Some(100.0)),
            Some(2.0)
        );
    }

    #[test]
    fn per_area_rule_without_area_falls_back_to_first_integer() {
        assert_eq!(
            parse_parking_requirement(Some("1 space per 100m²"), None),
            Some(1.0)
        );
    }

    #[test]
    fn parses_bare_integer() {
        assert_eq!(parse_parking_requirement(Some("10"), None), Some(10.0));
    }

    #[test]
    fn finds_integer_inside_prose() {
        assert_eq!(
            parse_parking_requirement(Some("minimum 12 spaces at grade"), None),
            Some(12.0)
        );
    }

    #[test]
    fn unmatchable_text_is_none() {
        assert_eq!(parse_parking_requirement(Some("see appendix"), None), None);
    }

    #[test]
    fn missing_text_is_none() {
        assert_eq!(parse_parking_requirement(None, Some(250.0)), None);
    }

    #[test]
    fn empty_text_is_none() {
        assert_eq!(parse_parking_requirement(Some("   "), None), None);
    }

    #[test]
    fn zero_divisor_falls_back() {
        // "per 0 units" would divide by zero; treat the rate as
        // unparseable and fall through to the bare-integer rule.
        assert_eq!(
            parse_parking_requirement(Some("2 spaces per 0 units"), None),
            Some(2.0)
        );
    }
}
