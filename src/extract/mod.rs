//! Regex extraction of emails, dates and numbers from raw (unnormalized) text.
//!
//! Deliberately simple patterns; this is not PII detection.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::types::{ExtractedPatterns, ExtractionSpan};

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();
    static ref DATE_ISO: Regex = Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap();
    static ref DATE_SLASH: Regex = Regex::new(r"\b\d{1,2}/\d{1,2}/\d{4}\b").unwrap();
    static ref NUMBER: Regex = Regex::new(r"\b\d+(?:\.\d+)?\b").unwrap();
}

fn spans(pattern: &Regex, text: &str) -> Vec<ExtractionSpan> {
    pattern
        .find_iter(text)
        .map(|m| ExtractionSpan {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
        })
        .collect()
}

pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// ISO (`YYYY-MM-DD`) and day-first (`DD/MM/YYYY`) dates in text order.
/// Where the two patterns overlap the earlier match wins.
pub fn date_spans(text: &str) -> Vec<ExtractionSpan> {
    let mut all = spans(&DATE_ISO, text);
    all.extend(spans(&DATE_SLASH, text));
    all.sort_by_key(|s| (s.start, s.end));

    let mut dates: Vec<ExtractionSpan> = Vec::with_capacity(all.len());
    for span in all {
        if dates.last().map_or(true, |last| !last.overlaps(&span)) {
            dates.push(span);
        }
    }
    dates
}

pub fn extract_dates(text: &str) -> Vec<String> {
    date_spans(text).into_iter().map(|s| s.text).collect()
}

/// Digit runs (with an optional decimal part) that do not touch any date.
pub fn extract_numbers(text: &str, dates: &[ExtractionSpan]) -> Vec<String> {
    spans(&NUMBER, text)
        .into_iter()
        .filter(|n| !dates.iter().any(|d| d.overlaps(n)))
        .map(|n| n.text)
        .collect()
}

/// All three lists for one raw text.
pub fn extract_patterns(text: &str) -> ExtractedPatterns {
    let dates = date_spans(text);
    let patterns = ExtractedPatterns {
        emails: extract_emails(text),
        numbers: extract_numbers(text, &dates),
        dates: dates.into_iter().map(|s| s.text).collect(),
    };
    debug!(
        "Extracted {} emails, {} dates, {} numbers",
        patterns.emails.len(), patterns.dates.len(), patterns.numbers.len()
    );
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_parts_are_not_numbers() {
        let found = extract_patterns("التاريخ 2024-05-01 والعدد 42");
        assert_eq!(found.dates, vec!["2024-05-01"]);
        assert_eq!(found.numbers, vec!["42"]);
        assert!(found.emails.is_empty());
    }

    #[test]
    fn test_both_date_formats_in_text_order() {
        let text = "من 09/10/2025 إلى 2025-12-31 ثم 1/2/2026";
        assert_eq!(extract_dates(text), vec!["09/10/2025", "2025-12-31", "1/2/2026"]);
        assert!(extract_numbers(text, &date_spans(text)).is_empty());
    }

    #[test]
    fn test_emails() {
        let text = "تواصل معنا على privacy@example.com أو info.team+ar@mail.example.org.";
        assert_eq!(
            extract_emails(text),
            vec!["privacy@example.com", "info.team+ar@mail.example.org"]
        );
    }

    #[test]
    fn test_numbers_with_decimals() {
        let found = extract_patterns("عدد الموظفين 120 والنسبة 12.5 بتاريخ 2025-09-09.");
        assert_eq!(found.numbers, vec!["120", "12.5"]);
        assert_eq!(found.dates, vec!["2025-09-09"]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_patterns(""), ExtractedPatterns::default());
        assert_eq!(extract_patterns("   "), ExtractedPatterns::default());
    }

    #[test]
    fn test_span_overlap() {
        let a = ExtractionSpan { start: 0, end: 10, text: String::new() };
        let b = ExtractionSpan { start: 10, end: 12, text: String::new() };
        let c = ExtractionSpan { start: 9, end: 12, text: String::new() };
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
    }
}
