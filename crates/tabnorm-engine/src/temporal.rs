//! Temporal canonicalization: natural-language and structured date/time text
//! rendered to one of the eight fixed output patterns.

use std::sync::LazyLock;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use tabnorm_model::{
    CellValue, EngineError, MutationResult, Result, Table, TemporalPattern,
};

/// Ordinal-word substitutions, applied sequentially by literal substring
/// replacement in exactly this order.
///
/// Because replacement is literal and sequential, nested substrings match
/// first: "twenty-first" becomes "twenty-1st" via the "first" entry before
/// the "twenty-first" entry is ever reached. Downstream classification was
/// tuned against this behavior, so it is preserved as-is.
const ORDINAL_WORDS: [(&str, &str); 42] = [
    ("first", "1st"),
    ("second", "2nd"),
    ("third", "3rd"),
    ("fourth", "4th"),
    ("fifth", "5th"),
    ("sixth", "6th"),
    ("seventh", "7th"),
    ("eighth", "8th"),
    ("ninth", "9th"),
    ("tenth", "10th"),
    ("eleventh", "11th"),
    ("twelfth", "12th"),
    ("thirteenth", "13th"),
    ("fourteenth", "14th"),
    ("fifteenth", "15th"),
    ("sixteenth", "16th"),
    ("seventeenth", "17th"),
    ("eighteenth", "18th"),
    ("nineteenth", "19th"),
    ("twentieth", "20th"),
    ("twenty-first", "21st"),
    ("twenty first", "21st"),
    ("twenty-second", "22nd"),
    ("twenty second", "22nd"),
    ("twenty-third", "23rd"),
    ("twenty third", "23rd"),
    ("twenty-fourth", "24th"),
    ("twenty fourth", "24th"),
    ("twenty-fifth", "25th"),
    ("twenty fifth", "25th"),
    ("twenty-sixth", "26th"),
    ("twenty sixth", "26th"),
    ("twenty-seventh", "27th"),
    ("twenty seventh", "27th"),
    ("twenty-eighth", "28th"),
    ("twenty eighth", "28th"),
    ("twenty-ninth", "29th"),
    ("twenty ninth", "29th"),
    ("thirtieth", "30th"),
    ("thirty-first", "31st"),
    ("thirty first", "31st"),
    ("last", "last"),
];

static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})(?:st|nd|rd|th)\b").expect("valid regex"));

static QUARTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^q([1-4])\s+(\d{4})$").expect("valid regex"));

/// Replaces ordinal words with numerals ("first" -> "1st").
fn substitute_ordinal_words(text: &str) -> String {
    let mut out = text.to_string();
    for (word, numeral) in ORDINAL_WORDS {
        out = out.replace(word, numeral);
    }
    out
}

/// Collapses a lowered phrase to a parse-friendly form: commas become
/// spaces, ordinal suffixes are dropped ("1st" -> "1"), and the filler
/// words "of"/"the" are removed.
fn normalize_phrase(text: &str) -> String {
    let without_commas = text.replace(',', " ");
    let without_suffixes = ORDINAL_SUFFIX.replace_all(&without_commas, "$1");
    without_suffixes
        .split_whitespace()
        .filter(|word| *word != "of" && *word != "the")
        .collect::<Vec<_>>()
        .join(" ")
}

const DATETIME_FORMATS: [&str; 14] = [
    // Lowered input turns the ISO "T" separator into "t".
    "%Y-%m-%dt%H:%M:%S",
    "%Y-%m-%dt%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    // Day-before-month convention: European shapes are tried first.
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d-%b-%Y %H:%M:%S",
    "%d-%b-%Y %H:%M",
    "%d %b %Y %H:%M",
    "%d %B %Y %H:%M",
];

const DATE_FORMATS: [&str; 14] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%Y%m%d",
    "%d-%b-%Y",
    "%d-%B-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%Y-%b-%d",
];

const TIME_FORMATS: [&str; 4] = ["%H:%M:%S", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

const MONTH_YEAR_FORMATS: [&str; 4] = ["%b %Y", "%B %Y", "%m/%Y", "%Y-%m"];

/// Best-effort parse of an ordinal-normalized, lowered phrase.
///
/// Relative words ("yesterday") resolve against `reference`; time-only
/// values are placed on the reference date.
fn parse_flexible(text: &str, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    let cleaned = normalize_phrase(text);
    if cleaned.is_empty() {
        return None;
    }

    match cleaned.as_str() {
        "now" | "today" => return Some(reference),
        "yesterday" => return Some(reference - Duration::days(1)),
        "tomorrow" => return Some(reference + Duration::days(1)),
        _ => {}
    }

    if let Some(caps) = QUARTER.captures(&cleaned) {
        let quarter: u32 = caps[1].parse().ok()?;
        let year: i32 = caps[2].parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, quarter * 3 - 2, 1)?;
        return Some(date.and_time(NaiveTime::MIN));
    }

    for fmt in &DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&cleaned, fmt) {
            return Some(dt);
        }
    }

    for fmt in &DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(&cleaned, fmt) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }

    for fmt in &TIME_FORMATS {
        if let Ok(t) = NaiveTime::parse_from_str(&cleaned, fmt) {
            return Some(reference.date().and_time(t));
        }
    }

    // Year-month shapes need a synthetic day to round-trip through chrono.
    for fmt in &MONTH_YEAR_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(&format!("{cleaned} 1"), &format!("{fmt} %d")) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }

    if cleaned.len() == 4 && cleaned.chars().all(|c| c.is_ascii_digit()) {
        let year: i32 = cleaned.parse().ok()?;
        if (1900..=2100).contains(&year) {
            return NaiveDate::from_ymd_opt(year, 1, 1).map(|d| d.and_time(NaiveTime::MIN));
        }
    }

    None
}

/// Parses one cell's text: lower-case, ordinal-word substitution, then the
/// flexible parser.
fn parse_cell(text: &str, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    let lowered = text.trim().to_lowercase();
    let substituted = substitute_ordinal_words(&lowered);
    parse_flexible(&substituted, reference)
}

/// Rewrites every cell of `column` to `pattern`, using the current local
/// time as the reference for relative expressions.
pub fn format_temporal(
    table: &mut Table,
    column: &str,
    pattern: TemporalPattern,
) -> Result<MutationResult> {
    format_temporal_at(table, column, pattern, Local::now().naive_local())
}

/// As [`format_temporal`], with an explicit reference instant for relative
/// expressions ("yesterday", time-only values).
pub fn format_temporal_at(
    table: &mut Table,
    column: &str,
    pattern: TemporalPattern,
    reference: NaiveDateTime,
) -> Result<MutationResult> {
    let col = table
        .column_mut(column)
        .ok_or_else(|| EngineError::ColumnNotFound(column.to_string()))?;

    let mut formatted = 0usize;
    let mut unparsed = 0usize;
    for cell in &mut col.cells {
        let text = match cell {
            CellValue::Missing => continue,
            CellValue::Text(s) => s.clone(),
            CellValue::Float(v) => v.to_string(),
            CellValue::Int(v) => v.to_string(),
        };
        match parse_cell(&text, reference) {
            Some(dt) => {
                *cell = CellValue::Text(dt.format(pattern.strftime()).to_string());
                formatted += 1;
            }
            None => {
                *cell = CellValue::Missing;
                unparsed += 1;
            }
        }
    }

    tracing::debug!(column, formatted, unparsed, "temporal column formatted");
    Ok(MutationResult::new(format!(
        "formatted column '{column}' as '{}' ({formatted} values, {unparsed} unparseable)",
        pattern.strftime()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_words_substituted_in_map_order() {
        assert_eq!(substitute_ordinal_words("first of january"), "1st of january");
        assert_eq!(substitute_ordinal_words("thirtieth"), "30th");
        // Known overlap mis-fire, preserved: "first" replaces before the
        // longer "twenty-first" entry can match.
        assert_eq!(substitute_ordinal_words("twenty-first"), "twenty-1st");
    }

    #[test]
    fn normalize_phrase_strips_suffixes_and_fillers() {
        assert_eq!(normalize_phrase("1st of january 2016"), "1 january 2016");
        assert_eq!(normalize_phrase("jan 15, 2024"), "jan 15 2024");
        assert_eq!(normalize_phrase("the 3rd of may 1999"), "3 may 1999");
    }

    #[test]
    fn parse_relative_words() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(parse_cell("today", reference), Some(reference));
        assert_eq!(
            parse_cell("yesterday", reference).map(|dt| dt.date()),
            NaiveDate::from_ymd_opt(2024, 3, 9)
        );
        assert_eq!(
            parse_cell("tomorrow", reference).map(|dt| dt.date()),
            NaiveDate::from_ymd_opt(2024, 3, 11)
        );
    }

    #[test]
    fn parse_quarter_expression() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_time(NaiveTime::MIN);
        assert_eq!(
            parse_cell("Q1 2024", reference).map(|dt| dt.date()),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(
            parse_cell("q3 2021", reference).map(|dt| dt.date()),
            NaiveDate::from_ymd_opt(2021, 7, 1)
        );
    }
}
