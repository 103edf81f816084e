//! Monetary canonicalization: currency detection, separator repair,
//! magnitude-word scaling, and column-level display scaling.

use std::sync::LazyLock;

use regex::Regex;
use tabnorm_model::{
    CellValue, Column, DecimalSeparator, DisplayScale, EngineError, MutationResult, Result, Table,
};

/// Fixed ordered alternation over currency symbols and words; the first
/// match anywhere in the string wins.
static CURRENCY_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([$€£¥]|usd|eur|gbp|jpy|dollars?|euros?|pounds?|yen)").expect("valid regex")
});

/// First contiguous run of digits and dots.
static MAGNITUDE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d.]+").expect("valid regex"));

/// Characters stripped before magnitude-word isolation.
static NUMERIC_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d.,€$£¥]").expect("valid regex"));

const BILLION_WORDS: [&str; 5] = ["billion", "billions", "bill", "bil", "b"];
const MILLION_WORDS: [&str; 5] = ["million", "millions", "mill", "mil", "m"];
const THOUSAND_WORDS: [&str; 3] = ["thousand", "thousands", "k"];
const CENT_WORDS: [&str; 2] = ["cent", "cents"];

/// Maps a lowered currency token to a 3-letter code; unknown tokens are
/// upper-cased as-is.
fn currency_code(token: &str) -> String {
    match token {
        "$" | "usd" | "dollar" | "dollars" => "USD".to_string(),
        "€" | "eur" | "euro" | "euros" => "EUR".to_string(),
        "£" | "gbp" | "pound" | "pounds" => "GBP".to_string(),
        "¥" | "jpy" | "yen" => "JPY".to_string(),
        other => other.to_uppercase(),
    }
}

/// Parses one monetary cell into a numeric value and a currency code.
///
/// Steps, in order: currency detection, separator normalization,
/// multi-decimal-point repair (only the last dot is the true decimal
/// point), magnitude extraction, magnitude-word scaling with precedence
/// billion > million > thousand > cent.
pub fn parse_money_text(text: &str, separator: DecimalSeparator) -> (Option<f64>, String) {
    let original = text.trim();
    let mut value_str = original.to_lowercase();

    let code = CURRENCY_TOKEN
        .find(original)
        .map(|m| currency_code(&m.as_str().to_lowercase()))
        .unwrap_or_default();

    // Separator normalization must run before numeric extraction.
    value_str = match separator {
        DecimalSeparator::Comma => value_str.replace('.', "").replace(',', "."),
        DecimalSeparator::Dot => value_str.replace(',', ""),
    };

    // Multi-decimal-point repair: "1.234.56" -> "1234.56".
    if value_str.matches('.').count() > 1 {
        if let Some(pos) = value_str.rfind('.') {
            let (head, tail) = value_str.split_at(pos);
            value_str = format!("{}{tail}", head.replace('.', ""));
        }
    }

    let Some(run) = MAGNITUDE_RUN.find(&value_str) else {
        return (None, code);
    };
    let Ok(mut number) = run.as_str().parse::<f64>() else {
        return (None, code);
    };

    let isolated = NUMERIC_NOISE.replace_all(&value_str, " ");
    let words: Vec<&str> = isolated.split_whitespace().collect();

    if words.iter().any(|w| BILLION_WORDS.contains(w)) {
        number *= 1_000_000_000.0;
    } else if words.iter().any(|w| MILLION_WORDS.contains(w)) {
        number *= 1_000_000.0;
    } else if words.iter().any(|w| THOUSAND_WORDS.contains(w)) {
        number *= 1_000.0;
    } else if words.iter().any(|w| CENT_WORDS.contains(w)) {
        number /= 100.0;
    }

    (Some(number), code)
}

/// Rewrites `column` to numeric values, applies the column-wide display
/// scale, and shapes the header / companion currency column.
pub fn format_money(
    table: &mut Table,
    column: &str,
    mixed_currency: bool,
    detected_currency: &str,
    scale: DisplayScale,
    separator: DecimalSeparator,
) -> Result<MutationResult> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| EngineError::ColumnNotFound(column.to_string()))?;

    let mut codes = Vec::with_capacity(table.height());
    let mut parsed = 0usize;
    let mut unparsed = 0usize;
    {
        let col = &mut table.columns[idx];
        for cell in &mut col.cells {
            let (number, code) = match cell {
                CellValue::Missing => (None, String::new()),
                CellValue::Float(v) => (Some(*v), String::new()),
                CellValue::Int(v) => (Some(*v as f64), String::new()),
                CellValue::Text(s) => parse_money_text(s, separator),
            };
            codes.push(code);
            *cell = match number {
                Some(v) => {
                    parsed += 1;
                    match scale.divisor() {
                        Some(d) => CellValue::Float(v / d),
                        None => CellValue::Float(v),
                    }
                }
                None => {
                    if !cell.is_missing() {
                        unparsed += 1;
                    }
                    CellValue::Missing
                }
            };
        }
    }

    tracing::debug!(column, parsed, unparsed, "monetary column formatted");

    if mixed_currency {
        let companion = format!("{column}_currency");
        let cells = codes.into_iter().map(CellValue::Text).collect();
        table.insert_column(idx + 1, Column::new(companion.clone(), cells))?;
        if let Some(label) = scale.label() {
            table.columns[idx].name = format!("{column} ({label})");
        }
        Ok(MutationResult::with_companion(
            format!(
                "formatted monetary column '{column}' ({parsed} values); \
                 inserted currency column '{companion}'"
            ),
            companion,
        ))
    } else {
        let mut parts = Vec::new();
        if !detected_currency.is_empty() && detected_currency != "Unknown" {
            parts.push(detected_currency.to_string());
        }
        if let Some(label) = scale.label() {
            parts.push(label.to_string());
        }
        if !parts.is_empty() {
            table.columns[idx].name = format!("{column} ({})", parts.join(" "));
        }
        Ok(MutationResult::new(format!(
            "formatted monetary column '{column}' ({parsed} values)"
        )))
    }
}
