//! Tests for temporal canonicalization.

use chrono::{NaiveDate, NaiveDateTime};
use tabnorm_engine::temporal::{format_temporal, format_temporal_at};
use tabnorm_model::{CellValue, Column, EngineError, Table, TemporalPattern};

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 10)
        .unwrap()
        .and_hms_opt(15, 30, 45)
        .unwrap()
}

fn single_column(values: &[&str]) -> Table {
    Table::from_columns(vec![Column::from_text("when", values)]).unwrap()
}

fn cell_texts(table: &Table) -> Vec<Option<&str>> {
    table.columns[0].cells.iter().map(CellValue::as_text).collect()
}

#[test]
fn natural_language_ordinal_date() {
    let mut table = single_column(&["first of january 2016"]);
    format_temporal_at(&mut table, "when", TemporalPattern::DayMonthYear, reference()).unwrap();
    assert_eq!(cell_texts(&table), vec![Some("01/01/2016")]);
}

#[test]
fn structured_dates_render_day_before_month() {
    let mut table = single_column(&["2016-01-15", "15/01/2016", "15-Jan-2016"]);
    format_temporal_at(&mut table, "when", TemporalPattern::DayMonthYear, reference()).unwrap();
    assert_eq!(
        cell_texts(&table),
        vec![Some("15/01/2016"), Some("15/01/2016"), Some("15/01/2016")]
    );
}

#[test]
fn datetime_patterns_keep_time() {
    let mut table = single_column(&["2016-01-15 08:05:09"]);
    format_temporal_at(
        &mut table,
        "when",
        TemporalPattern::DayMonthYearHourMinuteSecond,
        reference(),
    )
    .unwrap();
    assert_eq!(cell_texts(&table), vec![Some("15/01/2016 08:05:09")]);
}

#[test]
fn time_only_patterns() {
    let mut table = single_column(&["08:05", "8:05 PM"]);
    format_temporal_at(&mut table, "when", TemporalPattern::HourMinute, reference()).unwrap();
    assert_eq!(cell_texts(&table), vec![Some("08:05"), Some("20:05")]);
}

#[test]
fn month_year_and_year_patterns() {
    let mut table = single_column(&["January 2016"]);
    format_temporal_at(&mut table, "when", TemporalPattern::MonthYear, reference()).unwrap();
    assert_eq!(cell_texts(&table), vec![Some("01/2016")]);

    let mut table = single_column(&["2016"]);
    format_temporal_at(&mut table, "when", TemporalPattern::Year, reference()).unwrap();
    assert_eq!(cell_texts(&table), vec![Some("2016")]);
}

#[test]
fn relative_words_resolve_against_reference() {
    let mut table = single_column(&["yesterday"]);
    format_temporal_at(&mut table, "when", TemporalPattern::DayMonthYear, reference()).unwrap();
    assert_eq!(cell_texts(&table), vec![Some("09/03/2024")]);
}

#[test]
fn unparseable_becomes_missing_without_failing() {
    let mut table = single_column(&["not a date", "2016-01-15"]);
    let result =
        format_temporal_at(&mut table, "when", TemporalPattern::DayMonthYear, reference())
            .unwrap();
    assert_eq!(table.columns[0].cells[0], CellValue::Missing);
    assert_eq!(table.columns[0].cells[1], CellValue::text("15/01/2016"));
    assert!(result.summary.contains("1 unparseable"));
}

#[test]
fn missing_cells_stay_missing() {
    let mut table = Table::from_columns(vec![Column::new(
        "when",
        vec![CellValue::Missing, CellValue::text("2016-01-15")],
    )])
    .unwrap();
    format_temporal_at(&mut table, "when", TemporalPattern::Year, reference()).unwrap();
    assert_eq!(table.columns[0].cells[0], CellValue::Missing);
    assert_eq!(table.columns[0].cells[1], CellValue::text("2016"));
}

#[test]
fn absent_column_fails() {
    let mut table = single_column(&["2016-01-15"]);
    let result = format_temporal(&mut table, "nope", TemporalPattern::Year);
    assert!(matches!(result, Err(EngineError::ColumnNotFound(_))));
}
