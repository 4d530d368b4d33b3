//! Excel output tests
//!
//! Reads written reports back: cell content through calamine, styles and
//! column widths from the raw workbook parts.

mod common;

use std::io::Read;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::NaiveDate;
use common::{acme_survey, campaign_c1, campaign_c2};
use pretty_assertions::assert_eq;
use survey_export::excel::{save_document, ArtifactWriter};
use survey_export::report::ReportBuilder;
use survey_export::types::Campaign;
use tempfile::TempDir;

fn write_report(dir: &TempDir, campaign: &Campaign) -> std::path::PathBuf {
    let doc = ReportBuilder::build(&acme_survey(), campaign).unwrap();
    let path = dir.path().join(format!("{}.xlsx", campaign.id));
    save_document(&doc, &path).unwrap();
    path
}

fn read_part(path: &Path, part: &str) -> String {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(part).unwrap();
    let mut xml = String::new();
    entry.read_to_string(&mut xml).unwrap();
    xml
}

fn text(s: &str) -> Data {
    Data::String(s.to_string())
}

// ═══════════════════════════════════════════════════════════════════════════
// CELL CONTENT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_written_report_reads_back() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, &campaign_c1());

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Survey".to_string()]);

    let range = workbook.worksheet_range("Survey").unwrap();
    let cell = |row: u32, col: u32| range.get_value((row, col)).cloned();

    assert_eq!(cell(0, 0), Some(text("Survey")));
    assert_eq!(cell(2, 0), Some(text("Client")));
    assert_eq!(cell(3, 0), Some(text("Acme")));
    assert_eq!(cell(4, 0), Some(text("12 Main St75000 Paris")));
    assert_eq!(cell(6, 0), Some(text("Number of surveys")));
    assert_eq!(cell(6, 1), Some(Data::Float(2.0)));

    let header: Vec<_> = (0..5).filter_map(|c| cell(8, c)).collect();
    assert_eq!(
        header,
        ["N° street", "street", "Postal code", "City", "Status"].map(text)
    );

    let first: Vec<_> = (0..5).filter_map(|c| cell(9, c)).collect();
    assert_eq!(
        first,
        ["1", "Rue de Rivoli", "75001", "Paris", "VALID"].map(text)
    );
    let second: Vec<_> = (0..5).filter_map(|c| cell(10, c)).collect();
    assert_eq!(
        second,
        ["8", "Avenue Foch", "75116", "Paris", "INVALID"].map(text)
    );
    assert_eq!(range.end().map(|(row, _)| row), Some(10));
}

#[test]
fn test_empty_campaign_reads_back_with_header_only() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, &campaign_c2());

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let range = workbook.worksheet_range("Survey").unwrap();

    assert_eq!(range.get_value((6, 1)), Some(&Data::Float(0.0)));
    assert_eq!(range.get_value((8, 4)), Some(&text("Status")));
    assert_eq!(range.end().map(|(row, _)| row), Some(8));
}

#[test]
fn test_artifact_writer_output_reads_back() {
    let dir = TempDir::new().unwrap();
    let writer = ArtifactWriter::new(dir.path())
        .with_date(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    let doc = ReportBuilder::build(&acme_survey(), &campaign_c1()).unwrap();

    let artifact = writer.write(&doc, &acme_survey()).unwrap();
    assert!(artifact.path().ends_with("survey-S1-2025-01-15.xlsx"));

    let mut workbook: Xlsx<_> = open_workbook(artifact.path()).unwrap();
    let range = workbook.worksheet_range("Survey").unwrap();
    assert_eq!(range.get_value((9, 1)), Some(&text("Rue de Rivoli")));

    let path = artifact.path().to_path_buf();
    artifact.discard().unwrap();
    assert!(!path.exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// STYLES AND WIDTHS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_written_styles() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, &campaign_c1());
    let styles = read_part(&path, "xl/styles.xml");

    // Title: Arial 14 bold on light blue
    assert!(styles.contains(r#"<b/><sz val="14"/>"#), "{styles}");
    assert!(styles.contains(r#"rgb="FF3366FF""#), "{styles}");
    // Section title: Arial 12 underlined on light green
    assert!(styles.contains(r#"<u/><sz val="12"/>"#), "{styles}");
    assert!(styles.contains(r#"rgb="FFCCFFCC""#), "{styles}");
    assert!(styles.contains(r#"<name val="Arial"/>"#), "{styles}");
    assert!(styles.contains(r#"patternType="solid""#), "{styles}");
    assert!(styles.contains(r#"wrapText="1""#), "{styles}");
}

#[test]
fn test_written_column_widths() {
    let dir = TempDir::new().unwrap();
    let path = write_report(&dir, &campaign_c1());
    let sheet = read_part(&path, "xl/worksheets/sheet1.xml");

    // 10500/256 chars and 6000/256 chars, snapped to whole pixels
    assert!(sheet.contains(r#"<col min="1" max="1" width="41""#), "{sheet}");
    assert!(sheet.contains(r#"width="23.42578125""#), "{sheet}");
    assert!(sheet.contains(r#"max="19""#), "{sheet}");
    assert!(!sheet.contains(r#"max="20""#), "{sheet}");
}
