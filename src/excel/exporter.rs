//! Excel serializer for report documents

use super::artifact::Artifact;
use crate::error::{ExportError, ExportResult};
use crate::report::{CellStyle, CellValue, Sheet, WorkbookDocument};
use crate::types::Survey;
use chrono::{Local, NaiveDate};
use rust_xlsxwriter::{Color, Format, FormatPattern, FormatUnderline, Workbook, Worksheet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Date part of artifact file names (yyyy-MM-dd)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Legacy palette: LIGHT_BLUE
const HEADER_FILL: u32 = 0x3366FF;
/// Legacy palette: LIGHT_GREEN
const SECTION_FILL: u32 = 0xCCFFCC;

/// Cell padding rust_xlsxwriter adds to every column width (5px over a 7px digit)
const CELL_PADDING_CHARS: f64 = 5.0 / 7.0;

/// `survey-<id>-<yyyy-MM-dd>.xlsx`
pub fn artifact_file_name(survey_id: &str, date: NaiveDate) -> String {
    format!("survey-{}-{}.xlsx", survey_id, date.format(DATE_FORMAT))
}

/// Writes report documents to transient `.xlsx` files
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
    /// Fixed date for file names; today's local date when unset
    date: Option<NaiveDate>,
}

impl Default for ArtifactWriter {
    fn default() -> Self {
        Self::new(std::env::temp_dir())
    }
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the artifact for `survey` lands today
    pub fn artifact_path(&self, survey: &Survey) -> PathBuf {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        self.dir.join(artifact_file_name(&survey.id, date))
    }

    /// Serialize `document` for `survey`, overwriting any same-day artifact.
    ///
    /// A partially written file is removed when serialization fails.
    pub fn write(&self, document: &WorkbookDocument, survey: &Survey) -> ExportResult<Artifact> {
        let artifact = Artifact::new(self.artifact_path(survey));
        save_document(document, artifact.path())?;
        debug!(path = %artifact.path().display(), "artifact written");
        Ok(artifact)
    }
}

/// Serialize `document` to an .xlsx file at `path`
pub fn save_document(document: &WorkbookDocument, path: &Path) -> ExportResult<()> {
    let mut workbook = to_workbook(document)?;
    workbook.save(path)?;
    Ok(())
}

/// Serialize `document` into an in-memory .xlsx
pub fn document_to_buffer(document: &WorkbookDocument) -> ExportResult<Vec<u8>> {
    let mut workbook = to_workbook(document)?;
    Ok(workbook.save_to_buffer()?)
}

fn to_workbook(document: &WorkbookDocument) -> ExportResult<Workbook> {
    if document.sheets.is_empty() {
        return Err(ExportError::Build("document has no sheets".to_string()));
    }

    let styles = StyleSet::new();
    let mut workbook = Workbook::new();
    for sheet in &document.sheets {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, sheet, &styles)?;
    }
    Ok(workbook)
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet, styles: &StyleSet) -> ExportResult<()> {
    worksheet.set_name(&sheet.name)?;

    for width in &sheet.column_widths {
        worksheet.set_column_width(width.column, column_width_chars(width.chars()))?;
    }

    for row in &sheet.rows {
        for cell in &row.cells {
            let format = styles.get(cell.style);
            match (&cell.value, format) {
                (CellValue::Text(text), Some(format)) => {
                    worksheet.write_string_with_format(row.index, cell.column, text, format)?;
                }
                (CellValue::Text(text), None) => {
                    worksheet.write_string(row.index, cell.column, text)?;
                }
                (CellValue::Number(n), Some(format)) => {
                    worksheet.write_number_with_format(row.index, cell.column, *n, format)?;
                }
                (CellValue::Number(n), None) => {
                    worksheet.write_number(row.index, cell.column, *n)?;
                }
            }
        }
    }

    Ok(())
}

/// Width to hand rust_xlsxwriter so the stored width matches `chars`
fn column_width_chars(chars: f64) -> f64 {
    (chars - CELL_PADDING_CHARS).max(0.0)
}

/// Concrete formats for each style tag
struct StyleSet {
    header: Format,
    section_title: Format,
    wrap: Format,
}

impl StyleSet {
    fn new() -> Self {
        Self {
            header: Format::new()
                .set_font_name("Arial")
                .set_font_size(14)
                .set_bold()
                .set_background_color(Color::RGB(HEADER_FILL))
                .set_pattern(FormatPattern::Solid),
            section_title: Format::new()
                .set_font_name("Arial")
                .set_font_size(12)
                .set_underline(FormatUnderline::Single)
                .set_background_color(Color::RGB(SECTION_FILL))
                .set_pattern(FormatPattern::Solid),
            wrap: Format::new().set_text_wrap(),
        }
    }

    fn get(&self, style: CellStyle) -> Option<&Format> {
        match style {
            CellStyle::Default => None,
            CellStyle::Header => Some(&self.header),
            CellStyle::SectionTitle => Some(&self.section_title),
            CellStyle::Wrap => Some(&self.wrap),
        }
    }
}
