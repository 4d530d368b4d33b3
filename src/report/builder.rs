//! Survey report layout

use super::document::{CellStyle, SheetBuilder, WorkbookDocument};
use crate::error::{ExportError, ExportResult};
use crate::types::{Address, AddressStatus, Campaign, Survey};

pub const SHEET_NAME: &str = "Survey";

pub const TITLE_ROW: u32 = 0;
pub const CLIENT_LABEL_ROW: u32 = 2;
pub const CLIENT_NAME_ROW: u32 = 3;
pub const CLIENT_ADDRESS_ROW: u32 = 4;
pub const COUNT_ROW: u32 = 6;
pub const TABLE_HEADER_ROW: u32 = 8;
pub const FIRST_DATA_ROW: u32 = 9;

pub const TABLE_HEADERS: [&str; 5] = ["N° street", "street", "Postal code", "City", "Status"];

/// Width of the first column, in 1/256 character units
pub const FIRST_COLUMN_WIDTH: u32 = 10500;
/// Width of columns 1 through `LAST_SIZED_COLUMN`
pub const COLUMN_WIDTH: u32 = 6000;
pub const LAST_SIZED_COLUMN: u16 = 18;

/// Rows available in an .xlsx worksheet
const MAX_ROWS: u64 = 1_048_576;

/// Renders a campaign and its survey into the fixed report layout
pub struct ReportBuilder;

impl ReportBuilder {
    /// Build the report document. Trusts that `campaign.survey_id == survey.id`.
    pub fn build(survey: &Survey, campaign: &Campaign) -> ExportResult<WorkbookDocument> {
        let entries = campaign.address_statuses.len() as u64;
        if u64::from(FIRST_DATA_ROW) + entries > MAX_ROWS {
            return Err(ExportError::Build(format!(
                "campaign {} has {} address statuses, more than a worksheet can hold",
                campaign.id, entries
            )));
        }

        let mut sheet = SheetBuilder::new(SHEET_NAME);

        sheet.column_width(0, FIRST_COLUMN_WIDTH);
        for column in 1..=LAST_SIZED_COLUMN {
            sheet.column_width(column, COLUMN_WIDTH);
        }

        sheet.text(TITLE_ROW, 0, "Survey", CellStyle::Header);

        // Client section
        sheet
            .text(CLIENT_LABEL_ROW, 0, "Client", CellStyle::SectionTitle)
            .text(CLIENT_NAME_ROW, 0, survey.client.as_str(), CellStyle::Wrap)
            .text(
                CLIENT_ADDRESS_ROW,
                0,
                client_address_line(&survey.client_address),
                CellStyle::Wrap,
            )
            .text(COUNT_ROW, 0, "Number of surveys", CellStyle::Default)
            .number(COUNT_ROW, 1, entries as f64, CellStyle::Default);

        // Survey table
        for (column, title) in TABLE_HEADERS.iter().enumerate() {
            sheet.text(TABLE_HEADER_ROW, column as u16, *title, CellStyle::Wrap);
        }
        for (offset, entry) in campaign.address_statuses.iter().enumerate() {
            let row = FIRST_DATA_ROW + offset as u32;
            for (column, value) in entry_columns(entry).into_iter().enumerate() {
                sheet.text(row, column as u16, value, CellStyle::Wrap);
            }
        }

        Ok(WorkbookDocument {
            sheets: vec![sheet.finish()],
        })
    }
}

/// One-line client address as downstream consumers expect it.
///
/// There is no separator between street name and postal code.
pub fn client_address_line(address: &Address) -> String {
    format!(
        "{} {}{} {}",
        address.street_number, address.street_name, address.postal_code, address.city
    )
}

fn entry_columns(entry: &AddressStatus) -> [&str; 5] {
    [
        entry.address.street_number.as_str(),
        entry.address.street_name.as_str(),
        entry.address.postal_code.as_str(),
        entry.address.city.as_str(),
        entry.status.as_str(),
    ]
}
