//! Report construction
//!
//! Turns a survey and its campaign into a `WorkbookDocument` without touching
//! the filesystem. Serialization lives in [`crate::excel`].

pub mod builder;
pub mod document;

pub use builder::{client_address_line, ReportBuilder};
pub use document::{
    Cell, CellStyle, CellValue, ColumnWidth, Row, Sheet, SheetBuilder, WorkbookDocument,
};
