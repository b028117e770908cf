//! Excel worksheet decoding for the spot-curve workbook
//!
//! - `importer`: xlsx bytes → grid of [`CellValue`](crate::types::CellValue) rows
//! - `layout`: where the maturity header and dated rows live in that grid

mod importer;
pub mod layout;

pub use importer::{SheetGrid, WorkbookImporter};
pub use layout::SpotCurveSheet;
