mod excel_reader;
mod exporter;
mod inspector;
mod matcher;
mod reference;

pub use excel_reader::ExcelReader;
pub use exporter::write_csv;
pub use inspector::{print_overview, CLINICAL_COLUMN, TASK_COLUMN};
pub use matcher::{report_unmatched, unmatched_names};
pub use reference::load_occupation_names;
