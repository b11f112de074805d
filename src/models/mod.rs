mod table;

pub use table::{CellValue, DataTable};
