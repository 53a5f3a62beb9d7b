mod output_table;
mod roster_ops;
mod table_layout;
mod tabulator;

pub use output_table::OutputTable;
pub use roster_ops::{read_roster, ROSTER_COLUMNS};
pub use table_layout::TableLayout;
pub use tabulator::tabulate;
