//! Data Table Components
//!
//! Static, sortable, selectable and editable tables sharing one column model.

pub mod column;
pub mod editable_table;
pub mod selectable_table;
pub mod sortable_table;
pub mod static_table;

pub use column::{Column, ColumnWidth};
pub use editable_table::{CellView, EditGrid, EditableTable};
pub use selectable_table::{SelectableTable, SelectionLabels};
pub use sortable_table::{SortLabels, SortableTable};
pub use static_table::StaticTable;
