//! The fixed column model.
//!
//! The grid always shows three editable text columns, each bound to a row
//! field, followed by one action column holding the remove control.

use super::store::Field;

/// What a column displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// An editable text cell bound to a row field.
    Data(Field),
    /// The remove-row control. Not bound to any field.
    Remove,
}

/// A column definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Stable column id.
    pub id: &'static str,
    /// Header label; empty for the action column.
    pub header: &'static str,
    /// Column kind.
    pub kind: ColumnKind,
}

impl Column {
    /// The bound field, for data columns.
    pub fn field(&self) -> Option<Field> {
        match self.kind {
            ColumnKind::Data(field) => Some(field),
            ColumnKind::Remove => None,
        }
    }

    /// Whether cells in this column are editable.
    pub fn is_editable(&self) -> bool {
        self.field().is_some()
    }
}

/// The grid's columns, in display order.
pub const COLUMNS: [Column; 4] = [
    Column {
        id: "one",
        header: "Column One",
        kind: ColumnKind::Data(Field::One),
    },
    Column {
        id: "two",
        header: "Column Two",
        kind: ColumnKind::Data(Field::Two),
    },
    Column {
        id: "three",
        header: "Column Three",
        kind: ColumnKind::Data(Field::Three),
    },
    Column {
        id: "remove",
        header: "",
        kind: ColumnKind::Remove,
    },
];

/// Index of the column that receives focus after a row is appended.
pub const FIRST_EDITABLE_COLUMN: usize = 0;

/// Number of editable columns in `columns`.
pub fn data_column_count(columns: &[Column]) -> usize {
    columns.iter().filter(|c| c.is_editable()).count()
}
