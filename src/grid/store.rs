//! Table state: rows, fields and the three table operations.
//!
//! A [`Table`] is an immutable value. Every operation returns a new table and
//! leaves the receiver untouched, so a caller holding the old table never
//! observes a change. Rows have no identity beyond their position.
//!
//! ```rust
//! use bubbletea_datagrid::grid::{Field, Row, Table};
//!
//! let table = Table::seed();
//! let grown = table.append_row();
//! assert_eq!(grown.len(), 3);
//! assert_eq!(grown.get(2), Some(&Row::default()));
//!
//! let edited = grown.update_cell(2, Field::Two, "XX").unwrap();
//! assert_eq!(edited.get(2).unwrap().get(Field::Two), "XX");
//! assert_eq!(table.len(), 2);
//! ```

use super::error::{GridError, Result};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// One of the three text fields of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Field `one`.
    One,
    /// Field `two`.
    Two,
    /// Field `three`.
    Three,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 3] = [Field::One, Field::Two, Field::Three];

    /// The field name as used in row records.
    pub fn name(self) -> &'static str {
        match self {
            Field::One => "one",
            Field::Two => "two",
            Field::Three => "three",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "one" => Ok(Field::One),
            "two" => Ok(Field::Two),
            "three" => Ok(Field::Three),
            other => Err(GridError::UnknownField(other.to_string())),
        }
    }
}

/// A record with three text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Row {
    /// Field `one`.
    pub one: String,
    /// Field `two`.
    pub two: String,
    /// Field `three`.
    pub three: String,
}

impl Row {
    /// Builds a row from its three values.
    pub fn new(one: impl Into<String>, two: impl Into<String>, three: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            two: two.into(),
            three: three.into(),
        }
    }

    /// Reads a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::One => &self.one,
            Field::Two => &self.two,
            Field::Three => &self.three,
        }
    }

    /// Returns a copy of this row with `field` replaced.
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        let mut row = self.clone();
        let value = value.into();
        match field {
            Field::One => row.one = value,
            Field::Two => row.two = value,
            Field::Three => row.three = value,
        }
        row
    }
}

/// Ordered sequence of rows; insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Arc<[Row]>,
}

impl Default for Table {
    fn default() -> Self {
        Table::new(Vec::new())
    }
}

impl Table {
    /// Creates a table from rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows: rows.into() }
    }

    /// The two rows the grid starts with.
    pub fn seed() -> Self {
        Self::new(vec![
            Row::new("ONE", "TWO", "THREE"),
            Row::new("one", "two", "three"),
        ])
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at `index`.
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// All rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(GridError::RowOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    /// Returns this table with one empty row appended.
    pub fn append_row(&self) -> Table {
        let mut rows = self.rows.to_vec();
        rows.push(Row::default());
        Table::new(rows)
    }

    /// Returns this table with `field` of row `index` set to `value`.
    ///
    /// # Errors
    ///
    /// [`GridError::RowOutOfRange`] if `index >= len`.
    pub fn update_cell(&self, index: usize, field: Field, value: impl Into<String>) -> Result<Table> {
        self.check(index)?;
        let value = value.into();
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                if i == index {
                    row.with_field(field, value.clone())
                } else {
                    row.clone()
                }
            })
            .collect::<Vec<_>>();
        Ok(Table::new(rows))
    }

    /// Returns this table without row `index`; later rows move up by one.
    ///
    /// # Errors
    ///
    /// [`GridError::RowOutOfRange`] if `index >= len`.
    pub fn remove_row(&self, index: usize) -> Result<Table> {
        self.check(index)?;
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, row)| row.clone())
            .collect::<Vec<_>>();
        Ok(Table::new(rows))
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Table::new(rows)
    }
}
