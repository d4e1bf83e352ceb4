//! Deriving the grid's view tree from the table, and painting it.
//!
//! [`derive`] is a pure function of the table and the column model: one
//! header cell per column, one body row per table row, and a footer with the
//! add control. [`paint`] turns a derived tree into terminal output, drawing
//! editable cells through their mounted editors.
//!
//! ```text
//! Column One            │ Column Two            │ Column Three           │
//! ──────────────────────┼───────────────────────┼────────────────────────┼──
//! ONE                   │ TWO                   │ THREE                  │ x
//! one                   │ two                   │ three                  │ x
//! ──────────────────────┴───────────────────────┴────────────────────────┴──
//!                                                                 Add New +
//! ```

use super::columns::{data_column_count, Column, ColumnKind};
use super::elements::Editors;
use super::focus::CellPos;
use super::nav::Target;
use super::store::{Field, Table};
use super::style::Styles;
use crate::input::view::truncate_to_width;
use lipgloss_extras::lipgloss;
use unicode_width::UnicodeWidthStr;

/// Label of the add control.
pub const ADD_LABEL: &str = "Add New +";
/// Label of the remove control.
pub const REMOVE_LABEL: &str = "x";

const SEPARATOR: &str = " │ ";
const MIN_CELL_WIDTH: usize = 4;

/// A header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column index.
    pub col: usize,
    /// Label; empty for the action column.
    pub label: &'static str,
}

/// A body cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellView {
    /// An editable cell showing the table value for its field.
    Input {
        /// Where the cell sits.
        pos: CellPos,
        /// The bound field.
        field: Field,
        /// The table value.
        value: String,
    },
    /// The remove control of a row.
    Remove {
        /// The row it removes.
        row: usize,
    },
}

/// A body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Row index in the table.
    pub index: usize,
    /// One cell per column.
    pub cells: Vec<CellView>,
}

/// The footer, spanning every column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    /// Label of the add control.
    pub label: &'static str,
    /// Number of columns spanned.
    pub span: usize,
}

/// Derived view tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridView {
    /// Header row.
    pub header: Vec<HeaderCell>,
    /// Body rows in table order.
    pub body: Vec<RowView>,
    /// Footer row.
    pub footer: Footer,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            label: ADD_LABEL,
            span: 0,
        }
    }
}

/// Derives the view tree for `table` under `columns`.
pub fn derive(table: &Table, columns: &[Column]) -> GridView {
    let header = columns
        .iter()
        .enumerate()
        .map(|(col, column)| HeaderCell {
            col,
            label: column.header,
        })
        .collect();

    let body = table
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| RowView {
            index,
            cells: columns
                .iter()
                .enumerate()
                .map(|(col, column)| match column.kind {
                    ColumnKind::Data(field) => CellView::Input {
                        pos: CellPos::new(index, col),
                        field,
                        value: row.get(field).to_string(),
                    },
                    ColumnKind::Remove => CellView::Remove { row: index },
                })
                .collect(),
        })
        .collect();

    GridView {
        header,
        body,
        footer: Footer {
            label: ADD_LABEL,
            span: columns.len(),
        },
    }
}

/// Column widths for a given total width.
///
/// Action columns are as wide as their control. Data columns share what is
/// left evenly; the last data column takes the remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    widths: Vec<usize>,
}

impl Layout {
    /// Lays out `columns` in `total` terminal columns.
    pub fn new(total: usize, columns: &[Column]) -> Self {
        let seps = SEPARATOR.width() * columns.len().saturating_sub(1);
        let fixed: usize = columns
            .iter()
            .filter(|c| !c.is_editable())
            .map(|c| c.header.width().max(REMOVE_LABEL.width()))
            .sum();
        let data = data_column_count(columns);

        let avail = total.saturating_sub(seps + fixed);
        let each = if data == 0 { 0 } else { avail / data };
        let mut extra = avail.saturating_sub(each * data);
        let last_data = columns.iter().rposition(Column::is_editable);

        let widths = columns
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if !c.is_editable() {
                    return c.header.width().max(REMOVE_LABEL.width());
                }
                let mut w = each;
                if Some(i) == last_data {
                    w += std::mem::take(&mut extra);
                }
                w.max(MIN_CELL_WIDTH)
            })
            .collect();

        Self { widths }
    }

    /// Width of column `col`.
    pub fn width(&self, col: usize) -> usize {
        self.widths.get(col).copied().unwrap_or(0)
    }

    /// Width of a full grid line.
    pub fn total(&self) -> usize {
        self.widths.iter().sum::<usize>()
            + SEPARATOR.width() * self.widths.len().saturating_sub(1)
    }
}

fn pad(s: &str, width: usize) -> String {
    let s = truncate_to_width(s, width);
    let used = s.width();
    format!("{}{}", s, " ".repeat(width.saturating_sub(used)))
}

fn rule(layout: &Layout, joint: &str) -> String {
    layout
        .widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join(&format!("─{}─", joint))
}

/// Paints `view` with `layout`, highlighting `focus`.
pub fn paint(
    view: &GridView,
    layout: &Layout,
    styles: &Styles,
    focus: Option<Target>,
    editors: &Editors,
) -> String {
    let separator = styles.border.clone().inline(true).render(SEPARATOR);
    let mut lines = Vec::with_capacity(view.body.len() + 4);

    let header = view
        .header
        .iter()
        .map(|h| {
            let text = pad(h.label, layout.width(h.col));
            styles.header.clone().inline(true).render(&text)
        })
        .collect::<Vec<_>>();
    lines.push(header.join(&separator));
    lines.push(styles.border.clone().inline(true).render(&rule(layout, "┼")));

    for row in &view.body {
        let cells = row
            .cells
            .iter()
            .enumerate()
            .map(|(col, cell)| match cell {
                CellView::Input { pos, value, .. } => match editors.get(*pos) {
                    Some(editor) => editor.view(),
                    None => pad(value, layout.width(pos.col)),
                },
                CellView::Remove { row } => {
                    let style = if focus == Some(Target::Remove(*row)) {
                        &styles.remove_focused
                    } else {
                        &styles.remove
                    };
                    let control = style.clone().inline(true).render(REMOVE_LABEL);
                    let pad_by = layout.width(col).saturating_sub(REMOVE_LABEL.width());
                    format!("{}{}", control, " ".repeat(pad_by))
                }
            })
            .collect::<Vec<_>>();
        lines.push(cells.join(&separator));
    }

    lines.push(styles.border.clone().inline(true).render(&rule(layout, "┴")));

    let style = if focus == Some(Target::Add) {
        &styles.add_focused
    } else {
        &styles.add
    };
    let control = style.clone().inline(true).render(view.footer.label);
    let indent = layout
        .total()
        .saturating_sub(lipgloss::width_visible(&control));
    lines.push(format!("{}{}", " ".repeat(indent), control));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::columns::COLUMNS;

    #[test]
    fn test_derive_seed() {
        let view = derive(&Table::seed(), &COLUMNS);
        let labels: Vec<_> = view.header.iter().map(|h| h.label).collect();
        assert_eq!(labels, vec!["Column One", "Column Two", "Column Three", ""]);
        assert_eq!(view.body.len(), 2);
        assert_eq!(
            view.body[1].cells[1],
            CellView::Input {
                pos: CellPos::new(1, 1),
                field: Field::Two,
                value: "two".to_string(),
            }
        );
        assert_eq!(view.body[0].cells[3], CellView::Remove { row: 0 });
        assert_eq!(view.footer.label, "Add New +");
        assert_eq!(view.footer.span, 4);
    }

    #[test]
    fn test_derive_empty_table_keeps_header_and_footer() {
        let view = derive(&Table::default(), &COLUMNS);
        assert_eq!(view.header.len(), 4);
        assert!(view.body.is_empty());
        assert_eq!(view.footer.label, ADD_LABEL);
    }

    #[test]
    fn test_derive_is_pure() {
        let table = Table::seed();
        assert_eq!(derive(&table, &COLUMNS), derive(&table, &COLUMNS));
    }

    #[test]
    fn test_layout_fills_width() {
        let layout = Layout::new(80, &COLUMNS);
        assert_eq!(layout.total(), 80);
        assert_eq!(layout.width(3), 1);
        assert!(layout.width(0) >= MIN_CELL_WIDTH);
    }

    #[test]
    fn test_layout_never_below_minimum() {
        let layout = Layout::new(5, &COLUMNS);
        for col in 0..3 {
            assert_eq!(layout.width(col), MIN_CELL_WIDTH);
        }
    }

    #[test]
    fn test_paint_without_editors() {
        let view = derive(&Table::seed(), &COLUMNS);
        let layout = Layout::new(60, &COLUMNS);
        let out = lipgloss::strip_ansi(&paint(
            &view,
            &layout,
            &Styles::default(),
            None,
            &Editors::default(),
        ));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Column One"));
        assert!(lines[2].starts_with("ONE"));
        assert!(lines[2].ends_with("│ x"));
        assert!(lines[5].ends_with("Add New +"));
        assert_eq!(lines[5].width(), 60);
    }
}
