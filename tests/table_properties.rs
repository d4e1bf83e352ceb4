//! Property tests for the table operations and the grid's focus intent.

use bubbletea_datagrid::grid::{self, Field, FocusIntent, GridError, Row, Table};
use proptest::prelude::*;

fn field() -> impl Strategy<Value = Field> {
    prop_oneof![Just(Field::One), Just(Field::Two), Just(Field::Three)]
}

fn row() -> impl Strategy<Value = Row> {
    ("[a-zA-Z0-9 ]{0,8}", "[a-zA-Z0-9 ]{0,8}", "[a-zA-Z0-9 ]{0,8}")
        .prop_map(|(one, two, three)| Row::new(one, two, three))
}

fn table() -> impl Strategy<Value = Table> {
    prop::collection::vec(row(), 0..8).prop_map(Table::from)
}

proptest! {
    #[test]
    fn append_adds_one_empty_row(t in table()) {
        let grown = t.append_row();
        prop_assert_eq!(grown.len(), t.len() + 1);
        prop_assert_eq!(&grown.rows()[..t.len()], t.rows());
        prop_assert_eq!(grown.get(t.len()), Some(&Row::default()));
    }

    #[test]
    fn update_changes_exactly_one_field(
        t in table().prop_filter("non-empty", |t| !t.is_empty()),
        idx in any::<prop::sample::Index>(),
        f in field(),
        value in "[a-z]{0,6}",
    ) {
        let i = idx.index(t.len());
        let u = t.update_cell(i, f, value.clone()).unwrap();
        prop_assert_eq!(u.len(), t.len());
        for (j, (before, after)) in t.rows().iter().zip(u.rows()).enumerate() {
            for g in Field::ALL {
                if j == i && g == f {
                    prop_assert_eq!(after.get(g), value.as_str());
                } else {
                    prop_assert_eq!(after.get(g), before.get(g));
                }
            }
        }
    }

    #[test]
    fn remove_drops_one_row_and_keeps_order(
        t in table().prop_filter("non-empty", |t| !t.is_empty()),
        idx in any::<prop::sample::Index>(),
    ) {
        let i = idx.index(t.len());
        let r = t.remove_row(i).unwrap();
        let mut expected = t.rows().to_vec();
        expected.remove(i);
        prop_assert_eq!(r.rows(), &expected[..]);
    }

    #[test]
    fn out_of_range_is_rejected(t in table(), extra in 0usize..4, f in field()) {
        let i = t.len() + extra;
        let len = t.len();
        prop_assert_eq!(
            t.update_cell(i, f, "x"),
            Err(GridError::RowOutOfRange { index: i, len })
        );
        prop_assert_eq!(t.remove_row(i), Err(GridError::RowOutOfRange { index: i, len }));
    }

    #[test]
    fn any_mutation_after_append_cancels_focus(
        rows in prop::collection::vec(row(), 0..5),
        remove in any::<bool>(),
        f in field(),
    ) {
        let mut g = grid::new().with_rows(rows);
        let _cmd = g.append_row();
        let last = g.rows().len() - 1;
        if remove {
            g.remove_row(last).unwrap();
        } else {
            g.update_cell(last, f, "v").unwrap();
        }
        prop_assert_eq!(g.focus_intent(), FocusIntent::Idle);
        prop_assert!(g.post_render().is_none());
        prop_assert_eq!(g.focused_target(), None);
    }
}
