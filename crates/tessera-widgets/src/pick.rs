//! Selection helpers built on [`TableView`].

use crate::panel::Panel;
use crate::popup::popup;
use crate::record::Table;
use crate::table_view::TableView;
use std::cell::RefCell;
use std::collections::BTreeSet;
use tessera_core::{Backend, Key, Result};

/// Header of the mark column added by [`pick_many`].
pub const MARK_COLUMN: &str = " ";
/// Mark shown next to a chosen row.
pub const MARK: &str = "*";

/// Let the user choose one row and return its `field` value.
///
/// Returns `None` for an empty table or a table without `field`.
pub fn pick_one<B: Backend>(
    panel: &mut Panel<'_, B>,
    table: &Table,
    field: &str,
) -> Result<Option<String>> {
    let chosen = TableView::new().run(panel, || table, |_, _| {})?;
    Ok(chosen
        .and_then(|index| table.get(index, field))
        .map(str::to_string))
}

/// Let the user mark any number of rows with `SPACE` and return their
/// `field` values, in table order, on `ENTER`.
pub fn pick_many<B: Backend>(
    panel: &mut Panel<'_, B>,
    table: &Table,
    field: &str,
) -> Result<Vec<String>> {
    let marked = RefCell::new(BTreeSet::new());
    TableView::new().with_unsearched_columns(1).run(
        panel,
        || {
            table.prefixed(MARK_COLUMN, |i| {
                let mark = if marked.borrow().contains(&i) { MARK } else { " " };
                mark.to_string()
            })
        },
        |key, index| {
            if *key == Key::Space {
                let mut marked = marked.borrow_mut();
                if !marked.remove(&index) {
                    marked.insert(index);
                }
            }
        },
    )?;
    let marked = marked.into_inner();
    tracing::debug!(count = marked.len(), "rows marked");
    Ok(marked
        .into_iter()
        .filter_map(|index| table.get(index, field))
        .map(str::to_string)
        .collect())
}

/// Run `attempt` until it yields a value. Each time it comes back empty,
/// `warning` is shown in a popup and the screen is repainted before the
/// next try.
pub fn require<B, T, F>(panel: &mut Panel<'_, B>, warning: &str, mut attempt: F) -> Result<T>
where
    B: Backend,
    F: FnMut(&mut Panel<'_, B>) -> Result<Option<T>>,
{
    loop {
        if let Some(value) = attempt(panel)? {
            return Ok(value);
        }
        tracing::debug!("required selection missing, asking again");
        popup(panel.surface_mut(), warning)?;
        panel.surface_mut().redraw()?;
        panel.repaint()?;
    }
}

/// [`pick_many`] that insists on at least one marked row.
pub fn pick_many_required<B: Backend>(
    panel: &mut Panel<'_, B>,
    table: &Table,
    field: &str,
    warning: &str,
) -> Result<Vec<String>> {
    require(panel, warning, |panel| {
        let values = pick_many(panel, table, field)?;
        Ok((!values.is_empty()).then_some(values))
    })
}
