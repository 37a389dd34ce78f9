//! Name-only formatters: single column, commas, horizontal and vertical.
//!
//! These render a group's names into text rows according to a
//! [`LayoutPlan`]. Every cell is the name left-aligned in `column_width`
//! terminal cells; the extra cell in the width is the gutter, so cells are
//! concatenated without a separator.

use crate::layout::{LayoutPlan, column_major, row_major};
use crate::utils::pad_to_width;

/// Separator used by the comma format.
pub const COMMA_SEPARATOR: &str = ", ";

/// Joins all names into a single line.
pub fn render_commas<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|n| n.as_ref())
        .collect::<Vec<&str>>()
        .join(COMMA_SEPARATOR)
}

/// Renders names row by row (`horizontal`).
pub fn render_horizontal<S: AsRef<str>>(names: &[S], plan: LayoutPlan) -> Vec<String> {
    render_rows(names, &row_major(names.len(), plan.columns), plan.column_width)
}

/// Renders names column by column (`vertical`/`across`).
pub fn render_vertical<S: AsRef<str>>(names: &[S], plan: LayoutPlan) -> Vec<String> {
    render_rows(
        names,
        &column_major(names.len(), plan.columns),
        plan.column_width,
    )
}

fn render_rows<S: AsRef<str>>(
    names: &[S],
    rows: &[Vec<usize>],
    column_width: usize,
) -> Vec<String> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|&i| pad_to_width(names[i].as_ref(), column_width))
                .collect::<String>()
        })
        .collect()
}
