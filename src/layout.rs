//! Column layout planning for the multi-column formats.
//!
//! The planner works purely on entry indices: it decides how many columns
//! fit and which index lands in which row. Turning indices into padded text
//! is the job of [`crate::output::columns`].
//!
//! Two placements are supported:
//! - [`row_major`]: entries fill a row left to right (`horizontal`)
//! - [`column_major`]: entries fill a column top to bottom (`vertical`/`across`)

use crate::utils::display_width;

/// Column count and column width derived for one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub columns: usize,
    pub column_width: usize,
}

impl LayoutPlan {
    /// Plans a layout for `names` on a device `output_width` cells wide.
    ///
    /// The column width is the widest name plus one cell of gutter; the
    /// column count is how many such columns fit, never less than one.
    pub fn for_names<S: AsRef<str>>(names: &[S], output_width: usize) -> Self {
        let column_width = Self::column_width_of(names);
        Self {
            columns: (output_width / column_width).max(1),
            column_width,
        }
    }

    /// A one-column plan that still pads names to the group's column width.
    pub fn single_column<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            columns: 1,
            column_width: Self::column_width_of(names),
        }
    }

    fn column_width_of<S: AsRef<str>>(names: &[S]) -> usize {
        names
            .iter()
            .map(|n| display_width(n.as_ref()))
            .max()
            .unwrap_or(0)
            + 1
    }
}

/// Row-major placement of `n` entries into `columns` columns.
///
/// Returns `n / columns` complete rows followed by one row with the
/// `n % columns` leftovers; the leftover row is omitted when empty.
/// The block terminator lives in `output::present::render_listing`, which
/// puts one blank line between groups instead.
pub fn row_major(n: usize, columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let full_rows = n / columns;
    let remainder = n % columns;

    let mut rows: Vec<Vec<usize>> = (0..full_rows)
        .map(|i| (0..columns).map(|j| i * columns + j).collect())
        .collect();
    if remainder > 0 {
        rows.push((0..remainder).map(|j| full_rows * columns + j).collect());
    }
    rows
}

/// Column-major placement of `n` entries starting from a naive estimate of
/// `columns`.
///
/// The estimate is first turned into a row count, then the column count is
/// recomputed from that row count so no trailing column is left empty. The
/// first `full_rows` rows span every column; the remaining rows are one
/// column shorter because the last column does not reach that deep.
pub fn column_major(n: usize, columns: usize) -> Vec<Vec<usize>> {
    if n == 0 {
        return Vec::new();
    }
    let total_rows = n.div_ceil(columns.max(1));
    let columns = n.div_ceil(total_rows);
    let full_rows = match n % total_rows {
        0 => total_rows,
        partial => partial,
    };

    (0..total_rows)
        .map(|i| {
            let width = if i < full_rows { columns } else { columns - 1 };
            (0..width).map(|j| i + j * total_rows).collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_from_names() {
        let names = ["a", "bb", "ccc", "d", "ee"];
        let plan = LayoutPlan::for_names(&names, 10);
        assert_eq!(plan.column_width, 4);
        assert_eq!(plan.columns, 2);
    }

    #[test]
    fn test_plan_never_below_one_column() {
        let names = ["a_rather_long_file_name.txt"];
        assert_eq!(LayoutPlan::for_names(&names, 10).columns, 1);
        assert_eq!(LayoutPlan::for_names(&names, 0).columns, 1);
    }

    #[test]
    fn test_plan_for_empty_group() {
        let names: [&str; 0] = [];
        let plan = LayoutPlan::for_names(&names, 80);
        assert_eq!(plan.column_width, 1);
        assert_eq!(plan.columns, 80);
    }

    #[test]
    fn test_single_column_plan() {
        let plan = LayoutPlan::single_column(&["abc", "de"]);
        assert_eq!(plan, LayoutPlan { columns: 1, column_width: 4 });
    }

    #[test]
    fn test_row_major_example() {
        assert_eq!(row_major(5, 2), vec![vec![0, 1], vec![2, 3], vec![4]]);
    }

    #[test]
    fn test_row_major_exact_fit_has_no_leftover_row() {
        assert_eq!(row_major(4, 2), vec![vec![0, 1], vec![2, 3]]);
        assert!(row_major(0, 3).is_empty());
    }

    #[test]
    fn test_column_major_example() {
        assert_eq!(column_major(5, 2), vec![vec![0, 3], vec![1, 4], vec![2]]);
    }

    #[test]
    fn test_column_major_shrinks_columns() {
        // Naive estimate of 4 columns for 5 entries gives 2 rows; only 3
        // columns are needed to hold them.
        assert_eq!(column_major(5, 4), vec![vec![0, 2, 4], vec![1, 3]]);
    }

    #[test]
    fn test_column_major_short_trailing_rows() {
        assert_eq!(
            column_major(10, 4),
            vec![vec![0, 3, 6, 9], vec![1, 4, 7], vec![2, 5, 8]]
        );
    }

    #[test]
    fn test_column_major_edge_cases() {
        assert!(column_major(0, 3).is_empty());
        assert_eq!(column_major(3, 1), vec![vec![0], vec![1], vec![2]]);
        assert_eq!(column_major(2, 5), vec![vec![0, 1]]);
        assert_eq!(column_major(1, 0), vec![vec![0]]);
    }
}
