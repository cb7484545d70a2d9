//! Fixed two-decimal formatting for logging grids and kernels.
//!
//! Values are right-aligned to the widest formatted value and nested in braces,
//! one brace level per dimension:
//!
//! ```text
//! {{ 1.00,  2.00},
//!  {10.00, 20.00}}
//! ```
//!
//! Only one- and two-dimensional data is supported, matching the ranks of
//! kernels and grids.

use crate::grid::Grid;

/// Format a numeric array for diagnostic output.
pub trait PrettyPrint {
    /// Render the array with two decimals, aligned and brace-delimited.
    fn pretty_print(&self) -> String;
}

fn format_value<T: Copy + Into<f64>>(v: T) -> String {
    format!("{:.2}", v.into())
}

fn max_width<T: Copy + Into<f64>>(values: &[T]) -> usize {
    values
        .iter()
        .map(|&v| format_value(v).len())
        .max()
        .unwrap_or(0)
}

fn write_row<T: Copy + Into<f64>>(out: &mut String, row: &[T], width: usize) {
    out.push('{');
    for (i, &v) in row.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format!("{:>width$}", format_value(v)));
    }
    out.push('}');
}

impl<T: Copy + Into<f64>> PrettyPrint for [T] {
    fn pretty_print(&self) -> String {
        let mut out = String::new();
        write_row(&mut out, self, max_width(self));
        out
    }
}

impl<T: Copy + Into<f64>> PrettyPrint for Vec<T> {
    fn pretty_print(&self) -> String {
        self.as_slice().pretty_print()
    }
}

impl<T: Copy + Into<f64>> PrettyPrint for Grid<T> {
    fn pretty_print(&self) -> String {
        let width = max_width(self.as_slice());
        let mut out = String::from("{");
        for y in 0..self.height() {
            if y > 0 {
                out.push_str(",\n ");
            }
            if let Some(row) = self.row(y) {
                write_row(&mut out, row, width);
            }
        }
        out.push('}');
        out
    }
}
