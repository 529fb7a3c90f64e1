//! Conversion run statistics.

/// Counts collected during a conversion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Rows written, empty lines included
    pub rows: usize,
    /// Cells seen across all rows
    pub cells: usize,
    /// Cells rewritten from a color name to hex
    pub replaced: usize,
}

impl Summary {
    /// User-friendly description of the run.
    pub fn message(&self) -> String {
        format!(
            "Converted {} color cell(s) in {} row(s) ({} cell(s) total)",
            self.replaced, self.rows, self.cells
        )
    }
}
