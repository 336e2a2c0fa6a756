use sfb_transect::Measurement;
use std::sync::Arc;

/// Rows of the dataset chosen by one filter pass.
///
/// Holds a shared handle to the full table plus the selected row indices,
/// so cloning a subset never copies measurements. Row indices double as
/// stable row identifiers.
#[derive(Debug, Clone)]
pub struct Subset {
    records: Arc<[Measurement]>,
    rows: Vec<usize>,
}

impl Subset {
    /// Rows must be valid indices into `records`.
    pub(crate) fn new(records: Arc<[Measurement]>, rows: Vec<usize>) -> Subset {
        debug_assert!(rows.iter().all(|&i| i < records.len()));
        Subset { records, rows }
    }

    /// A subset holding every record.
    pub fn all(records: Arc<[Measurement]>) -> Subset {
        let rows = (0..records.len()).collect();
        Subset { records, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Indices of the selected rows in the full table.
    pub fn row_ids(&self) -> &[usize] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &Measurement> + '_ {
        self.rows.iter().map(move |&i| &self.records[i])
    }
}
