use crate::error::StripesError;

// ---------------------------------------------------------------------------
// RawRecord – one row as it came out of the source
// ---------------------------------------------------------------------------

/// A loaded row restricted to the two requested columns.
/// `None` marks a missing cell (empty, NA marker, or NaN).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRecord {
    pub age: Option<f64>,
    pub dt: Option<f64>,
}

impl RawRecord {
    /// Promote to a [`Record`] when both fields are present.
    pub fn complete(&self) -> Option<Record> {
        Some(Record {
            age: self.age?,
            dt: self.dt?,
        })
    }
}

/// Rows in source order, before cleaning.
pub type RawDataset = Vec<RawRecord>;

// ---------------------------------------------------------------------------
// Record / Dataset – cleaned samples
// ---------------------------------------------------------------------------

/// One ice-core sample: age in years BP and temperature anomaly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub age: f64,
    pub dt: f64,
}

/// Complete records, ordered by age once cleaned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The `dT` column in record order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.dt)
    }
}

// ---------------------------------------------------------------------------
// Grid – 1×N matrix handed to the renderer
// ---------------------------------------------------------------------------

/// Row-major matrix of anomaly values. Built with a single row.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl Grid {
    /// Place every `dT` value, in dataset order, into one row.
    pub fn single_row(dataset: &Dataset) -> Result<Self, StripesError> {
        if dataset.is_empty() {
            return Err(StripesError::EmptyDataset);
        }
        let cells: Vec<f64> = dataset.values().collect();
        Ok(Grid {
            rows: 1,
            cols: cells.len(),
            cells,
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, r: usize) -> &[f64] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }
}
