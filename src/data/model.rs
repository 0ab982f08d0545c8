use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Record – one row of the input table
// ---------------------------------------------------------------------------

/// A single observation: one country's indicator value for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Year of the observation (`TIME_PERIOD`).
    pub period: i32,
    /// Country name (`REF_AREA_LABEL`).
    pub area_label: String,
    /// Measured percentage (`OBS_VALUE`), finite and non-negative.
    pub value: f64,
}

impl Record {
    pub fn new(period: i32, area_label: impl Into<String>, value: f64) -> Self {
        Self {
            period,
            area_label: area_label.into(),
            value,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with pre-computed indices.
///
/// Built once after loading and never mutated; every frame is derived from
/// it on demand.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All records, in input order.
    records: Vec<Record>,
    /// Distinct years, ascending.
    years: Vec<i32>,
    /// Distinct country labels, sorted.
    area_labels: BTreeSet<String>,
    /// Smallest and largest `value` across every record.
    value_range: Option<(f64, f64)>,
}

impl Dataset {
    /// Build the year / label / range indices from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut years: BTreeSet<i32> = BTreeSet::new();
        let mut area_labels: BTreeSet<String> = BTreeSet::new();
        let mut value_range: Option<(f64, f64)> = None;

        for rec in &records {
            years.insert(rec.period);
            if !area_labels.contains(&rec.area_label) {
                area_labels.insert(rec.area_label.clone());
            }
            value_range = Some(match value_range {
                None => (rec.value, rec.value),
                Some((lo, hi)) => (lo.min(rec.value), hi.max(rec.value)),
            });
        }

        Dataset {
            records,
            years: years.into_iter().collect(),
            area_labels,
            value_range,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Distinct years in ascending order.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn area_labels(&self) -> &BTreeSet<String> {
        &self.area_labels
    }

    /// `(global_min, global_max)` of the value column, `None` when empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.value_range
    }

    /// Records observed in `year`, in input order.
    pub fn records_for_year(&self, year: i32) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |r| r.period == year)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
