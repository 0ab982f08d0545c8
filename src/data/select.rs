use std::cmp::Ordering;

use super::model::{Dataset, Record};

/// Number of bars shown per frame.
pub const DEFAULT_TOP_N: usize = 10;

/// Ranked subset for `year`: the ten largest values, ascending.
///
/// `year` is expected to come from [`Dataset::years`]; any other year simply
/// yields an empty frame.
pub fn select_frame(dataset: &Dataset, year: i32) -> Vec<Record> {
    select_top_n(dataset, year, DEFAULT_TOP_N)
}

/// Pick the `n` records of `year` with the greatest value, then return them in
/// ascending value order so they read bottom-to-top.
///
/// Both passes are stable: among equal values the earlier input row wins a
/// place in the selection and stays first in the output.
pub fn select_top_n(dataset: &Dataset, year: i32, n: usize) -> Vec<Record> {
    let mut rows: Vec<&Record> = dataset.records_for_year(year).collect();

    rows.sort_by(|a, b| descending(a.value, b.value));
    rows.truncate(n);
    rows.sort_by(|a, b| a.value.total_cmp(&b.value));

    rows.into_iter().cloned().collect()
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
