// Histograms and value counts for the distribution charts

use std::collections::BTreeMap;

use serde::Serialize;

/// One bin of an equal-width histogram, covering `[start, end)` (the last bin also
/// includes `end`)
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bucket `values` into `bin_count` equal-width bins spanning their min and max.
    /// Non-finite values are skipped. With a single distinct value there is one bin.
    pub fn equal_width(values: &[f64], bin_count: usize) -> Self {
        let finite = values.iter().copied().filter(|v| v.is_finite());
        let Some((min, max)) = finite.clone().fold(None, |range: Option<(f64, f64)>, v| {
            Some(match range {
                Some((min, max)) => (min.min(v), max.max(v)),
                None => (v, v),
            })
        }) else {
            return Self::default();
        };

        if bin_count == 0 {
            return Self::default();
        }
        if min == max {
            return Self {
                bins: vec![HistogramBin {
                    start: min,
                    end: max,
                    count: finite.count(),
                }],
            };
        }

        let width = (max - min) / bin_count as f64;
        let mut counts = vec![0usize; bin_count];
        for value in finite {
            let index = (((value - min) / width) as usize).min(bin_count - 1);
            counts[index] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                start: min + width * i as f64,
                end: if i + 1 == bin_count {
                    max
                } else {
                    min + width * (i + 1) as f64
                },
                count,
            })
            .collect();
        Self { bins }
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

/// Occurrences of one distinct integer value
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ValueCount {
    pub value: i32,
    pub count: usize,
}

/// Count each distinct value, ascending by value
pub fn value_counts(values: impl IntoIterator<Item = i32>) -> Vec<ValueCount> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect()
}
