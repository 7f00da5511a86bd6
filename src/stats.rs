use crate::samples::Samples;

/// Statistic computed over a set of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Mean or median of the contributing samples.
    pub center: f64,
    /// Unbiased sample variance of the contributing samples.
    pub variance: f64,
    /// Number of contributing samples.
    pub count: usize,
}

impl Estimate {
    /// Estimate of an empty selection.
    pub fn empty() -> Self {
        Self {
            center: f64::NAN,
            variance: f64::NAN,
            count: 0,
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

/// Sum of the selected samples, `0.0` when the selection is empty.
pub fn sum(samples: Samples) -> f64 {
    samples.values().sum()
}

/// Arithmetic mean, sample variance and count of the selected samples.
///
/// The variance is 0 for a single sample. An empty selection gives
/// [`Estimate::empty`].
pub fn mean(samples: Samples) -> Estimate {
    let n_vals = samples.len();
    if n_vals == 0 {
        return Estimate::empty();
    }
    let center = sum(samples) / n_vals as f64;
    Estimate {
        center,
        variance: compute_var(samples, center),
        count: n_vals,
    }
}

/// Median of the selected samples, NaN when the selection is empty.
pub fn median(samples: Samples) -> f64 {
    let order = sort_indices(samples);
    median_of_sorted(samples.data(), &order)
}

/// Array positions of the selected samples in ascending order of value.
///
/// The sort is stable and uses the IEEE total order, so equal values keep
/// their selection order and NaNs end up last.
pub fn sort_indices(samples: Samples) -> Vec<usize> {
    let data = samples.data();
    let mut order: Vec<_> = samples.indices().collect();
    order.sort_by(|&a, &b| data[a].total_cmp(&data[b]));
    order
}

/// Sample variance around `center`, 0 for fewer than two samples.
pub(crate) fn compute_var(samples: Samples, center: f64) -> f64 {
    let n_vals = samples.len();
    if n_vals < 2 {
        return 0.0;
    }
    samples.values().map(|val| (val - center).powi(2)).sum::<f64>() / (n_vals - 1) as f64
}

pub(crate) fn median_of_sorted(data: &[f64], order: &[usize]) -> f64 {
    let n_vals = order.len();
    if n_vals == 0 {
        return f64::NAN;
    }
    let mid = n_vals / 2;
    if n_vals % 2 == 1 {
        data[order[mid]]
    } else {
        (data[order[mid - 1]] + data[order[mid]]) / 2.0
    }
}
