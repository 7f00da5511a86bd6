//! Iterative sigma clipping.
//!
//! Each iteration keeps the samples inside
//! `[center - low * sigma, center + high * sigma]` and recomputes the
//! estimate over them. The interval is closed, so a constant selection
//! (`sigma == 0`) survives intact. Non-finite samples never take part.

use crate::config::ClipParams;
use crate::samples::Samples;
use crate::stats::{Estimate, compute_var, median_of_sorted, sort_indices, sum};

/// Location estimator used as the clipping center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Center {
    Mean,
    Median,
}

/// Outcome of a sigma clipping run.
#[derive(Debug, Clone, PartialEq)]
pub struct Clipped {
    /// Estimate over the surviving samples. `variance` is sigma squared;
    /// use [`Estimate::std_dev`] for the dispersion itself.
    pub estimate: Estimate,
    /// Array positions of the surviving samples.
    pub kept: Vec<usize>,
    /// Number of clipping iterations performed.
    pub iterations: usize,
}

/// Sigma-clipped mean of the selected samples.
///
/// The dispersion is reported as `variance`, see [`Estimate::std_dev`].
pub fn mean_sigma_clip(samples: Samples, params: &ClipParams) -> Estimate {
    sigma_clip(samples, params, Center::Mean).estimate
}

/// Sigma-clipped median of the selected samples.
///
/// The dispersion is reported as `variance`, see [`Estimate::std_dev`].
pub fn median_sigma_clip(samples: Samples, params: &ClipParams) -> Estimate {
    sigma_clip(samples, params, Center::Median).estimate
}

/// Run sigma clipping around `center` and report the survivors.
///
/// Iteration stops when an iteration rejects nothing, rejects fewer than
/// `params.stop_threshold` samples, or after `params.max_iter` iterations.
/// NaN and infinite samples are dropped before the first estimate. An
/// iteration that would reject every sample is discarded and ends the run,
/// so `kept` is empty only when no finite sample was selected.
pub fn sigma_clip(samples: Samples, params: &ClipParams, center: Center) -> Clipped {
    let data = samples.data();
    let mut kept: Vec<_> = samples
        .indices()
        .filter(|&idx| data[idx].is_finite())
        .collect();
    let n_dropped = samples.len() - kept.len();
    if n_dropped > 0 {
        log::debug!("dropped {n_dropped} non-finite samples");
    }
    let mut estimate = estimate_over(data, &kept, center);
    let mut iterations = 0;

    if kept.is_empty() {
        return Clipped {
            estimate,
            kept,
            iterations,
        };
    }

    while iterations < params.max_iter {
        let sigma = estimate.std_dev();
        let clip_lo = estimate.center - params.low * sigma;
        let clip_up = estimate.center + params.high * sigma;

        let survivors: Vec<_> = kept
            .iter()
            .copied()
            .filter(|&idx| data[idx] >= clip_lo && data[idx] <= clip_up)
            .collect();
        let n_rejected = kept.len() - survivors.len();
        iterations += 1;

        if survivors.is_empty() {
            log::warn!(
                "iteration {iterations} would reject all {} samples, keeping previous estimate",
                kept.len()
            );
            break;
        }

        log::debug!(
            "iteration {iterations}: bounds [{clip_lo}, {clip_up}], rejected {n_rejected}, kept {}",
            survivors.len()
        );

        if n_rejected == 0 {
            break;
        }

        kept = survivors;
        estimate = estimate_over(data, &kept, center);

        if n_rejected < params.stop_threshold {
            break;
        }
    }

    Clipped {
        estimate,
        kept,
        iterations,
    }
}

fn estimate_over(data: &[f64], indices: &[usize], center: Center) -> Estimate {
    if indices.is_empty() {
        return Estimate::empty();
    }
    let samples = Samples::from_checked(data, indices);
    let mean = sum(samples) / indices.len() as f64;
    let variance = compute_var(samples, mean);
    let center = match center {
        Center::Mean => mean,
        Center::Median => median_of_sorted(data, &sort_indices(samples)),
    };
    Estimate {
        center,
        variance,
        count: indices.len(),
    }
}
