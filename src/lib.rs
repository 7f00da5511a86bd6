//! Statistical primitives for array processing.
//!
//! Sum, mean, median, rank order, sigma-clipped mean and median, interval
//! search and linear interpolation over `f64` arrays, optionally restricted
//! to an index subset through [`Samples`].

pub mod clip;
pub mod config;
pub mod interp;
pub mod samples;
pub mod stats;

mod utils;

pub use clip::{Center, Clipped, mean_sigma_clip, median_sigma_clip, sigma_clip};
pub use config::ClipParams;
pub use interp::{Location, linear_interpolation, locate};
pub use samples::Samples;
pub use stats::{Estimate, mean, median, sort_indices, sum};
