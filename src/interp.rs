//! Interval search and linear interpolation on ascending knots.

/// Position of a query value relative to an ascending array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Before the first element, or no bracket exists (empty array, NaN query).
    Below,
    /// `data[i] <= x < data[i + 1]`, with the last interval closed on the right.
    Within(usize),
    /// After the last element.
    Above,
}

/// Find the interval of the ascending array `data` that brackets `x`.
///
/// Uses binary search. `x == data[n - 1]` falls in the last interval
/// `Within(n - 2)`; a single-element array equal to `x` gives `Within(0)`.
pub fn locate(data: &[f64], x: f64) -> Location {
    let (Some(&first), Some(&last)) = (data.first(), data.last()) else {
        return Location::Below;
    };
    if x.is_nan() || x < first {
        return Location::Below;
    }
    if x > last {
        return Location::Above;
    }

    // Number of elements <= x; 0 only when the array is not ascending (NaN knots).
    let n_le = data.partition_point(|&val| val <= x);
    let Some(i_low) = n_le.checked_sub(1) else {
        return Location::Below;
    };
    Location::Within(i_low.min(data.len().saturating_sub(2)))
}

/// Linearly interpolate the knots `(xx, yy)` at `x`.
///
/// `xx` must be ascending. Queries outside `[xx[0], xx[n - 1]]` are clamped
/// to the nearest endpoint value. Returns NaN for empty or mismatched input
/// and for a NaN query.
pub fn linear_interpolation(xx: &[f64], yy: &[f64], x: f64) -> f64 {
    if xx.is_empty() || xx.len() != yy.len() || x.is_nan() {
        return f64::NAN;
    }
    let n = xx.len();

    match locate(xx, x) {
        Location::Below => yy[0],
        Location::Above => yy[n - 1],
        Location::Within(i) if i + 1 == n => yy[i],
        Location::Within(i) => {
            let (x0, x1) = (xx[i], xx[i + 1]);
            let (y0, y1) = (yy[i], yy[i + 1]);
            // Duplicate knots.
            if x1 == x0 {
                return y0;
            }
            y0 + (y1 - y0) * (x - x0) / (x1 - x0)
        }
    }
}
