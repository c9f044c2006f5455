//! Small numpy-like helpers over `f64` slices and triplets.

use crate::error::{ArrayError, ArrayResult};

/// Tolerance used when comparing sample spacings.
const INTERVAL_TOLERANCE: f64 = 1e-12;

/// Returns `n` evenly spaced samples over `[start, end]`, both ends included.
///
/// ```rust
/// use colour_utils::array::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Stacks equal-length columns into rows.
pub fn tstack(columns: &[&[f64]]) -> ArrayResult<Vec<Vec<f64>>> {
    let Some(first) = columns.first() else {
        return Ok(Vec::new());
    };
    let len = first.len();
    if let Some(bad) = columns.iter().find(|c| c.len() != len) {
        return Err(ArrayError::ShapeMismatch {
            expected: len,
            found: bad.len(),
        });
    }

    Ok((0..len)
        .map(|i| columns.iter().map(|c| c[i]).collect())
        .collect())
}

/// Splits rows of `N` components into `N` columns.
pub fn tsplit<const N: usize>(rows: &[[f64; N]]) -> [Vec<f64>; N] {
    std::array::from_fn(|j| rows.iter().map(|row| row[j]).collect())
}

/// Unique spacings between consecutive samples, sorted ascending.
///
/// ```rust
/// use colour_utils::array::interval;
///
/// assert_eq!(interval(&[0.0, 1.0, 2.0, 4.0]), vec![1.0, 2.0]);
/// ```
pub fn interval(samples: &[f64]) -> Vec<f64> {
    let mut steps: Vec<f64> = samples.windows(2).map(|w| w[1] - w[0]).collect();
    steps.sort_by(f64::total_cmp);
    steps.dedup_by(|a, b| (*a - *b).abs() <= INTERVAL_TOLERANCE);
    steps
}

/// Returns true if the samples are evenly spaced.
pub fn is_uniform(samples: &[f64]) -> bool {
    interval(samples).len() == 1
}

/// Index of the element closest to `x`. Ties resolve to the first element.
pub fn closest_index(values: &[f64], x: f64) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, v)| {
            let d = (v - x).abs();
            match best {
                Some((_, bd)) if bd <= d => best,
                _ => Some((i, d)),
            }
        })
        .map(|(i, _)| i)
}

/// Element closest to `x`.
pub fn closest(values: &[f64], x: f64) -> Option<f64> {
    closest_index(values, x).map(|i| values[i])
}

/// Places a triplet on the diagonal of a 3x3 matrix.
pub fn row_as_diagonal(row: [f64; 3]) -> [[f64; 3]; 3] {
    [
        [row[0], 0.0, 0.0],
        [0.0, row[1], 0.0],
        [0.0, 0.0, row[2]],
    ]
}

/// Scales values so the maximum becomes 1.
///
/// A zero or non-finite maximum leaves the input unchanged.
pub fn normalise_maximum(values: &[f64]) -> ArrayResult<Vec<f64>> {
    let max = values
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(ArrayError::Empty)?;
    if max == 0.0 || !max.is_finite() {
        return Ok(values.to_vec());
    }
    Ok(values.iter().map(|v| v / max).collect())
}
