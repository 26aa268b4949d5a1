//! Exact Euclidean distance transform.
//!
//! Separable lower-envelope-of-parabolas transform (Felzenszwalb and
//! Huttenlocher): squared distances are propagated one axis at a time, with
//! positions along each axis scaled by that axis' spacing, which keeps the
//! result exact under anisotropic spacing. Lines along an axis are
//! independent and are processed in parallel.

use rayon::prelude::*;
use surface_types::{Spacing, Volume};
use tracing::debug;

/// Distance in mm from every point to the nearest `true` point of `border`.
///
/// Distances are measured between grid points scaled by `spacing`. When
/// `border` has no `true` point the result is `+inf` everywhere.
///
/// # Example
///
/// ```
/// use surface_distance::distance_field;
/// use surface_types::{Spacing, Volume};
///
/// let mut border = Volume::filled([1, 1, 5], false).unwrap();
/// border[[0, 0, 0]] = true;
///
/// let field = distance_field(&border, &Spacing::new(1.0, 1.0, 0.5).unwrap());
/// assert_eq!(field.as_slice(), &[0.0, 0.5, 1.0, 1.5, 2.0]);
/// ```
#[must_use]
pub fn distance_field(border: &Volume<bool>, spacing: &Spacing) -> Volume<f64> {
    let mut field = border.map(|&on_border| if on_border { 0.0 } else { f64::INFINITY });
    if !border.any() {
        debug!(dims = ?border.dims(), "empty border, distance field is infinite");
        return field;
    }

    for axis in 0..3 {
        transform_axis(&mut field, axis, spacing.axis(axis));
    }
    for d in field.as_mut_slice() {
        *d = d.sqrt();
    }
    field
}

/// Replaces squared distances with their lower envelope along `axis`.
fn transform_axis(field: &mut Volume<f64>, axis: usize, step: f64) {
    let dims = field.dims();
    let n = dims[axis];
    if n <= 1 {
        return;
    }
    let stride = field.strides()[axis];

    // Linear index of the first element of every line along `axis`.
    let starts: Vec<usize> = (0..field.len())
        .filter(|&idx| field.coord_of(idx)[axis] == 0)
        .collect();

    let values = field.as_slice();
    let lines: Vec<Vec<f64>> = starts
        .par_iter()
        .map(|&start| {
            let line: Vec<f64> = (0..n).map(|q| values[start + q * stride]).collect();
            lower_envelope(&line, step)
        })
        .collect();

    let values = field.as_mut_slice();
    for (start, line) in starts.iter().zip(lines) {
        for (q, d) in line.into_iter().enumerate() {
            values[start + q * stride] = d;
        }
    }
}

/// 1D squared distance transform of sampled function `f`.
///
/// Sample `q` sits at position `q * step`; the output at `q` is
/// `min_p (f[p] + ((q - p) * step)^2)`. Infinite samples never contribute.
#[allow(clippy::cast_precision_loss)]
fn lower_envelope(f: &[f64], step: f64) -> Vec<f64> {
    let position = |q: usize| q as f64 * step;

    // Parabola apexes and the left edge of the interval each one wins.
    let mut apexes: Vec<usize> = Vec::with_capacity(f.len());
    let mut edges: Vec<f64> = Vec::with_capacity(f.len());

    for (q, &fq) in f.iter().enumerate() {
        if !fq.is_finite() {
            continue;
        }
        let xq = position(q);
        loop {
            let Some(&p) = apexes.last() else {
                apexes.push(q);
                edges.push(f64::NEG_INFINITY);
                break;
            };
            let xp = position(p);
            let crossing = ((fq + xq * xq) - (f[p] + xp * xp)) / (2.0 * (xq - xp));
            if edges.last().is_some_and(|&edge| crossing <= edge) {
                apexes.pop();
                edges.pop();
            } else {
                apexes.push(q);
                edges.push(crossing);
                break;
            }
        }
    }

    if apexes.is_empty() {
        return vec![f64::INFINITY; f.len()];
    }

    let mut k = 0;
    (0..f.len())
        .map(|q| {
            let xq = position(q);
            while k + 1 < apexes.len() && edges[k + 1] < xq {
                k += 1;
            }
            let dx = xq - position(apexes[k]);
            dx.mul_add(dx, f[apexes[k]])
        })
        .collect()
}
