//! Bounding boxes of point sequences.
//!
//! Both functions return `[left, top, right, bottom]`, or `None` if any
//! coordinate is NaN or infinite. An empty sequence has the all-zero box.

use crate::lane::F32x4;

/// Compute the bounding box of `points` two points at a time.
///
/// Each pair of points is loaded as one `x0, y0, x1, y1` lane, so the min and
/// max accumulators track the even and odd point slots separately and are
/// folded together at the end.
///
/// Non-finite coordinates are detected without branching inside the loop: a
/// lane seeded with `seed * 0` stays zero under multiplication by finite
/// values, while `inf * 0` and anything involving NaN turn it into NaN, which
/// never compares equal to zero afterwards.
pub fn lane_bounds(points: &[[f32; 2]]) -> Option<[f32; 4]> {
    if points.is_empty() {
        return Some([0.0; 4]);
    }

    let coords: &[f32] = bytemuck::cast_slice(points);

    // Peel one point off odd-length input so the rest pairs up evenly.
    let (seed, rest) = if points.len() % 2 == 1 {
        let [x, y] = points[0];
        (F32x4::new([x, y, x, y]), &coords[2..])
    } else {
        (F32x4::load(coords), &coords[4..])
    };

    let mut min = seed;
    let mut max = seed;
    let mut accum = seed;
    accum *= F32x4::ZERO;

    for pair in rest.chunks_exact(4) {
        let xy = F32x4::load(pair);
        accum *= xy;
        min = min.min(xy);
        max = max.max(xy);
    }

    if !accum.simd_eq(F32x4::ZERO).all() {
        return None;
    }

    let mut lo = [0.0; 4];
    let mut hi = [0.0; 4];
    min.store(&mut lo);
    max.store(&mut hi);

    Some([
        lo[0].min(lo[2]),
        lo[1].min(lo[3]),
        hi[0].max(hi[2]),
        hi[1].max(hi[3]),
    ])
}

/// Compute the bounding box of `points` one coordinate at a time.
///
/// Gives the same answer as [`lane_bounds`] for every input.
pub fn scalar_bounds(points: &[[f32; 2]]) -> Option<[f32; 4]> {
    let Some((&[x0, y0], rest)) = points.split_first() else {
        return Some([0.0; 4]);
    };

    if !(x0.is_finite() && y0.is_finite()) {
        return None;
    }

    let mut bounds = [x0, y0, x0, y0];

    for &[x, y] in rest {
        if !(x.is_finite() && y.is_finite()) {
            return None;
        }

        bounds[0] = bounds[0].min(x);
        bounds[1] = bounds[1].min(y);
        bounds[2] = bounds[2].max(x);
        bounds[3] = bounds[3].max(y);
    }

    Some(bounds)
}
