// File: crates/dash-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets reduction for long XY series.

/// Reduce `points` (sorted by x) to at most `threshold` points while keeping the
/// visual shape. The first and last points are always kept.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return points.to_vec(); }
    if threshold < 3 {
        return if threshold == 1 { vec![points[0]] } else { vec![points[0], points[n - 1]] };
    }

    // Interior points are split into `threshold - 2` buckets.
    let every = (n - 2) as f64 / (threshold - 2) as f64;
    let bucket = |i: usize| -> (usize, usize) {
        let start = (1.0 + i as f64 * every).floor() as usize;
        let end = ((1.0 + (i + 1) as f64 * every).floor() as usize).min(n - 1);
        (start, end.max(start + 1))
    };

    let mut out = Vec::with_capacity(threshold);
    out.push(points[0]);
    let mut anchor = points[0];

    for i in 0..threshold - 2 {
        let (start, end) = bucket(i);
        // Average of the following bucket (or the final point for the last bucket).
        let (next_start, next_end) = if i + 1 < threshold - 2 { bucket(i + 1) } else { (n - 1, n) };
        let next = &points[next_start..next_end];
        let (sx, sy) = next.iter().fold((0.0, 0.0), |acc, p| (acc.0 + p.0, acc.1 + p.1));
        let avg = (sx / next.len() as f64, sy / next.len() as f64);

        let chosen = points[start..end]
            .iter()
            .copied()
            .max_by(|a, b| triangle_area(anchor, *a, avg).total_cmp(&triangle_area(anchor, *b, avg)))
            .unwrap_or(points[start]);
        out.push(chosen);
        anchor = chosen;
    }

    out.push(points[n - 1]);
    out
}

fn triangle_area(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    ((a.0 - c.0) * (b.1 - a.1) - (a.0 - b.0) * (c.1 - a.1)).abs() * 0.5
}
