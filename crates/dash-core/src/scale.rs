// File: crates/dash-core/src/scale.rs
// Summary: Data ranges with degenerate-span padding and the linear data→pixel transform.

use serde::Serialize;

/// Spans narrower than this are treated as a single value.
pub const MIN_SPAN: f64 = 1e-9;
/// Half-width used to open up a degenerate range, relative to the value's magnitude.
const DEGENERATE_PAD_FRAC: f64 = 0.05;
/// Lower bound on that half-width, so a range around zero still opens.
const DEGENERATE_PAD_MIN: f64 = 0.5;

/// A closed data interval shown on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Range {
    pub start: f64,
    pub end: f64,
}

impl Range {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The unit range used when there is nothing to show.
    pub const fn unit() -> Self {
        Self { start: 0.0, end: 1.0 }
    }

    /// Smallest range covering every finite value, widened by `pad_frac` of its span
    /// on each side. An empty input gives the unit range; all-equal values never
    /// collapse to a zero-size range.
    pub fn covering<I: IntoIterator<Item = f64>>(values: I, pad_frac: f64) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if !lo.is_finite() || !hi.is_finite() {
            return Self::unit();
        }
        Self::new(lo, hi).padded(pad_frac)
    }

    /// Widen by `frac` of the span on each side; open degenerate spans first.
    pub fn padded(self, frac: f64) -> Self {
        let span = self.end - self.start;
        if span.abs() < MIN_SPAN {
            let center = (self.start + self.end) * 0.5;
            let half = (center.abs() * DEGENERATE_PAD_FRAC).max(DEGENERATE_PAD_MIN);
            return Self::new(center - half, center + half);
        }
        let m = span * frac.max(0.0);
        Self::new(self.start - m, self.end + m)
    }

    /// Extend so that `value` lies inside (bars grow from zero).
    pub fn including(self, value: f64) -> Self {
        Self::new(self.start.min(value), self.end.max(value))
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.start && v <= self.end
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::unit()
    }
}

/// Linear map from a data range onto a pixel interval. The pixel interval may be
/// inverted (SVG y grows downwards).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub domain: Range,
    pub px_start: f64,
    pub px_end: f64,
}

impl LinearScale {
    pub fn new(domain: Range, px_start: f64, px_end: f64) -> Self {
        Self { domain, px_start, px_end }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let span = self.domain.span();
        let span = if span.abs() < MIN_SPAN { 1.0 } else { span };
        self.px_start + (v - self.domain.start) / span * (self.px_end - self.px_start)
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let len = self.px_end - self.px_start;
        let len = if len.abs() < MIN_SPAN { 1.0 } else { len };
        self.domain.start + (px - self.px_start) / len * self.domain.span()
    }

    /// Pixels per data unit (signed).
    pub fn pixels_per_unit(&self) -> f64 {
        self.to_px(self.domain.start + 1.0) - self.to_px(self.domain.start)
    }
}
