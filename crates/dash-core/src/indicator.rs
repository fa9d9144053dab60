// File: crates/dash-core/src/indicator.rs
// Summary: Derived series computed from a raw (x, y) series; trailing moving average.

/// An indicator turns a raw series into a derived one drawn alongside it.
pub trait Indicator {
    fn legend_label(&self) -> String;
    fn compute(&self, input: &[(f64, f64)]) -> Vec<(f64, f64)>;
}

/// N-period trailing mean.
///
/// The mean is undefined until a full window is available, so the output has
/// exactly `len - window + 1` points (none when `len < window`), each placed at
/// the x of the window's last sample. Input must already be sorted by x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovingAverage {
    pub window: usize,
}

impl MovingAverage {
    pub const DEFAULT_WINDOW: usize = 7;

    pub fn new(window: usize) -> Self {
        Self { window: window.max(1) }
    }
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

impl Indicator for MovingAverage {
    fn legend_label(&self) -> String {
        format!("{}-Day MA", self.window)
    }

    fn compute(&self, input: &[(f64, f64)]) -> Vec<(f64, f64)> {
        trailing_mean(input, self.window)
    }
}

/// Running-sum trailing mean over the y values of `data`.
pub fn trailing_mean(data: &[(f64, f64)], window: usize) -> Vec<(f64, f64)> {
    if window == 0 || data.len() < window {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(data.len() - window + 1);
    let mut sum: f64 = data[..window - 1].iter().map(|p| p.1).sum();
    for (i, &(x, y)) in data.iter().enumerate().skip(window - 1) {
        sum += y;
        out.push((x, sum / window as f64));
        sum -= data[i + 1 - window].1;
    }
    out
}
