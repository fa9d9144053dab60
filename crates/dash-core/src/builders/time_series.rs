// File: crates/dash-core/src/builders/time_series.rs
// Summary: Price line with a high-low band and a trailing moving average overlay.

use super::{continuous_axis, placeholder};
use crate::axis::{Axis, TickFormat};
use crate::chart::{Chart, ChartKind, HoverMode, LegendLocation, Tool};
use crate::dataset::{ColumnType, Dataset};
use crate::downsample::lttb;
use crate::error::Result;
use crate::indicator::{Indicator, MovingAverage};
use crate::series::{Glyph, LineDash, Series, Tooltip};
use crate::style::styled;
use crate::theme::Theme;
use crate::types::HEIGHT;

const WIDTH: u32 = 800;
const LINE_WIDTH: f64 = 2.0;
const BAND_ALPHA: f64 = 0.2;
const MARKER_SIZE: f64 = 8.0;
pub const DEFAULT_MAX_POINTS: usize = 2_000;

#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeriesSpec {
    pub title: String,
    pub x: String,
    pub price: String,
    pub high: String,
    pub low: String,
    /// Optional extra hover row.
    pub volume: Option<String>,
    pub moving_average: MovingAverage,
    /// The raw line is reduced with LTTB beyond this many points.
    pub max_points: usize,
    pub link_group: Option<String>,
}

impl Default for TimeSeriesSpec {
    fn default() -> Self {
        Self {
            title: "Stock Price Analysis with Moving Average".into(),
            x: "date".into(),
            price: "price".into(),
            high: "high".into(),
            low: "low".into(),
            volume: Some("volume".into()),
            moving_average: MovingAverage::default(),
            max_points: DEFAULT_MAX_POINTS,
            link_group: Some("timeline".into()),
        }
    }
}

impl TimeSeriesSpec {
    pub fn with_window(mut self, window: usize) -> Self {
        self.moving_average = MovingAverage::new(window);
        self
    }

    pub fn build(&self, data: &Dataset, theme: &Theme) -> Result<Chart> {
        if data.is_empty() {
            return Ok(placeholder(ChartKind::TimeSeries, &self.title, (WIDTH, HEIGHT), theme));
        }
        let mut schema = vec![
            (self.x.as_str(), ColumnType::Continuous),
            (self.price.as_str(), ColumnType::Number),
            (self.high.as_str(), ColumnType::Number),
            (self.low.as_str(), ColumnType::Number),
        ];
        if let Some(volume) = &self.volume {
            schema.push((volume.as_str(), ColumnType::Number));
        }
        data.conform(&schema)?;

        let raw_x = data.axis_values(&self.x)?;
        let price = data.numbers(&self.price)?;
        let high = data.numbers(&self.high)?;
        let low = data.numbers(&self.low)?;
        let volume = match &self.volume {
            Some(column) => Some(data.numbers(column)?),
            None => None,
        };

        let mut order: Vec<usize> = (0..data.len()).collect();
        order.sort_by(|&a, &b| raw_x[a].total_cmp(&raw_x[b]));
        let xs: Vec<f64> = order.iter().map(|&r| raw_x[r]).collect();
        let points: Vec<(f64, f64)> = order.iter().map(|&r| (raw_x[r], price[r])).collect();

        // The average sees every sample, even when the drawn line is reduced.
        let window = self.moving_average.window;
        let average = self.moving_average.compute(&points);
        let ma_label = self.moving_average.legend_label();

        let date_format = if data.dates(&self.x).is_ok() { TickFormat::IsoDate } else { TickFormat::Decimal(1) };
        let tip = |pos: usize| -> Tooltip {
            let row = order[pos];
            let ma = (pos + 1 >= window).then(|| average[pos + 1 - window].1);
            let mut rows = vec![
                ("Date".to_string(), date_format.apply(xs[pos])),
                ("Price".to_string(), TickFormat::CurrencyCents.apply(price[row])),
                ("High".to_string(), TickFormat::CurrencyCents.apply(high[row])),
                ("Low".to_string(), TickFormat::CurrencyCents.apply(low[row])),
                (ma_label.clone(), ma.map_or_else(|| "—".to_string(), |v| TickFormat::CurrencyCents.apply(v))),
            ];
            if let Some(volume) = volume {
                rows.push(("Volume".to_string(), TickFormat::Thousands.apply(volume[row])));
            }
            rows
        };

        let mut chart = Chart::new(ChartKind::TimeSeries, &self.title).with_size(WIDTH, HEIGHT);

        chart.add_series(Series::named(
            "High-Low Range",
            Glyph::Area {
                xs: xs.clone(),
                lower: order.iter().map(|&r| low[r]).collect(),
                upper: order.iter().map(|&r| high[r]).collect(),
                color: theme.accent_secondary,
                alpha: BAND_ALPHA,
            },
        ));

        let drawn = if points.len() > self.max_points { lttb(&points, self.max_points) } else { points };
        // Kept points are exact copies of input points, so their rows can be found by x.
        let tips: Vec<Tooltip> = drawn
            .iter()
            .map(|p| tip(xs.partition_point(|x| x.total_cmp(&p.0).is_lt()).min(xs.len() - 1)))
            .collect();
        let price_glyph = if drawn.len() > 1 {
            Glyph::Line { points: drawn, color: theme.accent_primary, width: LINE_WIDTH, alpha: 0.9, dash: LineDash::Solid }
        } else {
            Glyph::Markers {
                sizes: vec![MARKER_SIZE; drawn.len()],
                points: drawn,
                color: theme.accent_primary,
                alpha: 0.9,
                line_color: None,
            }
        };
        chart.add_series(Series::named("Price", price_glyph).with_tooltips(tips));

        let ma_glyph = match average.len() {
            0 => None,
            1 => Some(Glyph::Markers {
                sizes: vec![MARKER_SIZE],
                points: average,
                color: theme.accent_tertiary,
                alpha: 0.8,
                line_color: None,
            }),
            _ => Some(Glyph::Line {
                points: average,
                color: theme.accent_tertiary,
                width: LINE_WIDTH,
                alpha: 0.8,
                dash: LineDash::Dashed,
            }),
        };
        if let Some(glyph) = ma_glyph {
            chart.add_series(Series::named(ma_label, glyph));
        }

        let (x_range, _) = chart.data_ranges(0.0);
        let (_, y_range) = chart.data_ranges(0.05);
        chart.x_axis = continuous_axis(data, &self.x, "Date", TickFormat::Day, x_range)?;
        chart.y_axis = Axis::new("Price ($)", y_range.start, y_range.end).with_format(TickFormat::CurrencyCents);
        chart.legend_from_series(LegendLocation::TopLeft);
        chart.toolbar.insert(Tool::Hover);
        chart.toolbar.insert(Tool::Crosshair);
        chart.hover = Some(HoverMode::VLine);
        chart.link_group = self.link_group.clone();
        Ok(styled(chart, theme))
    }
}
