// File: crates/dash-core/src/layout.rs
// Summary: Dashboard layout: header, KPI row, titled sections of chart rows, footer.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::chart::{Chart, ChartKind};
use crate::error::{DashError, Result};
use crate::kpi::KpiCard;
use crate::theme::{Role, Theme};

/// Section titles and the chart rows under them, top to bottom.
pub const PLAN: [(&str, &[&[ChartKind]]); 3] = [
    ("Sales & Revenue Analytics", &[&[ChartKind::Line, ChartKind::Bar]]),
    (
        "Advanced Analytics & Insights",
        &[&[ChartKind::Scatter, ChartKind::Donut], &[ChartKind::TimeSeries]],
    ),
    ("Performance Overview", &[&[ChartKind::Area, ChartKind::GroupedBar]]),
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Badge {
    pub text: String,
    pub accent: Role,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
    pub badges: Vec<Badge>,
}

impl Default for Header {
    fn default() -> Self {
        let badges = [
            format!("{} Chart Types", ChartKind::ALL.len()),
            "Interactive Tools".to_string(),
            "Linked Timelines".to_string(),
        ];
        Self {
            title: "Data Visualization Dashboard".into(),
            subtitle: "Explore trends, compare metrics, and discover insights".into(),
            badges: badges
                .into_iter()
                .enumerate()
                .map(|(i, text)| Badge { text, accent: Theme::accent_role(i) })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Row {
    pub charts: Vec<Chart>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub rows: Vec<Row>,
}

/// Root container; built once per run and handed to the exporter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard {
    pub header: Header,
    pub kpis: Vec<KpiCard>,
    pub sections: Vec<Section>,
    pub footer: String,
    pub theme: Theme,
}

impl Dashboard {
    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.sections.iter().flat_map(|s| s.rows.iter()).flat_map(|r| r.charts.iter())
    }

    pub fn chart_count(&self) -> usize {
        self.charts().count()
    }
}

/// Place `charts` into the fixed section plan. Each planned kind must appear exactly once.
pub fn compose(theme: &Theme, header: Header, kpis: Vec<KpiCard>, charts: Vec<Chart>) -> Result<Dashboard> {
    let mut by_kind: IndexMap<ChartKind, Chart> = IndexMap::new();
    for chart in charts {
        let kind = chart.kind;
        if by_kind.insert(kind, chart).is_some() {
            return Err(DashError::Layout(format!("chart kind '{}' supplied twice", kind.slug())));
        }
    }

    let mut sections = Vec::with_capacity(PLAN.len());
    for (title, rows) in PLAN {
        let mut built = Vec::with_capacity(rows.len());
        for kinds in rows {
            let mut charts = Vec::with_capacity(kinds.len());
            for kind in kinds.iter() {
                let chart = by_kind
                    .shift_remove(kind)
                    .ok_or_else(|| DashError::Layout(format!("no chart supplied for '{}'", kind.slug())))?;
                charts.push(chart);
            }
            built.push(Row { charts });
        }
        sections.push(Section { title: title.to_string(), rows: built });
    }
    if let Some(kind) = by_kind.keys().next() {
        return Err(DashError::Layout(format!("chart kind '{}' has no place in the layout", kind.slug())));
    }

    let dashboard = Dashboard {
        header,
        kpis,
        sections,
        footer: "Data Visualization Dashboard • generated offline, no external assets".into(),
        theme: theme.clone(),
    };
    debug!(sections = dashboard.sections.len(), charts = dashboard.chart_count(), kpis = dashboard.kpis.len(), "composed layout");
    Ok(dashboard)
}
