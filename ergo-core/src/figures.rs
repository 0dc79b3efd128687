use crate::sample::SampleTable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const SCORE_LINE_COLOR: &str = "#2E86AB";
pub const INCIDENT_BAR_COLOR: &str = "#A23B72";
pub const GAUGE_BAR_COLOR: &str = "#F18F01";
pub const ACTIVITY_DELTA_REFERENCE: f64 = 70.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x_label: String,
    pub y_label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineFigure {
    pub title: String,
    pub color: String,
    pub axes: Axes,
    pub points: Vec<Point>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarFigure {
    pub title: String,
    pub color: String,
    pub axes: Axes,
    pub bars: Vec<Point>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaugeStep {
    pub from: f64,
    pub to: f64,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaugeFigure {
    pub title: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub delta_reference: f64,
    /// `value - delta_reference`.
    pub delta: f64,
    pub bar_color: String,
    pub steps: Vec<GaugeStep>,
    pub threshold: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Figures {
    pub score_trend: LineFigure,
    pub incidents: BarFigure,
    pub activity_gauge: GaugeFigure,
}

impl Figures {
    pub fn from_table(table: &SampleTable) -> Self {
        Self {
            score_trend: score_trend(table),
            incidents: incidents_over_time(table),
            activity_gauge: activity_gauge(table),
        }
    }
}

pub fn score_trend(table: &SampleTable) -> LineFigure {
    LineFigure {
        title: "Ergonomic Score Trend".into(),
        color: SCORE_LINE_COLOR.into(),
        axes: Axes {
            x_label: "Date".into(),
            y_label: "Score".into(),
        },
        points: table
            .rows()
            .iter()
            .map(|r| Point {
                date: r.date,
                value: r.ergonomic_score,
            })
            .collect(),
    }
}

pub fn incidents_over_time(table: &SampleTable) -> BarFigure {
    BarFigure {
        title: "Posture Incidents Over Time".into(),
        color: INCIDENT_BAR_COLOR.into(),
        axes: Axes {
            x_label: "Date".into(),
            y_label: "Incidents".into(),
        },
        bars: table
            .rows()
            .iter()
            .map(|r| Point {
                date: r.date,
                value: f64::from(r.posture_incidents),
            })
            .collect(),
    }
}

pub fn activity_gauge(table: &SampleTable) -> GaugeFigure {
    let step = |from: f64, to: f64, color: &str| GaugeStep {
        from,
        to,
        color: color.into(),
    };
    let value = table.latest().map_or(0.0, |r| r.activity_level);
    GaugeFigure {
        title: "Current Activity Level".into(),
        value,
        min: 0.0,
        max: 100.0,
        delta_reference: ACTIVITY_DELTA_REFERENCE,
        delta: value - ACTIVITY_DELTA_REFERENCE,
        bar_color: GAUGE_BAR_COLOR.into(),
        steps: vec![
            step(0.0, 30.0, "#FFE5D9"),
            step(30.0, 70.0, "#FFC2A1"),
            step(70.0, 100.0, "#FFA07A"),
        ],
        threshold: 90.0,
    }
}
