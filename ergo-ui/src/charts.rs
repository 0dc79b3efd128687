use crate::dto::{BarFigureDto, GaugeFigureDto, LineFigureDto, PointDto};
use leptos::*;
use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

pub const CHART_FRAME: Frame = Frame {
    width: 480.0,
    height: 240.0,
    pad_left: 40.0,
    pad_right: 12.0,
    pad_top: 12.0,
    pad_bottom: 32.0,
};

impl Frame {
    fn plot_width(&self) -> f64 {
        self.width - self.pad_left - self.pad_right
    }

    fn plot_height(&self) -> f64 {
        self.height - self.pad_top - self.pad_bottom
    }

    fn baseline(&self) -> f64 {
        self.height - self.pad_bottom
    }

    /// Centre of slot `i` out of `n` equal slots across the plot area.
    fn slot_x(&self, i: usize, n: usize) -> f64 {
        let slot = self.plot_width() / n.max(1) as f64;
        self.pad_left + slot * (i as f64 + 0.5)
    }

    fn y_for(&self, value: f64, (lo, hi): (f64, f64)) -> f64 {
        let frac = if hi > lo { (value - lo) / (hi - lo) } else { 0.5 };
        self.baseline() - frac.clamp(0.0, 1.0) * self.plot_height()
    }
}

/// Padded value range for a line chart; flat or empty series still get a usable span.
pub fn value_range(values: &[f64]) -> (f64, f64) {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo < f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.1;
    (lo - pad, hi + pad)
}

pub fn line_path(values: &[f64], frame: &Frame) -> String {
    let range = value_range(values);
    let points: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            format!(
                "{:.1},{:.1}",
                frame.slot_x(i, values.len()),
                frame.y_for(*v, range)
            )
        })
        .collect();

    match points.split_first() {
        None => String::new(),
        Some((first, [])) => format!("M {first}"),
        Some((first, rest)) => format!("M {first} L {}", rest.join(" L ")),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bars grow from a zero baseline; the tallest bar fills the plot height.
pub fn bar_rects(values: &[f64], frame: &Frame) -> Vec<BarRect> {
    let max = values.iter().copied().fold(0.0_f64, f64::max).max(1.0);
    let slot = frame.plot_width() / values.len().max(1) as f64;
    let width = slot * 0.7;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let height = (v.max(0.0) / max) * frame.plot_height();
            BarRect {
                x: frame.slot_x(i, values.len()) - width / 2.0,
                y: frame.baseline() - height,
                width,
                height,
            }
        })
        .collect()
}

/// Up to `count` evenly spread (x, label) pairs, always including the first and last.
pub fn axis_labels(points: &[PointDto], count: usize, frame: &Frame) -> Vec<(f64, String)> {
    let n = points.len();
    if n == 0 || count == 0 {
        return Vec::new();
    }
    if n <= count || count == 1 {
        let step = if count == 1 { n } else { 1 };
        return points
            .iter()
            .enumerate()
            .step_by(step)
            .map(|(i, p)| (frame.slot_x(i, n), short_date(&p.date)))
            .collect();
    }
    let mut out: Vec<(f64, String)> = (0..count)
        .map(|k| k * (n - 1) / (count - 1))
        .map(|i| (frame.slot_x(i, n), short_date(&points[i].date)))
        .collect();
    out.dedup_by(|a, b| a.1 == b.1);
    out
}

/// `2025-01-07` -> `01-07`.
fn short_date(date: &str) -> String {
    date.get(5..).unwrap_or(date).to_string()
}

pub const GAUGE_CX: f64 = 150.0;
pub const GAUGE_CY: f64 = 150.0;
pub const GAUGE_RADIUS: f64 = 110.0;

fn gauge_point(value: f64, min: f64, max: f64, radius: f64) -> (f64, f64) {
    let frac = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let theta = PI * (1.0 - frac);
    (GAUGE_CX + radius * theta.cos(), GAUGE_CY - radius * theta.sin())
}

/// Upper half-circle arc from `from` to `to`, sweeping left to right.
pub fn gauge_arc(from: f64, to: f64, min: f64, max: f64, radius: f64) -> String {
    let (x1, y1) = gauge_point(from, min, max, radius);
    let (x2, y2) = gauge_point(to, min, max, radius);
    format!("M {x1:.1},{y1:.1} A {radius:.1} {radius:.1} 0 0 1 {x2:.1},{y2:.1}")
}

pub fn gauge_tick(value: f64, min: f64, max: f64, inner: f64, outer: f64) -> ((f64, f64), (f64, f64)) {
    (
        gauge_point(value, min, max, inner),
        gauge_point(value, min, max, outer),
    )
}

#[component]
pub fn LineChart(figure: LineFigureDto) -> impl IntoView {
    let frame = CHART_FRAME;
    let values: Vec<f64> = figure.points.iter().map(|p| p.value).collect();
    let (lo, hi) = value_range(&values);
    let path = line_path(&values, &frame);
    let labels = axis_labels(&figure.points, 6, &frame);

    view! {
        <figure class="chart">
            <figcaption class="chart-title">{figure.title.clone()}</figcaption>
            <svg class="chart-svg" viewBox=format!("0 0 {} {}", frame.width, frame.height)>
                <line x1=frame.pad_left.to_string() y1=frame.baseline().to_string()
                      x2=(frame.width - frame.pad_right).to_string() y2=frame.baseline().to_string()
                      class="axis-line" />
                <text x="4" y=(frame.pad_top + 8.0).to_string() class="axis-tick">{format!("{hi:.0}")}</text>
                <text x="4" y=frame.baseline().to_string() class="axis-tick">{format!("{lo:.0}")}</text>
                <path d=path fill="none" stroke=figure.color.clone() stroke-width="3" />
                {labels
                    .into_iter()
                    .map(|(x, label)| view! {
                        <text x=format!("{x:.1}") y=(frame.height - 10.0).to_string()
                              class="axis-tick" text-anchor="middle">{label}</text>
                    })
                    .collect_view()}
            </svg>
            <div class="chart-axes">
                <span>{figure.axes.x_label.clone()}</span>
                <span>{figure.axes.y_label.clone()}</span>
            </div>
        </figure>
    }
}

#[component]
pub fn BarChart(figure: BarFigureDto) -> impl IntoView {
    let frame = CHART_FRAME;
    let values: Vec<f64> = figure.bars.iter().map(|p| p.value).collect();
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let rects = bar_rects(&values, &frame);
    let labels = axis_labels(&figure.bars, 6, &frame);
    let color = figure.color.clone();

    view! {
        <figure class="chart">
            <figcaption class="chart-title">{figure.title.clone()}</figcaption>
            <svg class="chart-svg" viewBox=format!("0 0 {} {}", frame.width, frame.height)>
                <line x1=frame.pad_left.to_string() y1=frame.baseline().to_string()
                      x2=(frame.width - frame.pad_right).to_string() y2=frame.baseline().to_string()
                      class="axis-line" />
                <text x="4" y=(frame.pad_top + 8.0).to_string() class="axis-tick">{format!("{max:.0}")}</text>
                <text x="4" y=frame.baseline().to_string() class="axis-tick">"0"</text>
                {rects
                    .into_iter()
                    .zip(figure.bars.clone())
                    .map(|(r, p)| view! {
                        <rect x=format!("{:.1}", r.x) y=format!("{:.1}", r.y)
                              width=format!("{:.1}", r.width) height=format!("{:.1}", r.height)
                              fill=color.clone()>
                            <title>{format!("{}: {}", p.date, p.value)}</title>
                        </rect>
                    })
                    .collect_view()}
                {labels
                    .into_iter()
                    .map(|(x, label)| view! {
                        <text x=format!("{x:.1}") y=(frame.height - 10.0).to_string()
                              class="axis-tick" text-anchor="middle">{label}</text>
                    })
                    .collect_view()}
            </svg>
            <div class="chart-axes">
                <span>{figure.axes.x_label.clone()}</span>
                <span>{figure.axes.y_label.clone()}</span>
            </div>
        </figure>
    }
}

#[component]
pub fn Gauge(figure: GaugeFigureDto) -> impl IntoView {
    let (min, max) = (figure.min, figure.max);
    let delta = figure.delta;
    let delta_class = if delta >= 0.0 { "delta-up" } else { "delta-down" };
    let ((tx1, ty1), (tx2, ty2)) = gauge_tick(figure.threshold, min, max, GAUGE_RADIUS - 22.0, GAUGE_RADIUS + 8.0);

    view! {
        <figure class="chart">
            <figcaption class="chart-title">{figure.title.clone()}</figcaption>
            <svg class="gauge-svg" viewBox="0 0 300 190">
                {figure
                    .steps
                    .iter()
                    .map(|s| view! {
                        <path d=gauge_arc(s.from, s.to, min, max, GAUGE_RADIUS)
                              fill="none" stroke=s.color.clone() stroke-width="28" />
                    })
                    .collect_view()}
                <path d=gauge_arc(min, figure.value, min, max, GAUGE_RADIUS)
                      fill="none" stroke=figure.bar_color.clone() stroke-width="12" />
                <line x1=format!("{tx1:.1}") y1=format!("{ty1:.1}") x2=format!("{tx2:.1}") y2=format!("{ty2:.1}")
                      stroke="red" stroke-width="4" />
                <text x="150" y="140" class="gauge-value" text-anchor="middle">{format!("{:.1}", figure.value)}</text>
                <text x="150" y="175" class=format!("gauge-delta {delta_class}") text-anchor="middle">
                    {format!("{}{delta:.1}", if delta >= 0.0 { "▲ +" } else { "▼ " })}
                </text>
            </svg>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame {
            width: 110.0,
            height: 110.0,
            pad_left: 10.0,
            pad_right: 0.0,
            pad_top: 0.0,
            pad_bottom: 10.0,
        }
    }

    fn points(n: usize) -> Vec<PointDto> {
        (1..=n)
            .map(|d| PointDto {
                date: format!("2025-01-{d:02}"),
                value: d as f64,
            })
            .collect()
    }

    #[test]
    fn value_range_pads_and_handles_degenerate_series() {
        assert_eq!(value_range(&[]), (0.0, 1.0));
        assert_eq!(value_range(&[5.0, 5.0]), (4.0, 6.0));
        let (lo, hi) = value_range(&[0.0, 10.0]);
        assert!((lo + 1.0).abs() < 1e-9 && (hi - 11.0).abs() < 1e-9);
    }

    #[test]
    fn line_path_visits_every_point() {
        let path = line_path(&[1.0, 2.0, 3.0], &frame());
        assert!(path.starts_with("M "));
        assert_eq!(path.matches(" L ").count(), 2);
        assert_eq!(line_path(&[], &frame()), "");
        assert_eq!(line_path(&[4.0], &frame()).matches(" L ").count(), 0);
    }

    #[test]
    fn line_path_puts_higher_values_higher() {
        let path = line_path(&[0.0, 10.0], &frame());
        let ys: Vec<f64> = path
            .split(|c| c == 'M' || c == 'L')
            .filter_map(|seg| seg.trim().split(',').nth(1))
            .map(|y| y.parse().expect("y"))
            .collect();
        assert_eq!(ys.len(), 2);
        assert!(ys[1] < ys[0]);
    }

    #[test]
    fn bars_scale_to_tallest() {
        let rects = bar_rects(&[0.0, 5.0, 10.0], &frame());
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].height, 0.0);
        assert!((rects[2].height - 100.0).abs() < 1e-9);
        assert!((rects[1].height - 50.0).abs() < 1e-9);
        assert!((rects[2].y + rects[2].height - 100.0).abs() < 1e-9);
    }

    #[test]
    fn all_zero_bars_stay_flat() {
        assert!(bar_rects(&[0.0, 0.0], &frame()).iter().all(|r| r.height == 0.0));
    }

    #[test]
    fn axis_labels_include_ends() {
        let labels = axis_labels(&points(30), 6, &frame());
        assert_eq!(labels.first().map(|l| l.1.as_str()), Some("01-01"));
        assert_eq!(labels.last().map(|l| l.1.as_str()), Some("01-30"));
        assert!(labels.len() <= 6);
        assert_eq!(axis_labels(&points(3), 6, &frame()).len(), 3);
        assert!(axis_labels(&[], 6, &frame()).is_empty());
    }

    #[test]
    fn gauge_arc_spans_half_circle() {
        let arc = gauge_arc(0.0, 100.0, 0.0, 100.0, 100.0);
        assert_eq!(arc, "M 50.0,150.0 A 100.0 100.0 0 0 1 250.0,150.0");
        let half = gauge_arc(0.0, 50.0, 0.0, 100.0, 100.0);
        assert!(half.ends_with("150.0,50.0"));
    }

    #[test]
    fn gauge_clamps_out_of_range_values() {
        assert_eq!(
            gauge_arc(0.0, 150.0, 0.0, 100.0, 100.0),
            gauge_arc(0.0, 100.0, 0.0, 100.0, 100.0)
        );
    }
}
