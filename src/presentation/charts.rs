use std::f64::consts::PI;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::budget::{Allocation, BudgetData};

pub const PALETTE: [&str; 9] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8", "#82ca9d", "#ffc658", "#8dd1e1",
    "#a4de6c",
];

const PIE_CENTER: f64 = 160.0;
const PIE_RADIUS: f64 = 120.0;

const BAR_WIDTH: f64 = 400.0;
const BAR_HEIGHT: f64 = 300.0;
const BAR_LEFT: f64 = 48.0;
const BAR_BOTTOM: f64 = 260.0;
const BAR_TOP: f64 = 20.0;
const BAR_FILL: &str = "#4f46e5";

static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("amount regex is valid"));

#[derive(Debug, Clone)]
pub struct Wedge {
    pub label: String,
    pub color: &'static str,
    pub path: String,
}

/// Radial chart of a share sequence.
#[derive(Debug, Clone)]
pub struct PieChart {
    pub title: String,
    pub wedges: Vec<Wedge>,
}

impl PieChart {
    pub fn new(title: &str, shares: &[Allocation]) -> Self {
        let total = Allocation::total(shares);
        let mut wedges = Vec::with_capacity(shares.len());
        let mut start = -PI / 2.0;

        for (i, share) in shares.iter().enumerate() {
            let sweep = if total > 0.0 { share.value / total * 2.0 * PI } else { 0.0 };
            let path = wedge_path(start, sweep);
            start += sweep;
            wedges.push(Wedge {
                label: format!("{}: {}%", share.name, share.value),
                color: PALETTE[i % PALETTE.len()],
                path,
            });
        }

        Self { title: format!("{title} (in %)"), wedges }
    }

    pub fn size(&self) -> f64 {
        PIE_CENTER * 2.0
    }
}

fn point(angle: f64) -> (f64, f64) {
    (PIE_CENTER + PIE_RADIUS * angle.cos(), PIE_CENTER + PIE_RADIUS * angle.sin())
}

fn wedge_path(start: f64, sweep: f64) -> String {
    if sweep <= 0.0 {
        return String::new();
    }
    if sweep >= 2.0 * PI - 1e-9 {
        // a single arc cannot close a full circle
        let (l, r) = (PIE_CENTER - PIE_RADIUS, PIE_CENTER + PIE_RADIUS);
        return format!(
            "M {l:.2} {c:.2} A {rad} {rad} 0 1 1 {r:.2} {c:.2} A {rad} {rad} 0 1 1 {l:.2} {c:.2} Z",
            c = PIE_CENTER,
            rad = PIE_RADIUS,
        );
    }
    let (x1, y1) = point(start);
    let (x2, y2) = point(start + sweep);
    let large = if sweep > PI { 1 } else { 0 };
    format!(
        "M {c:.2} {c:.2} L {x1:.2} {y1:.2} A {rad} {rad} 0 {large} 1 {x2:.2} {y2:.2} Z",
        c = PIE_CENTER,
        rad = PIE_RADIUS,
    )
}

#[derive(Debug, Clone)]
pub struct Bar {
    pub name: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_x: f64,
}

#[derive(Debug, Clone)]
pub struct Tick {
    pub y: f64,
    pub label: String,
}

/// Comparative bar chart of the three headline sectors.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub fill: &'static str,
    pub width: f64,
    pub height: f64,
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
    pub axis_x: f64,
    pub axis_y: f64,
}

impl BarChart {
    pub fn sectors(data: &BudgetData) -> Self {
        Self::new(
            "Key Sector Allocations (₹ Lakh Cr)",
            &[
                ("Agriculture", lakh_crore(&data.agriculture)),
                ("Education", lakh_crore(&data.education)),
                ("Infrastructure", lakh_crore(&data.infrastructure)),
            ],
        )
    }

    pub fn new(title: &str, figures: &[(&str, f64)]) -> Self {
        let max = figures.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        let scale_max = if max > 0.0 { max } else { 1.0 };
        let plot_h = BAR_BOTTOM - BAR_TOP;
        let slot = (BAR_WIDTH - BAR_LEFT - 10.0) / figures.len().max(1) as f64;
        let width = slot * 0.6;

        let bars = figures
            .iter()
            .enumerate()
            .map(|(i, (name, value))| {
                let height = value / scale_max * plot_h;
                let x = BAR_LEFT + slot * i as f64 + (slot - width) / 2.0;
                Bar {
                    name: name.to_string(),
                    value: *value,
                    x,
                    y: BAR_BOTTOM - height,
                    width,
                    height,
                    label_x: x + width / 2.0,
                }
            })
            .collect();

        let ticks = (0..=4)
            .map(|i| {
                let frac = i as f64 / 4.0;
                Tick { y: BAR_BOTTOM - frac * plot_h, label: format!("{:.1}", scale_max * frac) }
            })
            .collect();

        Self {
            title: title.to_string(),
            fill: BAR_FILL,
            width: BAR_WIDTH,
            height: BAR_HEIGHT,
            bars,
            ticks,
            axis_x: BAR_LEFT,
            axis_y: BAR_BOTTOM,
        }
    }
}

/// Leading figure of a sector description, e.g. "₹1.65 Lakh Crore ..." → 1.65.
/// Text without a figure charts as zero.
pub fn lakh_crore(text: &str) -> f64 {
    AMOUNT
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}
