//! # cohortboard-viz
//!
//! Bar charts for the cohort dashboard.
//!
//! A [`BarChart`] is a serializable chart specification. It renders to an
//! HTML fragment that draws itself with Chart.js, which the host page must
//! load once.

use cohortboard_core::{escape_html, escape_script_json};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";

#[derive(Debug, Error)]
pub enum VizError {
    #[error("Failed to serialize chart: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type VizResult<T> = Result<T, VizError>;

/// Bar chart specification for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// Chart data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// A dataset in a chart. `None` values are drawn as gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    #[serde(rename = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Chart rendering options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_label: Option<String>,
    pub show_legend: bool,
}

impl BarChart {
    /// Create an empty bar chart.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            data: ChartData::default(),
            options: ChartOptions::default(),
        }
    }

    /// Build a single-series chart from `(label, value)` points.
    ///
    /// Labels keep their first-seen order. Values sharing a label are summed,
    /// so repeated weeks stack into one bar. A label whose values are all
    /// `None` stays on the axis with no bar.
    #[must_use]
    pub fn from_points<L, I>(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        points: I,
    ) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, Option<f64>)>,
    {
        let mut labels: Vec<String> = Vec::new();
        let mut values: Vec<Option<f64>> = Vec::new();

        for (label, value) in points {
            let label = label.into();
            let index = match labels.iter().position(|l| *l == label) {
                Some(index) => index,
                None => {
                    labels.push(label);
                    values.push(None);
                    labels.len() - 1
                }
            };
            if let Some(value) = value {
                values[index] = Some(values[index].unwrap_or(0.0) + value);
            }
        }

        let y_label = y_label.into();
        let mut chart = Self::new(title);
        chart.data = ChartData {
            labels,
            datasets: vec![Dataset {
                label: y_label.clone(),
                data: values,
                background_color: Some("#636efa".to_string()),
            }],
        };
        chart.options.x_axis_label = Some(x_label.into());
        chart.options.y_axis_label = Some(y_label);
        chart
    }

    /// Convert to a JSON string for frontend rendering.
    pub fn to_json(&self) -> VizResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render an embeddable `<div>` that draws the chart with Chart.js.
    ///
    /// Every call produces a fresh canvas id, so several fragments can live
    /// on one page.
    pub fn to_html_fragment(&self) -> VizResult<String> {
        let canvas_id = format!("chart-{}", Uuid::new_v4().simple());
        let title = escape_html(&self.title);
        let json = escape_script_json(&self.to_json()?);

        Ok(format!(
            r#"<div class="chart">
    <canvas id="{canvas_id}" aria-label="{title}" role="img"></canvas>
    <script>
        (function() {{
            const spec = {json};
            const axis = (text) => ({{ display: text !== undefined, text: text }});
            new Chart(document.getElementById('{canvas_id}'), {{
                type: 'bar',
                data: spec.data,
                options: {{
                    responsive: true,
                    plugins: {{
                        title: {{ display: true, text: spec.title }},
                        legend: {{ display: spec.options.show_legend }}
                    }},
                    scales: {{
                        x: {{ title: axis(spec.options.x_axis_label) }},
                        y: {{ title: axis(spec.options.y_axis_label), beginAtZero: true }}
                    }}
                }}
            }});
        }})();
    </script>
</div>"#
        ))
    }
}
