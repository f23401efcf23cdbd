use crate::chart::ChartSpec;
use crate::error::Result;

/// Chart.js CDN URL for rendering charts
const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";

const STYLES: &str = r"
:root {
    --bg-color: #f8fafc;
    --card-bg: #ffffff;
    --border-color: #e2e8f0;
    --text-primary: #1e293b;
    --text-secondary: #64748b;
}

* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background-color: var(--bg-color);
    color: var(--text-primary);
    line-height: 1.6;
}

.container { max-width: 960px; margin: 0 auto; padding: 24px; }
h1 { margin-bottom: 24px; }
section { margin-bottom: 40px; }
h2 { margin-bottom: 16px; border-bottom: 2px solid var(--border-color); padding-bottom: 8px; }
h3 { margin: 12px 0; color: var(--text-secondary); }

table.summary {
    width: 100%;
    border-collapse: collapse;
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    margin-bottom: 24px;
}
table.summary th, table.summary td {
    padding: 10px 12px;
    text-align: left;
    border-bottom: 1px solid var(--border-color);
}
table.summary th { background: var(--bg-color); font-weight: 600; }

.chart-card {
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: 8px;
    padding: 16px;
    margin-bottom: 24px;
}
";

/// Instantiates one Chart.js chart per canvas from the embedded spec array
const RENDER_SCRIPT: &str = r"
document.addEventListener('DOMContentLoaded', function () {
    charts.forEach(function (spec, index) {
        const canvas = document.getElementById('chart-' + index);
        if (!canvas) {
            return;
        }
        const config = {
            type: spec.chart_type,
            data: spec.data,
            options: {
                responsive: true,
                plugins: {
                    title: { display: true, text: spec.title },
                    legend: { display: spec.options.show_legend, position: 'bottom' }
                }
            }
        };
        if (spec.chart_type === 'bar' || spec.chart_type === 'line') {
            config.options.scales = {
                x: {
                    stacked: spec.options.stacked,
                    title: {
                        display: Boolean(spec.options.x_axis_label),
                        text: spec.options.x_axis_label || ''
                    }
                },
                y: {
                    stacked: spec.options.stacked,
                    title: {
                        display: Boolean(spec.options.y_axis_label),
                        text: spec.options.y_axis_label || ''
                    }
                }
            };
        }
        new Chart(canvas.getContext('2d'), config);
    });
});
";

/// Escape HTML special characters to prevent XSS.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// A fixed block of named scalar metrics, rendered as one wide table row
#[derive(Debug, Clone)]
pub struct SummaryTable {
    title: String,
    rows: Vec<(String, String)>,
}

impl SummaryTable {
    /// Create an empty summary table
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    /// Append a named metric
    #[must_use]
    pub fn with_metric(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.rows.push((name.into(), value.into()));
        self
    }

    /// The (metric, value) pairs in insertion order
    #[must_use]
    pub fn rows(&self) -> &[(String, String)] {
        &self.rows
    }

    fn render(&self) -> String {
        let mut head = String::new();
        let mut cells = String::new();
        for (metric, value) in &self.rows {
            head.push_str(&format!("<th>{}</th>", escape_html(metric)));
            cells.push_str(&format!("<td>{}</td>", escape_html(value)));
        }

        format!(
            "<h3>{}</h3>\n<table class=\"summary\"><thead><tr>{head}</tr></thead>\
             <tbody><tr>{cells}</tr></tbody></table>\n",
            escape_html(&self.title)
        )
    }
}

/// One dashboard section: a heading, optional summary tables, charts
#[derive(Debug, Clone)]
pub struct Section {
    heading: String,
    tables: Vec<SummaryTable>,
    charts: Vec<ChartSpec>,
}

impl Section {
    /// Create an empty section
    #[must_use]
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            tables: Vec::new(),
            charts: Vec::new(),
        }
    }

    /// Append a summary table
    #[must_use]
    pub fn with_table(mut self, table: SummaryTable) -> Self {
        self.tables.push(table);
        self
    }

    /// Append a chart
    #[must_use]
    pub fn with_chart(mut self, chart: ChartSpec) -> Self {
        self.charts.push(chart);
        self
    }

    /// The section heading
    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// The section's charts in display order
    #[must_use]
    pub fn charts(&self) -> &[ChartSpec] {
        &self.charts
    }

    /// The section's summary tables in display order
    #[must_use]
    pub fn tables(&self) -> &[SummaryTable] {
        &self.tables
    }
}

/// A complete single-page dashboard
#[derive(Debug, Clone)]
pub struct DashboardPage {
    title: String,
    sections: Vec<Section>,
}

impl DashboardPage {
    /// Create an empty page
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Append a section
    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// The page sections in display order
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Every chart on the page, in canvas order
    #[must_use]
    pub fn chart_specs(&self) -> Vec<&ChartSpec> {
        self.sections
            .iter()
            .flat_map(|section| section.charts.iter())
            .collect()
    }

    /// Render the page as a self-contained HTML document with embedded
    /// Chart.js specs.
    ///
    /// # Errors
    ///
    /// Returns error if the chart specs fail to serialize.
    pub fn render(&self) -> Result<String> {
        // Escape for script context to prevent tag breakout
        let specs_json = serde_json::to_string(&self.chart_specs())?.replace("</", "<\\/");

        let mut body = String::new();
        let mut chart_index = 0usize;
        for section in &self.sections {
            body.push_str(&format!(
                "<section>\n<h2>{}</h2>\n",
                escape_html(&section.heading)
            ));
            for table in &section.tables {
                body.push_str(&table.render());
            }
            for _ in &section.charts {
                body.push_str(&format!(
                    "<div class=\"chart-card\"><canvas id=\"chart-{chart_index}\"></canvas></div>\n"
                ));
                chart_index += 1;
            }
            body.push_str("</section>\n");
        }

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{cdn}"></script>
    <style>{styles}</style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
{body}
    </div>
    <script>
const charts = {specs_json};
{script}
    </script>
</body>
</html>"#,
            title = escape_html(&self.title),
            cdn = CHART_JS_CDN,
            styles = STYLES,
            body = body,
            specs_json = specs_json,
            script = RENDER_SCRIPT,
        ))
    }
}
