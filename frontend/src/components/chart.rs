use gloo_utils::document;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Single uniform bar color (royal blue).
const BAR_COLOR: &str = "#4169E1";

/// Per-series line colors, cycled when there are more series than colors.
const SERIES_COLORS: &[&str] = &[
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#14B8A6", "#F97316",
];

/// One labelled bar.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

/// One (x, y) point of a line series.
#[derive(Clone, Debug, PartialEq)]
pub struct XyPoint {
    pub x: f64,
    pub y: f64,
}

/// One named line series. Point order is the caller's order.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<XyPoint>,
}

/// Chart payloads the renderer knows how to draw.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Bar {
        title: String,
        points: Vec<DataPoint>,
    },
    MultiLine {
        title: String,
        x_axis: String,
        y_axis: String,
        series: Vec<ChartSeries>,
    },
}

/// Chart renderer component: injects the generated SVG markup into a
/// container div whenever the chart data changes.
#[derive(Properties, PartialEq)]
pub struct ChartRendererProps {
    pub chart: ChartData,
    pub chart_id: AttrValue,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[function_component(ChartRenderer)]
pub fn chart_renderer(props: &ChartRendererProps) -> Html {
    let chart_container_ref = use_node_ref();
    let chart = props.chart.clone();
    let chart_id = props.chart_id.clone();
    let width = props.width.unwrap_or(800);
    let height = props.height.unwrap_or(500);

    {
        let chart_container_ref = chart_container_ref.clone();

        use_effect_with((chart, chart_id), move |(chart, chart_id)| {
            if let Some(container) = chart_container_ref.cast::<HtmlElement>() {
                // Clear previous chart so re-renders never accumulate markup
                container.set_inner_html("");

                if let Some(markup) = chart_html(chart, width, height) {
                    let chart_element = document().create_element("div").unwrap();
                    chart_element.set_id(&format!("chart-{}", chart_id));
                    chart_element.set_inner_html(&markup);
                    container.append_child(&chart_element).unwrap();
                }
            }
            || ()
        });
    }

    html! {
        <div class="chart-container" ref={chart_container_ref}></div>
    }
}

/// Generates the chart markup, or `None` when there is nothing to draw.
/// Pure: the same input always yields identical markup.
pub fn chart_html(chart: &ChartData, width: u32, height: u32) -> Option<String> {
    match chart {
        ChartData::Bar { title, points } => bar_chart_html(title, points, width, height),
        ChartData::MultiLine {
            title,
            x_axis,
            y_axis,
            series,
        } => multi_line_chart_html(title, x_axis, y_axis, series, width, height),
    }
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn bar_chart_html(title: &str, points: &[DataPoint], width: u32, height: u32) -> Option<String> {
    if points.is_empty() {
        return None;
    }

    let max_value = points.iter().map(|p| p.value).fold(0.0, f64::max);
    let slot = width as f64 / points.len() as f64;
    let bar_width = slot * 0.8;

    let bars_html: String = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = i as f64 * slot + slot * 0.1;
            let bar_height = if max_value > 0.0 {
                (point.value / max_value) * (height as f64 * 0.7)
            } else {
                0.0
            };
            let y = height as f64 - bar_height - 80.0;
            let label_x = x + bar_width / 2.0;
            let label_y = height as f64 - 60.0;

            // Tick labels are rotated so long constructor names stay legible
            format!(
                r#"
                <g class="bar-group">
                    <rect x="{}" y="{}" width="{}" height="{}" fill="{}" class="bar"/>
                    <text x="{}" y="{}" text-anchor="end" transform="rotate(-45, {}, {})" class="bar-label">{}</text>
                    <text x="{}" y="{}" text-anchor="middle" class="bar-value">{:.0}</text>
                </g>
                "#,
                x,
                y,
                bar_width,
                bar_height,
                BAR_COLOR,
                label_x,
                label_y,
                label_x,
                label_y,
                escape_html(&point.label),
                label_x,
                y - 5.0,
                point.value
            )
        })
        .collect();

    let baseline_html = format!(
        "<line x1=\"0\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#e5e7eb\" stroke-width=\"1\"/>",
        height - 80,
        width,
        height - 80
    );

    Some(format!(
        r#"
        <div class="chart-wrapper">
            <h3 class="chart-title">{}</h3>
            <div class="chart-content">
                <svg width="{}" height="{}" viewBox="0 0 {} {}">
                    <g class="chart-area">
                        {}
                        {}
                    </g>
                </svg>
            </div>
        </div>
        "#,
        escape_html(title),
        width,
        height,
        width,
        height,
        baseline_html,
        bars_html
    ))
}

fn multi_line_chart_html(
    title: &str,
    x_axis: &str,
    y_axis: &str,
    series: &[ChartSeries],
    width: u32,
    height: u32,
) -> Option<String> {
    if series.iter().all(|s| s.points.is_empty()) {
        return None;
    }

    let all_points = || series.iter().flat_map(|s| s.points.iter());
    let min_x = all_points().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = all_points().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let max_y = all_points().map(|p| p.y).fold(0.0, f64::max);

    // Plot area inside the axis margins
    let left = 50.0;
    let top = 40.0;
    let plot_width = width as f64 - left - 20.0;
    let plot_height = height as f64 - top - 60.0;

    let scale_x = move |x: f64| {
        let range = max_x - min_x;
        if range > 0.0 {
            left + (x - min_x) / range * plot_width
        } else {
            left + plot_width / 2.0
        }
    };
    let scale_y = move |y: f64| {
        if max_y > 0.0 {
            top + plot_height - (y / max_y) * plot_height
        } else {
            top + plot_height / 2.0
        }
    };

    let series_html: String = series
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.points.is_empty())
        .map(|(i, s)| {
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            let path_points: Vec<String> = s
                .points
                .iter()
                .map(|p| format!("{},{}", scale_x(p.x), scale_y(p.y)))
                .collect();
            let markers_html: String = s
                .points
                .iter()
                .map(|p| {
                    format!(
                        r#"<circle cx="{}" cy="{}" r="3" fill="{}" class="line-marker"/>"#,
                        scale_x(p.x),
                        scale_y(p.y),
                        color
                    )
                })
                .collect();

            format!(
                r#"<path d="M {}" fill="none" stroke="{}" stroke-width="2" class="line-series" data-series="{}"/>{}"#,
                path_points.join(" L "),
                color,
                escape_html(&s.name),
                markers_html
            )
        })
        .collect();

    let legend_html: String = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            format!(
                r#"
                <div class="legend-item">
                    <span class="legend-color" style="background-color: {}"></span>
                    <span class="legend-label">{}</span>
                </div>
                "#,
                color,
                escape_html(&s.name)
            )
        })
        .collect();

    let axis_html = format!(
        "<g class=\"chart-axes\">\
            <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" class=\"x-axis-label\">{}</text>\
            <text x=\"20\" y=\"{}\" text-anchor=\"middle\" transform=\"rotate(-90, 20, {})\" class=\"y-axis-label\">{}</text>\
        </g>",
        width / 2,
        height - 25,
        escape_html(x_axis),
        height / 2,
        height / 2,
        escape_html(y_axis)
    );

    Some(format!(
        r#"
        <div class="chart-wrapper">
            <h3 class="chart-title">{}</h3>
            <div class="chart-content">
                <div class="line-chart">
                    <svg width="{}" height="{}" viewBox="0 0 {} {}">
                        <g class="chart-area">
                            {}
                            {}
                        </g>
                    </svg>
                </div>
                <div class="chart-legend">
                    {}
                </div>
            </div>
        </div>
        "#,
        escape_html(title),
        width,
        height,
        width,
        height,
        axis_html,
        series_html,
        legend_html
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(label: &str, value: f64) -> DataPoint {
        DataPoint {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn bar_chart_keeps_positional_correspondence() {
        let chart = ChartData::Bar {
            title: "Top Constructors by Wins".to_string(),
            points: vec![bar("Ferrari", 243.0), bar("McLaren", 179.0), bar("Williams", 114.0)],
        };

        let markup = chart_html(&chart, 800, 500).unwrap();
        assert_eq!(markup.matches("<rect").count(), 3);

        // Labels appear in input order
        let ferrari = markup.find("Ferrari").unwrap();
        let mclaren = markup.find("McLaren").unwrap();
        let williams = markup.find("Williams").unwrap();
        assert!(ferrari < mclaren && mclaren < williams);

        // One uniformly colored series
        assert_eq!(markup.matches(BAR_COLOR).count(), 3);
        // Tick labels rotated for legibility
        assert!(markup.contains("rotate(-45"));
    }

    #[test]
    fn empty_bar_chart_renders_nothing() {
        let chart = ChartData::Bar {
            title: "Top Constructors by Wins".to_string(),
            points: vec![],
        };
        assert_eq!(chart_html(&chart, 800, 500), None);
    }

    #[test]
    fn multi_line_chart_draws_one_path_per_series() {
        let chart = ChartData::MultiLine {
            title: "Driver Wins Over Time".to_string(),
            x_axis: "Year".to_string(),
            y_axis: "Number of Wins".to_string(),
            series: vec![
                ChartSeries {
                    name: "A".to_string(),
                    points: vec![XyPoint { x: 2020.0, y: 3.0 }, XyPoint { x: 2021.0, y: 5.0 }],
                },
                ChartSeries {
                    name: "B".to_string(),
                    points: vec![XyPoint { x: 2020.0, y: 1.0 }],
                },
            ],
        };

        let markup = chart_html(&chart, 800, 500).unwrap();
        assert_eq!(markup.matches("<path").count(), 2);
        assert_eq!(markup.matches("<circle").count(), 3);
        assert_eq!(markup.matches("legend-item").count(), 2);
        assert!(markup.contains(r#"data-series="A""#));
        assert!(markup.contains(r#"data-series="B""#));
        assert!(!markup.contains("NaN"));
    }

    #[test]
    fn empty_multi_line_chart_renders_nothing() {
        let chart = ChartData::MultiLine {
            title: "Driver Wins Over Time".to_string(),
            x_axis: "Year".to_string(),
            y_axis: "Number of Wins".to_string(),
            series: vec![],
        };
        assert_eq!(chart_html(&chart, 800, 500), None);
    }

    #[test]
    fn single_point_series_stays_finite() {
        let chart = ChartData::MultiLine {
            title: "Driver Wins Over Time".to_string(),
            x_axis: "Year".to_string(),
            y_axis: "Number of Wins".to_string(),
            series: vec![ChartSeries {
                name: "A".to_string(),
                points: vec![XyPoint { x: 2020.0, y: 0.0 }],
            }],
        };

        let markup = chart_html(&chart, 800, 500).unwrap();
        assert!(!markup.contains("NaN"));
        assert!(!markup.contains("inf"));
    }

    #[test]
    fn regenerating_markup_is_idempotent() {
        let chart = ChartData::Bar {
            title: "Top Constructors by Wins".to_string(),
            points: vec![bar("Ferrari", 243.0), bar("McLaren", 179.0)],
        };
        assert_eq!(chart_html(&chart, 800, 500), chart_html(&chart, 800, 500));
    }

    #[test]
    fn labels_are_escaped() {
        let chart = ChartData::Bar {
            title: "<script>".to_string(),
            points: vec![bar("A&B \"Racing\"", 1.0)],
        };

        let markup = chart_html(&chart, 800, 500).unwrap();
        assert!(markup.contains("&lt;script&gt;"));
        assert!(markup.contains("A&amp;B &quot;Racing&quot;"));
        assert!(!markup.contains("<script>"));
    }
}
