use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid},
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle,
        LineStyleType, SplitLine, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Line},
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::utils::debounce::create_debounced_resize_listener;

const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";

/// The four chart shapes the dashboard draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Area,
}

/// One category series: x labels and their values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl From<(Vec<String>, Vec<f64>)> for Series {
    fn from((labels, values): (Vec<String>, Vec<f64>)) -> Self {
        Self { labels, values }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartPanelProps {
    /// DOM id the renderer draws into; must be unique on the page
    pub id: AttrValue,
    pub title: AttrValue,
    pub kind: ChartKind,
    pub series: Rc<Series>,
    pub color: AttrValue,
}

#[function_component(ChartPanel)]
pub fn chart_panel(props: &ChartPanelProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let id = props.id.clone();
        let kind = props.kind;
        let color = props.color.clone();

        use_effect_with(
            (props.series.clone(), container_ref),
            move |(series, container_ref)| {
                let listener: Option<EventListener> =
                    container_ref.cast::<HtmlElement>().and_then(|container| {
                        let chart = Rc::new(build_chart(kind, series, &color));
                        render_chart(&container, &id, &chart);

                        create_debounced_resize_listener(
                            move || render_chart(&container, &id, &chart),
                            Config::RESIZE_DEBOUNCE_MS,
                        )
                    });

                move || drop(listener)
            },
        );
    }

    html! {
        <section class="panel">
            <h2>{&props.title}</h2>
            <div class="chart-container" ref={container_ref}>
                <div id={props.id.clone()} />
            </div>
        </section>
    }
}

fn render_chart(container: &HtmlElement, id: &str, chart: &CharmingChart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(id, chart) {
        web_sys::console::error_1(&format!("Render error for {id}: {e:?}").into());
    }
}

/// Builds the chart definition for one panel.
pub fn build_chart(kind: ChartKind, series: &Series, color: &str) -> CharmingChart {
    let chart = CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("4%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.labels.clone())
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color(AXIS_COLOR))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(GRID_COLOR)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    match kind {
        ChartKind::Bar => chart.series(
            Bar::new()
                .data(series.values.clone())
                .item_style(ItemStyle::new().color(color)),
        ),
        ChartKind::Line => chart.series(
            Line::new()
                .data(series.values.clone())
                .smooth(true)
                .show_symbol(false)
                .item_style(ItemStyle::new().color(color)),
        ),
        ChartKind::Area => chart.series(
            Line::new()
                .data(series.values.clone())
                .smooth(true)
                .item_style(ItemStyle::new().color(color))
                .area_style(AreaStyle::new().color(color).opacity(0.8)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Series {
        Series::from((vec!["1990".to_string(), "2000".to_string()], vec![3.0, 8.0]))
    }

    #[test]
    fn test_bar_chart_options() {
        let options = build_chart(ChartKind::Bar, &series(), "#3b82f6").to_string();
        assert!(options.contains("\"bar\""));
        assert!(options.contains("1990"));
        assert!(options.contains("#3b82f6"));
    }

    #[test]
    fn test_line_chart_hides_symbols() {
        let options = build_chart(ChartKind::Line, &series(), "#10b981").to_string();
        assert!(options.contains("\"line\""));
        assert!(options.contains("showSymbol"));
        assert!(!options.contains("areaStyle"));
    }

    #[test]
    fn test_area_chart_fills() {
        let options = build_chart(ChartKind::Area, &series(), "#f59e0b").to_string();
        assert!(options.contains("areaStyle"));
    }

    #[test]
    fn test_empty_series_still_builds() {
        let options = build_chart(ChartKind::Line, &Series::default(), "#10b981").to_string();
        assert!(options.contains("\"line\""));
    }
}
