use crate::components::chart::{ChartKind, ChartPanel, Series};
use crate::components::summary::Summary;
use crate::components::tables::{DirectorsTable, TopRatedTable};
use crate::models::view_model::DashboardViewModel;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub view: Rc<DashboardViewModel>,
}

/// Loaded layout: cards, four charts, two tables
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let view = &props.view;

    let distribution = use_memo(view.clone(), |v| Series::from(v.distribution_series()));
    let trends = use_memo(view.clone(), |v| Series::from(v.rating_trend_series()));
    let themes = use_memo(view.clone(), |v| Series::from(v.theme_series()));
    let ratings = use_memo(view.clone(), |v| {
        Series::from(v.rating_distribution_series())
    });
    let directors = use_memo(view.clone(), |v| v.directors.clone());
    let top_rated = use_memo(view.clone(), |v| v.top_rated.clone());

    html! {
        <>
            <p class="loaded-at">{format!("Actualizado {}", view.loaded_at_label())}</p>

            <Summary stats={view.stats.clone()} />

            <div class="panel-grid">
                <ChartPanel
                    id="distribution-chart"
                    title="Distribución de Películas por Década"
                    kind={ChartKind::Bar}
                    series={distribution}
                    color="#3b82f6"
                />
                <ChartPanel
                    id="rating-trends-chart"
                    title="Tendencias de Rating a lo Largo del Tiempo"
                    kind={ChartKind::Line}
                    series={trends}
                    color="#10b981"
                />
            </div>

            <div class="panel-grid">
                <ChartPanel
                    id="themes-chart"
                    title="Temas de Películas por Década"
                    kind={ChartKind::Bar}
                    series={themes}
                    color="#6366f1"
                />
                <ChartPanel
                    id="rating-distribution-chart"
                    title="Distribución de Ratings"
                    kind={ChartKind::Area}
                    series={ratings}
                    color="#f59e0b"
                />
            </div>

            <div class="panel-grid">
                <DirectorsTable {directors} />
                <TopRatedTable movies={top_rated} />
            </div>
        </>
    }
}
