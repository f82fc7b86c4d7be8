use crate::models::stats::MovieStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: String,
    pub icon: AttrValue,
    pub description: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-card">
            <div class="stat-icon">{&props.icon}</div>
            <div>
                <h3>{&props.title}</h3>
                <p class="stat-value">{&props.value}</p>
                <p class="stat-description">{&props.description}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub stats: MovieStats,
}

/// The four headline cards
#[function_component(Summary)]
pub fn summary(props: &SummaryProps) -> Html {
    let stats = &props.stats;

    html! {
        <section class="summary-grid">
            <StatCard
                title="Total de Películas"
                value={stats.total_movies_label()}
                icon="🎬"
                description="Cargado desde PostgreSQL"
            />
            <StatCard
                title="Promedio de Votos"
                value={stats.avg_votes_label()}
                icon="👥"
                description="Votos promedio por película"
            />
            <StatCard
                title="Rating Promedio"
                value={stats.avg_rating_label()}
                icon="⭐"
                description="Rating general de películas"
            />
            <StatCard
                title="Tiempo Promedio"
                value={stats.avg_duration_label()}
                icon="⏱"
                description="Duración promedio de películas"
            />
        </section>
    }
}
