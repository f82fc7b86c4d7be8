use crate::hooks::use_dashboard::DashboardState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: DashboardState,
}

/// Placeholder shown until the dashboard has data.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        DashboardState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Cargando dashboard..."}</p>
            </div>
        },
        DashboardState::Loaded(_) => html! {},
        DashboardState::Error(msg) => html! {
            <div class="status error">
                <p>{"No se pudieron cargar los datos del dashboard"}</p>
                <p class="status-detail">{msg}</p>
            </div>
        },
    }
}
