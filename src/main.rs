use yew::prelude::*;

use movie_dashboard::components::{Dashboard, Status};
use movie_dashboard::hooks::use_dashboard::use_dashboard;

#[function_component(App)]
fn app() -> Html {
    let state = use_dashboard();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Movie Dashboard"}</h1>
                <p>{"Análisis de datos de películas con FastAPI, PostgreSQL y MongoDB"}</p>
            </header>

            <main class="app-main">
                if let Some(view) = state.data() {
                    <Dashboard view={view.clone()} />
                } else {
                    <Status state={(*state).clone()} />
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
