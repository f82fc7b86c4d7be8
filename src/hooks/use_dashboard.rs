use crate::models::view_model::DashboardViewModel;
use crate::services::api::DashboardClient;
use crate::services::loader::load_dashboard;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub enum DashboardState {
    Loading,
    Loaded(Rc<DashboardViewModel>),
    Error(String),
}

impl DashboardState {
    /// Returns the view model if it is loaded
    pub const fn data(&self) -> Option<&Rc<DashboardViewModel>> {
        match self {
            Self::Loaded(view) => Some(view),
            _ => None,
        }
    }
}

/// Loads the dashboard once on mount.
#[hook]
pub fn use_dashboard() -> UseStateHandle<DashboardState> {
    let state = use_state(|| DashboardState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |()| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let result = match DashboardClient::new() {
                    Ok(client) => {
                        let config = client.config();
                        gloo::console::log!(format!(
                            "Loading dashboard: {} endpoints from {}",
                            config.endpoints().all().len(),
                            config.base_url()
                        ));
                        load_dashboard(&client, config.endpoints()).await
                    }
                    Err(e) => Err(e),
                };

                match result {
                    Ok(view) if !aborted_check.get() => {
                        state.set(DashboardState::Loaded(Rc::new(view)));
                    }
                    Err(e) => {
                        gloo::console::error!(format!("Error fetching dashboard data: {e}"));
                        if !aborted_check.get() {
                            state.set(DashboardState::Error(e.to_string()));
                        }
                    }
                    _ => {} // Unmounted before the batch settled
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
