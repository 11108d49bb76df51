use chrono::Local;
use leptos::{html, prelude::*};

use crate::{
    components::{ErrorBanner, MapLoadingOverlay, StatusLegend},
    config::AppConfig,
    maps::{load_sdk, GoogleMapAdapter},
    status::{Message, UiState},
    views::status_map::status_buttons::StatusButtons,
};

#[component]
pub fn StatusMapPage() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    // Browser-only handle, filled once the SDK is up.
    let adapter = RwSignal::new_local(None::<GoogleMapAdapter>);

    let map_ref = NodeRef::<html::Div>::new();
    let input_ref = NodeRef::<html::Input>::new();

    let dispatch = move |msg: Message| {
        adapter.with_untracked(|map| {
            ui.maybe_update(|state| state.update(msg, map.as_ref(), Local::now));
        });
    };

    Effect::new(move |_| {
        let (Some(container), Some(input)) = (map_ref.get(), input_ref.get()) else {
            return;
        };
        let config = AppConfig::from_document();

        load_sdk(&config, {
            let config = config.clone();
            move |result| match result {
                Ok(()) => {
                    if adapter.with_untracked(|a| a.is_some()) {
                        return;
                    }
                    match GoogleMapAdapter::mount(&container, input.clone(), &config, dispatch) {
                        Ok(mounted) => {
                            adapter.set(Some(mounted));
                            leptos::logging::log!("Map ready");
                            dispatch(Message::MapReady);
                        }
                        Err(e) => {
                            leptos::logging::error!("Failed to mount map: {}", e);
                            dispatch(Message::MapLoadFailed);
                        }
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("Mapping SDK failed to load: {}", e);
                    dispatch(Message::MapLoadFailed);
                }
            }
        });
    });

    let loading = Signal::derive(move || ui.with(|s| s.loading));
    let selected = Signal::derive(move || ui.with(|s| s.selected_status));
    let error = Signal::derive(move || ui.with(|s| s.error.clone()));
    let map_pending = Signal::derive(move || ui.with(|s| s.loading && s.error.is_none()));

    view! {
        <div class="status-map-page">
            <header class="status-map-header">
                <h1>"Emergency Status Map"</h1>
                <p class="status-map-prompt">{move || ui.with(UiState::prompt)}</p>
            </header>

            <StatusButtons
                loading=loading
                selected=selected
                on_select=move |status| dispatch(Message::StatusSelected(status))
            />

            <input
                type="text"
                class="status-map-search"
                placeholder="Search for an address..."
                node_ref=input_ref
            />

            <ErrorBanner error=error />

            <div class="status-map-canvas-wrapper">
                <div node_ref=map_ref class="status-map-canvas"></div>
                <MapLoadingOverlay
                    visible=map_pending
                    label="Loading map..."
                />
            </div>

            <StatusLegend />
        </div>
    }
}
