use leptos::prelude::*;
use shared_types::StatusKind;

#[component]
pub fn StatusLegend() -> impl IntoView {
    view! {
        <div class="map-legend">
            <h4>"Map Legend"</h4>
            <div class="legend-items">
                {StatusKind::ALL.into_iter().map(|status| {
                    view! {
                        <div class="legend-item">
                            <div
                                class="legend-marker"
                                style=format!("background: {};", status.color())
                            >
                                {status.icon()}
                            </div>
                            <span>{status.title()}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
