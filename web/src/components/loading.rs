use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

pub const DEFAULT_MAP_LOADING_LABEL: &str = "Connecting to the map service...";

/// Covers the map canvas while the SDK is still loading.
#[component]
pub fn MapLoadingOverlay(
    #[prop(into)] visible: Signal<bool>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let label = overlay_label(label);

    view! {
        <Show when=move || visible.get()>
            <div class="status-map-overlay" role="status" aria-live="polite">
                <Spinner size=SpinnerSize::Medium />
                <span class="status-map-overlay-label">{label.clone()}</span>
            </div>
        </Show>
    }
}

fn overlay_label(label: Option<String>) -> String {
    label
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MAP_LOADING_LABEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_label_defaults_when_missing_or_blank() {
        assert_eq!(overlay_label(None), DEFAULT_MAP_LOADING_LABEL);
        assert_eq!(overlay_label(Some("  ".to_string())), DEFAULT_MAP_LOADING_LABEL);
        assert_eq!(overlay_label(Some("Loading map...".to_string())), "Loading map...");
    }
}
