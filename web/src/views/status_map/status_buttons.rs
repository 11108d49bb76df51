use leptos::prelude::*;
use shared_types::StatusKind;

#[component]
pub fn StatusButtons<F>(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] selected: Signal<Option<StatusKind>>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(StatusKind) + 'static + Copy + Send + Sync,
{
    view! {
        <div class="status-buttons">
            {StatusKind::ALL.into_iter().map(|status| {
                view! {
                    <button
                        class="status-button"
                        class:selected=move || selected.get() == Some(status)
                        style=format!("--status-color: {};", status.color())
                        disabled=move || loading.get()
                        on:click=move |_| on_select(status)
                    >
                        <span class="status-button-icon">{status.icon()}</span>
                        <span>{status.title()}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
