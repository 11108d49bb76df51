use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"There is nothing here. The status map lives on the home page."</p>
            <A href="/">
                <button class="status-button">"Back to the map"</button>
            </A>
        </div>
    }
}
