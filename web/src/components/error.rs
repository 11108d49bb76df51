use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

use crate::error::StatusError;

/// Inline banner for the latest error. The next event replaces it.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<StatusError>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <MessageBar intent=MessageBarIntent::Error>
                    {err.to_string()}
                </MessageBar>
            }
        })
    }
}
