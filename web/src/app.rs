use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::{
    config::{AppConfig, API_KEY_META, MAP_ID_META},
    views::{not_found::NotFoundPage, status_map::StatusMapPage},
};

/// Page shell rendered by the host. The map settings travel to the client
/// as `<meta>` tags.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <meta name=API_KEY_META content=config.maps_api_key/>
                    <meta name=MAP_ID_META content=config.map_id/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/web.css"/>

        <Title text="Emergency Status Map"/>
        <Meta name="description" content="Declare that you need help, can offer help, or are safe."/>

        <ConfigProvider>
            <Router>
                <main>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=StatusMapPage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
