pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
pub const MAP_ID_VAR: &str = "GOOGLE_MAPS_MAP_ID";

pub const API_KEY_META: &str = "google-maps-api-key";
pub const MAP_ID_META: &str = "google-maps-map-id";

/// Google's shared id for vector maps; advanced markers refuse to render
/// without some map id.
pub const DEFAULT_MAP_ID: &str = "DEMO_MAP_ID";

/// Global the SDK calls once the core and every requested library are
/// defined.
pub const SDK_READY_CALLBACK: &str = "__statusMapSdkReady";

const SDK_BASE_URL: &str = "https://maps.googleapis.com/maps/api/js";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub maps_api_key: String,
    pub map_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            maps_api_key: String::new(),
            map_id: DEFAULT_MAP_ID.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            maps_api_key: non_empty(API_KEY_VAR).unwrap_or_default(),
            map_id: non_empty(MAP_ID_VAR).unwrap_or_else(|| DEFAULT_MAP_ID.to_string()),
        }
    }

    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| std::env::var(key).ok());
        if config.maps_api_key.is_empty() {
            tracing::warn!("{} is not set, the map will fail to load", API_KEY_VAR);
        }
        config
    }

    /// Reads the values the page shell rendered into `<meta>` tags.
    pub fn from_document() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        Self::from_lookup(|key| {
            let meta_name = match key {
                API_KEY_VAR => API_KEY_META,
                MAP_ID_VAR => MAP_ID_META,
                _ => return None,
            };
            document
                .as_ref()?
                .query_selector(&format!("meta[name=\"{}\"]", meta_name))
                .ok()
                .flatten()?
                .get_attribute("content")
        })
    }

    pub fn sdk_url(&self) -> String {
        format!(
            "{}?key={}&libraries=places,marker&v=weekly&callback={}",
            SDK_BASE_URL,
            urlencoding::encode(&self.maps_api_key),
            SDK_READY_CALLBACK
        )
    }
}
