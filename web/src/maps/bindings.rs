//! Raw `wasm-bindgen` declarations for the parts of the Google Maps JS SDK
//! this app touches. No state and no logic lives here.

use js_sys::{Array, Function, Object, Reflect};
use shared_types::{LatLong, MapBounds};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"])]
    pub fn new(container: &HtmlElement, options: &Object) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setCenter)]
    pub fn set_center(this: &Map, center: &Object);

    #[wasm_bindgen(method, js_name = setZoom)]
    pub fn set_zoom(this: &Map, zoom: f64);

    #[wasm_bindgen(method, js_name = getBounds)]
    pub fn get_bounds(this: &Map) -> Option<LatLngBounds>;

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &Map, event: &str, handler: &Function) -> JsValue;

    #[derive(Debug, Clone)]
    pub type LatLng;

    #[wasm_bindgen(method)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method)]
    pub fn lng(this: &LatLng) -> f64;

    #[derive(Debug, Clone)]
    pub type LatLngBounds;

    #[wasm_bindgen(method, js_name = getNorthEast)]
    pub fn get_north_east(this: &LatLngBounds) -> LatLng;

    #[wasm_bindgen(method, js_name = getSouthWest)]
    pub fn get_south_west(this: &LatLngBounds) -> LatLng;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps", "places"])]
    #[derive(Debug, Clone)]
    pub type SearchBox;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps", "places"])]
    pub fn new(input: &HtmlInputElement) -> Result<SearchBox, JsValue>;

    #[wasm_bindgen(method, js_name = setBounds)]
    pub fn set_bounds(this: &SearchBox, bounds: &Object);

    #[wasm_bindgen(method, js_name = getPlaces)]
    pub fn get_places(this: &SearchBox) -> Option<Array>;

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &SearchBox, event: &str, handler: &Function) -> JsValue;

    #[derive(Debug, Clone)]
    pub type PlaceResult;

    #[wasm_bindgen(method, getter)]
    pub fn geometry(this: &PlaceResult) -> Option<PlaceGeometry>;

    #[wasm_bindgen(method, getter)]
    pub fn formatted_address(this: &PlaceResult) -> Option<String>;

    #[derive(Debug, Clone)]
    pub type PlaceGeometry;

    #[wasm_bindgen(method, getter)]
    pub fn location(this: &PlaceGeometry) -> Option<LatLng>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps", "marker"])]
    #[derive(Debug, Clone)]
    pub type AdvancedMarkerElement;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps", "marker"])]
    pub fn new(options: &Object) -> Result<AdvancedMarkerElement, JsValue>;

    #[wasm_bindgen(method, setter = map)]
    pub fn set_map(this: &AdvancedMarkerElement, map: &JsValue);

    #[wasm_bindgen(method, catch, js_name = addListener)]
    pub fn add_listener(
        this: &AdvancedMarkerElement,
        event: &str,
        handler: &Function,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Debug, Clone)]
    pub type InfoWindow;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"])]
    pub fn new(options: &Object) -> Result<InfoWindow, JsValue>;

    #[wasm_bindgen(method)]
    pub fn open(this: &InfoWindow, options: &Object);
}

/// Builds a plain JS object from key/value pairs.
pub fn js_object(entries: &[(&str, JsValue)]) -> Object {
    let object = Object::new();
    for (key, value) in entries {
        if let Err(e) = Reflect::set(&object, &JsValue::from_str(key), value) {
            leptos::logging::warn!("Failed to set `{}` on SDK options: {:?}", key, e);
        }
    }
    object
}

pub fn lat_lng_literal(at: LatLong) -> Object {
    js_object(&[("lat", JsValue::from(at.lat)), ("lng", JsValue::from(at.long))])
}

pub fn bounds_literal(bounds: MapBounds) -> Object {
    js_object(&[
        ("north", JsValue::from(bounds.north_east.lat)),
        ("east", JsValue::from(bounds.north_east.long)),
        ("south", JsValue::from(bounds.south_west.lat)),
        ("west", JsValue::from(bounds.south_west.long)),
    ])
}

impl LatLngBounds {
    pub fn to_map_bounds(&self) -> MapBounds {
        let ne = self.get_north_east();
        let sw = self.get_south_west();
        MapBounds {
            north_east: LatLong {
                lat: ne.lat(),
                long: ne.lng(),
            },
            south_west: LatLong {
                lat: sw.lat(),
                long: sw.lng(),
            },
        }
    }
}

/// Constructors `GoogleMapAdapter::mount` and `place_marker` rely on.
const REQUIRED_CONSTRUCTORS: [&[&str]; 4] = [
    &["google", "maps", "Map"],
    &["google", "maps", "InfoWindow"],
    &["google", "maps", "places", "SearchBox"],
    &["google", "maps", "marker", "AdvancedMarkerElement"],
];

/// True once the core SDK and both the `places` and `marker` libraries are
/// defined on `window`.
pub fn sdk_present() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let root = JsValue::from(window);
    REQUIRED_CONSTRUCTORS.iter().all(|path| {
        path.iter()
            .try_fold(root.clone(), |parent, key| {
                Reflect::get(&parent, &JsValue::from_str(key))
                    .ok()
                    .filter(|v| !v.is_undefined() && !v.is_null())
            })
            .is_some()
    })
}
