use leptos::task::spawn_local;
use shared_types::{LatLong, MapBounds};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::{
    config::AppConfig,
    error::MapError,
    maps::bindings::{
        bounds_literal, js_object, lat_lng_literal, sdk_present, AdvancedMarkerElement,
        InfoWindow, Map, PlaceResult, SearchBox,
    },
    status::{
        flow::{DEFAULT_CENTER, DEFAULT_ZOOM},
        MapProvider, MarkerSpec, Message, PlaceCandidate,
    },
};

/// Browser-side `MapProvider` backed by the Google Maps JS SDK.
pub struct GoogleMapAdapter {
    map: Map,
    search_box: SearchBox,
    input: HtmlInputElement,
}

impl GoogleMapAdapter {
    /// Builds the map inside `container`, binds the search box to `input`
    /// and forwards SDK events to `dispatch`.
    ///
    /// SDK events are dispatched from a fresh task so a handler never runs
    /// while another one still holds the UI state.
    pub fn mount(
        container: &HtmlElement,
        input: HtmlInputElement,
        config: &AppConfig,
        dispatch: impl Fn(Message) + Copy + 'static,
    ) -> Result<Self, MapError> {
        if !sdk_present() {
            return Err(MapError::SdkUnavailable);
        }

        let options = js_object(&[
            ("center", JsValue::from(lat_lng_literal(DEFAULT_CENTER))),
            ("zoom", JsValue::from(DEFAULT_ZOOM)),
            ("mapId", JsValue::from_str(&config.map_id)),
            ("zoomControl", JsValue::from(true)),
            ("panControl", JsValue::from(true)),
            ("mapTypeControl", JsValue::from(false)),
            ("streetViewControl", JsValue::from(false)),
        ]);
        let map = Map::new(container, &options).map_err(|e| MapError::Construction {
            what: "map",
            detail: format!("{:?}", e),
        })?;
        let search_box = SearchBox::new(&input).map_err(|e| MapError::Construction {
            what: "search box",
            detail: format!("{:?}", e),
        })?;

        let bounds_source = map.clone();
        let on_bounds: Closure<dyn FnMut()> = Closure::new(move || {
            if let Some(bounds) = bounds_source.get_bounds() {
                let msg = Message::BoundsChanged(bounds.to_map_bounds());
                spawn_local(async move { dispatch(msg) });
            }
        });
        map.add_listener("bounds_changed", on_bounds.as_ref().unchecked_ref());
        on_bounds.forget();

        let places_source = search_box.clone();
        let on_places: Closure<dyn FnMut()> = Closure::new(move || {
            let candidates = places_source
                .get_places()
                .map(|places| {
                    places
                        .iter()
                        .map(|place| to_candidate(&place.unchecked_into::<PlaceResult>()))
                        .collect()
                })
                .unwrap_or_default();
            let msg = Message::PlacesChanged(candidates);
            spawn_local(async move { dispatch(msg) });
        });
        search_box.add_listener("places_changed", on_places.as_ref().unchecked_ref());
        on_places.forget();

        Ok(Self {
            map,
            search_box,
            input,
        })
    }

    fn document() -> Result<Document, MapError> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| MapError::MarkerContent("no document".to_string()))
    }

    fn badge(document: &Document, spec: &MarkerSpec) -> Result<HtmlElement, MapError> {
        let badge = create_div(document).map_err(MapError::MarkerContent)?;
        badge
            .set_attribute("style", &spec.badge_style())
            .map_err(|e| MapError::MarkerContent(format!("{:?}", e)))?;
        badge.set_text_content(Some(spec.badge_glyph()));
        Ok(badge)
    }

    fn popup(document: &Document, spec: &MarkerSpec) -> Result<HtmlElement, String> {
        let popup = create_div(document)?;
        popup.set_class_name("status-popup");

        let title = document.create_element("strong").map_err(|e| format!("{:?}", e))?;
        title.set_text_content(Some(&spec.popup.title));
        popup.append_child(&title).map_err(|e| format!("{:?}", e))?;

        let lines = spec
            .popup
            .address
            .iter()
            .cloned()
            .chain(std::iter::once(spec.popup.placed_at_label()));
        for line in lines {
            let row = create_div(document)?;
            row.set_text_content(Some(&line));
            popup.append_child(&row).map_err(|e| format!("{:?}", e))?;
        }
        Ok(popup)
    }

    fn attach_popup(
        &self,
        document: &Document,
        marker: &AdvancedMarkerElement,
        spec: &MarkerSpec,
    ) -> Result<(), MapError> {
        let content = Self::popup(document, spec).map_err(MapError::PopupAttach)?;
        let options = js_object(&[("content", JsValue::from(content))]);
        let info_window = InfoWindow::new(&options)
            .map_err(|e| MapError::PopupAttach(format!("{:?}", e)))?;

        let anchor = marker.clone();
        let map = self.map.clone();
        let on_click: Closure<dyn FnMut()> = Closure::new(move || {
            info_window.open(&js_object(&[
                ("anchor", JsValue::from(anchor.clone())),
                ("map", JsValue::from(map.clone())),
            ]));
        });
        marker
            .add_listener("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| MapError::PopupAttach(format!("{:?}", e)))?;
        on_click.forget();
        Ok(())
    }
}

impl MapProvider for GoogleMapAdapter {
    fn recenter(&self, at: LatLong, zoom: f64) {
        self.map.set_center(&lat_lng_literal(at));
        self.map.set_zoom(zoom);
    }

    fn place_marker(&self, spec: &MarkerSpec) -> Result<(), MapError> {
        let document = Self::document()?;
        let badge = Self::badge(&document, spec)?;

        let marker = AdvancedMarkerElement::new(&js_object(&[
            ("map", JsValue::from(self.map.clone())),
            ("position", JsValue::from(lat_lng_literal(spec.position))),
            ("content", JsValue::from(badge)),
            ("title", JsValue::from_str(&spec.popup.title)),
        ]))
        .map_err(|e| MapError::MarkerContent(format!("{:?}", e)))?;

        if let Err(e) = self.attach_popup(&document, &marker, spec) {
            marker.set_map(&JsValue::NULL);
            return Err(e);
        }
        Ok(())
    }

    fn clear_search_input(&self) {
        self.input.set_value("");
    }

    fn focus_search_input(&self) {
        let _ = self.input.focus();
    }

    fn bias_search(&self, bounds: MapBounds) {
        self.search_box.set_bounds(&bounds_literal(bounds));
    }
}

fn create_div(document: &Document) -> Result<HtmlElement, String> {
    document
        .create_element("div")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| "created element is not an HtmlElement".to_string())
}

fn to_candidate(place: &PlaceResult) -> PlaceCandidate {
    PlaceCandidate {
        position: place
            .geometry()
            .and_then(|geometry| geometry.location())
            .map(|location| LatLong {
                lat: location.lat(),
                long: location.lng(),
            }),
        formatted_address: place.formatted_address(),
    }
}
