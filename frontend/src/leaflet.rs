use js_sys::Array;
use log::{debug, warn};
use shared::models::map::{marker_options, tile_options, MapMarker, MAP_CENTER, MAP_ZOOM, TILE_URL};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::js::{call_method, global, lat_lng, to_js};

/// A Leaflet map mounted on a container. Dropping it calls `map.remove()`,
/// so the container can host a fresh map afterwards.
pub struct LeafletMap {
    map: JsValue,
}

impl LeafletMap {
    pub fn create(container: &HtmlElement, markers: &[MapMarker]) -> Result<Self, JsValue> {
        let leaflet = global("L")?;

        let map = call_method(&leaflet, "map", &Array::of1(container))?;
        call_method(
            &map,
            "setView",
            &Array::of2(&lat_lng(MAP_CENTER.0, MAP_CENTER.1), &JsValue::from(MAP_ZOOM)),
        )?;

        let tiles = call_method(
            &leaflet,
            "tileLayer",
            &Array::of2(&JsValue::from_str(TILE_URL), &to_js(&tile_options())?),
        )?;
        call_method(&tiles, "addTo", &Array::of1(&map))?;

        let options = to_js(&marker_options())?;
        for marker in markers {
            let circle = call_method(
                &leaflet,
                "circleMarker",
                &Array::of2(&lat_lng(marker.lat, marker.lng), &options),
            )?;
            call_method(&circle, "bindPopup", &Array::of1(&JsValue::from_str(&marker.popup_html)))?;
            call_method(&circle, "addTo", &Array::of1(&map))?;
        }

        debug!("Map initialised with {} markers", markers.len());
        Ok(Self { map })
    }
}

impl Drop for LeafletMap {
    fn drop(&mut self) {
        if let Err(e) = call_method(&self.map, "remove", &Array::new()) {
            warn!("Failed to remove map: {:?}", e);
        }
    }
}
