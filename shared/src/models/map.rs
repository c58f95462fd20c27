use serde_json::{json, Value};

use crate::dto::analytics::MapPoint;
use crate::models::format::escape_html;

pub const MAP_CENTER: (f64, f64) = (20.0, 0.0);
pub const MAP_ZOOM: u8 = 2;
pub const TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap &copy; CARTO";
pub const MARKER_COLOR: &str = "#ff4d4d";

/// A circle marker ready to be placed on the map
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub popup_html: String,
}

/// One marker per point carrying exactly a `[lat, lng]` pair.
pub fn markers(points: &[MapPoint]) -> Vec<MapMarker> {
    points
        .iter()
        .filter_map(|p| match p.coordinates.as_slice() {
            [lat, lng] => Some(MapMarker {
                lat: *lat,
                lng: *lng,
                popup_html: format!("<b>{}</b><br>{}", escape_html(&p.name), escape_html(&p.country)),
            }),
            _ => None,
        })
        .collect()
}

pub fn tile_options() -> Value {
    json!({ "attribution": TILE_ATTRIBUTION })
}

pub fn marker_options() -> Value {
    json!({
        "radius": 3,
        "fillColor": MARKER_COLOR,
        "color": "transparent",
        "weight": 0,
        "fillOpacity": 0.9
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn point(name: &str, coordinates: Vec<f64>) -> MapPoint {
        MapPoint { name: name.into(), country: "Ukraine".into(), coordinates }
    }

    #[test]
    fn skips_points_without_a_coordinate_pair() {
        let points = vec![
            point("Dendi", vec![49.0, 32.0]),
            point("Nobody", vec![]),
            point("Odd", vec![1.0, 2.0, 3.0]),
        ];
        let markers = markers(&points);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].lat, 49.0);
        assert_eq!(markers[0].lng, 32.0);
        assert_eq!(markers[0].popup_html, "<b>Dendi</b><br>Ukraine");
    }

    #[test]
    fn popup_text_is_escaped() {
        let markers = markers(&[point("<script>", vec![0.0, 0.0])]);
        assert_eq!(markers[0].popup_html, "<b>&lt;script&gt;</b><br>Ukraine");
    }

    #[test]
    fn marker_style() {
        let opts = marker_options();
        assert_eq!(opts["radius"], 3);
        assert_eq!(opts["fillColor"], MARKER_COLOR);
    }
}
