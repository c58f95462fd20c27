use log::error;
use shared::models::map::markers;
use shared::MapPoint;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::js::describe;
use crate::leaflet::LeafletMap;

#[derive(Properties, PartialEq)]
pub struct DistributionMapProps {
    pub points: Vec<MapPoint>,
}

/// World map with one marker per pro player
#[function_component(DistributionMap)]
pub fn distribution_map(props: &DistributionMapProps) -> Html {
    let container_ref = use_node_ref();
    let map = use_mut_ref(|| None::<LeafletMap>);

    {
        let container_ref = container_ref.clone();
        let map = map.clone();
        use_effect_with(props.points.clone(), move |points| {
            if let Some(container) = container_ref.cast::<HtmlElement>() {
                // Leaflet refuses to mount twice on the same node
                map.borrow_mut().take();
                match LeafletMap::create(&container, &markers(points)) {
                    Ok(created) => *map.borrow_mut() = Some(created),
                    Err(e) => error!("Failed to initialise map: {}", describe(&e)),
                }
            }
            move || {
                map.borrow_mut().take();
            }
        });
    }

    html! {
        <div id="map" class="map-box" ref={container_ref}></div>
    }
}
