use log::error;
use serde_json::Value;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::chartjs::{ChartHandle, TooltipLabel};
use crate::js::describe;

#[derive(Properties, PartialEq)]
pub struct ChartCanvasProps {
    pub canvas_id: AttrValue,
    /// Full Chart.js configuration (`type`, `data`, `options`)
    pub config: Value,
    #[prop_or(TooltipLabel::Default)]
    pub tooltip: TooltipLabel,
    #[prop_or(AttrValue::Static("chart-box"))]
    pub class: AttrValue,
}

/// Canvas bound to one Chart.js instance. A new `config` destroys the
/// previous chart before the replacement is created.
#[function_component(ChartCanvas)]
pub fn chart_canvas(props: &ChartCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let handle = use_mut_ref(|| None::<ChartHandle>);

    {
        let canvas_ref = canvas_ref.clone();
        let handle = handle.clone();
        let tooltip = props.tooltip;
        use_effect_with(props.config.clone(), move |config| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                handle.borrow_mut().take();
                match ChartHandle::create(&canvas, config, tooltip) {
                    Ok(chart) => *handle.borrow_mut() = Some(chart),
                    Err(e) => error!("Failed to render chart #{}: {}", canvas.id(), describe(&e)),
                }
            }
            move || {
                handle.borrow_mut().take();
            }
        });
    }

    html! {
        <div class={props.class.clone()}>
            <canvas id={props.canvas_id.clone()} ref={canvas_ref}></canvas>
        </div>
    }
}
