use js_sys::{Array, Function, Reflect};
use log::{debug, warn};
use serde_json::Value;
use shared::models::charts::scatter_tooltip_label;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

use crate::js::{call_method, get_path, global, to_js};

/// Tooltip label callbacks that need Rust-side formatting
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TooltipLabel {
    Default,
    /// `"Country: 1.27 density"` from the point's raw `{country, y}`
    ScatterDensity,
}

/// A live Chart.js instance. Dropping it destroys the chart and frees the canvas.
pub struct ChartHandle {
    instance: JsValue,
    _label_callback: Option<Closure<dyn Fn(JsValue) -> JsValue>>,
}

impl ChartHandle {
    pub fn create(canvas: &HtmlCanvasElement, config: &Value, tooltip: TooltipLabel) -> Result<Self, JsValue> {
        let ctor: Function = global("Chart")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("Chart is not a constructor"))?;
        let config = to_js(config)?;

        let label_callback = match tooltip {
            TooltipLabel::Default => None,
            TooltipLabel::ScatterDensity => {
                let callback = Closure::wrap(Box::new(scatter_density_label) as Box<dyn Fn(JsValue) -> JsValue>);
                let callbacks = get_path(&config, &["options", "plugins", "tooltip", "callbacks"])?;
                Reflect::set(&callbacks, &JsValue::from_str("label"), callback.as_ref().unchecked_ref())?;
                Some(callback)
            }
        };

        let instance = Reflect::construct(&ctor, &Array::of2(canvas, &config))?;
        debug!("Created chart on #{}", canvas.id());
        Ok(Self {
            instance,
            _label_callback: label_callback,
        })
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        if let Err(e) = call_method(&self.instance, "destroy", &Array::new()) {
            warn!("Failed to destroy chart: {:?}", e);
        }
    }
}

fn scatter_density_label(ctx: JsValue) -> JsValue {
    let country = get_path(&ctx, &["raw", "country"])
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    let y = get_path(&ctx, &["raw", "y"])
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    JsValue::from_str(&scatter_tooltip_label(&country, y))
}
