//! Binding to the global `Plotly` object loaded by the page shell.

use compute::{ComputeError, Figure, PlotSurface};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot_js(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;
}

fn to_js(value: &Value) -> compute::Result<JsValue> {
    // Plain objects, not `Map`s: Plotly reads properties directly.
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| ComputeError::Render(e.to_string()))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlotlySurface;

impl PlotSurface for PlotlySurface {
    fn is_available(&self) -> bool {
        js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("Plotly"))
            .map(|plotly| !plotly.is_undefined() && !plotly.is_null())
            .unwrap_or(false)
    }

    fn new_plot(&self, container_id: &str, figure: &Figure, config: &Value) -> compute::Result<()> {
        let traces = to_js(&Value::Array(figure.traces.clone()))?;
        let layout = to_js(&figure.layout)?;
        let config = to_js(config)?;

        new_plot_js(container_id, traces, layout, config)
            .map(|_| ())
            .map_err(|e| ComputeError::Render(e.as_string().unwrap_or_else(|| format!("{:?}", e))))
    }
}
