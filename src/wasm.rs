// WebAssembly bindings for the unit formatter
use crate::units::{exact_u64, make_consecutive_units, make_unit, utx, UnitFormatter};
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Label as received from JavaScript: a suffix or a `(count) => string` callback
enum JsLabel {
    Suffix(String),
    Callback(Function),
}

#[wasm_bindgen]
pub struct UtxWasm {
    formatter: UnitFormatter,
    // Aligned with formatter.units(), coarsest first
    labels: Vec<JsLabel>,
}

fn to_integer(value: f64, what: &str) -> Result<u64, JsValue> {
    exact_u64(value).ok_or_else(|| {
        JsValue::from_str(&format!(
            "{} must be a non-negative integer below 2^64, got {}",
            what, value
        ))
    })
}

#[wasm_bindgen]
impl UtxWasm {
    /// units: array of `{ base: number, label: string | function }`
    /// consecutive: when true, units are finest-first with relative bases
    #[wasm_bindgen(constructor)]
    pub fn new(units: Array, consecutive: bool) -> Result<UtxWasm, JsValue> {
        let mut rust_units = Vec::with_capacity(units.length() as usize);
        let mut labels = Vec::with_capacity(units.length() as usize);

        for (index, entry) in units.iter().enumerate() {
            let base = Reflect::get(&entry, &JsValue::from_str("base"))?
                .as_f64()
                .ok_or_else(|| JsValue::from_str(&format!("unit {} has no numeric base", index)))?;
            let base = to_integer(base, "base")?;

            let label = Reflect::get(&entry, &JsValue::from_str("label"))?;
            let label = if let Some(text) = label.as_string() {
                JsLabel::Suffix(text)
            } else if label.is_function() {
                JsLabel::Callback(label.unchecked_into::<Function>())
            } else {
                return Err(JsValue::from_str(&format!(
                    "unit {} label must be a string or a function",
                    index
                )));
            };

            // Rendering happens on the JS side; the Rust label is unused
            rust_units.push(make_unit(base, ""));
            labels.push(label);
        }

        let absolute = if consecutive {
            labels.reverse();
            make_consecutive_units(&rust_units).map_err(|e| JsValue::from_str(&e.to_string()))?
        } else {
            rust_units
        };

        let formatter = utx(absolute).map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(UtxWasm { formatter, labels })
    }

    /// Format a value, returning an array of segment strings
    #[wasm_bindgen]
    pub fn format(&self, value: f64, no_zero: bool) -> Result<Array, JsValue> {
        let value = to_integer(value, "value")?;
        let decomposition = self.formatter.decompose(value);
        let segments = Array::new();

        for (label, count) in self.labels.iter().zip(decomposition.counts) {
            if no_zero && count == 0 {
                continue;
            }

            let segment = match label {
                JsLabel::Suffix(suffix) => format!("{}{}", count, suffix),
                JsLabel::Callback(f) => f
                    .call1(&JsValue::NULL, &JsValue::from_f64(count as f64))?
                    .as_string()
                    .ok_or_else(|| JsValue::from_str("label function must return a string"))?,
            };
            segments.push(&JsValue::from_str(&segment));
        }

        Ok(segments)
    }
}
