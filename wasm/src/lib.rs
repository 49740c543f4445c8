//! WebAssembly module for the Lychee Guard dashboard
//!
//! Provides client-side computation for:
//! - Fruit ripeness and health analysis from uploaded images or a canvas
//! - Insurance payout calculation
//! - Plan quotes and display labels

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Re-export shared types for use in JavaScript
pub use shared::analysis::*;
pub use shared::models::*;
pub use shared::payout::*;
pub use shared::types::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("lychee-guard wasm module loaded"));
}

fn to_js_error(err: shared::CoreError) -> JsValue {
    JsValue::from_str(&format!("{}: {}", err.code(), err))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

fn parse_language(language: &str) -> Language {
    match language {
        "en" | "english" => Language::English,
        _ => Language::Chinese,
    }
}

/// Analyze encoded image bytes (PNG or JPEG); returns AnalysisResult JSON
#[wasm_bindgen]
pub fn analyze_image_bytes(bytes: &[u8], language: &str) -> Result<String, JsValue> {
    let options = AnalysisOptions {
        language: parse_language(language),
        ..Default::default()
    };
    let result = analyze_image(bytes, &options).map_err(to_js_error)?;
    to_json(&result)
}

/// Analyze whatever is drawn on a 2D canvas; returns AnalysisResult JSON.
///
/// The caller draws the image already downscaled with
/// `downscaled_size` before calling this.
#[wasm_bindgen]
pub fn analyze_canvas(canvas_id: &str, language: &str) -> Result<String, JsValue> {
    let render_error = |msg: &str| to_js_error(shared::CoreError::RenderContext(msg.to_string()));

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| render_error("No document available"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| render_error("Canvas element not found"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| render_error("Element is not a canvas"))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|_| render_error("Failed to get canvas context"))?
        .ok_or_else(|| render_error("Failed to get canvas context"))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| render_error("Failed to get canvas context"))?;

    let image_data = ctx
        .get_image_data(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()))
        .map_err(|_| render_error("Failed to read canvas pixels"))?;
    let pixels = image_data.data();

    let buffer = PixelBuffer::new(image_data.width(), image_data.height(), &pixels.0)
        .map_err(to_js_error)?;
    to_json(&analyze_pixels(&buffer, parse_language(language)))
}

/// Target canvas size for an image, as `[width, height]`
#[wasm_bindgen]
pub fn downscaled_size(width: u32, height: u32) -> Vec<u32> {
    let (w, h) = downscaled_dimensions(width, height, DEFAULT_MAX_EDGE);
    vec![w, h]
}

/// Calculate a payout from a PayoutRequest JSON; returns PayoutResult JSON
#[wasm_bindgen]
pub fn calculate_payout_json(request_json: &str) -> Result<String, JsValue> {
    let request: PayoutRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid payout request JSON: {}", e)))?;

    let result = PayoutEngine::new().calculate(&request).map_err(to_js_error)?;
    to_json(&result)
}

/// Quote a plan by id; returns PlanQuote JSON
#[wasm_bindgen]
pub fn quote_plan_json(plan_id: &str, orchard_size: f64, market_price: f64) -> Result<String, JsValue> {
    let id: InsurancePlanId = plan_id.parse().map_err(|e: String| JsValue::from_str(&e))?;
    let quote = quote_plan(id, orchard_size, market_price).map_err(to_js_error)?;
    to_json(&quote)
}

/// Ripeness stage label for a score
#[wasm_bindgen]
pub fn ripeness_stage_label(score: f64, language: &str) -> String {
    classify_ripeness_stage(score)
        .label(parse_language(language))
        .to_string()
}

/// Health status label for a status code such as `pest_infected`
#[wasm_bindgen]
pub fn health_status_label(status: &str, language: &str) -> Result<String, JsValue> {
    let status: HealthStatus = serde_json::from_value(serde_json::Value::String(status.to_string()))
        .map_err(|_| JsValue::from_str(&format!("Unknown health status: {}", status)))?;
    Ok(status.label(parse_language(language)).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripeness_stage_label() {
        assert_eq!(ripeness_stage_label(29.0, "zh"), "未成熟");
        assert_eq!(ripeness_stage_label(30.0, "zh"), "绿熟期");
        assert_eq!(ripeness_stage_label(90.0, "en"), "Fully ripe");
    }

    #[test]
    fn test_downscaled_size() {
        assert_eq!(downscaled_size(1600, 1200), vec![400, 300]);
        assert_eq!(downscaled_size(120, 80), vec![120, 80]);
    }

    #[test]
    fn test_health_status_label() {
        assert_eq!(health_status_label("damaged", "zh").unwrap(), "损伤");
        assert_eq!(health_status_label("healthy", "en").unwrap(), "Healthy");
    }

    #[test]
    fn test_calculate_payout_json() {
        let request = r#"{
            "weather": {"temperature_celsius": 28, "humidity_percent": 75, "wind_speed": 12,
                        "precipitation": 45, "pressure_hpa": 1005, "timestamp": "2026-02-17T10:00:00Z"},
            "price": {"market_price": 12.5, "trigger_price": 16.1},
            "behavior": {"has_windproof_net": true, "has_spray_prevention": true,
                         "has_drainage": true, "has_group_insurance": true},
            "region": {"risk_level": 1.1},
            "policy": {"orchard_area": 10, "yield_per_unit_area": 1200, "base_price": 18}
        }"#;
        let json = calculate_payout_json(request).unwrap();
        let result: PayoutResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.disaster_index, 0.0);
        assert_eq!(result.price_index, 0.6);
        // 0.24 + 0.15 + 0.06 = 0.45
        assert!((result.total_payout_index - 0.45).abs() < 1e-9);
    }
}
