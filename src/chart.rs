//! Plotly Chart Bridge
//!
//! Builds plotly trace/layout values for the profit chart and hands them
//! to the global `Plotly` object loaded by index.html.

use plotly::common::{Font, Label, Line, LineShape, Marker, Mode, Title};
use plotly::layout::{Axis, Margin};
use plotly::{Configuration, Layout, Scatter};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::ProfitPoint;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = react)]
    fn plotly_react(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;
}

pub const LINE_COLOR: &str = "#8D6E63";
const GRID_COLOR: &str = "rgba(128, 128, 128, 0.2)";
const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";

/// Theme-dependent chart colours (mirrors the CSS variables)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPalette {
    pub text: &'static str,
    pub tooltip_bg: &'static str,
    pub border: &'static str,
}

pub fn palette(is_dark: bool) -> ChartPalette {
    if is_dark {
        ChartPalette {
            text: "#a8b3a4",
            tooltip_bg: "#1f2a22",
            border: "#34423a",
        }
    } else {
        ChartPalette {
            text: "#66705f",
            tooltip_bg: "#ffffff",
            border: "#e2e6dc",
        }
    }
}

/// Profit line, one point per sample, in input order
pub fn profit_trace(points: &[ProfitPoint]) -> Box<Scatter<String, f64>> {
    let months: Vec<String> = points.iter().map(|p| p.month.clone()).collect();
    let profits: Vec<f64> = points.iter().map(|p| p.profit).collect();

    Scatter::new(months, profits)
        .name("Profit")
        .mode(Mode::LinesMarkers)
        .line(Line::new().color(LINE_COLOR).width(3.0).shape(LineShape::Spline))
        .marker(Marker::new().color(LINE_COLOR).size(8))
        .hover_template("%{x}<br>KES %{y:,.0f}<extra></extra>")
}

pub fn profit_layout(is_dark: bool) -> Layout {
    let colors = palette(is_dark);
    let axis = |title: &str| {
        Axis::new()
            .title(Title::with_text(title))
            .show_grid(true)
            .grid_color(GRID_COLOR)
            .line_color(colors.text)
            .tick_font(Font::new().color(colors.text))
    };

    Layout::new()
        .margin(Margin::new().top(5).right(30).left(20).bottom(5))
        .paper_background_color(TRANSPARENT)
        .plot_background_color(TRANSPARENT)
        .font(Font::new().color(colors.text))
        .show_legend(false)
        .auto_size(true)
        .hover_label(
            Label::new()
                .background_color(colors.tooltip_bg)
                .border_color(colors.border),
        )
        .x_axis(axis("Month"))
        .y_axis(axis("Profit (KES)"))
}

fn chart_config() -> Configuration {
    Configuration::new().responsive(true).display_logo(false)
}

/// Draw (or redraw) the profit chart into the element with id `div_id`
pub fn render_profit_chart(div_id: &str, points: &[ProfitPoint], is_dark: bool) -> Result<(), String> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();

    let trace = profit_trace(points)
        .serialize(&serializer)
        .map_err(|e| e.to_string())?;
    let layout = profit_layout(is_dark)
        .serialize(&serializer)
        .map_err(|e| e.to_string())?;
    let config = chart_config()
        .serialize(&serializer)
        .map_err(|e| e.to_string())?;

    let data = js_sys::Array::of1(&trace);
    plotly_react(div_id, data.into(), layout, config)
        .map_err(|e| format!("Plotly.react failed: {:?}", e))?;

    log::trace!("[CHART] Rendered {} points into #{}", points.len(), div_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::profit_trend;
    use serde_json::{json, Value};

    #[test]
    fn test_trace_keeps_points_in_order() {
        let trace = serde_json::to_value(profit_trace(&profit_trend())).unwrap();

        assert_eq!(trace["x"], json!(["Jan", "Feb", "Mar", "Apr", "May", "Jun"]));
        assert_eq!(
            trace["y"],
            json!([40000.0, 30000.0, 55000.0, 48000.0, 72000.0, 68000.0])
        );
        assert_eq!(trace["mode"], json!("lines+markers"));
        assert_eq!(trace["line"]["color"], json!(LINE_COLOR));
    }

    #[test]
    fn test_trace_with_no_points() {
        let trace = serde_json::to_value(profit_trace(&[])).unwrap();
        assert_eq!(trace["x"], json!([]));
        assert_eq!(trace["y"], json!([]));
    }

    #[test]
    fn test_layout_follows_theme() {
        let light = serde_json::to_value(profit_layout(false)).unwrap();
        let dark = serde_json::to_value(profit_layout(true)).unwrap();

        assert_eq!(light["font"]["color"], json!(palette(false).text));
        assert_eq!(dark["font"]["color"], json!(palette(true).text));
        assert_ne!(light["font"]["color"], dark["font"]["color"]);
        assert_eq!(light["showlegend"], Value::Bool(false));
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(palette(true), palette(false));
    }
}
