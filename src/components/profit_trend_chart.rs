//! Profit Trend Chart Component
//!
//! Line chart of monthly profit, drawn by Plotly into a container div.

use leptos::html::Div;
use leptos::prelude::*;

use crate::chart;
use crate::models::ProfitPoint;

#[component]
pub fn ProfitTrendChart(
    points: Vec<ProfitPoint>,
    is_dark: ReadSignal<bool>,
    #[prop(into)] element_id: String,
) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let div_id = element_id.clone();

    // Redraw once mounted and whenever the theme flips
    Effect::new(move |_| {
        let dark = is_dark.get();
        if container.get().is_none() {
            return;
        }
        match chart::render_profit_chart(&div_id, &points, dark) {
            Ok(()) => log::trace!("[CHART] profit trend drawn (dark={})", dark),
            Err(err) => log::error!("[CHART] profit trend failed: {}", err),
        }
    });

    view! {
        <div class="card profit-chart-card">
            <h2 class="card-title">"Monthly Profit Trend (KES)"</h2>
            <div class="chart-container" id=element_id node_ref=container></div>
        </div>
    }
}
