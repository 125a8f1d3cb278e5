//! Crop Performance Card Component
//!
//! Yield and price per crop, in fixture order.

use leptos::prelude::*;

use crate::models::CropRecord;
use super::icon::{Glyph, Icon};

#[component]
pub fn CropPerformanceCard(crops: Vec<CropRecord>) -> impl IntoView {
    view! {
        <div class="card crop-performance-card">
            <h2 class="card-title">
                <Icon glyph=Glyph::Leaf class="icon" />
                <span>"Crop Performance"</span>
            </h2>
            <div class="crop-list">
                <For
                    each=move || crops.clone()
                    key=|crop| crop.name.clone()
                    children=move |crop| view! { <CropRow crop=crop /> }
                />
            </div>
        </div>
    }
}

#[component]
fn CropRow(crop: CropRecord) -> impl IntoView {
    view! {
        <div class="crop-item">
            <div class="crop-info">
                <span class="crop-icon">{crop.icon}</span>
                <div>
                    <div class="crop-name">{crop.name}</div>
                    <div class="crop-yield">{crop.yield_text}</div>
                </div>
            </div>
            <div class="crop-profit">{crop.profit_text}</div>
        </div>
    }
}
