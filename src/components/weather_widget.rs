//! Weather Widget Component
//!
//! Current conditions card.

use leptos::prelude::*;

use crate::models::WeatherInfo;
use super::icon::{Glyph, Icon};

#[component]
pub fn WeatherWidget(weather: WeatherInfo) -> impl IntoView {
    let WeatherInfo {
        location,
        temperature,
        description,
        humidity,
        wind_speed,
    } = weather;

    view! {
        <div class="card weather-widget">
            <div class="weather-main">
                <div class="icon">
                    <Icon glyph=Glyph::Sun size=80 />
                </div>
                <div>
                    <div class="weather-temp">{format!("{}°", temperature)}</div>
                    <p class="weather-desc">{description}</p>
                </div>
            </div>
            <div class="weather-details">
                <p>{location}</p>
                <p>
                    <Icon glyph=Glyph::Droplets size=16 class="inline-icon" />
                    {format!(" Humidity: {}", humidity)}
                </p>
                <p>
                    <Icon glyph=Glyph::Wind size=16 class="inline-icon" />
                    {format!(" Wind: {}", wind_speed)}
                </p>
            </div>
        </div>
    }
}
