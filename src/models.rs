//! Dashboard Models
//!
//! Data structures behind each dashboard card.

use serde::{Deserialize, Serialize};

/// Current conditions shown by the weather widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    pub location: String,
    /// Degrees Celsius
    pub temperature: i32,
    pub description: String,
    pub humidity: String,
    pub wind_speed: String,
}

/// One row of the crop performance card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecord {
    pub name: String,
    pub yield_text: String,
    pub profit_text: String,
    /// Emoji glyph
    pub icon: String,
}

/// Monthly profit sample for the trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitPoint {
    pub month: String,
    pub profit: f64,
}

/// Farm task (only `completed` ever changes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u32, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            text: text.into(),
            completed,
        }
    }
}
