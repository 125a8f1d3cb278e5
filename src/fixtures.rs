//! Static Dashboard Data
//!
//! Mock data baked into the build. Built once at startup, never mutated.

use crate::models::{CropRecord, ProfitPoint, Task, WeatherInfo};

pub fn weather() -> WeatherInfo {
    WeatherInfo {
        location: "Narok, Kenya".to_string(),
        temperature: 24,
        description: "Sunny with light clouds".to_string(),
        humidity: "64%".to_string(),
        wind_speed: "12 km/h".to_string(),
    }
}

/// (name, yield, profit, icon) in display order
const CROPS: &[(&str, &str, &str, &str)] = &[
    ("Maize", "1.8 tons/acre", "KES 22,500/ton", "🌽"),
    ("Wheat", "1.5 tons/acre", "KES 30,000/ton", "🌾"),
    ("Potatoes", "8 tons/acre", "KES 5,500/bag", "🥔"),
    ("Beans", "0.6 tons/acre", "KES 70,000/ton", "🫘"),
];

pub fn crops() -> Vec<CropRecord> {
    CROPS
        .iter()
        .map(|(name, yield_text, profit_text, icon)| CropRecord {
            name: name.to_string(),
            yield_text: yield_text.to_string(),
            profit_text: profit_text.to_string(),
            icon: icon.to_string(),
        })
        .collect()
}

/// Chronological, Jan to Jun
const PROFIT_TREND: &[(&str, f64)] = &[
    ("Jan", 40000.0),
    ("Feb", 30000.0),
    ("Mar", 55000.0),
    ("Apr", 48000.0),
    ("May", 72000.0),
    ("Jun", 68000.0),
];

pub fn profit_trend() -> Vec<ProfitPoint> {
    PROFIT_TREND
        .iter()
        .map(|(month, profit)| ProfitPoint {
            month: month.to_string(),
            profit: *profit,
        })
        .collect()
}

pub fn initial_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Inspect Field A1 for pests", false),
        Task::new(2, "Schedule fertilizer delivery", true),
        Task::new(3, "Repair the irrigation pump", false),
        Task::new(4, "Check market prices for wheat", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_crop_order() {
        let names: Vec<String> = crops().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Maize", "Wheat", "Potatoes", "Beans"]);
    }

    #[test]
    fn test_profit_trend_is_chronological() {
        let points = profit_trend();
        let months: Vec<&str> = points.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(points[0].profit, 40000.0);
        assert_eq!(points[5].profit, 68000.0);
    }

    #[test]
    fn test_task_ids_unique() {
        let tasks = initial_tasks();
        let ids: HashSet<u32> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), tasks.len());
        assert_eq!(tasks.iter().filter(|t| t.completed).count(), 1);
    }

    #[test]
    fn test_weather() {
        let w = weather();
        assert_eq!(w.location, "Narok, Kenya");
        assert_eq!(w.temperature, 24);
        assert_eq!(w.humidity, "64%");
        assert_eq!(w.wind_speed, "12 km/h");
    }
}
