//! UI Components
//!
//! Presentational Leptos components for the dashboard cards.

mod icon;
mod header;
mod welcome_banner;
mod weather_widget;
mod crop_performance_card;
mod task_row;
mod task_list_card;
mod profit_trend_chart;

pub use header::Header;
pub use welcome_banner::WelcomeBanner;
pub use weather_widget::WeatherWidget;
pub use crop_performance_card::CropPerformanceCard;
pub use task_list_card::TaskListCard;
pub use profit_trend_chart::ProfitTrendChart;
