//! AgriFuture Dashboard App
//!
//! Top-level component: owns the fixtures, the task store and the theme flag,
//! and hands values and callbacks down to the cards.

use leptos::prelude::*;
use leptos_theme::{create_theme_signals, DocumentRoot};
use reactive_stores::Store;

use crate::components::{
    CropPerformanceCard, Header, ProfitTrendChart, TaskListCard, WeatherWidget, WelcomeBanner,
};
use crate::fixtures;
use crate::settings;
use crate::store::{store_toggle_task, DashboardState, DashboardStateStoreFields, DashboardStore};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store: DashboardStore = Store::new(DashboardState::new());
    let theme = create_theme_signals(false, &DocumentRoot);

    let tasks = Signal::derive(move || store.tasks().get());
    let on_task_toggle = Callback::new(move |id: u32| {
        if store_toggle_task(&store, id) {
            log::trace!("[APP] Task list re-rendering after toggle of {}", id);
        }
    });
    let on_theme_toggle = Callback::new(move |_: ()| {
        theme.toggle(&DocumentRoot);
    });

    let chart_element_id = settings::get_settings().chart_element_id.clone();

    view! {
        <div class="dashboard-container">
            <Header is_dark=theme.is_dark_read on_theme_toggle=on_theme_toggle />
            <main>
                <WelcomeBanner />
                <div class="main-grid">
                    <WeatherWidget weather=fixtures::weather() />
                    <CropPerformanceCard crops=fixtures::crops() />
                    <TaskListCard tasks=tasks on_toggle=on_task_toggle />
                    <ProfitTrendChart
                        points=fixtures::profit_trend()
                        is_dark=theme.is_dark_read
                        element_id=chart_element_id
                    />
                </div>
            </main>
        </div>
    }
}
