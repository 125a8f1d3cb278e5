//! Task List Card Component
//!
//! Checklist of farm tasks. Clicking a row reports its id upward.

use leptos::prelude::*;

use crate::models::Task;
use super::icon::{Glyph, Icon};
use super::task_row::TaskRow;

#[component]
pub fn TaskListCard(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] on_toggle: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="card task-list-card">
            <h2 class="card-title">
                <Icon glyph=Glyph::ClipboardList class="icon" />
                <span>"Farm Tasks"</span>
            </h2>
            <div class="task-list">
                // Keyed on id + state so a toggled row is rebuilt
                <For
                    each=move || tasks.get()
                    key=|task| (task.id, task.completed)
                    children=move |task| view! { <TaskRow task=task on_toggle=on_toggle /> }
                />
            </div>
        </div>
    }
}
