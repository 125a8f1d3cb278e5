//! Task Row Component
//!
//! Single task in the checklist.

use leptos::prelude::*;

use crate::models::Task;
use crate::tasks::task_row_class;
use super::icon::{Glyph, Icon};

/// A single task row
#[component]
pub fn TaskRow(
    task: Task,
    on_toggle: Callback<u32>,
) -> impl IntoView {
    let id = task.id;
    let completed = task.completed;

    view! {
        <div
            class=task_row_class(completed)
            role="checkbox"
            aria-checked=completed.to_string()
            on:click=move |_| on_toggle.run(id)
        >
            <Icon glyph=Glyph::task_status(completed) size=20 class="icon" />
            <span>{task.text}</span>
        </div>
    }
}
