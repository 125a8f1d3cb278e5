//! Header Component
//!
//! Brand mark and the dark mode toggle.

use leptos::prelude::*;

use super::icon::{Glyph, Icon};

/// Top bar with brand and theme toggle
#[component]
pub fn Header(
    is_dark: ReadSignal<bool>,
    #[prop(into)] on_theme_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-brand">
                <Icon glyph=Glyph::Leaf size=28 class="icon" />
                <span>"AgriFuture"</span>
            </div>
            <div class="header-controls">
                <button
                    class="theme-toggle"
                    aria-label="Toggle theme"
                    title=move || if is_dark.get() { "Switch to light mode" } else { "Switch to dark mode" }
                    on:click=move |_| on_theme_toggle.run(())
                >
                    {move || view! { <Icon glyph=Glyph::theme_toggle(is_dark.get()) size=20 /> }}
                </button>
            </div>
        </header>
    }
}
