//! Welcome Banner Component

use leptos::prelude::*;

#[component]
pub fn WelcomeBanner() -> impl IntoView {
    view! {
        <div class="welcome-banner">
            <h1>"Hello Farmer!"</h1>
            <p>"Here is your farm's overview."</p>
        </div>
    }
}
