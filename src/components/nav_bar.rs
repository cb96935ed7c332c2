//! Top navigation bar.

use leptos::prelude::*;

use crate::config::AppConfig;

/// Static navigation chrome showing the configured brand.
#[component]
pub fn NavBar() -> impl IntoView {
    let brand = use_context::<AppConfig>().unwrap_or_default().brand;

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">{brand}</a>
        </nav>
    }
}
