//! Home page: navigation bar above the property list.

use leptos::prelude::*;

use crate::app::{AppLayout, compose, default_registry};

/// Default view, composed slot by slot from the component registry.
#[component]
pub fn HomePage() -> impl IntoView {
    let composed = default_registry().and_then(|registry| compose(&AppLayout::default(), &registry));

    match composed {
        Ok(views) => view! { <div class="home-page">{views}</div> }.into_any(),
        Err(e) => {
            log::error!("cannot compose home page: {e}");
            view! { <p class="home-page__error">"Page unavailable."</p> }.into_any()
        }
    }
}
