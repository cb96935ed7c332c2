//! Root application component with routing, context providers, and the
//! component registry that composes the home page.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::{nav_bar::NavBar, property_list::PropertyList};
use crate::config::AppConfig;
use crate::pages::home::HomePage;
use crate::registry::{ComponentRegistry, RegistryError};
use crate::routes::{RouteTable, View};
use crate::state::listings::ListingsState;

/// Registry selector for the navigation bar.
pub const NAV_BAR: &str = "app-nav-bar";
/// Registry selector for the property list container.
pub const COMPONENT_LIST: &str = "app-component-list";

/// Slots the home page is composed of, top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppLayout {
    slots: Vec<&'static str>,
}

impl Default for AppLayout {
    fn default() -> Self {
        Self { slots: vec![NAV_BAR, COMPONENT_LIST] }
    }
}

impl AppLayout {
    pub fn slots(&self) -> &[&'static str] {
        &self.slots
    }
}

/// Build one instance per layout slot, in slot order.
///
/// # Errors
///
/// Returns [`RegistryError::Unknown`] for the first slot with no registered
/// component.
pub fn compose<V>(layout: &AppLayout, registry: &ComponentRegistry<V>) -> Result<Vec<V>, RegistryError> {
    layout.slots().iter().map(|slot| registry.build(slot)).collect()
}

/// Register the page-level components under their selectors.
///
/// # Errors
///
/// Returns [`RegistryError::Duplicate`] if a selector is already taken.
pub fn register_components<V>(
    registry: &mut ComponentRegistry<V>,
    nav_bar: fn() -> V,
    component_list: fn() -> V,
) -> Result<(), RegistryError> {
    registry.register(NAV_BAR, nav_bar)?;
    registry.register(COMPONENT_LIST, component_list)
}

/// Registry holding the app's page-level Leptos components.
///
/// # Errors
///
/// See [`register_components`].
pub fn default_registry() -> Result<ComponentRegistry<AnyView>, RegistryError> {
    let mut registry = ComponentRegistry::<AnyView>::new();
    register_components(
        &mut registry,
        || view! { <NavBar/> }.into_any(),
        || view! { <PropertyList/> }.into_any(),
    )?;
    Ok(registry)
}

/// Root application component.
///
/// Provides config and listing state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_env();
    let title = config.title.clone();
    let listings = RwSignal::new(ListingsState::load());

    provide_context(config);
    provide_context(listings);

    view! {
        <Title text=title/>

        <Router>
            <Routes fallback=|| view! { <RouteFallback/> }>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// Resolves unmatched URLs through [`RouteTable`].
#[component]
fn RouteFallback() -> impl IntoView {
    let pathname = use_location().pathname.get_untracked();
    match RouteTable::default().resolve(&pathname) {
        View::Home => view! { <HomePage/> },
    }
}
