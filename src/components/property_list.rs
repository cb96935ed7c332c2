//! List container rendering one card per listing.

use leptos::prelude::*;
use listings::PropertyRecord;

use crate::components::property_card::PropertyCard;
use crate::state::listings::ListingsState;

/// Renders every record in [`ListingsState`] as a [`PropertyCard`], in order.
///
/// Cards are keyed by record id. An empty list shows a short note instead.
#[component]
pub fn PropertyList() -> impl IntoView {
    let listings = expect_context::<RwSignal<ListingsState>>();
    let has_items = move || listings.with(|state| !state.is_empty());

    view! {
        <section class="property-list">
            <Show
                when=has_items
                fallback=|| view! { <p class="property-list__empty">"No properties listed."</p> }
            >
                <For
                    each=move || listings.get().items
                    key=PropertyRecord::id
                    children=move |record: PropertyRecord| view! { <PropertyCard record=record/> }
                />
            </Show>
        </section>
    }
}
