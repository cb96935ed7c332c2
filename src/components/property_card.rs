//! Card component for a single property record.

#[cfg(test)]
#[path = "property_card_test.rs"]
mod property_card_test;

use leptos::prelude::*;
use listings::PropertyRecord;

/// One labelled field on a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRow {
    pub label: &'static str,
    pub value: String,
}

/// Fields a card displays, in display order.
///
/// Values are rendered as-is; a whole-number price shows without a fraction.
pub fn card_rows(record: &PropertyRecord) -> [CardRow; 4] {
    [
        CardRow { label: "Id", value: record.id().to_string() },
        CardRow { label: "Name", value: record.name().to_owned() },
        CardRow { label: "Type", value: record.kind().to_owned() },
        CardRow { label: "Price", value: record.price().to_string() },
    ]
}

/// A card rendering the record it is given.
#[component]
pub fn PropertyCard(record: PropertyRecord) -> impl IntoView {
    let id = record.id().to_string();
    let rows = card_rows(&record);

    view! {
        <article class="property-card" data-id=id>
            <dl class="property-card__fields">
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <div class="property-card__row">
                                <dt class="property-card__label">{row.label}</dt>
                                <dd class="property-card__value">{row.value}</dd>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </dl>
        </article>
    }
}
