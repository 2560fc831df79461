use catalog_core::{CatalogAction, TaxonomySection};
use leptos::*;
use system_ui::{Button, ButtonVariant, Grid, Heading, LayoutGap, Modal, Stack, TextRole};

use crate::runtime_context::use_catalog_runtime;

#[component]
/// Overlay listing every non-empty taxonomy section with its most frequent labels.
pub fn CategoryModal() -> impl IntoView {
    let runtime = use_catalog_runtime();
    let limit = runtime.config.with_value(|config| config.modal_preview_limit);
    let sections = store_value(runtime.catalog.with_value(|catalog| {
        catalog
            .taxonomy()
            .non_empty_sections()
            .cloned()
            .collect::<Vec<TaxonomySection>>()
    }));
    let open = Signal::derive(move || runtime.state.with(|state| state.categories_open));

    view! {
        <Modal
            open
            title="All Categories"
            layout_class="catalog-category-modal"
            on_close=Callback::new(move |()| runtime.dispatch_action(CatalogAction::CloseCategories))
        >
            <Grid gap=LayoutGap::Lg ui_slot="category-sections">
                {sections
                    .get_value()
                    .into_iter()
                    .map(|section| view! { <CategorySectionList section limit /> })
                    .collect_view()}
            </Grid>
        </Modal>
    }
}

#[component]
fn CategorySectionList(section: TaxonomySection, limit: usize) -> impl IntoView {
    let runtime = use_catalog_runtime();
    let TaxonomySection { name, categories } = section;

    view! {
        <Stack gap=LayoutGap::Sm ui_slot="category-section">
            <Heading role=TextRole::Label>{name}</Heading>
            {categories
                .into_iter()
                .take(limit)
                .map(|entry| {
                    let label = entry.label;
                    let selected = Signal::derive({
                        let label = label.clone();
                        move || runtime.state.with(|state| state.filter.is_selected(&label))
                    });
                    let toggle = Callback::new({
                        let label = label.clone();
                        move |_| {
                            runtime.dispatch_action(CatalogAction::ToggleCategory {
                                label: label.clone(),
                            });
                        }
                    });
                    view! {
                        <Button
                            variant=ButtonVariant::Quiet
                            layout_class="catalog-category-option"
                            selected
                            on_click=toggle
                        >
                            <span class="catalog-category-label">{label}</span>
                            <span class="catalog-category-count">{entry.count}</span>
                        </Button>
                    }
                })
                .collect_view()}
        </Stack>
    }
}
