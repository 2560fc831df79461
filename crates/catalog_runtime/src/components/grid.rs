use catalog_core::{is_quick_filter_active, CatalogAction, IconRecord, QuickFilter};
use leptos::ev::MouseEvent;
use leptos::*;
use leptos_router::A;
use system_ui::{
    Button, ButtonVariant, Cluster, EmptyState, Grid, Heading, Icon, IconButton, IconName,
    IconSize, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, Pill, SearchField, Stack,
    Text, TextRole, TextTone,
};

use super::{icon_detail_href, sentinel::RevealSentinel, CategoryModal};
use crate::runtime_context::use_catalog_runtime;

#[component]
/// Browsing page: search header, quick filters, the paginated tile grid, and the category browser.
pub fn CatalogGrid() -> impl IntoView {
    let runtime = use_catalog_runtime();
    let (theme, density) = runtime
        .config
        .with_value(|config| (config.theme.token(), config.grid_density.token()));

    let visible = create_memo(move |_| runtime.visible_records());
    let filtered_len = create_memo(move |_| runtime.filtered_len());
    let has_more = create_memo(move |_| runtime.has_more());

    view! {
        <div class="catalog-page" data-catalog-theme=theme>
            <CatalogHeader filtered_len />
            <main class="catalog-main">
                <Show
                    when=move || filtered_len.get() != 0
                    fallback=|| view! { <NoResults /> }
                >
                    <Grid density ui_slot="icon-grid" layout_class="catalog-grid">
                        <For
                            each=move || visible.get()
                            key=|record| record.id.clone()
                            children=move |record| view! { <IconTile record /> }
                        />
                    </Grid>
                    <Show when=move || has_more.get() fallback=|| view! { <GridFooter /> }>
                        <RevealSentinel />
                    </Show>
                </Show>
            </main>
            <CategoryModal />
        </div>
    }
}

#[component]
fn CatalogHeader(filtered_len: Memo<usize>) -> impl IntoView {
    let runtime = use_catalog_runtime();
    let state = runtime.state;
    let (placeholder, quick_filters) = runtime
        .config
        .with_value(|config| (config.search_placeholder.clone(), config.quick_filters.clone()));

    let query = Signal::derive(move || state.with(|state| state.filter.query().to_string()));
    let active_filters = Signal::derive(move || state.with(|state| state.filter.active_filters_display()));
    let summary = move || state.with(|state| state.result_summary(filtered_len.get()));

    view! {
        <header class="catalog-header">
            <Stack gap=LayoutGap::Md align=LayoutAlign::Center padding=LayoutPadding::Md ui_slot="catalog-header">
                <Cluster gap=LayoutGap::Sm layout_class="catalog-search">
                    <SearchField
                        value=query
                        placeholder=placeholder.clone()
                        aria_label=placeholder
                        on_input=Callback::new(move |query: String| {
                            runtime.dispatch_action(CatalogAction::SetQuery { query });
                        })
                    />
                    <Show when=move || !query.with(String::is_empty)>
                        <IconButton
                            icon=IconName::Dismiss
                            aria_label="Clear search"
                            size=IconSize::Sm
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(CatalogAction::ClearFilters);
                            })
                        />
                    </Show>
                </Cluster>
                <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Center ui_slot="quick-filters">
                    {quick_filters
                        .into_iter()
                        .map(|quick_filter| view! { <QuickFilterPill quick_filter /> })
                        .collect_view()}
                    <Pill
                        selected=Signal::derive(move || state.with(|state| state.categories_open))
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(CatalogAction::OpenCategories);
                        })
                    >
                        "More"
                    </Pill>
                </Cluster>
                <Show when=move || !active_filters.with(String::is_empty)>
                    <Text role=TextRole::Caption tone=TextTone::Secondary layout_class="catalog-active-filters">
                        "Filters: "
                        {move || active_filters.get()}
                    </Text>
                </Show>
                <Text role=TextRole::Caption tone=TextTone::Secondary layout_class="catalog-result-count">
                    {summary}
                </Text>
            </Stack>
        </header>
    }
}

#[component]
fn QuickFilterPill(quick_filter: QuickFilter) -> impl IntoView {
    let runtime = use_catalog_runtime();
    let key = quick_filter.key.clone();
    let label = quick_filter.label.clone();
    let selected = Signal::derive(move || {
        runtime
            .state
            .with(|state| is_quick_filter_active(&quick_filter, &state.filter))
    });

    view! {
        <Pill
            selected
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(CatalogAction::ApplyQuickFilter { key: key.clone() });
            })
        >
            {label}
        </Pill>
    }
}

#[component]
fn IconTile(record: IconRecord) -> impl IntoView {
    let runtime = use_catalog_runtime();
    let id = record.id.clone();
    // The button sits inside the tile link; it must save without navigating.
    let on_download = Callback::new(move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(CatalogAction::RequestDownload { id: id.clone() });
    });

    view! {
        <A href=icon_detail_href(&record.id) class="catalog-tile">
            <img
                class="catalog-tile-image"
                src=record.grid_image_url().to_string()
                alt=record.name.clone()
                width="80"
                height="80"
                loading="lazy"
            />
            <h3 class="catalog-tile-name">{record.name.clone()}</h3>
            <IconButton
                icon=IconName::Download
                aria_label=format!("Download {}", record.name)
                size=IconSize::Sm
                layout_class="catalog-tile-download"
                on_click=on_download
            />
        </A>
    }
}

#[component]
fn NoResults() -> impl IntoView {
    let runtime = use_catalog_runtime();

    view! {
        <EmptyState layout_class="catalog-empty">
            <Icon icon=IconName::Search size=IconSize::Lg />
            <Heading>"No icons found"</Heading>
            <Text tone=TextTone::Secondary>
                "Try adjusting your search terms or browse different categories"
            </Text>
            <Button
                variant=ButtonVariant::Primary
                on_click=Callback::new(move |_| runtime.dispatch_action(CatalogAction::ClearFilters))
            >
                "Show all icons"
            </Button>
        </EmptyState>
    }
}

#[component]
fn GridFooter() -> impl IntoView {
    let runtime = use_catalog_runtime();

    view! {
        <footer class="catalog-footer">
            <Cluster justify=LayoutJustify::Center padding=LayoutPadding::Lg>
                <Button
                    variant=ButtonVariant::Quiet
                    leading_icon=IconName::ArrowUp
                    on_click=Callback::new(move |_| runtime.dispatch_action(CatalogAction::ScrollToTop))
                >
                    "discover more"
                </Button>
            </Cluster>
        </footer>
    }
}
