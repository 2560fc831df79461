use catalog_core::{CatalogAction, IconRecord};
use leptos::*;
use leptos_router::A;
use system_ui::{
    Button, ButtonVariant, Cluster, Heading, Icon, IconName, IconSize, LayoutGap, LayoutJustify,
    LayoutPadding, Stack, Text, TextRole, TextTone,
};

use crate::runtime_context::use_catalog_runtime;

#[component]
/// Detail page for one record, or a not-found view when `id` matches nothing.
pub fn IconDetail(#[prop(into)] id: MaybeSignal<String>) -> impl IntoView {
    let runtime = use_catalog_runtime();
    let (theme, layout) = runtime
        .config
        .with_value(|config| (config.theme.token(), config.detail_layout.token()));
    let record = create_memo(move |_| {
        id.with(|id| {
            runtime
                .catalog
                .with_value(|catalog| catalog.lookup(id).found().cloned())
        })
    });

    view! {
        <div class="catalog-page" data-catalog-theme=theme>
            {move || match record.get() {
                Some(record) => view! { <IconDetailBody record layout /> }.into_view(),
                None => view! { <IconNotFound /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn IconDetailBody(record: IconRecord, layout: &'static str) -> impl IntoView {
    let runtime = use_catalog_runtime();
    let id = record.id.clone();

    view! {
        <article class="catalog-detail" data-catalog-layout=layout>
            <Cluster justify=LayoutJustify::Between padding=LayoutPadding::Md ui_slot="detail-toolbar">
                <A href="/" class="catalog-back-link">
                    <Icon icon=IconName::ArrowLeft size=IconSize::Sm />
                    "Back to Grid"
                </A>
                <Button
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::Download
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(CatalogAction::RequestDownload { id: id.clone() });
                    })
                >
                    "Download Image"
                </Button>
            </Cluster>
            <div class="catalog-detail-body" data-ui-slot="detail-body">
                <figure class="catalog-detail-preview">
                    <img src=record.preview_image_url().to_string() alt=record.name.clone() />
                </figure>
                <Stack gap=LayoutGap::Md ui_slot="detail-info">
                    <Cluster gap=LayoutGap::Sm ui_slot="detail-tags">
                        {record
                            .categories
                            .iter()
                            .map(|label| view! { <span class="catalog-tag">{label.clone()}</span> })
                            .collect_view()}
                    </Cluster>
                    <Heading>{record.name.clone()}</Heading>
                    <Text tone=TextTone::Secondary>{record.description.clone()}</Text>
                </Stack>
            </div>
        </article>
    }
}

#[component]
fn IconNotFound() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Md padding=LayoutPadding::Lg ui_slot="detail-not-found">
            <Heading>"Icon not found"</Heading>
            <Text role=TextRole::Body tone=TextTone::Secondary>
                "The icon you're looking for doesn't exist."
            </Text>
            <A href="/" class="catalog-back-link">
                <Icon icon=IconName::ArrowLeft size=IconSize::Sm />
                "Back"
            </A>
        </Stack>
    }
}
