use catalog_runtime::{CatalogGrid, CatalogProvider, IconDetail};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Thiings" />
        <Meta name="description" content="A searchable catalog of thousands of 3D icons." />

        <Router>
            <CatalogProvider host_services=build_host_services()>
                <main class="site-root">
                    <Routes>
                        <Route path="" view=CatalogEntry />
                        <Route path="/icon/:id" view=IconDetailRoute />
                    </Routes>
                </main>
            </CatalogProvider>
        </Router>
    }
}

#[component]
pub fn CatalogEntry() -> impl IntoView {
    view! { <CatalogGrid /> }
}

#[component]
pub fn IconDetailRoute() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || {
        params
            .with(|map| map.get("id").cloned())
            .unwrap_or_default()
    });

    view! { <IconDetail id /> }
}
