//! Runtime provider and context wiring for the catalog views.
//!
//! This module owns the reducer container, the loaded dataset, and the effect queue. Rendering
//! lives in [`crate::components`].

use catalog_core::{
    reduce_catalog, Catalog, CatalogAction, CatalogConfig, CatalogEffect, CatalogState, IconRecord,
};
use leptos::*;
use platform_host::HostServices;

use crate::{effect_executor, host::CatalogHostContext, startup};

#[derive(Clone, Copy)]
/// Leptos context for reading catalog state and dispatching [`CatalogAction`] values.
pub struct CatalogRuntimeContext {
    /// Host service bundle for executing side effects.
    pub host: StoredValue<CatalogHostContext>,
    /// Effective configuration.
    pub config: StoredValue<CatalogConfig>,
    /// Loaded dataset and its taxonomy.
    pub catalog: StoredValue<Catalog>,
    /// Reactive session state.
    pub state: RwSignal<CatalogState>,
    /// Queue of effects emitted by the reducer.
    pub effects: RwSignal<Vec<CatalogEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<CatalogAction>,
}

impl CatalogRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: CatalogAction) {
        self.dispatch.call(action);
    }

    /// Revealed records for the current state. Tracks [`Self::state`].
    pub fn visible_records(&self) -> Vec<IconRecord> {
        self.state.with(|state| {
            self.catalog
                .with_value(|catalog| state.visible(catalog).into_iter().cloned().collect())
        })
    }

    /// Size of the full filtered result. Tracks [`Self::state`].
    pub fn filtered_len(&self) -> usize {
        self.state.with(|state| {
            self.catalog
                .with_value(|catalog| catalog.filtered_len(&state.filter))
        })
    }

    /// Whether more filtered records remain to be revealed. Tracks [`Self::state`].
    pub fn has_more(&self) -> bool {
        self.state
            .with(|state| self.catalog.with_value(|catalog| state.has_more(catalog)))
    }
}

#[component]
/// Provides [`CatalogRuntimeContext`] to descendant components.
///
/// The configuration and metadata compiled into the crate are loaded once here.
pub fn CatalogProvider(
    /// Injected browser or stub host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let config = startup::catalog_config_or_default();
    let catalog = startup::load_catalog(startup::CATALOG_METADATA_JSON, &config);
    logging::log!(
        "catalog loaded: {} icons, host strategy {}",
        catalog.len(),
        host_services.host_strategy.as_str()
    );

    let state = create_rw_signal(CatalogState::new(&config));
    let host = store_value(CatalogHostContext::new(host_services));
    let config = store_value(config);
    let catalog = store_value(catalog);
    let effects = create_rw_signal(Vec::<CatalogEffect>::new());

    let dispatch = Callback::new(move |action: CatalogAction| {
        let mut next = state.get_untracked();
        let previous = next.clone();

        let result = catalog.with_value(|catalog| {
            config.with_value(|config| reduce_catalog(&mut next, catalog, config, action))
        });

        match result {
            Ok(new_effects) => {
                if next != previous {
                    state.set(next);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("catalog reducer error: {err}"),
        }
    });

    let runtime = CatalogRuntimeContext {
        host,
        config,
        catalog,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`CatalogRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`CatalogProvider`].
pub fn use_catalog_runtime() -> CatalogRuntimeContext {
    use_context::<CatalogRuntimeContext>().expect("CatalogRuntimeContext not provided")
}
