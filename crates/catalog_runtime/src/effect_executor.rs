//! Drains reducer-emitted catalog effects in order.

use leptos::*;

use crate::runtime_context::CatalogRuntimeContext;

/// Installs the executor that runs queued [`catalog_core::CatalogEffect`] values.
pub fn install(runtime: CatalogRuntimeContext) {
    // The queue is cleared before running so effects dispatched during the drain land in a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            runtime.host.get_value().run_effect(effect);
        }
    });
}
