use catalog_core::CatalogAction;
use leptos::*;
use system_ui::{Text, TextRole, TextTone};

use crate::runtime_context::use_catalog_runtime;

const REVEAL_THRESHOLD: f64 = 0.1;

#[component]
/// Trailing marker below the grid that reveals the next page when scrolled into view.
pub(super) fn RevealSentinel() -> impl IntoView {
    let runtime = use_catalog_runtime();
    let node_ref = create_node_ref::<html::Div>();
    observe_visibility(
        node_ref,
        Callback::new(move |()| runtime.dispatch_action(CatalogAction::RevealMore)),
    );

    view! {
        <div node_ref=node_ref class="catalog-sentinel" role="status" data-ui-slot="reveal-sentinel">
            <span class="catalog-spinner" aria-hidden="true"></span>
            <Text role=TextRole::Caption tone=TextTone::Secondary>
                "Loading more icons..."
            </Text>
        </div>
    }
}

fn observe_visibility(node_ref: NodeRef<html::Div>, on_visible: Callback<()>) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast, JsValue};

        let observer_slot = store_value(None::<web_sys::IntersectionObserver>);
        node_ref.on_load(move |element| {
            // Re-observing after each reveal forces a fresh initial notification, so a sentinel
            // that stays on screen keeps revealing until it is pushed below the fold.
            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        on_visible.call(());
                        let target = entry.target();
                        observer.unobserve(&target);
                        if target.is_connected() {
                            observer.observe(&target);
                        }
                    }
                },
            )
            .into_js_value();

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            match web_sys::IntersectionObserver::new_with_options(callback.unchecked_ref(), &options)
            {
                Ok(observer) => {
                    observer.observe(&element);
                    observer_slot.set_value(Some(observer));
                }
                Err(err) => logging::warn!("intersection observer unavailable: {err:?}"),
            }
        });
        on_cleanup(move || {
            if let Some(observer) = observer_slot.try_get_value().flatten() {
                observer.disconnect();
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (node_ref, on_visible, REVEAL_THRESHOLD);
}
