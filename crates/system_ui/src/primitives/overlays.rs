use super::*;

#[component]
/// Dialog overlay rendered while `open` is true.
///
/// Clicking the backdrop, the dismiss button, or pressing Escape anywhere in the window calls
/// `on_close`; the caller owns the open flag.
pub fn Modal(
    #[prop(into)] open: MaybeSignal<bool>,
    title: &'static str,
    on_close: Callback<()>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let class = merge_layout_class("ui-modal", layout_class);
    view! {
        <Show when=move || open.get()>
            <ModalDialog title on_close class=class.clone() body=children.clone() />
        </Show>
    }
}

#[component]
fn ModalDialog(
    title: &'static str,
    on_close: Callback<()>,
    class: String,
    body: ChildrenFn,
) -> impl IntoView {
    // Focus may stay on the control that opened the dialog, so Escape is read at window level
    // for as long as the dialog is mounted.
    let escape = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            on_close.call(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div
            class="ui-modal-backdrop"
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
            on:click=move |_| on_close.call(())
        >
            <div
                class=class
                role="dialog"
                aria-modal="true"
                aria-label=title
                data-ui-primitive="true"
                data-ui-kind="modal"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <div class="ui-modal-header" data-ui-slot="modal-header">
                    <Heading>{title}</Heading>
                    <IconButton
                        icon=IconName::Dismiss
                        aria_label="Close"
                        on_click=Callback::new(move |_| on_close.call(()))
                    />
                </div>
                <div class="ui-modal-body" data-ui-slot="modal-body">
                    {body()}
                </div>
            </div>
        </div>
    }
}

pub(crate) fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}
