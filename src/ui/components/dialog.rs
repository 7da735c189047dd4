use crate::ui::components::dialog_context::{DialogContext, DialogKind};
use dioxus::prelude::*;

#[component]
pub fn GlobalDialog() -> Element {
    let dialog = use_context::<DialogContext>();
    let dialog_for_cancel = dialog.clone();
    let dialog_for_confirm = dialog.clone();
    let dialog_for_overlay = dialog.clone();

    let title_class = match dialog.kind() {
        DialogKind::Confirm | DialogKind::Info => "dialog-title",
        DialogKind::Warning => "dialog-title dialog-title-warning",
        DialogKind::Error => "dialog-title dialog-title-error",
    };

    rsx! {
        if *dialog.is_open.read() {
            div {
                class: "overlay",
                onclick: move |_| {
                    dialog_for_overlay.hide();
                },
                div {
                    class: "dialog",
                    onclick: move |evt| evt.stop_propagation(),
                    h2 { class: "{title_class}", "{dialog.title()}" }
                    p { class: "dialog-message", "{dialog.message()}" }
                    div { class: "dialog-buttons",
                        if let Some(cancel_label) = dialog.cancel_label() {
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| {
                                    dialog_for_cancel.hide();
                                },
                                "{cancel_label}"
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                let callback = dialog_for_confirm.on_confirm();
                                dialog_for_confirm.hide();
                                if let Some(callback) = callback {
                                    callback();
                                }
                            },
                            "{dialog.confirm_label()}"
                        }
                    }
                }
            }
        }
    }
}
