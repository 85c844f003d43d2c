//! Form for putting names on the card.

use dioxus::prelude::*;
use serenade_core::Personalization;

/// Header button that opens a small form for the two names.
///
/// # Props
///
/// * `names` - Names currently on the card
/// * `on_personalize` - Called with the new names when the form is saved
#[component]
pub fn PersonalizationForm(
    names: Personalization,
    on_personalize: EventHandler<Personalization>,
) -> Element {
    let mut open = use_signal(|| false);
    let mut from = use_signal(|| names.from.clone());
    let mut to = use_signal(|| {
        if names.has_recipient() {
            names.to.clone()
        } else {
            String::new()
        }
    });

    let mut save = move || {
        on_personalize.call(Personalization::new(from(), to()));
        open.set(false);
    };

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            save();
        }
    };

    rsx! {
        div { class: "personalize",
            button {
                class: "btn-ghost",
                onclick: move |_| {
                    let shown = open();
                    open.set(!shown);
                },
                "\u{270E} Personalize"
            }
            if open() {
                div { class: "personalize-panel",
                    label { class: "field-label", "From" }
                    input {
                        class: "input-field",
                        placeholder: "Your name",
                        value: "{from}",
                        oninput: move |e| from.set(e.value()),
                        onkeydown: on_keydown,
                    }
                    label { class: "field-label", "To" }
                    input {
                        class: "input-field",
                        placeholder: "Their name",
                        value: "{to}",
                        oninput: move |e| to.set(e.value()),
                        onkeydown: on_keydown,
                    }
                    button {
                        class: "btn-primary",
                        onclick: move |_| save(),
                        "Save"
                    }
                }
            }
        }
    }
}
