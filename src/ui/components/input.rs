//! Input component for text fields.

use leptos::prelude::*;

/// Single-line text input.
#[component]
pub fn Input(
    /// Input type (text, email, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Whether the input is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Autocomplete attribute.
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    let base_classes = "border border-gray-200 p-2 rounded-lg text-sm \
                        focus:outline-none focus:ring-2 focus:ring-blue-500 \
                        disabled:cursor-not-allowed disabled:opacity-50";

    let classes = format!("{base_classes} {class}");

    view! {
        <input
            type=input_type
            class=classes
            placeholder=placeholder
            name=name
            id=id
            disabled=disabled
            autocomplete=autocomplete
        />
    }
}
