//! Avatar component for the assistant glyph.

use leptos::prelude::*;

use super::BotIcon;

/// Circular bot avatar rendered from the inline icon.
#[component]
pub fn BotAvatar(
    /// Outer size class (e.g. "w-8 h-8").
    #[prop(default = "w-8 h-8")]
    size: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!(
        "bg-gradient-to-br from-blue-500 to-indigo-600 rounded-full \
         flex items-center justify-center text-white flex-shrink-0 {size} {class}"
    );

    view! {
        <span class=classes aria-hidden="true">
            <BotIcon class="h-4 w-4" />
        </span>
    }
}
