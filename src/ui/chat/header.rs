//! Chat panel header.

use leptos::prelude::*;

use crate::ui::components::{BotAvatar, XIcon};

/// Panel header with the assistant identity and the close control.
///
/// The subtitle switches to "Chatting with {name}" once the backend has
/// collected a name.
#[component]
pub fn ChatHeader(
    /// Name from the backend-authored profile, if collected.
    user_name: Option<String>,
    /// Toggle endpoint for this session.
    toggle_url: String,
) -> impl IntoView {
    let subtitle = user_name.map_or_else(
        || "Typically replies in seconds".to_string(),
        |name| format!("Chatting with {name}"),
    );

    view! {
        <header class="bg-gradient-to-r from-blue-600 to-indigo-600 text-white p-4 flex justify-between items-center flex-shrink-0">
            <div class="flex items-center gap-3">
                <BotAvatar size="w-10 h-10" />
                <div>
                    <h3 class="font-semibold text-base">"SmartAssist"</h3>
                    <p class="text-xs opacity-80">{subtitle}</p>
                </div>
            </div>
            <button
                class="text-white opacity-80 hover:opacity-100 px-2 transition"
                aria-label="Close chat"
                hx-post=toggle_url
                hx-target="#chat-widget"
                hx-swap="outerHTML"
            >
                <XIcon class="h-5 w-5" />
            </button>
        </header>
    }
}
