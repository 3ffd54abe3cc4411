//! Chat widget shell: launcher button plus the panel overlay.

use leptos::prelude::*;

use super::{ChatHeader, InputArea, MessageList, QuickReplies, UserInfoCard};
use crate::ui::components::ChatBubbleIcon;
use crate::widget::WidgetSnapshot;

/// The complete chat widget fragment.
///
/// Every interaction (toggle, submit, quick reply) swaps this element via
/// `hx-target="#chat-widget"`. The `data-chat-open` marker is mirrored onto
/// the document body by `static/widget.js` to suppress background scroll
/// while the panel is open.
#[component]
pub fn ChatWidget(widget: WidgetSnapshot) -> impl IntoView {
    let toggle_url = format!("/api/widget/{}/toggle", widget.id);
    let launcher_toggle_url = toggle_url.clone();
    let open = widget.open;

    let session_id = widget.id.clone();
    let user_name = widget.user_info.name.clone();
    let user_info = widget.user_info.clone();
    let messages = widget.messages.clone();
    let loading = widget.loading;

    view! {
        <div
            id="chat-widget"
            data-session-id=widget.id.clone()
            data-chat-open=if open { "true" } else { "false" }
        >
            <button
                class="fixed bottom-6 right-6 bg-blue-600 text-white px-4 py-3 rounded-full \
                       shadow-xl hover:scale-105 active:scale-95 transition flex items-center gap-2 z-50"
                aria-label="Open chat"
                hx-post=launcher_toggle_url
                hx-target="#chat-widget"
                hx-swap="outerHTML"
            >
                <ChatBubbleIcon class="h-5 w-5" />
                <span class="text-sm font-medium">"Chat with us"</span>
            </button>

            {open.then(|| view! {
                <div class="fixed bottom-24 right-6 w-96 max-w-[calc(100vw-2rem)] bg-white \
                            shadow-2xl rounded-2xl border border-gray-100 overflow-hidden \
                            z-50 flex flex-col">
                    <ChatHeader user_name=user_name.clone() toggle_url=toggle_url.clone() />
                    <UserInfoCard user_info=user_info.clone() />
                    <MessageList messages=messages.clone() loading=loading />
                    <QuickReplies session_id=session_id.clone() loading=loading />
                    <InputArea session_id=session_id.clone() loading=loading />
                </div>
            })}
        </div>
    }
}
