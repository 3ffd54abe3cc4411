//! Chat input area with HTMX form submission.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonSize, ButtonVariant, Input, SendIcon};

/// Message input form.
///
/// Submitting posts the draft to `/api/chat` and swaps the whole widget with
/// the re-rendered fragment. Input and send button are disabled while the
/// request is outstanding; the server-side turn lock serializes turns
/// regardless.
#[component]
pub fn InputArea(
    /// Session the submission belongs to.
    session_id: String,
    /// Disables the controls while a turn is outstanding.
    loading: bool,
) -> impl IntoView {
    view! {
        <form
            class="flex items-center gap-2 p-3 bg-white border-t flex-shrink-0"
            hx-post="/api/chat"
            hx-target="#chat-widget"
            hx-swap="outerHTML"
            hx-indicator="#typing-indicator"
            hx-disabled-elt="#chat-input, #chat-send"
        >
            <input type="hidden" name="session_id" value=session_id />
            <Input
                id="chat-input"
                name="message"
                placeholder="Enter message..."
                disabled=loading
                class="flex-1"
            />
            <Button
                id="chat-send"
                variant=ButtonVariant::Primary
                size=ButtonSize::Icon
                button_type="submit"
                disabled=loading
            >
                <SendIcon class="h-4 w-4" />
            </Button>
        </form>
    }
}
