//! Transcript rendering.

use leptos::prelude::*;

use crate::ui::components::{BotAvatar, CheckCheckIcon, CheckIcon};
use crate::widget::{Message, Role};

/// Scrollable transcript area.
///
/// Messages render in transcript order: user bubbles right-aligned with a
/// single/double check read indicator, bot bubbles left-aligned with the
/// avatar glyph. Text is rendered verbatim (escaped, `whitespace-pre-wrap`,
/// no markup parsing). The typing indicator trails the last message while a
/// turn is in flight and is never part of the transcript itself.
#[component]
pub fn MessageList(messages: Vec<Message>, loading: bool) -> impl IntoView {
    view! {
        <div
            id="chat-transcript"
            class="flex-1 p-4 overflow-y-auto bg-gray-50 space-y-4"
            aria-live="polite"
            aria-label="Chat messages"
        >
            {messages.into_iter().map(bubble).collect_view()}
            <TypingIndicator loading=loading />
        </div>
    }
}

fn bubble(message: Message) -> impl IntoView {
    let is_user = message.role == Role::User;
    let time = message.time_label();
    let read = message.read;
    let text = message.text;

    let row_classes = if is_user {
        "flex items-end gap-2 flex-row-reverse"
    } else {
        "flex items-end gap-2"
    };
    let bubble_classes = if is_user {
        "max-w-[75%] p-3 rounded-2xl bg-blue-600 text-white rounded-br-md"
    } else {
        "max-w-[75%] p-3 rounded-2xl bg-white border shadow-sm rounded-bl-md"
    };
    let meta_classes = if is_user {
        "flex items-center gap-1 mt-1 px-1 justify-end"
    } else {
        "flex items-center gap-1 mt-1 px-1 justify-start ml-10"
    };

    view! {
        <div class="flex flex-col">
            <div class=row_classes>
                {(!is_user).then(|| view! { <BotAvatar /> })}
                <div class=bubble_classes>
                    <div class="text-sm leading-relaxed whitespace-pre-wrap break-words">
                        {text}
                    </div>
                </div>
            </div>
            <div class=meta_classes>
                <span class="text-xs text-gray-400">{time}</span>
                {is_user.then(|| if read {
                    view! { <CheckCheckIcon class="h-3 w-3 text-blue-500" /> }.into_any()
                } else {
                    view! { <CheckIcon class="h-3 w-3 text-gray-400" /> }.into_any()
                })}
            </div>
        </div>
    }
}

/// Transient "assistant is typing" bubble.
///
/// Visible while the server-side loading flag is set, and (via the
/// `htmx-indicator` convention) while an HTMX chat request is in flight.
#[component]
fn TypingIndicator(loading: bool) -> impl IntoView {
    let classes = if loading {
        "flex items-end gap-2"
    } else {
        "htmx-indicator items-end gap-2"
    };

    view! {
        <div id="typing-indicator" class=classes>
            <BotAvatar />
            <div class="bg-white border shadow-sm rounded-2xl rounded-bl-md px-4 py-3">
                <span class="flex gap-1">
                    <span class="typing-dot"></span>
                    <span class="typing-dot"></span>
                    <span class="typing-dot"></span>
                </span>
            </div>
        </div>
    }
}
