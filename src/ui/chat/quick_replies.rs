//! Quick-reply chips.

use leptos::prelude::*;

use crate::ui::components::{ButtonSize, ButtonVariant};
use crate::widget::QUICK_REPLIES;

/// The fixed row of quick replies.
///
/// Clicking a chip submits its label as the message text, exactly as if the
/// user had typed it. The list is not filtered by conversation stage.
#[component]
pub fn QuickReplies(
    /// Session the submission belongs to.
    session_id: String,
    /// Disables the chips while a turn is outstanding.
    loading: bool,
) -> impl IntoView {
    let chip_classes = format!(
        "{} {} transition disabled:opacity-50 disabled:cursor-not-allowed",
        ButtonVariant::QuickReply.classes(),
        ButtonSize::Sm.classes(),
    );

    view! {
        <div class="px-4 py-3 bg-white border-t flex-shrink-0">
            <p class="text-xs text-gray-500 mb-2 font-medium">"Quick Actions:"</p>
            <div class="flex flex-wrap gap-2">
                {QUICK_REPLIES
                    .iter()
                    .map(|label| {
                        let vals = format!(
                            r#"{{"session_id": "{session_id}", "message": "{label}"}}"#
                        );
                        view! {
                            <button
                                class=chip_classes.clone()
                                disabled=loading
                                hx-post="/api/chat"
                                hx-target="#chat-widget"
                                hx-swap="outerHTML"
                                hx-indicator="#typing-indicator"
                                hx-vals=vals
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
