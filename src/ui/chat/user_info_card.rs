//! Collected-profile card.

use leptos::prelude::*;

use crate::ui::components::UserIcon;
use crate::widget::UserInfo;

/// Shows the backend-collected name/email once either exists.
///
/// The widget never validates or interprets these fields; it renders
/// whatever the last response carried.
#[component]
pub fn UserInfoCard(user_info: UserInfo) -> impl IntoView {
    let show = user_info.name.is_some() || user_info.email.is_some();

    show.then(|| {
        let name = user_info.name.clone();
        let email = user_info.email.clone();

        view! {
            <div class="bg-blue-50 border-b border-blue-100 p-3 flex-shrink-0">
                <div class="flex items-start gap-2">
                    <span class="text-blue-600"><UserIcon class="h-5 w-5" /></span>
                    <div class="flex-1">
                        <p class="text-xs font-medium text-blue-900 mb-1">"Your Information"</p>
                        <div class="space-y-1">
                            {name.map(|n| view! {
                                <div class="flex items-center gap-2 text-xs">
                                    <span class="text-blue-600">"•"</span>
                                    <span class="text-gray-700">"Name: "<strong>{n}</strong></span>
                                </div>
                            })}
                            {email.map(|e| view! {
                                <div class="flex items-center gap-2 text-xs">
                                    <span class="text-blue-600">"•"</span>
                                    <span class="text-gray-700 break-all">"Email: "<strong>{e}</strong></span>
                                </div>
                            })}
                        </div>
                    </div>
                </div>
            </div>
        }
    })
}
