//! Chat widget components.
//!
//! These components render the floating chat widget: the launcher button,
//! the panel overlay, the transcript, quick replies and the input form.
//! Every interaction swaps the whole `#chat-widget` fragment via HTMX.

mod header;
mod input_area;
mod message_list;
mod quick_replies;
mod shell;
mod user_info_card;

pub use header::ChatHeader;
pub use input_area::InputArea;
pub use message_list::MessageList;
pub use quick_replies::QuickReplies;
pub use shell::ChatWidget;
pub use user_info_card::UserInfoCard;
