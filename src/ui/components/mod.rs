//! Reusable UI components rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`Card`], [`CardHeader`], [`CardContent`]: Card container
//! - [`Input`]: Text input field
//! - [`BotAvatar`]: Assistant avatar glyph
//! - [`icons`]: SVG icon components

mod avatar;
mod button;
mod card;
mod icons;
mod input;

pub use avatar::BotAvatar;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardHeader};
pub use icons::*;
pub use input::Input;
