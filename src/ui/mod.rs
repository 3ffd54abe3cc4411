//! UI components and layouts.
//!
//! Leptos SSR components rendering the marketing page and the chat widget.
//! Handlers call [`render_home`] and [`render_widget`] to turn a widget
//! snapshot into HTML; all interactivity is HTMX fragment swaps against the
//! widget element.
//!
//! # Structure
//!
//! - [`page`]: marketing page shell
//! - [`components`]: reusable UI components
//! - [`chat`]: chat widget components

pub mod chat;
pub mod components;
pub mod page;

use leptos::prelude::*;

use crate::widget::WidgetSnapshot;
use chat::ChatWidget;
use page::HomePage;

/// Render the full marketing page, widget included, as an HTML document.
#[must_use]
pub fn render_home(widget: &WidgetSnapshot) -> String {
    let widget = widget.clone();
    let html = view! { <HomePage widget=widget /> }.to_html();
    format!("<!doctype html>{html}")
}

/// Render the chat widget fragment for an HTMX swap.
#[must_use]
pub fn render_widget(widget: &WidgetSnapshot) -> String {
    let widget = widget.clone();
    view! { <ChatWidget widget=widget /> }.to_html()
}
