//! Marketing page shell.
//!
//! Static layout only: header, hero, feature cards, "how it works" card and
//! footer, with the chat widget mounted as a fixed-position overlay. No
//! state, no external calls.

use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::ui::chat::ChatWidget;
use crate::ui::components::{Card, CardContent, MenuIcon};
use crate::widget::WidgetSnapshot;

/// The complete marketing page with the widget mounted.
#[component]
pub fn HomePage(widget: WidgetSnapshot) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content="SmartAssist - embeddable AI chat widget demo" />

                <title>"SmartAssist Demo"</title>

                // Local scripts only (no CDN)
                <script src="/static/vendor/htmx-2.0.8.min.js"></script>
                <script defer src="/static/widget.js"></script>
                <link rel="stylesheet" href="/static/app.css" />
            </head>

            <body class="min-h-screen bg-gray-50 text-gray-900 antialiased">
                <div class="flex flex-col min-h-screen">
                    <PageHeader />
                    <main class="flex-1 container mx-auto px-4 py-12 max-w-5xl">
                        <Hero />
                        <FeatureGrid />
                        <HowItWorks />
                    </main>
                    <PageFooter />
                </div>

                <ChatWidget widget=widget />
            </body>
        </html>
    }
}

/// Page header with navigation.
#[component]
fn PageHeader() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm sticky top-0 z-40">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center max-w-5xl">
                <h1 class="text-xl font-semibold">"SmartAssist Demo"</h1>

                <nav class="hidden md:flex gap-6 text-sm text-gray-600">
                    <a href="#" class="hover:text-blue-600">"Home"</a>
                    <a href="#" class="hover:text-blue-600">"Features"</a>
                    <a href="#" class="hover:text-blue-600">"Pricing"</a>
                    <a href="#" class="hover:text-blue-600">"Contact"</a>
                </nav>

                <button class="md:hidden text-gray-600 p-2" aria-label="Menu">
                    <MenuIcon class="h-6 w-6" />
                </button>
            </div>
        </header>
    }
}

/// Hero section.
#[component]
fn Hero() -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-4xl font-bold mb-4">"AI Powered Customer Assistant"</h2>
            <p class="text-base text-gray-600 max-w-2xl mx-auto">
                "This is a live demo website showcasing an embeddable chatbot widget. \
                 Click the chat button in the bottom right corner to interact with SmartAssist."
            </p>
        </div>
    }
}

/// Feature cards.
#[component]
fn FeatureGrid() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-6 max-w-5xl mx-auto mb-12">
            <FeatureCard
                glyph="⚡"
                title="Instant AI Support"
                description="Get real time AI responses to your questions without waiting."
            />
            <FeatureCard
                glyph="💡"
                title="Smart Suggestions"
                description="Use quick replies like Services, Support, or Pricing for guided help."
            />
            <FeatureCard
                glyph="🔧"
                title="Embeddable Widget"
                description="Designed to be easily integrated into any website."
            />
        </div>
    }
}

/// One feature card.
#[component]
fn FeatureCard(
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <Card>
            <CardContent>
                <div class="text-3xl mb-3">{glyph}</div>
                <h3 class="font-semibold mb-2 text-base">{title}</h3>
                <p class="text-sm text-gray-600">{description}</p>
            </CardContent>
        </Card>
    }
}

/// "How this works" walkthrough.
#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <Card class="max-w-5xl mx-auto">
            <CardContent>
                <h3 class="font-semibold mb-3 text-base">"How This Works"</h3>
                <ul class="text-sm text-gray-600 space-y-2">
                    <WalkthroughStep number="1." text="Click the blue chat button in the bottom right corner." />
                    <WalkthroughStep number="2." text="Use quick replies or type your own message." />
                    <WalkthroughStep number="3." text="Watch SmartAssist respond in real time." />
                </ul>
            </CardContent>
        </Card>
    }
}

/// One numbered step in the walkthrough list.
#[component]
fn WalkthroughStep(number: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <li class="flex items-start gap-2">
            <span class="text-blue-600 font-bold">{number}</span>
            <span>{text}</span>
        </li>
    }
}

/// Page footer.
#[component]
fn PageFooter() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="bg-white border-t mt-auto">
            <div class="container mx-auto px-4 py-4 text-center text-sm text-gray-500 max-w-5xl">
                {format!("© {year} SmartAssist • Chatbot Widget Demo")}
            </div>
        </footer>
    }
}
