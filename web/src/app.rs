use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::BookingForm;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="pl">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <meta name="theme-color" content="#fdfaf5"/>
                    <link rel="icon" href="/icon.svg" type="image/svg+xml"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/web.css"/>

        // sets the document title
        <Title text="AI Groomer – Rezerwacja wizyty"/>
        <Meta
            name="description"
            content="Zarezerwuj wizytę u profesjonalnego groomera dla Twojego pupila."
        />

        <ConfigProvider>
            <Router>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}

/// The single page: header, the booking form, footer.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="booking-page">
            <header class="booking-header">
                <div class="booking-header-icon">"🐾"</div>
                <h1 class="booking-header-title">"AI Groomer"</h1>
                <p class="booking-header-subtitle">"Zarezerwuj wizytę dla swojego pupila"</p>
            </header>

            <BookingForm/>

            <p class="booking-footer">
                "AI Groomer © 2026 — Profesjonalna pielęgnacja Twojego pupila"
            </p>
        </div>
    }
}
