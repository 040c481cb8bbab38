//! Visual shell: header, content column, footer. No behavioral logic
//! beyond the theme toggle.

use chrono::Datelike;
use leptos::*;

use crate::app::theme::{Theme, use_theme};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="container">
            <Header/>
            <main>{children()}</main>
            <Footer/>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let theme = use_theme();

    view! {
        <header>
            <h1>"Shopfront"</h1>
            <button class="theme-toggle" on:click=move |_| theme.update(|t| *t = t.toggled())>
                {move || match theme.get() {
                    Theme::Light => "Dark mode",
                    Theme::Dark => "Light mode",
                }}
            </button>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer>
            <p class="footnote">
                {year}
                " - "
                <a href="https://sznm.dev" target="_blank" rel="noopener noreferrer">"sznm.dev"</a>
            </p>
        </footer>
    }
}
