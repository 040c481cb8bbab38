//! Leptos application shell.

pub mod layout;
pub mod product_form;
pub mod theme;
pub mod toast;

use leptos::*;

use crate::app::layout::Layout;
use crate::app::product_form::ProductFormPage;
use crate::app::theme::ThemeProvider;
use crate::app::toast::{Toaster, provide_toasts};

/// Root component: the themed shell around the one form page.
#[component]
pub fn App() -> impl IntoView {
    provide_toasts();

    view! {
        <ThemeProvider>
            <Layout>
                <ProductFormPage/>
            </Layout>
            <Toaster/>
        </ThemeProvider>
    }
}
