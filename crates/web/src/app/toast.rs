//! Context-scoped toast store and its renderer.

use std::time::Duration;

use leptos::*;

use crate::notify::Toast;

/// How long a toast stays on screen before dismissing itself.
const TOAST_TTL: Duration = Duration::from_secs(5);

/// Queue of active toasts, shared through context.
#[derive(Clone, Copy)]
pub struct ToastStore {
    entries: RwSignal<Vec<(u64, Toast)>>,
    next_id: RwSignal<u64>,
}

impl ToastStore {
    fn new() -> Self {
        Self {
            entries: create_rw_signal(Vec::new()),
            next_id: create_rw_signal(0),
        }
    }

    /// Show a toast; it dismisses itself after [`TOAST_TTL`].
    pub fn push(&self, toast: Toast) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.entries.update(|entries| entries.push((id, toast)));

        let entries = self.entries;
        set_timeout(
            move || entries.update(|entries| entries.retain(|(entry_id, _)| *entry_id != id)),
            TOAST_TTL,
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.entries
            .update(|entries| entries.retain(|(entry_id, _)| *entry_id != id));
    }
}

/// Install the store into context. Call once at the application root.
pub fn provide_toasts() -> ToastStore {
    let store = ToastStore::new();
    provide_context(store);
    store
}

/// Store from context, or a detached one when no provider mounted.
pub fn use_toasts() -> ToastStore {
    use_context::<ToastStore>().unwrap_or_else(ToastStore::new)
}

/// Renders the active toast stack.
#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_toasts();

    view! {
        <div class="toasts">
            <For
                each=move || store.entries.get()
                key=|(id, _)| *id
                children=move |(id, toast): (u64, Toast)| {
                    view! {
                        <div
                            class=format!("toast {}", toast.kind.as_str())
                            on:click=move |_| store.dismiss(id)
                        >
                            <p class="toast-title">{toast.title}</p>
                            <p class="toast-message">{toast.message}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
