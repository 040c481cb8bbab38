//! The product entry form page.

use leptos::ev::SubmitEvent;
use leptos::*;

use shopfront_client::{ApiConfig, CatalogClient};
use shopfront_core::{CATEGORY_OPTIONS, Field};

use crate::app::toast::use_toasts;
use crate::form::{FormModel, SubmitOutcome};
use crate::notify::Toast;

/// Inline field-local error message, rendered once a submission attempt
/// has flagged the field.
fn field_message(model: RwSignal<FormModel>, field: Field) -> impl IntoView {
    move || {
        model
            .with(|m| m.error_message(field).map(str::to_string))
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}

#[component]
pub fn ProductFormPage() -> impl IntoView {
    let model = create_rw_signal(FormModel::default());
    let toasts = use_toasts();
    let client = store_value(CatalogClient::new(ApiConfig::default()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut started = None;
        model.update(|m| started = m.begin_submit());
        let Some(draft) = started else {
            return;
        };

        spawn_local(async move {
            let outcome = match client.with_value(|c| c.clone()).create_product(&draft).await {
                Ok(_) => SubmitOutcome::Accepted,
                Err(_) => SubmitOutcome::Rejected,
            };
            model.update(|m| m.finish_submit(outcome));

            match outcome {
                SubmitOutcome::Accepted => {
                    toasts.push(Toast::success("Success", "Product created successfully."));
                }
                SubmitOutcome::Rejected => {
                    toasts.push(Toast::error(
                        "Error",
                        "An error occurred while creating the product.",
                    ));
                }
            }
        });
    };

    view! {
        <div class="form-page">
            <h2>"Create Product"</h2>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="title">"Title"</label>
                    <input
                        id="title"
                        placeholder="title"
                        prop:value=move || model.with(|m| m.title().to_string())
                        class=("invalid", move || model.with(|m| m.has_error(Field::Title)))
                        disabled=move || model.with(|m| m.is_submitting())
                        on:input=move |ev| model.update(|m| m.set_title(event_target_value(&ev)))
                    />
                    <p class="hint">"This is your title name."</p>
                    {field_message(model, Field::Title)}
                </div>

                <div class="form-group">
                    <label for="price">"Price"</label>
                    <input
                        id="price"
                        type="number"
                        step="any"
                        placeholder="price"
                        prop:value=move || model.with(|m| m.price().to_string())
                        class=("invalid", move || model.with(|m| m.has_error(Field::Price)))
                        disabled=move || model.with(|m| m.is_submitting())
                        on:input=move |ev| model.update(|m| m.set_price(event_target_value(&ev)))
                    />
                    {field_message(model, Field::Price)}
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        placeholder="description"
                        prop:value=move || model.with(|m| m.description().to_string())
                        class=("invalid", move || model.with(|m| m.has_error(Field::Description)))
                        disabled=move || model.with(|m| m.is_submitting())
                        on:input=move |ev| {
                            model.update(|m| m.set_description(event_target_value(&ev)))
                        }
                    ></textarea>
                    {field_message(model, Field::Description)}
                </div>

                <div class="form-group">
                    <label for="category">"Category"</label>
                    <select
                        id="category"
                        prop:value=move || model.with(|m| m.category_id().to_string())
                        class=("invalid", move || model.with(|m| m.has_error(Field::Category)))
                        disabled=move || model.with(|m| m.is_submitting())
                        on:change=move |ev| {
                            let id = event_target_value(&ev).parse::<u32>().unwrap_or_default();
                            model.update(|m| m.set_category(id));
                        }
                    >
                        {CATEGORY_OPTIONS
                            .iter()
                            .map(|(id, label)| {
                                view! { <option value=id.to_string()>{*label}</option> }
                            })
                            .collect_view()}
                    </select>
                    {field_message(model, Field::Category)}
                </div>

                <div class="form-actions">
                    <button type="submit" disabled=move || model.with(|m| m.is_submitting())>
                        {move || {
                            if model.with(|m| m.is_submitting()) { "Submitting..." } else { "Submit" }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
