//! Labelled text input used by the auth and profile forms.

use leptos::prelude::*;

#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label" for=id>
                {label}
            </label>
            <input
                id=id
                type=input_type
                class="form-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
