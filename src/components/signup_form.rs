//! Signup form with the email field and the activity select.

use leptos::prelude::*;

use crate::state::form::{ActivityOptions, SELECT_PLACEHOLDER, SignupFormState};

#[component]
pub fn SignupFormView(
    form: RwSignal<SignupFormState>,
    options: RwSignal<ActivityOptions>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            id="signup-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    id="email"
                    type="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.email = value);
                    }
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required=true
                    prop:value=move || form.with(|f| f.activity.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.activity = value);
                    }
                >
                    <option value="">{SELECT_PLACEHOLDER}</option>
                    {move || {
                        options
                            .get()
                            .names
                            .into_iter()
                            .map(|name| {
                                let value = name.clone();
                                view! { <option value=value>{name}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
