use leptos::prelude::*;

/// Multi-line text input with a label above it
#[component]
pub fn Textarea(
    /// Element id, also targeted by the label
    id: &'static str,
    /// Label text
    label: &'static str,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute, 3 when omitted
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional)]
    class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <textarea
                id=id
                name=id
                class=format!("form__textarea {}", class.unwrap_or_default())
                required=required
                rows=rows.unwrap_or(3)
                spellcheck="false"
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </div>
    }
}
