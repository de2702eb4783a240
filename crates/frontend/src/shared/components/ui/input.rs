use leptos::prelude::*;

/// Single-line input with a label above it
#[component]
pub fn Input(
    /// Element id, also targeted by the label
    id: &'static str,
    /// Label text
    label: &'static str,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Input type: "text" (default), "password", etc.
    #[prop(optional)]
    input_type: Option<&'static str>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Additional CSS classes
    #[prop(optional)]
    class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <input
                id=id
                name=id
                class=format!("form__input {}", class.unwrap_or_default())
                type=input_type.unwrap_or("text")
                prop:value=move || value.get()
                required=required
                autocomplete="off"
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
