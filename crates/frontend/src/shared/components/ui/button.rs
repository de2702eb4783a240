use leptos::prelude::*;

/// Primary action button
#[component]
pub fn Button(
    /// Button type attribute, "button" when omitted
    #[prop(optional)]
    button_type: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <button type=button_type.unwrap_or("button") class="button button--primary">
            {children()}
        </button>
    }
}
