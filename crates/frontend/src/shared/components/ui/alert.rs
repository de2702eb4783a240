use leptos::prelude::*;

/// Error message box, announced to screen readers through `role="alert"`
#[component]
pub fn Alert(
    /// Additional CSS classes
    #[prop(optional)]
    class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("alert alert--error {}", class.unwrap_or_default()) role="alert">
            <div class="alert__description">{children()}</div>
        </div>
    }
}
