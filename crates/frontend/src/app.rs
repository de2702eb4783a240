use crate::usecases::u508_aws_setup::AwsSetupPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <AwsSetupPage />
        </main>
    }
}
