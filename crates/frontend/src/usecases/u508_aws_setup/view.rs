use super::api;
use super::model::{FormField, SetupForm};
use crate::shared::components::ui::{Alert, Button, Input, Textarea};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_aws_setup::AwsSetup;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AwsSetupPage() -> impl IntoView {
    let form = RwSignal::new(SetupForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some((ticket, request)) = form.try_update(|f| f.begin_submit()) else {
            return;
        };

        spawn_local(async move {
            let result = api::submit_setup(&request).await;
            let applied = form.try_update(|f| f.finish(ticket, result));
            if applied == Some(false) {
                log::debug!("Dropped outcome of superseded submission #{}", ticket);
            }
        });
    };

    let field_view = move |field: FormField| {
        let value = Signal::derive(move || form.with(|f| f.value(field).to_string()));
        let on_input = Callback::new(move |v: String| form.update(|f| f.update_field(field, v)));

        match field.input_type() {
            Some(input_type) => view! {
                <Input
                    id=field.dom_id()
                    label=field.label()
                    input_type=input_type
                    value=value
                    on_input=on_input
                    required=field.required()
                />
            }
            .into_any(),
            None => view! {
                <Textarea
                    id=field.dom_id()
                    label=field.label()
                    value=value
                    on_input=on_input
                    required=field.required()
                    rows=10
                />
            }
            .into_any(),
        }
    };

    let error = move || form.with(|f| f.error().to_string());
    let output = move || form.with(|f| f.output().to_string());

    view! {
        <div id=AwsSetup::full_name() class="page page--narrow">
            <h1 class="page__title">{AwsSetup::display_name()}</h1>
            <p class="page__description">{AwsSetup::description()}</p>

            <form class="form" on:submit=on_submit>
                {FormField::ALL.into_iter().map(field_view).collect_view()}
                <Button button_type="submit">"Generate and Apply Terraform"</Button>
            </form>

            <Show when=move || !error().is_empty()>
                <Alert class="form__result">
                    {error}
                </Alert>
            </Show>

            <Show when=move || !output().is_empty()>
                <div class="form__result">
                    <h2 class="page__subtitle">"Output:"</h2>
                    <pre class="output-block">{output}</pre>
                </div>
            </Show>
        </div>
    }
}
