use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Html,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::AppState;
use crate::error::AppError;
use crate::form::GenerateForm;
use crate::page::{EMPTY_PROMPT_WARNING, Outcome, PageView};

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    info!("Rendering playground for model: {}", state.provider.model());

    let view = PageView::initial(state.provider.model(), &state.defaults);
    Ok(Html(state.page.render(&view)?))
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    form: Result<Form<GenerateForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!("Rejected playground form: {}", rejection.body_text());
            let view = PageView::initial(state.provider.model(), &state.defaults)
                .with_outcome(Outcome::error(&anyhow::anyhow!(rejection.body_text())));
            return Ok(Html(state.page.render(&view)?));
        }
    };

    let outcome = generate_outcome(&state, &form).await;

    let view = PageView::from_form(state.provider.model(), &form, &state.defaults)
        .with_outcome(outcome);
    Ok(Html(state.page.render(&view)?))
}

async fn generate_outcome(state: &AppState, form: &GenerateForm) -> Outcome {
    if !form.has_prompt() {
        warn!("Generate requested with an empty prompt");
        return Outcome::Warning(EMPTY_PROMPT_WARNING.to_string());
    }

    let configuration = match form.to_request_configuration(&state.defaults) {
        Ok(configuration) => configuration,
        Err(e) => {
            warn!("Rejected playground parameters: {:#}", e);
            return Outcome::error(&e);
        }
    };

    info!(
        "Received playground generate request for model: {}",
        state.provider.model()
    );

    match state.provider.generate_text(&configuration).await {
        Ok(generated) => Outcome::Response(generated.text),
        Err(e) => {
            error!("Generation failed: {:#}", e);
            Outcome::error(&e)
        }
    }
}
