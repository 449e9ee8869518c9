use super::{
    actions::Action,
    api::ArticlesApi,
    effects::{Effect, ServiceCall},
    error::ClientError,
    sagas::{Resume, Saga},
};

/// Drives `saga` to completion, executing each effect it yields.
///
/// Service failures are thrown back into the saga rather than returned, so the
/// saga decides how to report them. Only a result that cannot be encoded as
/// JSON aborts the run.
pub async fn run_saga<S, F>(saga: &mut S, api: &dyn ArticlesApi, mut dispatch: F) -> Result<(), ClientError>
where
    S: Saga + ?Sized,
    F: FnMut(Action),
{
    let mut input = Resume::start();
    while let Some(effect) = saga.resume(input) {
        input = match effect {
            Effect::Call(ServiceCall::FetchArticles) => match api.fetch_articles().await {
                Ok(articles) => Resume::Next(Some(serde_json::to_value(articles)?)),
                Err(err) => {
                    tracing::warn!(error = %err, "fetch articles failed");
                    Resume::Throw(err.to_string())
                }
            },
            Effect::Put(action) => {
                tracing::debug!(action = %action.action_type, "dispatch");
                dispatch(action);
                Resume::start()
            }
        };
    }
    Ok(())
}
