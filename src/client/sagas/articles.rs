use super::{Resume, Saga};
use crate::client::{
    actions::{Action, FETCH_ARTICLES},
    effects::{Effect, ServiceCall, call, put},
};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Start,
    AwaitingArticles,
    Dispatched,
}

/// Fetches the article list and dispatches the outcome.
///
/// Yields `Call(FetchArticles)`, then `Put(FETCH_ARTICLES_SUCCESS)` carrying
/// whatever payload it was resumed with, or `Put(FETCH_ARTICLES_FAILURE)`
/// when the call failed.
#[derive(Debug)]
pub struct FetchArticlesSaga {
    step: Step,
}

pub fn fetch_articles() -> FetchArticlesSaga {
    FetchArticlesSaga { step: Step::Start }
}

impl Saga for FetchArticlesSaga {
    fn resume(&mut self, input: Resume) -> Option<Effect> {
        match self.step {
            Step::Start => {
                self.step = Step::AwaitingArticles;
                Some(call(ServiceCall::FetchArticles))
            }
            Step::AwaitingArticles => {
                self.step = Step::Dispatched;
                let action = match input {
                    Resume::Next(payload) => {
                        Action::with_payload(FETCH_ARTICLES.success, payload.unwrap_or(Value::Null))
                    }
                    Resume::Throw(error) => Action::failure(FETCH_ARTICLES.failure, error),
                };
                Some(put(action))
            }
            Step::Dispatched => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn calls_the_fetch_articles_service() {
        let mut saga = fetch_articles();

        let call_fetch_articles_service = saga.resume(Resume::start());

        assert_eq!(call_fetch_articles_service, Some(call(ServiceCall::FetchArticles)));
    }

    #[test]
    fn dispatches_fetch_articles_success_with_the_received_articles() {
        let mut saga = fetch_articles();
        saga.resume(Resume::start());

        let payload = json!({});
        let dispatch_success_action = saga.resume(Resume::Next(Some(payload.clone())));

        assert_eq!(
            dispatch_success_action,
            Some(put(Action::with_payload(FETCH_ARTICLES.success, payload)))
        );
    }

    #[test]
    fn dispatches_failure_when_the_call_throws() {
        let mut saga = fetch_articles();
        saga.resume(Resume::start());

        let effect = saga.resume(Resume::Throw("network down".into()));

        assert_eq!(
            effect,
            Some(put(Action::failure(FETCH_ARTICLES.failure, "network down")))
        );
    }

    #[test]
    fn finishes_after_dispatch() {
        let mut saga = fetch_articles();
        saga.resume(Resume::start());
        saga.resume(Resume::Next(Some(json!([]))));

        assert_eq!(saga.resume(Resume::start()), None);
        assert_eq!(saga.resume(Resume::start()), None);
    }
}
