mod articles;

pub use articles::{FetchArticlesSaga, fetch_articles};

use super::{
    actions::{Action, FETCH_ARTICLES},
    effects::Effect,
};
use serde_json::Value;

/// What the driver feeds back into a saga.
#[derive(Debug, Clone, PartialEq)]
pub enum Resume {
    /// Continue, optionally with the result of the previous effect.
    Next(Option<Value>),
    /// The previous effect failed.
    Throw(String),
}

impl Resume {
    pub fn start() -> Self {
        Self::Next(None)
    }
}

/// A cooperative state machine that yields one effect per step.
///
/// Returns `None` once the saga has finished; later calls keep returning `None`.
pub trait Saga: Send {
    fn resume(&mut self, input: Resume) -> Option<Effect>;
}

/// Root watcher: the saga started for a dispatched action, if any.
///
/// `FETCH_ARTICLES_REQUEST` starts a [`FetchArticlesSaga`]; every other action
/// type is ignored.
pub fn saga_for(action: &Action) -> Option<Box<dyn Saga>> {
    if action.action_type == FETCH_ARTICLES.request {
        Some(Box::new(fetch_articles()))
    } else {
        None
    }
}
