//! Client-side article fetching.
//!
//! Side effects are described as [`Effect`] values produced step by step by a
//! [`Saga`]; [`run_saga`] interprets them against an [`ArticlesApi`] and a
//! dispatch function. [`saga_for`] maps a dispatched request action to the
//! saga it starts. Tests can drive a saga by hand and inspect each effect.

pub mod actions;
pub mod api;
pub mod effects;
pub mod error;
pub mod runtime;
pub mod sagas;

pub use actions::{Action, AsyncActionType, FETCH_ARTICLES};
pub use api::{ArticlesApi, GraphqlArticlesClient};
pub use effects::{Effect, ServiceCall, call, put};
pub use error::ClientError;
pub use runtime::run_saga;
pub use sagas::{FetchArticlesSaga, Resume, Saga, fetch_articles, saga_for};
