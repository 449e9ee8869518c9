//! GraphQL surface of the article service.
//!
//! - **Queries**: `article`, `articles`
//! - **Mutations**: `addArticle`, `updateArticle`, `deleteArticle`
//!
//! Field names, nullability and the single `article:` argument on each
//! mutation form the wire contract and must stay stable.

pub mod error;
pub mod schema;
pub mod types;

pub use schema::{ArticleSchema, MutationRoot, QueryRoot, build_schema, schema_sdl};
pub use types::{AddArticleInput, ArticleObject, DeleteArticleInput, UpdateArticleInput};
