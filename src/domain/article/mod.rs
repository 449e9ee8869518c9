pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticlePatch, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use services::{EXCERPT_ELLIPSIS, EXCERPT_MAX_CHARS, derive_excerpt};
pub use value_objects::{ArticleId, ArticleTags};
