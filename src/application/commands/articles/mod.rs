// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod input;
mod service;
mod update;


pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use input::FieldInput;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
