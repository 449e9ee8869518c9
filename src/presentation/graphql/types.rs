use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, FieldInput, UpdateArticleCommand,
    },
    dto::ArticleDto,
};
use async_graphql::{InputObject, MaybeUndefined, SimpleObject};

/// This represents an Article
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Article")]
pub struct ArticleObject {
    pub author: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub id: Option<String>,
    pub published: Option<bool>,
    pub tags: Option<Vec<Option<String>>>,
    pub title: Option<String>,
}

impl From<ArticleDto> for ArticleObject {
    fn from(article: ArticleDto) -> Self {
        Self {
            author: article.author,
            content: article.content,
            excerpt: Some(article.excerpt),
            id: Some(article.id),
            published: Some(article.published),
            tags: Some(article.tags.into_iter().map(Some).collect()),
            title: article.title,
        }
    }
}

#[derive(Debug, Default, InputObject)]
pub struct AddArticleInput {
    pub author: Option<String>,
    pub content: Option<String>,
    pub tags: MaybeUndefined<Vec<Option<String>>>,
    pub title: Option<String>,
}

#[derive(Debug, Default, InputObject)]
pub struct UpdateArticleInput {
    pub id: Option<String>,
    pub author: MaybeUndefined<String>,
    pub content: MaybeUndefined<String>,
    pub published: MaybeUndefined<bool>,
    pub tags: MaybeUndefined<Vec<Option<String>>>,
    pub title: MaybeUndefined<String>,
}

#[derive(Debug, Default, InputObject)]
pub struct DeleteArticleInput {
    /// The id of the article
    pub id: Option<String>,
}

fn field_input<T>(value: MaybeUndefined<T>) -> FieldInput<T> {
    match value {
        MaybeUndefined::Undefined => FieldInput::Omitted,
        MaybeUndefined::Null => FieldInput::Null,
        MaybeUndefined::Value(value) => FieldInput::Value(value),
    }
}

impl From<AddArticleInput> for CreateArticleCommand {
    fn from(input: AddArticleInput) -> Self {
        Self {
            author: input.author,
            title: input.title,
            content: input.content,
            tags: field_input(input.tags),
        }
    }
}

impl From<UpdateArticleInput> for UpdateArticleCommand {
    fn from(input: UpdateArticleInput) -> Self {
        Self {
            id: input.id,
            author: field_input(input.author),
            title: field_input(input.title),
            content: field_input(input.content),
            published: field_input(input.published),
            tags: field_input(input.tags),
        }
    }
}

impl From<DeleteArticleInput> for DeleteArticleCommand {
    fn from(input: DeleteArticleInput) -> Self {
        Self { id: input.id }
    }
}
