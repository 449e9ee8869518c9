use std::sync::Arc;

use super::error::IntoGraphqlResult;
use super::types::{AddArticleInput, ArticleObject, DeleteArticleInput, UpdateArticleInput};
use crate::application::{
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
    services::ApplicationServices,
};
use async_graphql::{Context, EmptySubscription, Object, Schema};

pub type ArticleSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

fn services<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<ApplicationServices>> {
    ctx.data::<Arc<ApplicationServices>>()
}

#[derive(Default)]
pub struct QueryRoot;

/// This is a root query
#[Object(name = "Query")]
impl QueryRoot {
    async fn article(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "The id of the article")] id: String,
    ) -> async_graphql::Result<Option<ArticleObject>> {
        let article = services(ctx)?
            .article_queries
            .get_article_by_id(GetArticleByIdQuery { id })
            .await
            .into_graphql()?;
        Ok(article.map(Into::into))
    }

    async fn articles(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<ArticleObject>>>> {
        let articles = services(ctx)?
            .article_queries
            .list_articles(ListArticlesQuery)
            .await
            .into_graphql()?;
        Ok(Some(
            articles
                .into_iter()
                .map(|article| Some(article.into()))
                .collect(),
        ))
    }
}

#[derive(Default)]
pub struct MutationRoot;

/// This is a root mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    async fn add_article(
        &self,
        ctx: &Context<'_>,
        article: AddArticleInput,
    ) -> async_graphql::Result<Option<ArticleObject>> {
        let created = services(ctx)?
            .article_commands
            .create_article(article.into())
            .await
            .into_graphql()?;
        Ok(Some(created.into()))
    }

    async fn update_article(
        &self,
        ctx: &Context<'_>,
        article: UpdateArticleInput,
    ) -> async_graphql::Result<Option<ArticleObject>> {
        let updated = services(ctx)?
            .article_commands
            .update_article(article.into())
            .await
            .into_graphql()?;
        Ok(updated.map(Into::into))
    }

    async fn delete_article(
        &self,
        ctx: &Context<'_>,
        article: DeleteArticleInput,
    ) -> async_graphql::Result<Option<String>> {
        services(ctx)?
            .article_commands
            .delete_article(article.into())
            .await
            .into_graphql()
    }
}

pub fn build_schema(services: Arc<ApplicationServices>) -> ArticleSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services)
        .finish()
}

/// SDL of the article schema, independent of any store.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}
