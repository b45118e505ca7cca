use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleReadRepository, ArticleSlug, ArticleTitle, ArticleWriteRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::Username;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    slug: String,
    title: String,
    headline: String,
    content: String,
    author: String,
    added_at: NaiveDateTime,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            slug: ArticleSlug::new(row.slug)?,
            title: ArticleTitle::new(row.title)?,
            headline: ArticleBody::new(row.headline)?,
            content: ArticleBody::new(row.content)?,
            author: Username::new(row.author)?,
            added_at: row.added_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn save_all(&self, articles: &[Article]) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        for article in articles {
            sqlx::query(
                "INSERT INTO articles (slug, title, headline, content, author, added_at)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(article.slug.as_str())
            .bind(article.title.as_str())
            .bind(article.headline.as_str())
            .bind(article.content.as_str())
            .bind(article.author.as_str())
            .bind(article.added_at)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM articles")
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT slug, title, headline, content, author, added_at
             FROM articles WHERE slug = ?",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_latest(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT slug, title, headline, content, author, added_at
             FROM articles ORDER BY added_at DESC, slug ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
