// src/application/seed/mod.rs
//! Startup seeding of demo users and articles.

pub mod fixtures;

use std::sync::Arc;

use tracing::info;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::ArticleWriteRepository;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserRepository;

pub use fixtures::{SEED_ARTICLE_COUNT, SEED_USER_COUNT, SeedUsers, seed_articles};

/// Counts of records written by one seeding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub articles: usize,
}

/// Writes the demo users, then the demo articles, each as a single batch.
///
/// Meant to run once at process start. Any repository error is returned as is
/// and stops the pass; the article batch is never attempted if the user batch
/// fails.
pub struct DatabaseSeeder {
    user_repo: Arc<dyn UserRepository>,
    article_repo: Arc<dyn ArticleWriteRepository>,
    slugger: Arc<dyn SlugGenerator>,
}

impl DatabaseSeeder {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_repo: Arc<dyn ArticleWriteRepository>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            user_repo,
            article_repo,
            slugger,
        }
    }

    pub async fn run(&self) -> DomainResult<SeedReport> {
        let seed_users = SeedUsers::build()?;
        let users = seed_users.to_vec();
        info!("Seeding {} users...", users.len());
        self.user_repo.save_all(&users).await?;

        let articles = seed_articles(&seed_users, self.slugger.as_ref())?;
        info!("Seeding {} articles...", articles.len());
        self.article_repo.save_all(&articles).await?;

        let report = SeedReport {
            users: users.len(),
            articles: articles.len(),
        };
        info!(users = report.users, articles = report.articles, "seed completed");
        Ok(report)
    }
}
