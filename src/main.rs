use anyhow::Result;
use deepdive_core::application::{ports::util::SlugGenerator, seed::DatabaseSeeder};
use deepdive_core::config::AppConfig;
use deepdive_core::domain::{article::ArticleWriteRepository, user::UserRepository};
use deepdive_core::infrastructure::{
    database,
    repositories::{SqliteArticleWriteRepository, SqliteUserRepository},
    util::DefaultSlugGenerator,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!(url = config.database_url(), "database ready");

    if !config.seed_on_startup() {
        tracing::info!("seeding disabled, nothing else to do");
        return Ok(());
    }

    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
    let article_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(pool.clone()));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let seeder = DatabaseSeeder::new(user_repo, article_repo, slugger);
    let report = seeder.run().await?;
    tracing::info!("Seeded {} users and {} articles", report.users, report.articles);

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
