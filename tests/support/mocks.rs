// tests/support/mocks.rs
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use deepdive_core::application::ports::util::SlugGenerator;
use deepdive_core::domain::article::{Article, ArticleWriteRepository};
use deepdive_core::domain::errors::{DomainError, DomainResult};
use deepdive_core::domain::user::{User, UserRepository, Username};

/// Order in which repository batches were submitted, shared between mocks.
pub type CallLog = Arc<Mutex<Vec<&'static str>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// User store that rejects a batch containing an already stored handle,
/// without keeping any part of that batch.
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
    calls: CallLog,
}

impl InMemoryUserRepo {
    pub fn new(calls: CallLog) -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            calls,
        }
    }

    pub fn stored(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn save_all(&self, users: &[User]) -> DomainResult<()> {
        self.calls.lock().unwrap().push("users");
        let mut stored = self.users.lock().unwrap();
        for user in users {
            let taken = stored.iter().any(|u| u.username == user.username)
                || users.iter().filter(|u| u.username == user.username).count() > 1;
            if taken {
                return Err(DomainError::Conflict("username already exists".into()));
            }
        }
        stored.extend_from_slice(users);
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.username == username)
            .cloned())
    }
}

/// User store whose writes always fail, as if the database were unreachable.
pub struct UnavailableUserRepo {
    calls: CallLog,
}

impl UnavailableUserRepo {
    pub fn new(calls: CallLog) -> Self {
        Self { calls }
    }
}

#[async_trait]
impl UserRepository for UnavailableUserRepo {
    async fn save_all(&self, _users: &[User]) -> DomainResult<()> {
        self.calls.lock().unwrap().push("users");
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn count(&self) -> DomainResult<u64> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_by_username(&self, _username: &Username) -> DomainResult<Option<User>> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
    calls: CallLog,
}

impl InMemoryArticleRepo {
    pub fn new(calls: CallLog) -> Self {
        Self {
            articles: Mutex::new(Vec::new()),
            calls,
        }
    }

    pub fn stored(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn save_all(&self, articles: &[Article]) -> DomainResult<()> {
        self.calls.lock().unwrap().push("articles");
        let mut stored = self.articles.lock().unwrap();
        if articles
            .iter()
            .any(|a| stored.iter().any(|s| s.slug == a.slug))
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        stored.extend_from_slice(articles);
        Ok(())
    }
}

/// Returns its input untouched.
#[derive(Clone)]
pub struct IdentitySlug;

impl SlugGenerator for IdentitySlug {
    fn slugify(&self, s: &str) -> String {
        s.to_string()
    }
}
