// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleSlug, ArticleTitle};
use crate::domain::user::Username;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub headline: ArticleBody,
    pub content: ArticleBody,
    pub author: Username,
    pub added_at: NaiveDateTime,
}

impl Article {
    pub fn is_written_by(&self, username: &Username) -> bool {
        &self.author == username
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_article() -> Article {
        Article {
            slug: ArticleSlug::new("reactor-bismuth-is-out").unwrap(),
            title: ArticleTitle::new("Reactor Bismuth is out").unwrap(),
            headline: ArticleBody::new("headline").unwrap(),
            content: ArticleBody::new("content").unwrap(),
            author: Username::new("simonbasle").unwrap(),
            added_at: NaiveDate::from_ymd_opt(2017, 9, 28)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn is_written_by_compares_handles() {
        let article = sample_article();
        assert!(article.is_written_by(&Username::new("simonbasle").unwrap()));
        assert!(!article.is_written_by(&Username::new("sdeleuze").unwrap()));
    }
}
