// src/application/seed/fixtures.rs
//! Literal demo content written at startup.

use chrono::{NaiveDate, NaiveDateTime};

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::{Article, ArticleBody, ArticleSlug, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::User;

pub const SEED_USER_COUNT: usize = 11;
pub const SEED_ARTICLE_COUNT: usize = 3;

/// The demo authors, one field per user so articles can point at them
/// directly.
#[derive(Debug, Clone)]
pub struct SeedUsers {
    pub brian: User,
    pub mark: User,
    pub arjen: User,
    pub rossen: User,
    pub sam: User,
    pub seb: User,
    pub simon: User,
    pub stephanem: User,
    pub stephanen: User,
    pub juergen: User,
    pub violeta: User,
}

impl SeedUsers {
    pub fn build() -> DomainResult<Self> {
        Ok(Self {
            brian: User::new(
                "bclozel",
                "Brian",
                "Clozel",
                Some("Spring Framework & Spring Boot @pivotal — @LaCordeeLyon coworker"),
            )?,
            mark: User::new(
                "MkHeck",
                "Mark",
                "Heckler",
                Some(
                    "Spring Developer Advocate @Pivotal. Computer scientist+MBA, inglés y español, @Java_Champions. Pragmatic optimist. #Spring #Reactive #Microservices #IoT #Cloud",
                ),
            )?,
            arjen: User::new("poutsma", "Arjen", "Poutsma", None)?,
            rossen: User::new(
                "rstoyanchev",
                "Rossen",
                "Stoyanchev",
                Some("Spring Framework committer @Pivotal"),
            )?,
            sam: User::new(
                "sam_brannen",
                "Sam",
                "Brannen",
                Some(
                    "Core @SpringFramework & @JUnitTeam Committer. Enterprise @Java Consultant at @Swiftmind. #Spring Trainer. Spring User Group Lead at @JUGCH.",
                ),
            )?,
            seb: User::new(
                "sdeleuze",
                "Sebastien",
                "Deleuze",
                Some(
                    "Spring Framework committer @Pivotal, @Kotlin addict, #WebAssembly believer, @mixitconf organizer, #techactivism",
                ),
            )?,
            simon: User::new(
                "simonbasle",
                "Simon",
                "Basle",
                Some("software development aficionado, Reactor Software Engineer @pivotal"),
            )?,
            stephanem: User::new(
                "smaldini",
                "Stephane",
                "Maldini",
                Some(
                    "Project Reactor Lead @Pivotal -All things Reactive and Distributed - ex Londoner - opinions != Pivotal",
                ),
            )?,
            stephanen: User::new(
                "snicoll",
                "Stephane",
                "Nicoll",
                Some(
                    "Proud husband. Passionate and enthusiastic Software engineer. Working on @springboot, @springframework & Spring Initializr at @Pivotal",
                ),
            )?,
            juergen: User::new("springjuergen", "Juergen", "Hoeller", None)?,
            violeta: User::new(
                "violetagg",
                "Violeta",
                "Georgieva",
                Some("All views are my own!"),
            )?,
        })
    }

    /// Users in insertion order.
    pub fn to_vec(&self) -> Vec<User> {
        vec![
            self.brian.clone(),
            self.mark.clone(),
            self.arjen.clone(),
            self.rossen.clone(),
            self.sam.clone(),
            self.seb.clone(),
            self.simon.clone(),
            self.stephanem.clone(),
            self.stephanen.clone(),
            self.juergen.clone(),
            self.violeta.clone(),
        ]
    }
}

/// Articles in insertion order.
pub fn seed_articles(users: &SeedUsers, slugger: &dyn SlugGenerator) -> DomainResult<Vec<Article>> {
    Ok(vec![
        article(
            slugger,
            "Reactor Bismuth is out",
            "It is my great pleasure to announce the GA release of **Reactor Bismuth**, which notably encompasses `reactor-core` **3.1.0.RELEASE** and `reactor-netty` **0.7.0.RELEASE** \u{1F389}",
            "With the release of [Spring Framework 5.0](https://spring.io/blog/2017/09/28/spring-framework-5-0-goes-ga) now just happening, you can imagine this is a giant step for Project Reactor :)\n",
            &users.simon,
            at(2017, 9, 28, 12, 0)?,
        )?,
        article(
            slugger,
            "Spring Framework 5.0 goes GA",
            "Dear Spring community,\n\nIt is my pleasure to announce that, after more than a year of milestones and RCs and almost two years of development overall, Spring Framework 5.0 is finally generally available as 5.0.0.RELEASE from [repo.spring.io](https://repo.spring.io) and Maven Central!",
            "This brand-new generation of the framework is ready for 2018 and beyond: with support for JDK 9 and the Java EE 8 API level (e.g. Servlet 4.0), as well as comprehensive integration with Reactor 3.1, JUnit 5, and the Kotlin language. On top of that all, Spring Framework 5 comes with many functional API variants and introduces a dedicated reactive web framework called Spring WebFlux, next to a revised version of our Servlet-based web framework Spring MVC.",
            &users.juergen,
            at(2017, 9, 28, 11, 30)?,
        )?,
        article(
            slugger,
            "Introducing Kotlin support in Spring Framework 5.0",
            "Following the [Kotlin support on start.spring.io](https://spring.io/blog/2016/02/15/developing-spring-boot-applications-with-kotlin) we introduced a few months ago, we have continued to work to ensure that Spring and [Kotlin](https://kotlin.link/) play well together.",
            "One of the key strengths of Kotlin is that it provides a very good [interoperability](https://kotlinlang.org/docs/reference/java-interop.html) with libraries written in Java. But there are ways to go even further and allow writing fully idiomatic Kotlin code when developing your next Spring application. In addition to Spring Framework support for Java 8 that Kotlin applications can leverage like functional web or bean registration APIs, there are additional Kotlin dedicated features that should allow you to reach a new level of productivity.",
            &users.seb,
            at(2017, 1, 4, 9, 0)?,
        )?,
    ])
}

fn article(
    slugger: &dyn SlugGenerator,
    title: &str,
    headline: &str,
    content: &str,
    author: &User,
    added_at: NaiveDateTime,
) -> DomainResult<Article> {
    let title = ArticleTitle::new(title)?;
    Ok(Article {
        slug: ArticleSlug::new(slugger.slugify(title.as_str()))?,
        title,
        headline: ArticleBody::new(headline)?,
        content: ArticleBody::new(content)?,
        author: author.username.clone(),
        added_at,
    })
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DomainResult<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| {
            DomainError::Validation(format!(
                "invalid seed timestamp {year}-{month}-{day} {hour}:{minute}"
            ))
        })
}
