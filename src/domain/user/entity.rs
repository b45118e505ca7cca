// src/domain/user/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::value_objects::{PersonName, Username};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: Username,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub description: Option<String>,
}

impl User {
    pub fn new(
        username: &str,
        first_name: &str,
        last_name: &str,
        description: Option<&str>,
    ) -> DomainResult<Self> {
        Ok(Self {
            username: Username::new(username)?,
            first_name: PersonName::new(first_name)?,
            last_name: PersonName::new(last_name)?,
            description: description.map(str::to_owned),
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
