use serde::Deserialize;
use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

#[derive(Deserialize, Debug, Default)]
pub struct BookList {
    #[serde(default)]
    pub books: Vec<Book>,
}

/// Body of a create or update request. The server owns the id, so it is never sent.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct BookPayload {
    pub name: String,
    pub price: i64,
}

impl BookPayload {
    pub fn from_fields(name: &str, price: &str) -> Result<Self> {
        Ok(BookPayload {
            name: name.to_string(),
            price: parse_price(price)?,
        })
    }
}

pub fn parse_price(input: &str) -> Result<i64> {
    input.trim().parse().map_err(|_| Error::InvalidPrice {
        input: input.to_string(),
    })
}
