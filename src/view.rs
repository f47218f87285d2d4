use std::fmt;

use crate::book::{Book, BookPayload};
use crate::controller::Action;
use crate::error::Result;

/// One on-screen row: the id label, the two editable fields, and the
/// update/delete triggers bound to the row's id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookRow {
    id: i64,
    pub name_input: String,
    pub price_input: String,
}

impl BookRow {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn id_text(&self) -> String {
        self.id.to_string()
    }

    pub fn update_action(&self) -> Action {
        Action::Update(self.id)
    }

    pub fn delete_action(&self) -> Action {
        Action::Delete(self.id)
    }

    pub fn payload(&self) -> Result<BookPayload> {
        BookPayload::from_fields(&self.name_input, &self.price_input)
    }
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        BookRow {
            id: book.id,
            name_input: book.name.clone(),
            price_input: book.price.to_string(),
        }
    }
}

/// The "add" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub name_input: String,
    pub price_input: String,
}

impl Draft {
    pub fn new(name: &str, price: &str) -> Self {
        Draft {
            name_input: name.to_string(),
            price_input: price.to_string(),
        }
    }

    pub fn payload(&self) -> Result<BookPayload> {
        BookPayload::from_fields(&self.name_input, &self.price_input)
    }
}

#[derive(Debug, Default)]
pub struct ListView {
    rows: Vec<BookRow>,
    pub draft: Draft,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[BookRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, book: &Book) -> &mut BookRow {
        let idx = self.rows.len();
        self.rows.push(BookRow::from(book));
        &mut self.rows[idx]
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn row(&self, id: i64) -> Option<&BookRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn row_mut(&mut self, id: i64) -> Option<&mut BookRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "(no books)");
        }
        let id_width = self
            .rows
            .iter()
            .map(|row| row.id_text().len())
            .chain(std::iter::once(2))
            .max()
            .unwrap_or(2);
        let name_width = self
            .rows
            .iter()
            .map(|row| row.name_input.chars().count())
            .chain(std::iter::once(4))
            .max()
            .unwrap_or(4);

        writeln!(f, "{:>iw$}  {:<nw$}  price", "id", "name", iw = id_width, nw = name_width)?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>iw$}  {:<nw$}  {}",
                row.id_text(),
                row.name_input,
                row.price_input,
                iw = id_width,
                nw = name_width
            )?;
        }
        Ok(())
    }
}
