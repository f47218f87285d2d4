use tracing::{info, warn};

use crate::{
    book::BookPayload,
    books_api::BooksApi,
    error::{Error, Result},
    view::{Draft, ListView},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Reload,
    Add,
    Update(i64),
    Delete(i64),
}

/// Drives the list view against the backend. Every successful mutation is
/// followed by a full clear and re-fetch; a failed one leaves the view as it was.
pub struct ListController {
    api: BooksApi,
    view: ListView,
}

impl ListController {
    pub fn new(api: BooksApi) -> Self {
        ListController {
            api,
            view: ListView::new(),
        }
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ListView {
        &mut self.view
    }

    pub fn api(&self) -> &BooksApi {
        &self.api
    }

    pub async fn start(&mut self) -> Result<()> {
        self.reload().await
    }

    pub async fn press(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Reload => self.reload().await,
            Action::Add => self.create().await,
            Action::Update(id) => self.update(id).await,
            Action::Delete(id) => self.delete(id).await,
        }
    }

    /// Fill the add form and submit it.
    pub async fn add(&mut self, name: &str, price: &str) -> Result<()> {
        self.view.draft = Draft::new(name, price);
        self.press(Action::Add).await
    }

    /// Save new fields for a row. The row itself only changes through the
    /// re-list that follows a successful save.
    pub async fn edit(&mut self, id: i64, name: &str, price: &str) -> Result<()> {
        if self.view.row(id).is_none() {
            return Err(Error::RowNotFound(id));
        }
        let payload = BookPayload::from_fields(name, price).map_err(rejected)?;
        self.save(id, payload).await
    }

    pub async fn reload(&mut self) -> Result<()> {
        self.view.clear();
        self.list().await
    }

    async fn list(&mut self) -> Result<()> {
        let books = self.api.list().await?;
        for book in &books {
            self.view.push(book);
        }
        Ok(())
    }

    async fn create(&mut self) -> Result<()> {
        let payload = self.view.draft.payload().map_err(rejected)?;
        self.api.create(&payload).await?;
        info!(name = %payload.name, price = payload.price, "created book");
        self.reload().await
    }

    async fn update(&mut self, id: i64) -> Result<()> {
        let row = self.view.row(id).ok_or(Error::RowNotFound(id))?;
        let payload = row.payload().map_err(rejected)?;
        self.save(id, payload).await
    }

    async fn save(&mut self, id: i64, payload: BookPayload) -> Result<()> {
        self.api.update(id, &payload).await?;
        info!(id, name = %payload.name, price = payload.price, "updated book");
        self.reload().await
    }

    async fn delete(&mut self, id: i64) -> Result<()> {
        self.api.delete(id).await?;
        info!(id, "deleted book");
        self.reload().await
    }
}

fn rejected(e: Error) -> Error {
    warn!(error = %e, "input rejected, nothing sent");
    e
}
