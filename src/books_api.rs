use reqwest::{Client, Method, RequestBuilder, Url};
use tracing::{debug, error};

use crate::{
    book::{Book, BookList, BookPayload},
    config::{Config, Encoding},
    error::{Error, Result},
};

const COLLECTION: &str = "books";

/// Typed client for the `/books` REST resource.
///
///   GET    /books      list
///   POST   /books      create
///   PUT    /books/:id  update
///   DELETE /books/:id  delete
#[derive(Clone, Debug)]
pub struct BooksApi {
    client: Client,
    base_url: Url,
    encoding: Encoding,
}

impl BooksApi {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(Error::Client)?;

        Ok(BooksApi {
            client,
            base_url: config.base_url.clone(),
            encoding: config.encoding,
        })
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn collection_url(&self) -> Result<Url> {
        self.join(COLLECTION)
    }

    pub fn item_url(&self, id: i64) -> Result<Url> {
        self.join(&format!("{collection}/{id}", collection = COLLECTION, id = id))
    }

    pub async fn list(&self) -> Result<Vec<Book>> {
        let request_url = self.collection_url()?;
        let body = self.send(Method::GET, request_url, None).await?;
        let list: BookList = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "could not decode book list");
            Error::Decode(e)
        })?;
        debug!(count = list.books.len(), "fetched books");
        Ok(list.books)
    }

    pub async fn create(&self, payload: &BookPayload) -> Result<String> {
        let request_url = self.collection_url()?;
        self.send(Method::POST, request_url, Some(payload)).await
    }

    pub async fn update(&self, id: i64, payload: &BookPayload) -> Result<String> {
        let request_url = self.item_url(id)?;
        self.send(Method::PUT, request_url, Some(payload)).await
    }

    pub async fn delete(&self, id: i64) -> Result<String> {
        let request_url = self.item_url(id)?;
        self.send(Method::DELETE, request_url, None).await
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|e| Error::Url {
            input: format!("{}{}", self.base_url, path),
            reason: e.to_string(),
        })
    }

    // Every request goes through here. Failures are logged once and handed
    // back; on success the raw body goes to the caller.
    async fn send(&self, method: Method, url: Url, payload: Option<&BookPayload>) -> Result<String> {
        debug!(%method, %url, encoding = %self.encoding, "sending request");

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(payload) = payload {
            request = match self.encoding {
                Encoding::Json => request.json(payload),
                Encoding::Form => request.form(payload),
            };
        }

        let result = dispatch(request).await;
        if let Err(e) = &result {
            error!(%method, %url, error = %e, "request failed");
        }
        result
    }
}

async fn dispatch(request: RequestBuilder) -> Result<String> {
    let response = request.send().await.map_err(Error::Connection)?;
    let status = response.status();
    let body = response.text().await.map_err(Error::Connection)?;

    if !status.is_success() {
        return Err(Error::Status { status, body });
    }
    Ok(body)
}
