//! Shopping list API client implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use urlencoding::encode;

use crate::config::Config;
use crate::domain::entities::{ItemFields, ItemId, NewShoppingItem, OwnerId, ShoppingListItem};
use crate::domain::ports::ShoppingListGateway;
use crate::error::GatewayError;

/// Gateway backed by the `/api/shoplist` REST routes
pub struct HttpShoppingListGateway {
    http: Client,
    base_url: String,
}

impl HttpShoppingListGateway {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, GatewayError> {
        Self::new(&config.api_url, config.request_timeout)
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, owner: &OwnerId) -> String {
        format!(
            "{}/api/shoplist?userId={}",
            self.base_url,
            encode(owner.as_str())
        )
    }

    fn item_url(&self, id: ItemId, owner: &OwnerId) -> String {
        format!(
            "{}/api/shoplist/{}?userId={}",
            self.base_url,
            id,
            encode(owner.as_str())
        )
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| GatewayError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), GatewayError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Request types for the shopping list API
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateItemRequest<'a> {
    priority: i32,
    item: &'a str,
    quantity: i32,
    details: Option<&'a str>,
    date: DateTime<Utc>,
    user_id: &'a str,
}

impl<'a> CreateItemRequest<'a> {
    fn new(owner: &'a OwnerId, new_item: &'a NewShoppingItem) -> Self {
        Self {
            priority: new_item.fields.priority,
            item: &new_item.fields.item,
            quantity: new_item.fields.quantity,
            details: new_item.fields.details_opt(),
            date: new_item.date,
            user_id: owner.as_str(),
        }
    }
}

#[derive(Serialize)]
struct UpdateItemRequest<'a> {
    priority: i32,
    item: &'a str,
    quantity: i32,
    details: Option<&'a str>,
}

impl<'a> From<&'a ItemFields> for UpdateItemRequest<'a> {
    fn from(fields: &'a ItemFields) -> Self {
        Self {
            priority: fields.priority,
            item: &fields.item,
            quantity: fields.quantity,
            details: fields.details_opt(),
        }
    }
}

#[async_trait]
impl ShoppingListGateway for HttpShoppingListGateway {
    async fn list(&self, owner: &OwnerId) -> Result<Vec<ShoppingListItem>, GatewayError> {
        let response = self.http.get(self.collection_url(owner)).send().await?;
        self.handle_response(response).await
    }

    async fn create(
        &self,
        owner: &OwnerId,
        item: &NewShoppingItem,
    ) -> Result<ShoppingListItem, GatewayError> {
        let response = self
            .http
            .post(self.collection_url(owner))
            .json(&CreateItemRequest::new(owner, item))
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn update(
        &self,
        owner: &OwnerId,
        id: ItemId,
        fields: &ItemFields,
    ) -> Result<ShoppingListItem, GatewayError> {
        let response = self
            .http
            .put(self.item_url(id, owner))
            .json(&UpdateItemRequest::from(fields))
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn delete(&self, owner: &OwnerId, id: ItemId) -> Result<(), GatewayError> {
        let response = self.http.delete(self.item_url(id, owner)).send().await?;
        self.handle_empty_response(response).await
    }

    async fn delete_all(&self, owner: &OwnerId) -> Result<(), GatewayError> {
        let response = self.http.delete(self.collection_url(owner)).send().await?;
        self.handle_empty_response(response).await
    }
}
