use crate::client::ValorantClient;
use crate::endpoints::{json_or_none, present};
use crate::error::ValorantError;
use crate::models::store::{Entitlements, ItemType, Offers, Storefront, Wallet};
use crate::request::PvpRequest;

/// Store endpoints (pd `store/v1`, `store/v2`).
pub struct StoreEndpoints<'a> {
    pub(crate) client: &'a ValorantClient,
}

impl StoreEndpoints<'_> {
    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: String,
        what: &str,
    ) -> Result<Option<T>, ValorantError> {
        let resp = self
            .client
            .handle_pvp_request(PvpRequest::get(path).prefix(self.client.pd_url()))
            .await?;
        json_or_none(resp, what).await
    }

    pub async fn offers(&self) -> Result<Option<Offers>, ValorantError> {
        self.get("store/v1/offers/".to_string(), "store offers").await
    }

    pub async fn storefront(&self, puuid: &str) -> Result<Option<Storefront>, ValorantError> {
        self.get(format!("store/v2/storefront/{puuid}"), "storefront")
            .await
    }

    pub async fn wallet(&self, puuid: &str) -> Result<Option<Wallet>, ValorantError> {
        self.get(format!("store/v1/wallet/{puuid}"), "wallet").await
    }

    pub async fn order(&self, order_id: &str) -> Result<Option<serde_json::Value>, ValorantError> {
        let Some(order_id) = present(order_id, "order id") else {
            return Ok(None);
        };
        self.get(format!("store/v1/order/{order_id}"), "order").await
    }

    /// Owned items of one category.
    pub async fn entitlements(
        &self,
        puuid: &str,
        item_type: ItemType,
    ) -> Result<Option<Entitlements>, ValorantError> {
        self.get(
            format!("store/v1/entitlements/{puuid}/{}", item_type.id()),
            "entitlements",
        )
        .await
    }
}
