//! In-memory offer book

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::Address;

/// One listed swap: `sell_amount` of `sell_symbol` for `buy_amount` of `buy_symbol`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub seller: Address,
    #[serde(default)]
    pub sell_symbol: String,
    #[serde(default)]
    pub sell_amount: String,
    #[serde(default)]
    pub buy_symbol: String,
    #[serde(default)]
    pub buy_amount: String,
}

/// Shared list of offers, in insertion order
#[derive(Debug, Clone, Default)]
pub struct OfferBook {
    offers: Arc<RwLock<Vec<Offer>>>,
}

impl OfferBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_offers(offers: Vec<Offer>) -> Self {
        Self {
            offers: Arc::new(RwLock::new(offers)),
        }
    }

    pub async fn list(&self) -> Vec<Offer> {
        self.offers.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Offer> {
        self.offers.read().await.iter().find(|o| o.id == id).cloned()
    }

    /// Add an offer, replacing any existing offer with the same id
    pub async fn insert(&self, offer: Offer) {
        let mut offers = self.offers.write().await;
        match offers.iter_mut().find(|o| o.id == offer.id) {
            Some(existing) => *existing = offer,
            None => offers.push(offer),
        }
    }

    pub async fn remove(&self, id: &str) -> Option<Offer> {
        let mut offers = self.offers.write().await;
        let index = offers.iter().position(|o| o.id == id)?;
        Some(offers.remove(index))
    }

    pub async fn len(&self) -> usize {
        self.offers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.offers.read().await.is_empty()
    }
}
