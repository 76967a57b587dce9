//! User marks on catalog records: favourites and price alerts

use std::fmt;

use serde::{Deserialize, Serialize};
use shared::{component_info, Component, ItemId, Offer, Recipe};

use crate::core::CatalogItem;
use crate::error::{CatalogError, CatalogResult};

/// Records that can be marked as a favourite
pub trait Favorite: CatalogItem {
    fn is_favorite(&self) -> bool;

    fn set_favorite(&mut self, favorite: bool);
}

impl Favorite for Offer {
    fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    fn set_favorite(&mut self, favorite: bool) {
        self.is_favorite = favorite;
    }
}

impl Favorite for Recipe {
    fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    fn set_favorite(&mut self, favorite: bool) {
        self.is_favorite = favorite;
    }
}

/// Flip the favourite flag of the record with `id`; returns the new state
pub fn toggle_favorite<T: Favorite>(items: &mut [T], id: ItemId) -> CatalogResult<bool> {
    let item = items
        .iter_mut()
        .find(|item| item.id() == id)
        .ok_or(CatalogError::ItemNotFound { id })?;
    let favorite = !item.is_favorite();
    item.set_favorite(favorite);
    component_info!(Component::Catalog, domain = T::DOMAIN, item_id = %id, favorite, "Favourite toggled");
    Ok(favorite)
}

/// When an alert fires relative to the alert price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertTrigger {
    #[default]
    Below,
    Above,
    /// Any price change; the alert price is ignored
    Change,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationMethod {
    #[default]
    Push,
    Email,
    Both,
}

/// A price alert request for one offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAlert {
    pub offer_id: ItemId,
    pub alert_price: f64,
    #[serde(default)]
    pub trigger: AlertTrigger,
    #[serde(default)]
    pub notification: NotificationMethod,
}

impl fmt::Display for PriceAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.trigger {
            AlertTrigger::Below => write!(f, "below {:.2}€", self.alert_price),
            AlertTrigger::Above => write!(f, "above {:.2}€", self.alert_price),
            AlertTrigger::Change => write!(f, "on any change"),
        }
    }
}

impl PriceAlert {
    fn validate(&self) -> CatalogResult<()> {
        let price_matters = self.trigger != AlertTrigger::Change;
        if price_matters && !(self.alert_price.is_finite() && self.alert_price > 0.0) {
            return Err(CatalogError::InvalidAlertPrice { price: self.alert_price });
        }
        Ok(())
    }
}

/// Mark the alert's offer as watched
pub fn set_price_alert(offers: &mut [Offer], alert: &PriceAlert) -> CatalogResult<()> {
    alert.validate()?;
    let id = alert.offer_id;
    let offer = offers
        .iter_mut()
        .find(|offer| offer.id == id)
        .ok_or(CatalogError::ItemNotFound { id })?;
    offer.has_alert = true;
    component_info!(
        Component::Catalog,
        item_id = %id,
        alert = %alert,
        notification = ?alert.notification,
        "Price alert created"
    );
    Ok(())
}
