//! Inventory alert read models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// An inventory item needing attention, enriched with the owning pharmacy
/// profile and that pharmacy's contact user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAlert {
    pub id: Uuid,
    pub pharmacy_id: Uuid,
    pub quantity: i32,
    pub expiry_date: NaiveDate,
    #[schema(example = "City Pharmacy")]
    pub pharmacy_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pharmacy_phone: Option<String>,
}

/// Both alert feeds resolved against one reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAlerts {
    /// Items with `quantity` strictly below the low-stock threshold, most
    /// depleted first.
    pub low_stock: Vec<InventoryAlert>,
    /// Items expiring within the alert window, soonest first.
    pub expiring_soon: Vec<InventoryAlert>,
}
