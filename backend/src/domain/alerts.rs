//! Inventory alert service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use super::ports::{InventoryAlertsQuery, InventoryRepository};
use super::window::{ReportingWindow, LOW_STOCK_THRESHOLD};
use super::{Error, InventoryAlerts};

/// Resolves both alert feeds against one reporting window.
#[derive(Clone)]
pub struct StockAlertService {
    inventory: Arc<dyn InventoryRepository>,
    clock: Arc<dyn Clock>,
}

impl StockAlertService {
    pub fn new(inventory: Arc<dyn InventoryRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { inventory, clock }
    }
}

#[async_trait]
impl InventoryAlertsQuery for StockAlertService {
    async fn inventory_alerts(&self) -> Result<InventoryAlerts, Error> {
        let window = ReportingWindow::at(self.clock.utc());

        let (low_stock, expiring_soon) = tokio::try_join!(
            self.inventory.list_low_stock(LOW_STOCK_THRESHOLD),
            self.inventory
                .list_expiring_between(window.expiry_window_start(), window.expiry_window_end()),
        )?;

        Ok(InventoryAlerts {
            low_stock,
            expiring_soon,
        })
    }
}
