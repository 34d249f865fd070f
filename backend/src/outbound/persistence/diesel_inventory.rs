//! PostgreSQL-backed `InventoryRepository` implementation.
//!
//! Alert lists load the matching stock rows first and then resolve the owning
//! pharmacies with their contact users in one pass. An item whose pharmacy
//! does not resolve fails the feed with an integrity error.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_async::pooled_connection::bb8::PooledConnection;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{AdminStoreError, InventoryRepository};
use crate::domain::InventoryAlert;

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::InventoryItemRow;
use super::pool::DbPool;
use super::schema::{inventory_items, pharmacies, users};

/// Diesel-backed implementation of the `InventoryRepository` port.
#[derive(Clone)]
pub struct DieselInventoryRepository {
    pool: DbPool,
}

impl DieselInventoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Join item rows with their pharmacy profile and contact user.
async fn enrich(
    conn: &mut PooledConnection<'_, AsyncPgConnection>,
    rows: Vec<InventoryItemRow>,
) -> Result<Vec<InventoryAlert>, AdminStoreError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let pharmacy_ids: Vec<Uuid> = rows.iter().map(|row| row.pharmacy_id).collect();
    let contacts: HashMap<Uuid, (String, Option<String>)> = pharmacies::table
        .inner_join(users::table)
        .filter(pharmacies::id.eq_any(pharmacy_ids))
        .select((pharmacies::id, users::name, users::phone))
        .load::<(Uuid, String, Option<String>)>(conn)
        .await
        .map_err(map_diesel_error)?
        .into_iter()
        .map(|(id, name, phone)| (id, (name, phone)))
        .collect();

    rows.into_iter()
        .map(|row| {
            let (pharmacy_name, pharmacy_phone) =
                contacts.get(&row.pharmacy_id).cloned().ok_or_else(|| {
                    AdminStoreError::integrity(format!(
                        "inventory item {} references missing pharmacy {}",
                        row.id, row.pharmacy_id
                    ))
                })?;
            Ok(InventoryAlert {
                id: row.id,
                pharmacy_id: row.pharmacy_id,
                quantity: row.quantity,
                expiry_date: row.expiry_date,
                pharmacy_name,
                pharmacy_phone,
            })
        })
        .collect()
}

#[async_trait]
impl InventoryRepository for DieselInventoryRepository {
    async fn count_low_stock(&self, threshold: i32) -> Result<i64, AdminStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        inventory_items::table
            .filter(inventory_items::quantity.lt(threshold))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn count_expiring_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<i64, AdminStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // BETWEEN is inclusive on both ends, matching the alert window.
        inventory_items::table
            .filter(inventory_items::expiry_date.between(from, to))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn list_low_stock(&self, threshold: i32) -> Result<Vec<InventoryAlert>, AdminStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<InventoryItemRow> = inventory_items::table
            .filter(inventory_items::quantity.lt(threshold))
            .select(InventoryItemRow::as_select())
            .order((inventory_items::quantity.asc(), inventory_items::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        enrich(&mut conn, rows).await
    }

    async fn list_expiring_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<InventoryAlert>, AdminStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<InventoryItemRow> = inventory_items::table
            .filter(inventory_items::expiry_date.between(from, to))
            .select(InventoryItemRow::as_select())
            .order((inventory_items::expiry_date.asc(), inventory_items::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        enrich(&mut conn, rows).await
    }
}
