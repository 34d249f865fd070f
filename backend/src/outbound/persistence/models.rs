//! Row structs mapping Diesel query results onto the domain read models.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::ports::AdminStoreError;
use crate::domain::{AppointmentStatus, UserAccount, UserRole};

use super::schema::{appointments, inventory_items, users};

/// Directory projection of the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Parse a stored role discriminator, surfacing unknown values as integrity
/// failures rather than skipping the row.
pub fn parse_role(value: &str, id: Uuid) -> Result<UserRole, AdminStoreError> {
    UserRole::parse(value)
        .ok_or_else(|| AdminStoreError::integrity(format!("user {id} has unknown role {value:?}")))
}

/// Parse a stored appointment status discriminator.
pub fn parse_status(value: &str, id: Uuid) -> Result<AppointmentStatus, AdminStoreError> {
    AppointmentStatus::parse(value).ok_or_else(|| {
        AdminStoreError::integrity(format!("appointment {id} has unknown status {value:?}"))
    })
}

impl TryFrom<UserRow> for UserAccount {
    type Error = AdminStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = parse_role(&row.role, row.id)?;
        Ok(UserAccount {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            role,
            created_at: row.created_at,
        })
    }
}

/// Feed projection of the appointments table, before participant enrichment.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = appointments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AppointmentRow {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub scheduled_time: DateTime<Utc>,
    pub status: String,
}

/// Alert projection of the inventory table, before pharmacy enrichment.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = inventory_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InventoryItemRow {
    pub id: Uuid,
    pub pharmacy_id: Uuid,
    pub quantity: i32,
    pub expiry_date: NaiveDate,
}
