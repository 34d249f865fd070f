//! PostgreSQL-backed `AppointmentRepository` implementation.
//!
//! The feed query runs in two steps: load the most recent appointment rows,
//! then resolve the patient and doctor display fields for exactly those rows.
//! A participant that does not resolve is an integrity failure for the whole
//! feed, never a silently dropped row.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{AdminStoreError, AppointmentRepository};
use crate::domain::{AppointmentStatus, RecentAppointment};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{parse_status, AppointmentRow};
use super::pool::DbPool;
use super::schema::{appointments, doctors, patients, users};

/// Diesel-backed implementation of the `AppointmentRepository` port.
#[derive(Clone)]
pub struct DieselAppointmentRepository {
    pool: DbPool,
}

impl DieselAppointmentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for DieselAppointmentRepository {
    async fn count_scheduled_since(
        &self,
        from: DateTime<Utc>,
        statuses: Option<&[AppointmentStatus]>,
    ) -> Result<i64, AdminStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = appointments::table
            .into_boxed()
            .filter(appointments::scheduled_time.ge(from));
        if let Some(statuses) = statuses {
            let labels: Vec<&str> = statuses.iter().map(|status| status.as_str()).collect();
            query = query.filter(appointments::status.eq_any(labels));
        }
        query
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn count_with_status(&self, status: AppointmentStatus) -> Result<i64, AdminStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        appointments::table
            .filter(appointments::status.eq(status.as_str()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<RecentAppointment>, AdminStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AppointmentRow> = appointments::table
            .select(AppointmentRow::as_select())
            .order(appointments::scheduled_time.desc())
            .limit(limit)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let patient_ids: Vec<Uuid> = rows.iter().map(|row| row.patient_id).collect();
        let doctor_ids: Vec<Uuid> = rows.iter().map(|row| row.doctor_id).collect();

        let patient_contacts: HashMap<Uuid, (String, Option<String>)> = patients::table
            .inner_join(users::table)
            .filter(patients::id.eq_any(patient_ids))
            .select((patients::id, users::name, users::phone))
            .load::<(Uuid, String, Option<String>)>(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_iter()
            .map(|(id, name, phone)| (id, (name, phone)))
            .collect();

        let doctor_names: HashMap<Uuid, String> = doctors::table
            .inner_join(users::table)
            .filter(doctors::id.eq_any(doctor_ids))
            .select((doctors::id, users::name))
            .load::<(Uuid, String)>(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_iter()
            .collect();

        rows.into_iter()
            .map(|row| {
                let status = parse_status(&row.status, row.id)?;
                let (patient_name, patient_phone) =
                    patient_contacts.get(&row.patient_id).cloned().ok_or_else(|| {
                        AdminStoreError::integrity(format!(
                            "appointment {} references missing patient {}",
                            row.id, row.patient_id
                        ))
                    })?;
                let doctor_name = doctor_names.get(&row.doctor_id).cloned().ok_or_else(|| {
                    AdminStoreError::integrity(format!(
                        "appointment {} references missing doctor {}",
                        row.id, row.doctor_id
                    ))
                })?;
                Ok(RecentAppointment {
                    id: row.id,
                    scheduled_time: row.scheduled_time,
                    status,
                    patient_name,
                    patient_phone,
                    doctor_name,
                })
            })
            .collect()
    }
}
