//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. Only the
//! columns the admin read paths project are declared for role profiles;
//! Diesel ignores extra database columns it is not told about.

diesel::table! {
    /// Registered accounts across every role.
    ///
    /// Credential columns are deliberately not declared here so no query in
    /// this crate can project them.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Human-readable display name.
        name -> Varchar,
        /// Contact email, if provided.
        email -> Nullable<Varchar>,
        /// Contact phone number, if provided.
        phone -> Nullable<Varchar>,
        /// Role discriminator: PATIENT, DOCTOR, PHARMACY or ADMIN.
        role -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Patient profiles, one per patient user.
    patients (id) {
        id -> Uuid,
        /// Owning user account.
        user_id -> Uuid,
    }
}

diesel::table! {
    /// Doctor profiles, one per doctor user.
    doctors (id) {
        id -> Uuid,
        /// Owning user account.
        user_id -> Uuid,
    }
}

diesel::table! {
    /// Pharmacy profiles, one per pharmacy user.
    pharmacies (id) {
        id -> Uuid,
        /// Contact user account for the pharmacy.
        user_id -> Uuid,
    }
}

diesel::table! {
    /// Appointments between a patient and a doctor.
    appointments (id) {
        id -> Uuid,
        patient_id -> Uuid,
        doctor_id -> Uuid,
        /// When the appointment takes place.
        scheduled_time -> Timestamptz,
        /// Lifecycle state: PENDING, CONFIRMED, COMPLETED or CANCELLED.
        status -> Varchar,
    }
}

diesel::table! {
    /// Pharmacy stock records.
    inventory_items (id) {
        id -> Uuid,
        /// Owning pharmacy profile.
        pharmacy_id -> Uuid,
        /// Units currently in stock.
        quantity -> Int4,
        /// Calendar day the batch expires on.
        expiry_date -> Date,
    }
}

diesel::joinable!(patients -> users (user_id));
diesel::joinable!(doctors -> users (user_id));
diesel::joinable!(pharmacies -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    patients,
    doctors,
    pharmacies,
    appointments,
    inventory_items,
);
