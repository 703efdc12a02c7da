//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` when a migration changes.

diesel::table! {
    /// User directory. Rows are created or refreshed on sign-in.
    users (id) {
        id -> Uuid,
        display_name -> Varchar,
        email -> Varchar,
        /// `user` or `admin` (CHECK constraint).
        role -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Feedback records. Length and rating bounds are mirrored by CHECK
    /// constraints.
    feedback (id) {
        id -> Uuid,
        user_id -> Uuid,
        subject -> Text,
        message -> Text,
        rating -> Int2,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(feedback -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(feedback, users);
