// Job record store: read-only access to the `job_listings` table.
// Independent of the matching engine.

pub mod handlers;
pub mod models;
pub mod store;
