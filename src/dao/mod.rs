//! Cache-aside data access.
//!
//! [`EntityDataAccess`](structs::entity_data_access::EntityDataAccess) is the
//! read/write coordinator between an entity's cache and the relational
//! store. One instance exists per entity type; the
//! [`Repositories`](structs::repositories::Repositories) bundle holds all of
//! them.
//!
//! # Reads
//!
//! `get_by_id` consults the cache first. A hit is returned, a placeholder
//! is answered with `RecordNotFound`, and a miss is resolved by exactly one
//! store lookup shared by every concurrent caller asking for the same id
//! (see [`FlightGroup`](structs::flight_group::FlightGroup)). The result is
//! written back, either as the entity or as the not-found placeholder. A
//! cache backend failure aborts the read instead of falling through to the
//! store.
//!
//! `get_by_ids` applies the same rules to a batch. Condition and paging
//! reads always go straight to the store.
//!
//! # Writes
//!
//! Writes go to the store and then delete the affected cache entries.
//! Failing to delete is logged and otherwise ignored. Writes are never
//! coalesced.

/// Error types returned to callers.
pub mod errors;

/// Data access and coalescing structures.
pub mod structs;

/// Implementation blocks for data access operations.
pub mod impls;
