//! Domain entities persisted by the relational store and mirrored in the cache.
//!
//! Every entity embeds [`ModelBase`](structs::model_base::ModelBase) (id,
//! timestamps and the soft-delete marker) and implements the
//! [`Entity`](traits::entity::Entity) trait, which is all the data access
//! layer needs to query, insert, update and cache it.
//!
//! # Entities
//!
//! | Entity              | Table                | Cache prefix           |
//! |---------------------|----------------------|------------------------|
//! | `Users`             | `users`              | `users:`               |
//! | `Educations`        | `educations`         | `educations:`          |
//! | `Projects`          | `projects`           | `projects:`            |
//! | `Skills`            | `skills`             | `skills:`              |
//! | `Workexperiences`   | `workexperiences`    | `workexperiences:`     |
//! | `UserIntroductions` | `user_introductions` | `user_introductions:`  |

/// Column kinds used for schema creation and value coercion.
pub mod enums;

/// Entity structures.
pub mod structs;

/// Implementation blocks (row decoding, entity declarations).
pub mod impls;

/// The `Entity` trait.
pub mod traits;
