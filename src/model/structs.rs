/// Column declaration (name and kind).
pub mod field;

/// Id, timestamps and soft-delete marker shared by all entities.
pub mod model_base;

pub mod users;
pub mod educations;
pub mod projects;
pub mod skills;
pub mod workexperiences;
pub mod user_introductions;
