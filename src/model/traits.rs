/// Capability trait implemented by every persisted entity.
pub mod entity;
