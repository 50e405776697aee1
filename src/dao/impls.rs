pub mod entity_data_access;
pub mod flight_group;
pub mod repositories;
