use crate::dao::structs::entity_data_access::EntityDataAccess;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::traits::relational_store::RelationalStore;
use crate::model::structs::educations::Educations;
use crate::model::structs::projects::Projects;
use crate::model::structs::skills::Skills;
use crate::model::structs::user_introductions::UserIntroductions;
use crate::model::structs::users::Users;
use crate::model::structs::workexperiences::Workexperiences;

/// Data access for every entity, sharing one store and one cache.
pub struct Repositories<S: RelationalStore = DatabaseConnector> {
    pub users: EntityDataAccess<Users, S>,
    pub educations: EntityDataAccess<Educations, S>,
    pub projects: EntityDataAccess<Projects, S>,
    pub skills: EntityDataAccess<Skills, S>,
    pub workexperiences: EntityDataAccess<Workexperiences, S>,
    pub user_introductions: EntityDataAccess<UserIntroductions, S>,
}
