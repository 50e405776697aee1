mod common;

use weaving_net::database::traits::relational_store::RelationalStore;
use weaving_net::model::structs::model_base::ModelBase;
use weaving_net::model::structs::projects::Projects;
use weaving_net::model::structs::skills::Skills;
use weaving_net::model::structs::users::Users;
use weaving_net::query::enums::expression::Expression;
use weaving_net::query::enums::sql_value::SqlValue;
use weaving_net::query::structs::filter::{Filter, Predicate};
use weaving_net::query::structs::page::Page;

#[tokio::test]
async fn test_create_tables_is_idempotent() {
    let store = common::create_test_store().await;
    store.create_table::<Skills>().await.unwrap();
    store.create_table::<Users>().await.unwrap();
}

#[tokio::test]
async fn test_insert_reports_distinct_ids() {
    let store = common::create_test_store().await;
    let mut first = common::test_skill(1, "rust");
    let mut second = common::test_skill(1, "zig");

    let first_id = store.insert(&mut first).await.unwrap();
    let second_id = store.insert(&mut second).await.unwrap();
    assert!(first_id > 0);
    assert!(second_id > first_id);

    let mut tx = store.begin().await.unwrap();
    let mut third = common::test_skill(2, "nim");
    let third_id = store.insert_tx(&mut tx, &mut third).await.unwrap();
    store.commit(tx).await.unwrap();
    assert!(third_id > second_id);
    assert_eq!(store.find_by_id::<Skills>(third_id).await.unwrap().unwrap().skill_name, "nim");
}

#[tokio::test]
async fn test_insert_and_find_by_id() {
    let store = common::create_test_store().await;
    let mut user = Users {
        base: ModelBase::default(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        profile_picture_url: "https://example.org/ada.png".to_string(),
        about: "analyst".to_string(),
    };

    let id = store.insert(&mut user).await.unwrap();
    let found = store.find_by_id::<Users>(id).await.unwrap().unwrap();

    assert_eq!(found.base.id, id);
    assert_eq!(found.first_name, "Ada");
    assert_eq!(found.base.created_at, user.base.created_at);
    assert!(found.base.deleted_at.is_none());
    assert!(store.find_by_id::<Users>(id + 100).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_ids_skips_missing() {
    let store = common::create_test_store().await;
    let mut ids = Vec::new();
    for name in ["a", "b"] {
        let mut skill = common::test_skill(1, name);
        ids.push(store.insert(&mut skill).await.unwrap());
    }
    ids.push(9999);

    let mut found = store.find_by_ids::<Skills>(&ids).await.unwrap();
    found.sort_by_key(|skill| skill.base.id);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].skill_name, "a");
}

#[tokio::test]
async fn test_update_partial_stamps_updated_at() {
    let store = common::create_test_store().await;
    let mut project = common::test_project(4, "loom");
    let id = store.insert(&mut project).await.unwrap();

    let changed = store
        .update_partial::<Projects>(id, &[("role", SqlValue::from("owner")), ("updated_at", SqlValue::Int(1))])
        .await
        .unwrap();
    assert_eq!(changed, 1);

    let found = store.find_by_id::<Projects>(id).await.unwrap().unwrap();
    assert_eq!(found.role, "owner");
    assert_eq!(found.project_name, "loom");
    assert!(found.base.updated_at >= project.base.updated_at);
    assert_ne!(found.base.updated_at, 1);

    assert_eq!(store.update_partial::<Projects>(id + 50, &[("role", SqlValue::from("x"))]).await.unwrap(), 0);
}

#[tokio::test]
async fn test_soft_delete_hides_rows_from_every_read() {
    let store = common::create_test_store().await;
    let mut keep = common::test_skill(1, "keep");
    let mut drop = common::test_skill(1, "drop");
    let keep_id = store.insert(&mut keep).await.unwrap();
    let drop_id = store.insert(&mut drop).await.unwrap();

    assert_eq!(store.soft_delete::<Skills>(&[drop_id]).await.unwrap(), 1);
    assert_eq!(store.soft_delete::<Skills>(&[drop_id]).await.unwrap(), 0, "already deleted rows are untouched");

    assert!(store.find_by_id::<Skills>(drop_id).await.unwrap().is_none());
    assert_eq!(store.find_by_ids::<Skills>(&[keep_id, drop_id]).await.unwrap().len(), 1);

    let everything = Filter::new(Vec::new());
    assert_eq!(store.count::<Skills>(&everything).await.unwrap(), 1);
    let page = Page::new::<Skills>(0, 10, "").unwrap();
    let rows = store.find_page::<Skills>(&everything, &page).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].base.id, keep_id);
}

#[tokio::test]
async fn test_find_by_condition_and_in_filter() {
    let store = common::create_test_store().await;
    for (user, name) in [(1, "alpha"), (2, "beta"), (3, "gamma")] {
        let mut project = common::test_project(user, name);
        store.insert(&mut project).await.unwrap();
    }

    let mut in_users = Predicate::new("user_id", Expression::In, SqlValue::Int(1));
    in_users.values.push(SqlValue::Int(3));
    let filter = Filter::new(vec![in_users]);
    assert_eq!(store.count::<Projects>(&filter).await.unwrap(), 2);

    let by_name = Filter::new(vec![Predicate::new("project_name", Expression::Eq, SqlValue::from("beta"))]);
    let found = store.find_by_condition::<Projects>(&by_name).await.unwrap().unwrap();
    assert_eq!(found.user_id, 2);
}

#[tokio::test]
async fn test_transaction_rollback() {
    let store = common::create_test_store().await;
    let mut tx = store.begin().await.unwrap();
    let mut skill = common::test_skill(5, "temp");
    let id = store.insert_tx(&mut tx, &mut skill).await.unwrap();
    assert_eq!(store.update_partial_tx::<Skills>(&mut tx, id, &[("skill_type", SqlValue::from("tool"))]).await.unwrap(), 1);
    store.rollback(tx).await.unwrap();

    assert!(store.find_by_id::<Skills>(id).await.unwrap().is_none());

    let mut tx = store.begin().await.unwrap();
    let mut skill = common::test_skill(5, "kept");
    let id = store.insert_tx(&mut tx, &mut skill).await.unwrap();
    store.commit(tx).await.unwrap();

    let mut tx = store.begin().await.unwrap();
    assert_eq!(store.soft_delete_tx::<Skills>(&mut tx, &[id]).await.unwrap(), 1);
    store.commit(tx).await.unwrap();
    assert!(store.find_by_id::<Skills>(id).await.unwrap().is_none());
}
