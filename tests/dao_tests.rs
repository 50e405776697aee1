mod common;

use std::sync::Arc;
use std::time::Duration;
use weaving_net::cache::traits::cache_backend::CacheBackend;
use weaving_net::common::structs::request_context::RequestContext;
use weaving_net::config::structs::cache_config::CacheConfig;
use weaving_net::dao::errors::DataAccessError;
use weaving_net::dao::structs::entity_data_access::EntityDataAccess;
use weaving_net::dao::structs::repositories::Repositories;
use weaving_net::database::traits::relational_store::RelationalStore;
use weaving_net::model::structs::educations::Educations;
use weaving_net::model::structs::model_base::ModelBase;
use weaving_net::model::structs::projects::Projects;
use weaving_net::model::structs::skills::Skills;
use weaving_net::query::structs::column::Column;
use weaving_net::query::structs::conditions::Conditions;
use weaving_net::query::structs::params::Params;

async fn seed_skills(access: &EntityDataAccess<Skills, common::CountingStore>, names: &[&str]) -> Vec<u64> {
    let ctx = RequestContext::background();
    let mut ids = Vec::new();
    for name in names {
        let mut skill = common::test_skill(1, name);
        ids.push(access.create(&ctx, &mut skill).await.unwrap());
    }
    ids
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamps() {
    let (access, _, _) = common::create_counting_access::<Skills>(None).await;
    let ctx = RequestContext::background();
    let mut skill = common::test_skill(1, "rust");

    let id = access.create(&ctx, &mut skill).await.unwrap();

    assert!(id > 0);
    assert_eq!(skill.base.id, id);
    assert!(skill.base.created_at > 0);
    assert_eq!(skill.base.created_at, skill.base.updated_at);
}

#[tokio::test]
async fn test_get_by_id_miss_then_hit() {
    let (access, store, memory) = common::create_counting_access::<Skills>(None).await;
    let ids = seed_skills(&access, &["rust"]).await;
    let ctx = RequestContext::background();

    let first = access.get_by_id(&ctx, ids[0]).await.unwrap();
    assert_eq!(first.skill_name, "rust");
    assert_eq!(store.single_reads(), 1);
    assert!(memory.get(&format!("test:skills:{}", ids[0])).await.unwrap().is_some());

    let second = access.get_by_id(&ctx, ids[0]).await.unwrap();
    assert_eq!(second, first);
    assert_eq!(store.single_reads(), 1, "second read must be served from the cache");
}

#[tokio::test]
async fn test_get_by_id_absent_writes_placeholder() {
    let (access, store, memory) = common::create_counting_access::<Skills>(None).await;
    let ctx = RequestContext::background();

    let result = access.get_by_id(&ctx, 404).await;
    assert!(matches!(result, Err(DataAccessError::RecordNotFound)));
    assert_eq!(memory.get("test:skills:404").await.unwrap(), Some("*".to_string()));

    let again = access.get_by_id(&ctx, 404).await;
    assert!(matches!(again, Err(DataAccessError::RecordNotFound)));
    assert_eq!(store.single_reads(), 1, "placeholder must answer the second lookup");
}

#[tokio::test]
async fn test_get_by_id_rejects_zero() {
    let (access, store, _) = common::create_counting_access::<Skills>(None).await;
    let ctx = RequestContext::background();

    let result = access.get_by_id(&ctx, 0).await;
    assert!(matches!(result, Err(DataAccessError::InvalidArgument(_))));
    assert_eq!(store.single_reads(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_misses_share_one_store_read() {
    let (access, store, _) = common::create_counting_access::<Skills>(Some(Duration::from_millis(100))).await;
    let ids = seed_skills(&access, &["go"]).await;
    let id = ids[0];

    let mut handles = Vec::new();
    for _ in 0..20 {
        let access = access.clone();
        handles.push(tokio::spawn(async move {
            access.get_by_id(&RequestContext::background(), id).await
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().skill_name, "go");
    }
    assert_eq!(store.single_reads(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_misses_for_absent_id_share_not_found() {
    let (access, store, _) = common::create_counting_access::<Skills>(Some(Duration::from_millis(100))).await;

    let mut handles = Vec::new();
    for _ in 0..10 {
        let access = access.clone();
        handles.push(tokio::spawn(async move {
            access.get_by_id(&RequestContext::background(), 77).await
        }));
    }
    for handle in handles {
        assert!(matches!(handle.await.unwrap(), Err(DataAccessError::RecordNotFound)));
    }
    assert_eq!(store.single_reads(), 1);
}

#[tokio::test]
async fn test_update_invalidates_cached_copy() {
    let (access, store, memory) = common::create_counting_access::<Skills>(None).await;
    let ids = seed_skills(&access, &["c"]).await;
    let ctx = RequestContext::background();
    access.get_by_id(&ctx, ids[0]).await.unwrap();

    let change = Skills {
        base: ModelBase::with_id(ids[0]),
        proficiency_level: "beginner".to_string(),
        ..Skills::default()
    };
    access.update_by_id(&ctx, &change).await.unwrap();
    assert!(memory.get(&format!("test:skills:{}", ids[0])).await.unwrap().is_none());

    let fresh = access.get_by_id(&ctx, ids[0]).await.unwrap();
    assert_eq!(fresh.proficiency_level, "beginner");
    assert_eq!(fresh.skill_name, "c", "zero valued fields are left untouched");
    assert_eq!(store.single_reads(), 2);
}

#[tokio::test]
async fn test_update_school_is_visible_after_invalidation() {
    let (access, _, _) = common::create_counting_access::<Educations>(None).await;
    let ctx = RequestContext::background();
    let mut education = Educations {
        user_id: 1,
        school: "Yale".to_string(),
        degree: "BSc".to_string(),
        start_date: "2010-09-01".to_string(),
        ..Educations::default()
    };
    let id = access.create(&ctx, &mut education).await.unwrap();
    assert_eq!(access.get_by_id(&ctx, id).await.unwrap().school, "Yale");

    let change = Educations { base: ModelBase::with_id(id), school: "MIT".to_string(), ..Educations::default() };
    access.update_by_id(&ctx, &change).await.unwrap();

    let fresh = access.get_by_id(&ctx, id).await.unwrap();
    assert_eq!(fresh.school, "MIT");
    assert_eq!(fresh.degree, "BSc");
}

#[tokio::test]
async fn test_update_rejects_zero_id() {
    let (access, _, _) = common::create_counting_access::<Skills>(None).await;
    let result = access.update_by_id(&RequestContext::background(), &common::test_skill(1, "x")).await;
    assert!(matches!(result, Err(DataAccessError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_delete_hides_row_and_drops_cache() {
    let (access, _, memory) = common::create_counting_access::<Skills>(None).await;
    let ids = seed_skills(&access, &["java"]).await;
    let ctx = RequestContext::background();
    access.get_by_id(&ctx, ids[0]).await.unwrap();

    access.delete_by_id(&ctx, ids[0]).await.unwrap();
    assert!(memory.get(&format!("test:skills:{}", ids[0])).await.unwrap().is_none());

    let result = access.get_by_id(&ctx, ids[0]).await;
    assert!(matches!(result, Err(DataAccessError::RecordNotFound)));
}

#[tokio::test]
async fn test_delete_by_ids_rejects_bad_input() {
    let (access, _, _) = common::create_counting_access::<Skills>(None).await;
    let ctx = RequestContext::background();
    assert!(matches!(access.delete_by_ids(&ctx, &[]).await, Err(DataAccessError::InvalidArgument(_))));
    assert!(matches!(access.delete_by_ids(&ctx, &[3, 0]).await, Err(DataAccessError::InvalidArgument(_))));
    assert!(matches!(access.delete_by_id(&ctx, 0).await, Err(DataAccessError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_get_by_ids_mixes_cache_and_store() {
    let (access, store, memory) = common::create_counting_access::<Skills>(None).await;
    let ids = seed_skills(&access, &["a", "b", "c"]).await;
    let ctx = RequestContext::background();
    access.get_by_id(&ctx, ids[0]).await.unwrap();

    let request = vec![ids[0], ids[1], ids[2], 999, ids[1], 0];
    let found = access.get_by_ids(&ctx, &request).await.unwrap();

    assert_eq!(found.len(), 3);
    assert_eq!(found[&ids[1]].skill_name, "b");
    assert!(!found.contains_key(&999));
    assert_eq!(store.batch_reads(), 1);
    assert_eq!(memory.get("test:skills:999").await.unwrap(), Some("*".to_string()));

    let cached = access.get_by_ids(&ctx, &request).await.unwrap();
    assert_eq!(cached, found);
    assert_eq!(store.batch_reads(), 1, "second batch must be answered by the cache");
}

#[tokio::test]
async fn test_get_by_ids_empty_input() {
    let (access, store, _) = common::create_counting_access::<Skills>(None).await;
    let found = access.get_by_ids(&RequestContext::background(), &[0, 0]).await.unwrap();
    assert!(found.is_empty());
    assert_eq!(store.batch_reads(), 0);
}

#[tokio::test]
async fn test_disabled_cache_reads_store_every_time() {
    let store = Arc::new(common::CountingStore::new(common::create_test_store().await, None));
    let access: EntityDataAccess<Skills, _> = EntityDataAccess::new(store.clone(), None, Duration::from_secs(300));
    let ctx = RequestContext::background();
    let mut skill = common::test_skill(2, "sql");
    let id = access.create(&ctx, &mut skill).await.unwrap();

    access.get_by_id(&ctx, id).await.unwrap();
    access.get_by_id(&ctx, id).await.unwrap();
    assert_eq!(store.single_reads(), 2);
    assert!(access.cache().is_none());

    let result = access.get_by_id(&ctx, 12345).await;
    assert!(matches!(result, Err(DataAccessError::RecordNotFound)));
    assert_eq!(access.get_by_ids(&ctx, &[id, 12345]).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_failing_cache_aborts_reads() {
    let store = Arc::new(common::CountingStore::new(common::create_test_store().await, None));
    let access: EntityDataAccess<Skills, _> = EntityDataAccess::new(store.clone(), Some(common::create_failing_cache()), Duration::from_secs(300));
    let ctx = RequestContext::background();

    let result = access.get_by_id(&ctx, 1).await;
    assert!(matches!(result, Err(DataAccessError::Cache(_))));
    assert!(result.unwrap_err().is_cache_error());
    assert_eq!(store.single_reads(), 0);

    let batch = access.get_by_ids(&ctx, &[1, 2]).await;
    assert!(matches!(batch, Err(DataAccessError::Cache(_))));
    assert_eq!(store.batch_reads(), 0);
}

#[tokio::test]
async fn test_failing_cache_does_not_block_writes() {
    let store = Arc::new(common::CountingStore::new(common::create_test_store().await, None));
    let access: EntityDataAccess<Skills, _> = EntityDataAccess::new(store.clone(), Some(common::create_failing_cache()), Duration::from_secs(300));
    let ctx = RequestContext::background();

    let mut skill = common::test_skill(3, "zig");
    let id = access.create(&ctx, &mut skill).await.unwrap();
    let change = Skills { base: ModelBase::with_id(id), skill_name: "zig 0.14".to_string(), ..Skills::default() };
    access.update_by_id(&ctx, &change).await.unwrap();
    access.delete_by_id(&ctx, id).await.unwrap();

    assert!(store.inner.find_by_id::<Skills>(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_transaction_commit_and_invalidation() {
    let (access, store, memory) = common::create_counting_access::<Skills>(None).await;
    let ids = seed_skills(&access, &["kotlin"]).await;
    let ctx = RequestContext::background();
    access.get_by_id(&ctx, ids[0]).await.unwrap();

    let mut tx = store.begin().await.unwrap();
    let mut created = common::test_skill(1, "swift");
    let new_id = access.create_by_tx(&ctx, &mut tx, &mut created).await.unwrap();
    let change = Skills { base: ModelBase::with_id(ids[0]), skill_type: "framework".to_string(), ..Skills::default() };
    access.update_by_tx(&ctx, &mut tx, &change).await.unwrap();
    assert!(memory.get(&format!("test:skills:{}", ids[0])).await.unwrap().is_none());
    store.commit(tx).await.unwrap();

    assert_eq!(created.base.id, new_id);
    assert_eq!(access.get_by_id(&ctx, ids[0]).await.unwrap().skill_type, "framework");
    assert_eq!(access.get_by_id(&ctx, new_id).await.unwrap().skill_name, "swift");
}

#[tokio::test]
async fn test_transaction_rollback_discards_writes() {
    let (access, store, _) = common::create_counting_access::<Skills>(None).await;
    let ids = seed_skills(&access, &["perl"]).await;
    let ctx = RequestContext::background();

    let mut tx = store.begin().await.unwrap();
    access.delete_by_tx(&ctx, &mut tx, ids[0]).await.unwrap();
    let mut created = common::test_skill(1, "cobol");
    let new_id = access.create_by_tx(&ctx, &mut tx, &mut created).await.unwrap();
    store.rollback(tx).await.unwrap();

    assert_eq!(access.get_by_id(&ctx, ids[0]).await.unwrap().skill_name, "perl");
    assert!(matches!(access.get_by_id(&ctx, new_id).await, Err(DataAccessError::RecordNotFound)));
}

#[tokio::test]
async fn test_delete_by_tx_rejects_zero() {
    let (access, store, _) = common::create_counting_access::<Skills>(None).await;
    let ctx = RequestContext::background();
    let mut tx = store.begin().await.unwrap();
    let result = access.delete_by_tx(&ctx, &mut tx, 0).await;
    assert!(matches!(result, Err(DataAccessError::InvalidArgument(_))));
    store.rollback(tx).await.unwrap();
}

#[tokio::test]
async fn test_get_by_condition() {
    let (access, _, _) = common::create_counting_access::<Projects>(None).await;
    let ctx = RequestContext::background();
    for (user, name) in [(1, "loom"), (1, "shuttle"), (2, "spindle")] {
        let mut project = common::test_project(user, name);
        access.create(&ctx, &mut project).await.unwrap();
    }

    let conditions = Conditions::new(vec![
        Column::new("user_id", 1i64),
        Column::new("project_name", "shut").exp("like"),
    ]);
    let found = access.get_by_condition(&ctx, &conditions).await.unwrap();
    assert_eq!(found.project_name, "shuttle");

    let missing = Conditions::new(vec![Column::new("project_name", "warp")]);
    assert!(matches!(access.get_by_condition(&ctx, &missing).await, Err(DataAccessError::RecordNotFound)));

    let invalid = Conditions::new(vec![Column::new("salary", 10i64)]);
    assert!(matches!(access.get_by_condition(&ctx, &invalid).await, Err(DataAccessError::InvalidArgument(_))));

    let empty = Conditions::new(Vec::new());
    assert!(matches!(access.get_by_condition(&ctx, &empty).await, Err(DataAccessError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_get_by_columns_pages_and_counts() {
    let (access, _, _) = common::create_counting_access::<Projects>(None).await;
    let ctx = RequestContext::background();
    for index in 0..5 {
        let mut project = common::test_project(7, &format!("p{}", index));
        access.create(&ctx, &mut project).await.unwrap();
    }
    let mut other = common::test_project(8, "other");
    access.create(&ctx, &mut other).await.unwrap();

    let mut params = Params::new(0, 2, "project_name");
    params.columns = vec![Column::new("user_id", 7i64)];
    let (first, total) = access.get_by_columns(&ctx, &params).await.unwrap();
    assert_eq!(total, 5);
    assert_eq!(first.iter().map(|p| p.project_name.as_str()).collect::<Vec<_>>(), vec!["p0", "p1"]);

    params.page = 2;
    let (last, _) = access.get_by_columns(&ctx, &params).await.unwrap();
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].project_name, "p4");

    let uncounted = Params { sort: "ignore count".to_string(), ..params.clone() };
    let (rows, total) = access.get_by_columns(&ctx, &Params { page: 0, ..uncounted }).await.unwrap();
    assert_eq!(total, 0);
    assert_eq!(rows.len(), 2);

    let mut nothing = Params::new(0, 10, "");
    nothing.columns = vec![Column::new("user_id", 99i64)];
    let (rows, total) = access.get_by_columns(&ctx, &nothing).await.unwrap();
    assert!(rows.is_empty());
    assert_eq!(total, 0);
}

#[tokio::test]
async fn test_get_by_last_id_walks_backwards() {
    let (access, _, _) = common::create_counting_access::<Projects>(None).await;
    let ctx = RequestContext::background();
    let mut ids = Vec::new();
    for index in 0..4 {
        let mut project = common::test_project(1, &format!("q{}", index));
        ids.push(access.create(&ctx, &mut project).await.unwrap());
    }

    let page = access.get_by_last_id(&ctx, ids[3], 2, "").await.unwrap();
    assert_eq!(page.iter().map(|p| p.base.id).collect::<Vec<_>>(), vec![ids[2], ids[1]]);

    let tail = access.get_by_last_id(&ctx, ids[1], 10, "").await.unwrap();
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].base.id, ids[0]);
}

#[tokio::test]
async fn test_deadline_interrupts_slow_store() {
    let (access, store, _) = common::create_counting_access::<Skills>(Some(Duration::from_millis(150))).await;
    let ids = seed_skills(&access, &["haskell"]).await;

    let ctx = RequestContext::with_timeout(Duration::from_millis(20));
    let result = access.get_by_id(&ctx, ids[0]).await;
    assert!(matches!(result, Err(DataAccessError::DeadlineExceeded)));

    assert_eq!(store.single_reads(), 1);

    let patient = RequestContext::with_timeout(Duration::from_secs(5));
    assert_eq!(access.get_by_id(&patient, ids[0]).await.unwrap().skill_name, "haskell");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_waiter_shares_first_callers_deadline() {
    let (access, store, _) = common::create_counting_access::<Skills>(Some(Duration::from_millis(150))).await;
    let ids = seed_skills(&access, &["erlang"]).await;
    let id = ids[0];

    let first = access.clone();
    let hurried = tokio::spawn(async move {
        first.get_by_id(&RequestContext::with_timeout(Duration::from_millis(40)), id).await
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    let waiting = access.get_by_id(&RequestContext::background(), id).await;

    assert!(matches!(hurried.await.unwrap(), Err(DataAccessError::DeadlineExceeded)));
    assert!(matches!(waiting, Err(DataAccessError::DeadlineExceeded)));
    assert_eq!(store.single_reads(), 1);
}

#[tokio::test]
async fn test_cancelled_request_returns_cancelled() {
    let (access, _, _) = common::create_counting_access::<Skills>(Some(Duration::from_millis(200))).await;
    let ids = seed_skills(&access, &["ocaml"]).await;
    let (ctx, handle) = RequestContext::background().with_cancel();

    let reader = access.clone();
    let id = ids[0];
    let task = tokio::spawn(async move { reader.get_by_id(&ctx, id).await });
    tokio::time::sleep(Duration::from_millis(20)).await;
    handle.cancel();

    assert!(matches!(task.await.unwrap(), Err(DataAccessError::Cancelled)));
}

#[tokio::test]
async fn test_repositories_share_store_and_cache() {
    let store = Arc::new(common::create_test_store().await);
    let (cache, memory) = common::create_memory_cache();
    let config = CacheConfig { enabled: true, ..CacheConfig::default() };
    let repositories = Repositories::new(store, Some(cache.clone()), &config);
    let ctx = RequestContext::background();

    let mut skill = common::test_skill(1, "lisp");
    let skill_id = repositories.skills.create(&ctx, &mut skill).await.unwrap();
    let mut project = common::test_project(1, "weaver");
    let project_id = repositories.projects.create(&ctx, &mut project).await.unwrap();

    repositories.skills.get_by_id(&ctx, skill_id).await.unwrap();
    repositories.projects.get_by_id(&ctx, project_id).await.unwrap();
    assert!(memory.get(&format!("test:skills:{}", skill_id)).await.unwrap().is_some());
    assert!(memory.get(&format!("test:projects:{}", project_id)).await.unwrap().is_some());
    assert_eq!(repositories.users.expire_time(), Duration::from_secs(300));

    let disabled = Repositories::new(repositories.skills.store().clone(), Some(cache), &CacheConfig::default());
    assert!(disabled.skills.cache().is_none());
}
