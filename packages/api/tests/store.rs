//! Store tests against a live PostgreSQL. They need `DATABASE_URL` set and
//! a reachable server, so they are ignored by default; run them with
//! `cargo test -p api -- --ignored`.

use api::dto::decode_projects;
use api::{ApiError, Store};
use sqlx::PgPool;

fn profile(email: &str) -> api::dto::NewProfile {
    api::dto::NewProfile {
        name: "Acme Corp".to_string(),
        email: email.to_string(),
        ..Default::default()
    }
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    n
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore]
async fn coordinator_rolls_back_everything_on_duplicate_email(pool: PgPool) {
    let store = Store::from_pool(pool.clone());
    let projects = decode_projects(
        r#"[{"name_project": "site", "milestones": [{"milestone_name": "kickoff"}]}]"#,
    )
    .unwrap();

    let first = store
        .create_profile_with_projects(&profile("dup@example.com"), &projects, None, None)
        .await
        .unwrap();
    assert_eq!(first.projects.len(), 1);
    assert_eq!(first.milestones.len(), 1);

    // Same profile email: the profile insert fails and the whole
    // transaction rolls back.
    let err = store
        .create_profile_with_projects(&profile("dup@example.com"), &projects, None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Database(_)));

    assert_eq!(count(&pool, "employee_profiles").await, 1);
    assert_eq!(count(&pool, "projects").await, 1);
    assert_eq!(count(&pool, "project_milestones").await, 1);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore]
async fn soft_delete_retains_the_row_and_repeats_as_not_found(pool: PgPool) {
    let store = Store::from_pool(pool.clone());
    let projects = decode_projects(r#"[{"name_project": "solo"}]"#).unwrap();
    let created = store
        .create_profile_with_projects(&profile("gone@example.com"), &projects, None, None)
        .await
        .unwrap();
    let id = created.profile.id;

    let deleted = store.deactivate_profile(id).await.unwrap().unwrap();
    assert!(!deleted.active);

    // Second delete matches zero rows.
    assert!(store.deactivate_profile(id).await.unwrap().is_none());

    // The row itself survives, and list reads no longer see it.
    let row = store.find_profile(id).await.unwrap().unwrap();
    assert!(!row.active);
    assert!(store.list_active_profiles().await.unwrap().is_empty());
}
