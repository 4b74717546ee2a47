//! Round-trip tests against a real database. Run with a reachable
//! PostgreSQL: `DATABASE_URL=postgres://... cargo test -- --ignored`

use shared_db::{ensure_schema, Db, NewUser, UserService};
use uuid::Uuid;

async fn connect() -> Db {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for ignored tests");
    let db = Db::connect(&url, 5).await.expect("connect");
    ensure_schema(db.pool()).await.expect("schema");
    db
}

fn unique_email(tag: &str) -> String {
    format!("{}-{}@example.com", tag, Uuid::new_v4())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn create_then_get_returns_the_same_record() {
    let db = connect().await;
    let new = NewUser {
        email: unique_email("roundtrip"),
        name: Some("Ada".into()),
    };
    let created = UserService::create(&db, &new).await.unwrap();
    let fetched = UserService::get(&db, created.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.email, new.email);
    assert_eq!(fetched.name.as_deref(), Some("Ada"));
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn list_contains_every_record_created_in_session() {
    let db = connect().await;
    let mut created_ids = Vec::new();
    for _ in 0..3 {
        let new = NewUser {
            email: unique_email("list"),
            name: None,
        };
        created_ids.push(UserService::create(&db, &new).await.unwrap().id);
    }
    let listed = UserService::list(&db, Some(1000), None).await.unwrap();
    for id in &created_ids {
        assert!(listed.iter().any(|u| u.id == *id), "missing {}", id);
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (set DATABASE_URL)"]
async fn get_unknown_id_returns_none() {
    let db = connect().await;
    let row = UserService::get(&db, Uuid::new_v4()).await.unwrap();
    assert!(row.is_none());
}
