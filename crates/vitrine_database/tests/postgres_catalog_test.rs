//! Integration tests for the PostgreSQL catalog backend.
//!
//! These run against a live database and are ignored by default:
//!
//! ```sh
//! DATABASE_URL=postgres://localhost/vitrine_test cargo test -p vitrine_database -- --ignored
//! ```

use diesel::prelude::*;
use uuid::Uuid;
use vitrine_core::{FilterSpecBuilder, SortKey};
use vitrine_database::{PostgresCatalog, create_pool, run_migrations, schema};
use vitrine_interface::{AppCatalog, NewApp};

fn setup() -> PostgresCatalog {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for ignored tests");
    let pool = create_pool(&url).expect("pool");
    let mut conn = pool.get().expect("connection");
    run_migrations(&mut conn).expect("migrations");
    PostgresCatalog::new(pool)
}

fn seed_user_and_category(url: &str) -> (Uuid, Uuid) {
    let mut conn = PgConnection::establish(url).expect("connection");
    let user_id = Uuid::new_v4();
    let category_id = Uuid::new_v4();
    diesel::insert_into(schema::users::table)
        .values((
            schema::users::id.eq(user_id),
            schema::users::username.eq(format!("tester-{user_id}")),
        ))
        .execute(&mut conn)
        .expect("seed user");
    diesel::insert_into(schema::categories::table)
        .values((
            schema::categories::id.eq(category_id),
            schema::categories::name.eq(format!("category-{category_id}")),
        ))
        .execute(&mut conn)
        .expect("seed category");
    (user_id, category_id)
}

#[tokio::test]
#[ignore] // Requires a PostgreSQL instance via DATABASE_URL
async fn draft_round_trip_respects_visibility() {
    let catalog = setup();
    let url = std::env::var("DATABASE_URL").unwrap();
    let (creator, category_id) = seed_user_and_category(&url);

    let app = catalog
        .create_app(
            NewApp {
                name: format!("integration-{}", Uuid::new_v4()),
                short_description: "short".into(),
                description: "long".into(),
                launch_url: "https://example.com".into(),
                screenshot_url: None,
                key_learnings: None,
                category_id,
                tool_ids: vec![],
                tag_ids: vec![],
            },
            creator,
        )
        .await
        .expect("create");

    // Creator sees the draft; anonymous does not.
    catalog.get_app(app.id, Some(creator)).await.expect("creator fetch");
    assert!(catalog.get_app(app.id, None).await.is_err());

    let spec = FilterSpecBuilder::default()
        .sort_by(SortKey::Newest)
        .build()
        .unwrap();
    let listed = catalog.list_apps(&spec, Some(creator)).await.expect("list");
    assert!(listed.iter().any(|a| a.id == app.id));
    let anonymous = catalog.list_apps(&spec, None).await.expect("list");
    assert!(anonymous.iter().all(|a| a.id != app.id));
}

#[tokio::test]
#[ignore] // Requires a PostgreSQL instance via DATABASE_URL
async fn record_launch_bumps_view_count() {
    let catalog = setup();
    let url = std::env::var("DATABASE_URL").unwrap();
    let (creator, category_id) = seed_user_and_category(&url);

    let app = catalog
        .create_app(
            NewApp {
                name: format!("launch-{}", Uuid::new_v4()),
                short_description: "short".into(),
                description: "long".into(),
                launch_url: "https://example.com".into(),
                screenshot_url: None,
                key_learnings: None,
                category_id,
                tool_ids: vec![],
                tag_ids: vec![],
            },
            creator,
        )
        .await
        .expect("create");

    catalog.record_launch(app.id).await.expect("launch");
    let fetched = catalog.get_app(app.id, Some(creator)).await.expect("fetch");
    assert_eq!(fetched.view_count, app.view_count + 1);
}
