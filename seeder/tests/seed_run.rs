use db::models::{course, course_instructor, instructor, lesson, module};
use db::test_utils::{create_schema, setup_test_db};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait};
use seeder::SeedError;
use seeder::seeds::{COURSE_DESCRIPTION_MAX_CHARS, LESSON_CONTENT_MAX_CHARS};
use std::collections::HashSet;
use util::config::{DatabaseConfig, SslMode};
use uuid::Uuid;

async fn table_counts(db: &DatabaseConnection) -> [u64; 5] {
    [
        course::Entity::find().count(db).await.unwrap(),
        module::Entity::find().count(db).await.unwrap(),
        lesson::Entity::find().count(db).await.unwrap(),
        instructor::Entity::find().count(db).await.unwrap(),
        course_instructor::Entity::find().count(db).await.unwrap(),
    ]
}

#[tokio::test]
async fn seeds_ten_rows_per_table() {
    let db = setup_test_db().await;

    let report = seeder::run(&db).await.unwrap();

    assert_eq!(table_counts(&db).await, [10; 5]);
    assert_eq!(report.total_rows(), 50);
}

#[tokio::test]
async fn children_reference_parents_in_order() {
    let db = setup_test_db().await;
    let report = seeder::run(&db).await.unwrap();

    for i in 0..10 {
        let m = module::Entity::find_by_id(report.module_ids[i])
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(m.course_id, report.course_ids[i]);

        let l = lesson::Entity::find_by_id(report.lesson_ids[i])
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(l.module_id, report.module_ids[i]);

        let pair = course_instructor::Entity::find_by_id((
            report.course_ids[i],
            report.instructor_ids[i],
        ))
        .one(&db)
        .await
        .unwrap();
        assert!(pair.is_some(), "missing pair {i}");
    }
}

#[tokio::test]
async fn every_identifier_is_unique() {
    let db = setup_test_db().await;
    let report = seeder::run(&db).await.unwrap();

    let ids: HashSet<Uuid> = report
        .course_ids
        .iter()
        .chain(&report.module_ids)
        .chain(&report.lesson_ids)
        .chain(&report.instructor_ids)
        .copied()
        .collect();
    assert_eq!(ids.len(), 40);

    let stored: HashSet<Uuid> = course::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(stored, report.course_ids.iter().copied().collect());
}

#[tokio::test]
async fn courses_are_unpublished_and_text_is_bounded() {
    let db = setup_test_db().await;
    seeder::run(&db).await.unwrap();

    for c in course::Entity::find().all(&db).await.unwrap() {
        assert!(!c.is_published);
        assert!(!c.title.is_empty());
        assert!(c.description.chars().count() <= COURSE_DESCRIPTION_MAX_CHARS);
    }

    for l in lesson::Entity::find().all(&db).await.unwrap() {
        assert!(l.content.chars().count() <= LESSON_CONTENT_MAX_CHARS);
    }

    for i in instructor::Entity::find().all(&db).await.unwrap() {
        assert!(!i.name.trim().is_empty());
    }
}

// Seeding is append-only; a second run doubles every table.
#[tokio::test]
async fn running_twice_duplicates_data() {
    let db = setup_test_db().await;

    let first = seeder::run(&db).await.unwrap();
    let second = seeder::run(&db).await.unwrap();

    assert_eq!(table_counts(&db).await, [20; 5]);
    assert!(
        first
            .course_ids
            .iter()
            .all(|id| !second.course_ids.contains(id))
    );
}

#[tokio::test]
async fn failed_insert_persists_nothing() {
    let db = setup_test_db().await;
    db.execute_unprepared("DROP TABLE lessons").await.unwrap();

    let err = seeder::run(&db).await.unwrap_err();
    assert!(matches!(err, SeedError::Insert { table: "lessons", .. }));

    assert_eq!(course::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(module::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(instructor::Entity::find().count(&db).await.unwrap(), 0);
}

fn sqlite_file_config(path: &std::path::Path) -> DatabaseConfig {
    DatabaseConfig {
        url: Some(path.to_str().unwrap().to_string()),
        host: "localhost".into(),
        port: 5432,
        database: "postgres".into(),
        user: "postgres".into(),
        password: String::new(),
        sslmode: SslMode::Disable,
        connect_timeout_secs: 5,
    }
}

#[tokio::test]
async fn connection_is_closed_after_successful_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = sqlite_file_config(&dir.path().join("seed.db"));

    let db = db::connect(&config).await.unwrap();
    create_schema(&db).await.unwrap();
    let handle = db.clone();

    let report = seeder::run_and_close(db).await.unwrap();
    assert_eq!(report.total_rows(), 50);
    assert!(handle.ping().await.is_err());

    let reopened = db::connect(&config).await.unwrap();
    assert_eq!(table_counts(&reopened).await, [10; 5]);
    reopened.close().await.unwrap();
}

#[tokio::test]
async fn connection_is_closed_after_failed_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = sqlite_file_config(&dir.path().join("seed.db"));

    let db = db::connect(&config).await.unwrap();
    create_schema(&db).await.unwrap();
    db.execute_unprepared("DROP TABLE course_instructors")
        .await
        .unwrap();
    let handle = db.clone();

    let err = seeder::run_and_close(db).await.unwrap_err();
    assert!(matches!(
        err,
        SeedError::Insert {
            table: "course_instructors",
            ..
        }
    ));
    assert!(handle.ping().await.is_err());

    let reopened = db::connect(&config).await.unwrap();
    assert_eq!(course::Entity::find().count(&reopened).await.unwrap(), 0);
    reopened.close().await.unwrap();
}

#[tokio::test]
async fn missing_database_fails_before_any_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.db");

    let config = DatabaseConfig {
        url: Some(format!("sqlite://{}?mode=ro", path.display())),
        host: "localhost".into(),
        port: 5432,
        database: "postgres".into(),
        user: "postgres".into(),
        password: String::new(),
        sslmode: SslMode::Disable,
        connect_timeout_secs: 1,
    };

    assert!(db::connect(&config).await.is_err());
    assert!(!path.exists());
}
