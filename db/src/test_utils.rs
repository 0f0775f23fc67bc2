use crate::models::{Course, CourseInstructor, Instructor, Lesson, Module};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema};

/// Fresh in-memory SQLite database with the five seed tables.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    create_schema(&db).await.expect("Failed to create schema");

    db
}

/// Creates the tables from the entity definitions, parents first.
///
/// The seeder never creates tables itself; this exists for tests and local
/// SQLite databases.
pub async fn create_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    create_table(db, Course).await?;
    create_table(db, Instructor).await?;
    create_table(db, Module).await?;
    create_table(db, Lesson).await?;
    create_table(db, CourseInstructor).await?;
    Ok(())
}

async fn create_table<C, E>(db: &C, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;
    Ok(())
}
