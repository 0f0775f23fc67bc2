//! Fills the course catalog tables with fake data in one transaction.
//!
//! Order is fixed: courses, modules, lessons, instructors, then the
//! course/instructor pairs. Every phase reads the ids recorded by earlier
//! phases from the shared [`SeedContext`].

pub mod context;
pub mod error;
pub mod seed;
pub mod seeds;
pub mod text;

pub use context::{SeedContext, SeedReport};
pub use error::SeedError;

use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    course::CourseSeeder, course_instructor::CourseInstructorSeeder,
    instructor::InstructorSeeder, lesson::LessonSeeder, module::ModuleSeeder,
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use util::config::AppConfig;

/// The seeders in dependency order.
pub fn seeders() -> Vec<Box<dyn Seeder>> {
    vec![
        Box::new(CourseSeeder),
        Box::new(ModuleSeeder),
        Box::new(LessonSeeder),
        Box::new(InstructorSeeder),
        Box::new(CourseInstructorSeeder),
    ]
}

/// Runs every seeder inside one transaction and commits once at the end.
///
/// On any failure the transaction is rolled back and nothing is persisted.
pub async fn run(db: &DatabaseConnection) -> Result<SeedReport, SeedError> {
    let txn = db.begin().await.map_err(SeedError::Begin)?;
    let mut ctx = SeedContext::default();

    for seeder in seeders() {
        if let Err(e) = run_seeder(seeder.as_ref(), &txn, &mut ctx).await {
            if let Err(rollback) = txn.rollback().await {
                log::warn!("rollback failed: {}", rollback);
            }
            return Err(e);
        }
    }

    txn.commit().await.map_err(SeedError::Commit)?;

    let report = SeedReport::from(ctx);
    log::info!(
        "committed {} courses, {} modules, {} lessons, {} instructors, {} course instructors",
        report.course_ids.len(),
        report.module_ids.len(),
        report.lesson_ids.len(),
        report.instructor_ids.len(),
        report.pair_count
    );
    Ok(report)
}

/// [`run`], then closes the connection whether the run succeeded or not.
pub async fn run_and_close(db: DatabaseConnection) -> Result<SeedReport, SeedError> {
    let result = run(&db).await;

    if let Err(e) = db.close().await {
        log::warn!("failed to close database connection: {}", e);
    }

    result
}

/// Seed data is for development databases only.
pub fn ensure_environment(config: &AppConfig) -> Result<(), SeedError> {
    if config.is_production() && !config.allow_production {
        return Err(SeedError::ProductionRefused);
    }
    Ok(())
}
