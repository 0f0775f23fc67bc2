use crate::context::SeedContext;
use crate::error::SeedError;
use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::course_instructor;
use sea_orm::DatabaseTransaction;

/// Pairs the i-th course with the i-th instructor.
pub struct CourseInstructorSeeder;

#[async_trait]
impl Seeder for CourseInstructorSeeder {
    fn name(&self) -> &'static str {
        "CourseInstructors"
    }

    async fn seed(
        &self,
        txn: &DatabaseTransaction,
        ctx: &mut SeedContext,
    ) -> Result<(), SeedError> {
        for (course_id, instructor_id) in ctx.course_ids.iter().zip(&ctx.instructor_ids) {
            course_instructor::Model::create(txn, *course_id, *instructor_id)
                .await
                .map_err(SeedError::insert("course_instructors"))?;

            ctx.pair_count += 1;
        }

        Ok(())
    }
}
