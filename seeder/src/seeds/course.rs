use super::{COURSE_COUNT, COURSE_DESCRIPTION_MAX_CHARS};
use crate::context::SeedContext;
use crate::error::SeedError;
use crate::seed::Seeder;
use crate::text;
use async_trait::async_trait;
use db::models::course;
use sea_orm::DatabaseTransaction;

pub struct CourseSeeder;

#[async_trait]
impl Seeder for CourseSeeder {
    fn name(&self) -> &'static str {
        "Courses"
    }

    async fn seed(
        &self,
        txn: &DatabaseTransaction,
        ctx: &mut SeedContext,
    ) -> Result<(), SeedError> {
        for _ in 0..COURSE_COUNT {
            let id = ctx.fresh_id();
            let title = text::title(3);
            let description = text::bounded_text(COURSE_DESCRIPTION_MAX_CHARS);

            course::Model::create(txn, id, &title, &description)
                .await
                .map_err(SeedError::insert("courses"))?;

            log::debug!("course {} {:?}", id, title);
            ctx.course_ids.push(id);
        }

        Ok(())
    }
}
