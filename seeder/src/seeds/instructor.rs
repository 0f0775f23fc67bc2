use super::INSTRUCTOR_COUNT;
use crate::context::SeedContext;
use crate::error::SeedError;
use crate::seed::Seeder;
use crate::text;
use async_trait::async_trait;
use db::models::instructor;
use sea_orm::DatabaseTransaction;

pub struct InstructorSeeder;

#[async_trait]
impl Seeder for InstructorSeeder {
    fn name(&self) -> &'static str {
        "Instructors"
    }

    async fn seed(
        &self,
        txn: &DatabaseTransaction,
        ctx: &mut SeedContext,
    ) -> Result<(), SeedError> {
        for _ in 0..INSTRUCTOR_COUNT {
            let id = ctx.fresh_id();
            let name = text::person_name();

            instructor::Model::create(txn, id, &name)
                .await
                .map_err(SeedError::insert("instructors"))?;

            log::debug!("instructor {} {:?}", id, name);
            ctx.instructor_ids.push(id);
        }

        Ok(())
    }
}
