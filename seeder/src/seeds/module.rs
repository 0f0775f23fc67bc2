use super::MODULES_PER_COURSE;
use crate::context::SeedContext;
use crate::error::SeedError;
use crate::seed::Seeder;
use crate::text;
use async_trait::async_trait;
use db::models::module;
use sea_orm::DatabaseTransaction;

/// Gives every seeded course its modules, in course order.
pub struct ModuleSeeder;

#[async_trait]
impl Seeder for ModuleSeeder {
    fn name(&self) -> &'static str {
        "Modules"
    }

    async fn seed(
        &self,
        txn: &DatabaseTransaction,
        ctx: &mut SeedContext,
    ) -> Result<(), SeedError> {
        let course_ids = ctx.course_ids.clone();

        for course_id in course_ids {
            for _ in 0..MODULES_PER_COURSE {
                let id = ctx.fresh_id();
                let title = text::title(2);

                module::Model::create(txn, id, &title, course_id)
                    .await
                    .map_err(SeedError::insert("modules"))?;

                log::debug!("module {} -> course {}", id, course_id);
                ctx.module_ids.push(id);
            }
        }

        Ok(())
    }
}
