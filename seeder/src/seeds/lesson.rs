use super::{LESSON_CONTENT_MAX_CHARS, LESSONS_PER_MODULE};
use crate::context::SeedContext;
use crate::error::SeedError;
use crate::seed::Seeder;
use crate::text;
use async_trait::async_trait;
use db::models::lesson;
use sea_orm::DatabaseTransaction;

pub struct LessonSeeder;

#[async_trait]
impl Seeder for LessonSeeder {
    fn name(&self) -> &'static str {
        "Lessons"
    }

    async fn seed(
        &self,
        txn: &DatabaseTransaction,
        ctx: &mut SeedContext,
    ) -> Result<(), SeedError> {
        let module_ids = ctx.module_ids.clone();

        for module_id in module_ids {
            for _ in 0..LESSONS_PER_MODULE {
                let id = ctx.fresh_id();
                let title = text::title(2);
                let content = text::bounded_text(LESSON_CONTENT_MAX_CHARS);

                lesson::Model::create(txn, id, &title, &content, module_id)
                    .await
                    .map_err(SeedError::insert("lessons"))?;

                log::debug!("lesson {} -> module {}", id, module_id);
                ctx.lesson_ids.push(id);
            }
        }

        Ok(())
    }
}
