use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// A course in the `courses` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Id")]
    pub id: Uuid,

    #[sea_orm(column_name = "Title")]
    pub title: String,

    #[sea_orm(column_name = "Description")]
    pub description: String,

    /// New courses are always created unpublished.
    #[sea_orm(column_name = "IsPublished")]
    pub is_published: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::module::Entity")]
    Module,

    #[sea_orm(has_many = "super::course_instructor::Entity")]
    CourseInstructor,
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl Related<super::course_instructor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseInstructor.def()
    }
}

impl Related<super::instructor::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_instructor::Relation::Instructor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_instructor::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C>(db: &C, id: Uuid, title: &str, description: &str) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let active_model = ActiveModel {
            id: Set(id),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            is_published: Set(false),
        };

        active_model.insert(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn create_stores_unpublished_course() {
        let db = setup_test_db().await;
        let id = Uuid::new_v4();

        let created = Model::create(&db, id, "Intro to Rust", "Ownership and borrowing.")
            .await
            .unwrap();
        assert_eq!(created.id, id);
        assert!(!created.is_published);

        let found = Entity::find_by_id(id).one(&db).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let db = setup_test_db().await;
        let id = Uuid::new_v4();

        Model::create(&db, id, "First", "First course.").await.unwrap();
        assert!(Model::create(&db, id, "Second", "Second course.").await.is_err());
    }
}
