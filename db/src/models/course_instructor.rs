use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Join table between courses and instructors.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course_instructors")]
pub struct Model {
    /// Course ID (foreign key to `courses`)
    #[sea_orm(primary_key, auto_increment = false, column_name = "CourseId")]
    pub course_id: Uuid,

    /// Instructor ID (foreign key to `instructors`)
    #[sea_orm(primary_key, auto_increment = false, column_name = "InstructorId")]
    pub instructor_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,

    #[sea_orm(
        belongs_to = "super::instructor::Entity",
        from = "Column::InstructorId",
        to = "super::instructor::Column::Id"
    )]
    Instructor,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::instructor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C>(db: &C, course_id: Uuid, instructor_id: Uuid) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let active_model = ActiveModel {
            course_id: Set(course_id),
            instructor_id: Set(instructor_id),
        };

        active_model.insert(db).await
    }
}
