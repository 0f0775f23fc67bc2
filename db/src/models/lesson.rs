use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// A lesson in the `lessons` table. Each lesson belongs to one module.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Id")]
    pub id: Uuid,

    #[sea_orm(column_name = "Title")]
    pub title: String,

    #[sea_orm(column_name = "Content")]
    pub content: String,

    #[sea_orm(column_name = "ModuleId")]
    pub module_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::module::Entity",
        from = "Column::ModuleId",
        to = "super::module::Column::Id"
    )]
    Module,
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C>(
        db: &C,
        id: Uuid,
        title: &str,
        content: &str,
        module_id: Uuid,
    ) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let active_model = ActiveModel {
            id: Set(id),
            title: Set(title.to_owned()),
            content: Set(content.to_owned()),
            module_id: Set(module_id),
        };

        active_model.insert(db).await
    }
}
