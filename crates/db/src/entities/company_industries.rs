//! `SeaORM` Entity for the company/industry join table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "company_industries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub comp_code: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub ind_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompCode",
        to = "super::companies::Column::Code"
    )]
    Companies,
    #[sea_orm(
        belongs_to = "super::industries::Entity",
        from = "Column::IndCode",
        to = "super::industries::Column::Code"
    )]
    Industries,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Companies.def()
    }
}

impl Related<super::industries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Industries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
