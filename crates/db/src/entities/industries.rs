//! `SeaORM` Entity for industries table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "industries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::company_industries::Entity")]
    CompanyIndustries,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        super::company_industries::Relation::Companies.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::company_industries::Relation::Industries.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
