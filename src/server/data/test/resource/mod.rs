use super::*;

use crate::{
    model::catalog::CreateBusinessUnitDto,
    server::data::{
        business_unit::BusinessUnitResource, employee::EmployeeResource,
        system_setting::SystemSettingResource,
    },
};

mod delete;
mod find_by_id;
mod find_conflict;
mod find_page;

fn business_unit(slug: &str) -> CreateBusinessUnitDto {
    CreateBusinessUnitDto {
        name: format!("Unit {}", slug),
        slug: slug.to_string(),
        active: true,
    }
}

async fn insert_business_unit(
    db: &sea_orm::DatabaseConnection,
    slug: &str,
) -> Result<entity::business_unit::Model, AppError> {
    let model = BusinessUnitResource::into_active_model(business_unit(slug), &cipher())?;

    Ok(ResourceRepository::<BusinessUnitResource>::new(db)
        .insert(model)
        .await?)
}
