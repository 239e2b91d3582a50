use super::*;

use crate::{
    model::shift_change::CreateShiftChangeDto, server::data::shift_change::ShiftChangeRepository,
};

mod create;
mod find_mirror;

struct Fixture {
    first: entity::employee::Model,
    second: entity::employee::Model,
    morning: entity::shift::Model,
    night: entity::shift::Model,
}

async fn fixture(db: &sea_orm::DatabaseConnection) -> Result<Fixture, DbErr> {
    let (unit, first) = factory::helpers::create_employee_with_dependencies(db).await?;

    Ok(Fixture {
        first,
        second: factory::create_employee(db, unit.id).await?,
        morning: factory::create_shift(db).await?,
        night: factory::create_shift(db).await?,
    })
}

fn swap(fixture: &Fixture) -> CreateShiftChangeDto {
    CreateShiftChangeDto {
        employee_id_from: fixture.first.id,
        shift_id_from: fixture.morning.id,
        date_from: date(2024, 1, 10),
        employee_id_to: fixture.second.id,
        shift_id_to: fixture.night.id,
        date_to: date(2024, 1, 11),
        is_swap: true,
        note: None,
    }
}
