use chrono::NaiveDate;
use sea_orm::{sea_query::Condition, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::resource::{Resource, ResourceRepository},
    error::AppError,
    model::pagination::PageRequest,
    util::crypto::FieldCipher,
};

mod birthday;
mod resource;
mod shift_change;
mod user;

fn cipher() -> FieldCipher {
    FieldCipher::new("test-app-key")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
