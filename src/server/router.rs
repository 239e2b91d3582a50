use axum::Router;

use crate::server::{
    controller::{
        aircraft, employee_bank, notification, proceeding_file,
        resource::routes,
        shift_change,
    },
    data::{
        address::AddressResource, aircraft::AircraftResource, airport::AirportResource,
        bank::BankResource, business_unit::BusinessUnitResource, employee::EmployeeResource,
        employee_bank::EmployeeBankResource, employee_child::EmployeeChildResource,
        employee_medical_condition::EmployeeMedicalConditionResource,
        employee_spouse::EmployeeSpouseResource, exception_request::ExceptionRequestResource,
        exception_type::ExceptionTypeResource, medical_condition::MedicalConditionResource,
        notification_email::NotificationEmailResource, shift::ShiftResource,
        system_setting::SystemSettingResource, work_disability::WorkDisabilityResource,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(routes::<BusinessUnitResource>())
        .merge(routes::<EmployeeResource>())
        .merge(routes::<AddressResource>())
        .merge(routes::<EmployeeChildResource>())
        .merge(routes::<EmployeeSpouseResource>())
        .merge(routes::<EmployeeMedicalConditionResource>())
        .merge(routes::<EmployeeBankResource>())
        .merge(employee_bank::routes())
        .merge(routes::<AircraftResource>())
        .merge(aircraft::routes())
        .merge(routes::<AirportResource>())
        .merge(routes::<BankResource>())
        .merge(routes::<MedicalConditionResource>())
        .merge(routes::<ShiftResource>())
        .merge(shift_change::routes())
        .merge(routes::<WorkDisabilityResource>())
        .merge(routes::<ExceptionTypeResource>())
        .merge(routes::<ExceptionRequestResource>())
        .merge(routes::<SystemSettingResource>())
        .merge(routes::<NotificationEmailResource>())
        .merge(proceeding_file::routes())
        .merge(notification::routes())
}
