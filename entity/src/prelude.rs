pub use super::action_log::Entity as ActionLog;
pub use super::address::Entity as Address;
pub use super::aircraft::Entity as Aircraft;
pub use super::aircraft_pilot::Entity as AircraftPilot;
pub use super::airport::Entity as Airport;
pub use super::bank::Entity as Bank;
pub use super::business_unit::Entity as BusinessUnit;
pub use super::employee::Entity as Employee;
pub use super::employee_bank::Entity as EmployeeBank;
pub use super::employee_child::Entity as EmployeeChild;
pub use super::employee_medical_condition::Entity as EmployeeMedicalCondition;
pub use super::employee_shift_change::Entity as EmployeeShiftChange;
pub use super::employee_spouse::Entity as EmployeeSpouse;
pub use super::exception_request::Entity as ExceptionRequest;
pub use super::exception_type::Entity as ExceptionType;
pub use super::medical_condition::Entity as MedicalCondition;
pub use super::notification_email::Entity as NotificationEmail;
pub use super::proceeding_file::Entity as ProceedingFile;
pub use super::shift::Entity as Shift;
pub use super::system_setting::Entity as SystemSetting;
pub use super::user::Entity as User;
pub use super::work_disability::Entity as WorkDisability;
