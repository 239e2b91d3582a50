use super::*;

use crate::{
    model::{
        api::IndexQueryDto,
        employee::{CreateEmployeeBankDto, CreateEmployeeDto, UpdateEmployeeDto},
        exception_request::CreateExceptionRequestDto,
        setting::{CreateNotificationEmailDto, UpdateNotificationEmailDto},
        work_disability::CreateWorkDisabilityDto,
    },
    server::{
        data::{
            address::AddressResource,
            business_unit::BusinessUnitResource,
            employee::EmployeeResource,
            employee_bank::{decrypt_account, EmployeeBankResource},
            exception_request::ExceptionRequestResource,
            notification_email::NotificationEmailResource,
            work_disability::WorkDisabilityResource,
        },
        service::resource::ResourceService,
    },
};

fn employee_dto(business_unit_id: i32, code: &str) -> CreateEmployeeDto {
    serde_json::from_value(json!({
        "code": code,
        "first_name": "  Luis ",
        "last_name": "Pérez",
        "email": "Luis.Perez@Example.com",
        "birthday": "1990-05-17T00:00:00.000Z",
        "business_unit_id": business_unit_id,
    }))
    .unwrap()
}

/// Tests that create stores the normalized record and audits it for the actor.
///
/// Expected: stored fields normalized, one `create` audit entry
#[tokio::test]
async fn creates_and_audits_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();

    let unit = factory::create_business_unit(db).await?;
    let actor = factory::create_user(db).await?;

    let service = ResourceService::<EmployeeResource>::new(db, &cipher, Locale::Es);
    let employee = service.create(employee_dto(unit.id, "emp-1"), Some(&actor)).await?;

    assert_eq!(employee.code, "EMP-1");
    assert_eq!(employee.first_name, "Luis");
    assert_eq!(employee.email.as_deref(), Some("luis.perez@example.com"));
    assert_eq!(employee.birthday, chrono::NaiveDate::from_ymd_opt(1990, 5, 17));

    let shown = service.show(employee.id).await?;
    assert_eq!(shown, employee);

    assert_eq!(audit_actions(db, "employee", employee.id).await, vec!["create"]);

    Ok(())
}

/// Tests that anonymous writes leave no audit entry.
#[tokio::test]
async fn skips_audit_without_actor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();

    let unit = factory::create_business_unit(db).await?;
    let service = ResourceService::<EmployeeResource>::new(db, &cipher, Locale::Es);
    let employee = service.create(employee_dto(unit.id, "EMP-2"), None).await?;

    assert!(audit_actions(db, "employee", employee.id).await.is_empty());

    Ok(())
}

/// Tests that a second live record with the same business key is a 409.
#[tokio::test]
async fn rejects_duplicate_business_key() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();

    let unit = factory::create_business_unit(db).await?;
    let service = ResourceService::<EmployeeResource>::new(db, &cipher, Locale::En);
    service.create(employee_dto(unit.id, "EMP-3"), None).await?;

    let err = service
        .create(employee_dto(unit.id, "emp-3"), None)
        .await
        .unwrap_err();

    assert_eq!(status_of(&err), Some(409));
    assert!(err.to_string().contains("already exists"));

    Ok(())
}

/// Tests that a missing referenced business unit is reported as 404.
#[tokio::test]
async fn rejects_missing_business_unit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();

    let err = ResourceService::<EmployeeResource>::new(db, &cipher, Locale::Es)
        .create(employee_dto(999, "EMP-4"), None)
        .await
        .unwrap_err();

    assert_eq!(status_of(&err), Some(404));

    Ok(())
}

/// Tests that update keeps omitted fields and re-checks conflicts against
/// other live records.
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();

    let unit = factory::create_business_unit(db).await?;
    let actor = factory::create_user(db).await?;
    let service = ResourceService::<EmployeeResource>::new(db, &cipher, Locale::Es);
    let first = service.create(employee_dto(unit.id, "EMP-5"), None).await?;
    let second = service.create(employee_dto(unit.id, "EMP-6"), None).await?;

    let updated = service
        .update(
            first.id,
            UpdateEmployeeDto {
                phone: Some("5551234567".to_string()),
                ..Default::default()
            },
            Some(&actor),
        )
        .await?;

    assert_eq!(updated.phone.as_deref(), Some("5551234567"));
    assert_eq!(updated.code, first.code);
    assert_eq!(updated.email, first.email);
    assert_eq!(updated.birthday, first.birthday);
    assert!(updated.updated_at >= first.updated_at);

    let err = service
        .update(
            first.id,
            UpdateEmployeeDto {
                code: Some(second.code.clone()),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(status_of(&err), Some(409));

    // Keeping its own code is not a conflict.
    service
        .update(
            first.id,
            UpdateEmployeeDto {
                code: Some(first.code.clone()),
                ..Default::default()
            },
            None,
        )
        .await?;

    assert_eq!(audit_actions(db, "employee", first.id).await, vec!["update"]);

    Ok(())
}

/// Tests that deleting twice reports not found the second time and that the
/// deleted record disappears from show and index.
#[tokio::test]
async fn deletes_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();

    let unit = factory::create_business_unit(db).await?;
    let service = ResourceService::<EmployeeResource>::new(db, &cipher, Locale::Es);
    let employee = service.create(employee_dto(unit.id, "EMP-7"), None).await?;

    let deleted = service.delete(employee.id, None).await?;
    assert!(deleted.deleted_at.is_some());

    assert!(matches!(service.show(employee.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        service.delete(employee.id, None).await,
        Err(AppError::NotFound(_))
    ));

    let page = service.index(&IndexQueryDto::default()).await?;
    assert_eq!(page.total, 0);

    Ok(())
}

/// Tests that index narrows employee-scoped resources to one employee.
#[tokio::test]
async fn filters_index_by_employee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();

    let (unit, first) = factory::helpers::create_employee_with_dependencies(db).await?;
    let second = factory::create_employee(db, unit.id).await?;

    let service = ResourceService::<AddressResource>::new(db, &cipher, Locale::Es);
    for employee_id in [first.id, second.id] {
        service
            .create(
                serde_json::from_value(json!({
                    "employee_id": employee_id,
                    "street": "Av. Reforma",
                    "exterior_number": "100",
                    "city": "Monterrey",
                    "state": "Nuevo León",
                    "zip_code": "64000",
                    "country": "México",
                }))
                .unwrap(),
                None,
            )
            .await?;
    }

    let page = service
        .index(&IndexQueryDto {
            employee_id: Some(second.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].employee_id, second.id);

    Ok(())
}

/// Tests that bank account numbers are stored encrypted with their last four
/// digits in clear, and decrypt back to the submitted values.
#[tokio::test]
async fn encrypts_bank_account_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();

    let (_, employee) = factory::helpers::create_employee_with_dependencies(db).await?;
    let bank = factory::create_bank(db).await?;

    let input: CreateEmployeeBankDto = serde_json::from_value(json!({
        "employee_id": employee.id,
        "bank_id": bank.id,
        "account_number": "0123456789",
        "clabe": "012180001234567897",
        "currency": "mxn",
    }))
    .unwrap();

    let account = ResourceService::<EmployeeBankResource>::new(db, &cipher, Locale::Es)
        .create(input, None)
        .await?;

    assert_ne!(account.account_number, "0123456789");
    assert_eq!(account.account_number_last_four, "6789");
    assert_eq!(account.clabe_last_four.as_deref(), Some("7897"));
    assert_eq!(account.currency, "MXN");

    let decrypted = decrypt_account(&account, &cipher)?;
    assert_eq!(decrypted.account_number, "0123456789");
    assert_eq!(decrypted.clabe.as_deref(), Some("012180001234567897"));

    Ok(())
}

/// Tests that exception types flagged as needing a description reject
/// requests without one.
#[tokio::test]
async fn requires_description_when_type_needs_it() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();

    let (_, employee) = factory::helpers::create_employee_with_dependencies(db).await?;
    let strict = factory::create_exception_type(db, true).await?;

    let service = ResourceService::<ExceptionRequestResource>::new(db, &cipher, Locale::Es);
    let request = |description: Option<&str>| -> CreateExceptionRequestDto {
        serde_json::from_value(json!({
            "employee_id": employee.id,
            "exception_type_id": strict.id,
            "requested_date": "2024-03-01",
            "description": description,
        }))
        .unwrap()
    };

    let err = service.create(request(None), None).await.unwrap_err();
    assert_eq!(status_of(&err), Some(400));

    let created = service.create(request(Some("Cita médica")), None).await?;
    assert_eq!(created.status, "requested");

    Ok(())
}

/// Tests that a disability period ending before it starts is rejected.
#[tokio::test]
async fn rejects_inverted_disability_period() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();

    let (_, employee) = factory::helpers::create_employee_with_dependencies(db).await?;

    let input: CreateWorkDisabilityDto = serde_json::from_value(json!({
        "employee_id": employee.id,
        "insurance_folio": "ab123",
        "disability_type": "illness",
        "start_date": "2024-03-10",
        "end_date": "2024-03-01",
    }))
    .unwrap();

    let err = ResourceService::<WorkDisabilityResource>::new(db, &cipher, Locale::Es)
        .create(input, None)
        .await
        .unwrap_err();

    assert_eq!(status_of(&err), Some(400));

    Ok(())
}

/// Tests that moving a notification email to a deleted or unknown business
/// unit is reported as not found and leaves the row untouched.
#[tokio::test]
async fn rejects_notification_email_moved_to_missing_unit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cipher = cipher();

    let unit = factory::create_business_unit(db).await?;
    let closed = factory::create_business_unit(db).await?;
    ResourceService::<BusinessUnitResource>::new(db, &cipher, Locale::Es)
        .delete(closed.id, None)
        .await?;

    let service = ResourceService::<NotificationEmailResource>::new(db, &cipher, Locale::Es);
    let input: CreateNotificationEmailDto = serde_json::from_value(json!({
        "email": "rh@example.com",
        "business_unit_id": unit.id,
    }))
    .unwrap();
    let row = service.create(input, None).await?;

    for business_unit_id in [closed.id, 9999] {
        let patch = UpdateNotificationEmailDto {
            business_unit_id: Some(business_unit_id),
            ..Default::default()
        };
        let err = service.update(row.id, patch, None).await.unwrap_err();
        assert_eq!(status_of(&err), Some(404));
    }

    assert_eq!(service.show(row.id).await?.business_unit_id, unit.id);

    Ok(())
}
