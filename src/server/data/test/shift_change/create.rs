use super::*;

use crate::server::data::shift_change::ShiftChangeResource;

/// Tests that the transactional insert and the generic resource insert store
/// the same row for the same input.
///
/// Expected: matching columns, live rows with creation timestamps
#[tokio::test]
async fn stores_same_row_as_generic_insert() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = fixture(db).await?;

    let mut input = swap(&fixture);
    input.note = Some("Cambio por consulta".to_string());

    let side = ShiftChangeRepository::new(db).create(input.clone()).await?;
    let mirror = ResourceRepository::<ShiftChangeResource>::new(db)
        .insert(ShiftChangeResource::into_active_model(input.mirrored(), &cipher())?)
        .await?;

    assert_eq!(side.employee_id_from, mirror.employee_id_to);
    assert_eq!(side.shift_id_from, mirror.shift_id_to);
    assert_eq!(side.date_from, mirror.date_to);
    assert_eq!(side.date_to, mirror.date_from);
    assert_eq!(side.is_swap, mirror.is_swap);
    assert_eq!(side.note, mirror.note);

    for row in [&side, &mirror] {
        assert!(row.deleted_at.is_none());
        assert_eq!(row.created_at, row.updated_at);
    }

    Ok(())
}
