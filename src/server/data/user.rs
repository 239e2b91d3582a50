use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the live user owning an API token.
    pub async fn find_by_api_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::ApiToken.eq(token))
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets live users with the given role, ordered by id.
    pub async fn find_by_role(&self, role: &str) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role))
            .filter(entity::user::Column::DeletedAt.is_null())
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }
}
