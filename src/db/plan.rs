use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use entity::plan::{Column, Entity as Plan, Model as PlanModel, PlanStatus};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

/// Read side of team plans. Every lookup is scoped by status so soft-deleted
/// plans stay hidden unless asked for. Date ranges include both ends.
///
/// Missing rows come back as an empty `Vec` or `None`; turning an absent plan
/// into an error is left to the caller.
#[async_trait]
pub trait PlanQuery: Send + Sync {
    /// Team plans, biggest wasted time first.
    async fn list_by_team_ranked_by_wasted_time(
        &self,
        team_id: Uuid,
        status: PlanStatus,
    ) -> Result<Vec<PlanModel>, AppError>;

    async fn list_by_team_between(
        &self,
        team_id: Uuid,
        status: PlanStatus,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PlanModel>, AppError>;

    async fn list_by_manager_between(
        &self,
        manager_id: Uuid,
        status: PlanStatus,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PlanModel>, AppError>;

    async fn find_by_id(&self, plan_id: Uuid, status: PlanStatus) -> Result<Option<PlanModel>, AppError>;

    async fn find_by_id_in_team(
        &self,
        plan_id: Uuid,
        team_id: Uuid,
        status: PlanStatus,
    ) -> Result<Option<PlanModel>, AppError>;

    async fn list_by_team_on(
        &self,
        team_id: Uuid,
        date: NaiveDate,
        status: PlanStatus,
    ) -> Result<Vec<PlanModel>, AppError>;

    async fn list_by_manager_on(
        &self,
        manager_id: Uuid,
        status: PlanStatus,
        date: NaiveDate,
    ) -> Result<Vec<PlanModel>, AppError>;

    async fn list_by_team_and_manager_on(
        &self,
        team_id: Uuid,
        manager_id: Uuid,
        status: PlanStatus,
        date: NaiveDate,
    ) -> Result<Vec<PlanModel>, AppError>;
}

#[async_trait]
impl PlanQuery for DatabaseService {
    async fn list_by_team_ranked_by_wasted_time(
        &self,
        team_id: Uuid,
        status: PlanStatus,
    ) -> Result<Vec<PlanModel>, AppError> {
        Ok(Plan::find()
            .filter(Column::TeamId.eq(team_id))
            .filter(Column::Status.eq(status))
            .order_by_desc(Column::WastedTime)
            .order_by_asc(Column::Date)
            .all(&self.database_connection)
            .await?)
    }

    async fn list_by_team_between(
        &self,
        team_id: Uuid,
        status: PlanStatus,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PlanModel>, AppError> {
        Ok(Plan::find()
            .filter(Column::TeamId.eq(team_id))
            .filter(Column::Status.eq(status))
            .filter(Column::Date.between(start, end))
            .order_by_asc(Column::Date)
            .all(&self.database_connection)
            .await?)
    }

    async fn list_by_manager_between(
        &self,
        manager_id: Uuid,
        status: PlanStatus,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PlanModel>, AppError> {
        Ok(Plan::find()
            .filter(Column::ManagerId.eq(manager_id))
            .filter(Column::Status.eq(status))
            .filter(Column::Date.between(start, end))
            .order_by_asc(Column::Date)
            .all(&self.database_connection)
            .await?)
    }

    async fn find_by_id(&self, plan_id: Uuid, status: PlanStatus) -> Result<Option<PlanModel>, AppError> {
        Ok(Plan::find_by_id(plan_id)
            .filter(Column::Status.eq(status))
            .one(&self.database_connection)
            .await?)
    }

    async fn find_by_id_in_team(
        &self,
        plan_id: Uuid,
        team_id: Uuid,
        status: PlanStatus,
    ) -> Result<Option<PlanModel>, AppError> {
        Ok(Plan::find_by_id(plan_id)
            .filter(Column::TeamId.eq(team_id))
            .filter(Column::Status.eq(status))
            .one(&self.database_connection)
            .await?)
    }

    async fn list_by_team_on(
        &self,
        team_id: Uuid,
        date: NaiveDate,
        status: PlanStatus,
    ) -> Result<Vec<PlanModel>, AppError> {
        Ok(Plan::find()
            .filter(Column::TeamId.eq(team_id))
            .filter(Column::Date.eq(date))
            .filter(Column::Status.eq(status))
            .order_by_asc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    async fn list_by_manager_on(
        &self,
        manager_id: Uuid,
        status: PlanStatus,
        date: NaiveDate,
    ) -> Result<Vec<PlanModel>, AppError> {
        Ok(Plan::find()
            .filter(Column::ManagerId.eq(manager_id))
            .filter(Column::Status.eq(status))
            .filter(Column::Date.eq(date))
            .order_by_asc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    async fn list_by_team_and_manager_on(
        &self,
        team_id: Uuid,
        manager_id: Uuid,
        status: PlanStatus,
        date: NaiveDate,
    ) -> Result<Vec<PlanModel>, AppError> {
        Ok(Plan::find()
            .filter(Column::TeamId.eq(team_id))
            .filter(Column::ManagerId.eq(manager_id))
            .filter(Column::Status.eq(status))
            .filter(Column::Date.eq(date))
            .order_by_asc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }
}
