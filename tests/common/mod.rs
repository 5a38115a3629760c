#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use entity::member::{ActiveModel as MemberActive, MemberStatus};
use entity::plan::{ActiveModel as PlanActive, Model as PlanModel, PlanStatus};
use entity::team::ActiveModel as TeamActive;
use pingpong::db::database_service::DatabaseService;
use sea_orm::{ActiveModelTrait, ConnectOptions, Set};
use uuid::Uuid;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // one connection, otherwise every pooled connection gets its own empty database
        let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
        opts.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Arc::new(
            DatabaseService::connect(opts)
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext { db }
    }
}

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    pub async fn create_member(&self, nickname: &str) -> Uuid {
        self.create_member_with_status(nickname, MemberStatus::Active).await
    }

    pub async fn create_member_with_status(&self, nickname: &str, status: MemberStatus) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        MemberActive {
            id: Set(id),
            email: Set(format!("{}-{}@test.com", nickname, id)),
            nickname: Set(nickname.to_string()),
            profile_image: Set(None),
            status: Set(status),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.db.connection())
        .await
        .expect("Failed to create member");
        id
    }

    pub async fn create_team(&self, host_id: Uuid) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        TeamActive {
            id: Set(id),
            name: Set("Test Team".to_string()),
            host_id: Set(host_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.db.connection())
        .await
        .expect("Failed to create team");
        id
    }

    pub async fn create_plan(
        &self,
        team_id: Uuid,
        manager_id: Uuid,
        date: NaiveDate,
        wasted_time: i64,
        status: PlanStatus,
    ) -> PlanModel {
        let now = Utc::now();
        PlanActive {
            id: Set(Uuid::new_v4()),
            team_id: Set(team_id),
            manager_id: Set(manager_id),
            title: Set(format!("plan on {}", date)),
            date: Set(date),
            wasted_time: Set(wasted_time),
            status: Set(status),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.db.connection())
        .await
        .expect("Failed to create plan")
    }
}

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, d).expect("valid date")
}
