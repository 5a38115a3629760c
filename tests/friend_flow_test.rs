mod common;

use common::{TestClient, TestContext};
use entity::friend::{Entity as Friend, FriendStatus};
use entity::member::MemberStatus;
use pingpong::types::{code::ResultCode, error::AppError};
use sea_orm::{EntityTrait, PaginatorTrait};
use uuid::Uuid;

async fn setup() -> (TestContext, Uuid, Uuid) {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let a = client.create_member("alice").await;
    let b = client.create_member("bob").await;
    (ctx, a, b)
}

#[tokio::test]
async fn test_add_creates_waiting_request() {
    let (ctx, a, b) = setup().await;

    let res = ctx.db.add_friend(a, b).await.unwrap();

    assert_eq!(res.status, FriendStatus::Wait);
    assert_eq!(res.applicant.id, a);
    assert_eq!(res.respondent.id, b);
    assert_eq!(res.applicant.nickname, "alice");

    let stored = ctx.db.get_friend(res.id).await.unwrap();
    assert_eq!(stored, res);
}

#[tokio::test]
async fn test_add_requires_active_members() {
    let (ctx, a, _b) = setup().await;
    let client = TestClient::new(ctx.db.clone());
    let gone = client.create_member_with_status("gone", MemberStatus::Deleted).await;

    let err = ctx.db.add_friend(a, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::MemberNotFound));

    let err = ctx.db.add_friend(gone, a).await.unwrap_err();
    assert!(matches!(err, AppError::MemberNotFound));

    let err = ctx.db.add_friend(a, gone).await.unwrap_err();
    assert!(matches!(err, AppError::MemberNotFound));
}

#[tokio::test]
async fn test_add_to_self_is_rejected() {
    let (ctx, a, _b) = setup().await;

    let err = ctx.db.add_friend(a, a).await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[tokio::test]
async fn test_add_to_self_by_unknown_member_is_member_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let gone = client.create_member_with_status("gone", MemberStatus::Deleted).await;
    let ghost = Uuid::new_v4();

    let err = ctx.db.add_friend(ghost, ghost).await.unwrap_err();
    assert!(matches!(err, AppError::MemberNotFound));

    let err = ctx.db.add_friend(gone, gone).await.unwrap_err();
    assert!(matches!(err, AppError::MemberNotFound));
}

#[tokio::test]
async fn test_duplicate_request_is_rejected() {
    let (ctx, a, b) = setup().await;

    ctx.db.add_friend(a, b).await.unwrap();
    let err = ctx.db.add_friend(a, b).await.unwrap_err();
    assert!(matches!(err, AppError::UserAlreadyFriendRequest));

    // the rejected call must not leave a row behind
    let rows = Friend::find().count(ctx.db.connection()).await.unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn test_reverse_request_while_pending_is_rejected() {
    let (ctx, a, b) = setup().await;

    ctx.db.add_friend(a, b).await.unwrap();
    let err = ctx.db.add_friend(b, a).await.unwrap_err();
    assert!(matches!(err, AppError::UserAlreadyGetFriendRequest));
}

#[tokio::test]
async fn test_request_after_accept_is_rejected_in_both_directions() {
    let (ctx, a, b) = setup().await;

    ctx.db.add_friend(a, b).await.unwrap();
    ctx.db.accept_friend(b, a).await.unwrap();

    let err = ctx.db.add_friend(a, b).await.unwrap_err();
    assert!(matches!(err, AppError::AlreadyOnFriend));

    let err = ctx.db.add_friend(b, a).await.unwrap_err();
    assert!(matches!(err, AppError::AlreadyOnFriend));
}

#[tokio::test]
async fn test_accept_flow() {
    let (ctx, a, b) = setup().await;

    let req = ctx.db.add_friend(a, b).await.unwrap();
    let code = ctx.db.accept_friend(b, a).await.unwrap();
    assert_eq!(code, ResultCode::SuccessAcceptFriend);

    let stored = ctx.db.get_friend(req.id).await.unwrap();
    assert_eq!(stored.status, FriendStatus::Active);

    // nothing pending anymore
    let err = ctx.db.accept_friend(b, a).await.unwrap_err();
    assert!(matches!(err, AppError::FriendNotFound));
}

#[tokio::test]
async fn test_applicant_cannot_accept_own_request() {
    let (ctx, a, b) = setup().await;

    ctx.db.add_friend(a, b).await.unwrap();

    let err = ctx.db.accept_friend(a, b).await.unwrap_err();
    assert!(matches!(err, AppError::FriendNotFound));

    let err = ctx.db.refuse_friend(a, b).await.unwrap_err();
    assert!(matches!(err, AppError::FriendNotFound));
}

#[tokio::test]
async fn test_accept_with_unknown_actor() {
    let (ctx, a, b) = setup().await;

    ctx.db.add_friend(a, b).await.unwrap();
    let err = ctx.db.accept_friend(Uuid::new_v4(), a).await.unwrap_err();
    assert!(matches!(err, AppError::MemberNotFound));
}

#[tokio::test]
async fn test_refuse_flow_allows_new_request() {
    let (ctx, a, b) = setup().await;

    let req = ctx.db.add_friend(a, b).await.unwrap();
    let code = ctx.db.refuse_friend(b, a).await.unwrap();
    assert_eq!(code, ResultCode::SuccessRefuseFriend);

    let stored = ctx.db.get_friend(req.id).await.unwrap();
    assert_eq!(stored.status, FriendStatus::Delete);

    let err = ctx.db.refuse_friend(b, a).await.unwrap_err();
    assert!(matches!(err, AppError::FriendNotFound));

    // refused requests don't block asking again
    let again = ctx.db.add_friend(a, b).await.unwrap();
    assert_ne!(again.id, req.id);
    assert_eq!(again.status, FriendStatus::Wait);
}

#[tokio::test]
async fn test_get_my_friends_lists_each_side_once() {
    let (ctx, a, b) = setup().await;
    let client = TestClient::new(ctx.db.clone());
    let c = client.create_member("carol").await;
    let d = client.create_member("dave").await;

    ctx.db.add_friend(a, b).await.unwrap();
    ctx.db.accept_friend(b, a).await.unwrap();

    ctx.db.add_friend(c, a).await.unwrap();
    ctx.db.accept_friend(a, c).await.unwrap();

    // pending and refused requests are not friendships
    ctx.db.add_friend(a, d).await.unwrap();
    ctx.db.add_friend(d, b).await.unwrap();
    ctx.db.refuse_friend(b, d).await.unwrap();

    let mine = ctx.db.get_my_friends(a).await.unwrap();
    let ids: Vec<Uuid> = mine.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![b, c]);

    let bobs = ctx.db.get_my_friends(b).await.unwrap();
    assert_eq!(bobs.len(), 1);
    assert_eq!(bobs[0].id, a);
    assert_eq!(bobs[0].nickname, "alice");

    assert!(ctx.db.get_my_friends(d).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_friend_not_found() {
    let (ctx, _a, _b) = setup().await;

    let err = ctx.db.get_friend(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::FriendNotFound));
}
