use super::*;

async fn setup_pool() -> SqlitePool {
    let ctx = crate::test_utils::init_test_db().await;
    ctx.pool
}

fn row(id: &str, given: &str, surname: &str) -> MemberRow {
    MemberRow {
        id: id.into(),
        given_name: given.into(),
        surname: surname.into(),
        drive_folder_id: None,
    }
}

#[tokio::test]
async fn test_list_members_in_document_order() {
    let pool = setup_pool().await;

    upsert_member(&pool, &row("m3", "Pedro", "Ruiz")).await.unwrap();
    upsert_member(&pool, &row("m1", "Luis", "Fernández")).await.unwrap();
    upsert_member(&pool, &row("m2", "Ana", "Fernández")).await.unwrap();

    let rows = list_members(&pool).await.unwrap();
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["m2", "m1", "m3"]);
}

#[tokio::test]
async fn test_set_and_get_member_folder() {
    let pool = setup_pool().await;
    upsert_member(&pool, &row("m1", "Marta", "Sanz")).await.unwrap();

    assert_eq!(get_member_folder(&pool, "m1").await.unwrap(), None);

    assert!(set_member_folder(&pool, "m1", "folder-9").await.unwrap());
    assert_eq!(
        get_member_folder(&pool, "m1").await.unwrap().as_deref(),
        Some("folder-9")
    );

    // Writing the same link again is a no-op in effect.
    assert!(set_member_folder(&pool, "m1", "folder-9").await.unwrap());
    assert_eq!(
        get_member_folder(&pool, "m1").await.unwrap().as_deref(),
        Some("folder-9")
    );
}

#[tokio::test]
async fn test_set_member_folder_unknown_member() {
    let pool = setup_pool().await;

    assert!(!set_member_folder(&pool, "ghost", "folder-1").await.unwrap());
}

#[test]
fn test_member_row_into_member() {
    let mut r = row("m1", " Ana ", "García López");
    r.drive_folder_id = Some("f1".into());

    let member: Member = r.into();
    assert_eq!(member.full_name, "Ana García López");
    assert_eq!(member.existing_folder_id.as_deref(), Some("f1"));
}
