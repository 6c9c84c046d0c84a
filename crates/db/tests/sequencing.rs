//! Integration tests for the sequencing and reorder operations.
//!
//! - Append-on-create: new sibling gets max+1, or 0 when first
//! - Bulk reorder assigns 0-based indexes in list order
//! - Reorder is idempotent and scoped to one parent
//! - Ids outside the parent are silently skipped

use lingo_core::types::DbId;
use lingo_db::models::course::CreateCourse;
use lingo_db::models::unit::CreateUnit;
use lingo_db::repositories::{CourseRepo, UnitRepo, UserRepo};
use sqlx::PgPool;

async fn seed_actor(pool: &PgPool) -> DbId {
    UserRepo::create(pool, "editor@example.com", "not-a-real-hash", "Editor", None)
        .await
        .unwrap()
        .id
}

async fn seed_course(pool: &PgPool, actor: DbId, name: &str) -> DbId {
    CourseRepo::create(
        pool,
        &CreateCourse {
            name: name.to_string(),
            description: None,
            price: None,
            purchaseable: None,
            is_active: None,
        },
        actor,
    )
    .await
    .unwrap()
    .id
}

async fn seed_unit(pool: &PgPool, actor: DbId, course_id: DbId, name: &str) -> DbId {
    UnitRepo::create(
        pool,
        &CreateUnit {
            course_id,
            name: name.to_string(),
            description: None,
            is_active: None,
        },
        actor,
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_append_assigns_zero_then_increments(pool: PgPool) {
    let actor = seed_actor(&pool).await;
    let course = seed_course(&pool, actor, "Basics").await;

    let first = UnitRepo::create(
        &pool,
        &CreateUnit {
            course_id: course,
            name: "Grammar".to_string(),
            description: None,
            is_active: None,
        },
        actor,
    )
    .await
    .unwrap();
    assert_eq!(first.sequence, 0);

    let second = UnitRepo::create(
        &pool,
        &CreateUnit {
            course_id: course,
            name: "Vocabulary".to_string(),
            description: None,
            is_active: None,
        },
        actor,
    )
    .await
    .unwrap();
    assert_eq!(second.sequence, 1);

    let third = UnitRepo::create(
        &pool,
        &CreateUnit {
            course_id: course,
            name: "Listening".to_string(),
            description: None,
            is_active: None,
        },
        actor,
    )
    .await
    .unwrap();
    assert_eq!(third.sequence, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_append_is_scoped_per_parent(pool: PgPool) {
    let actor = seed_actor(&pool).await;
    let course_a = seed_course(&pool, actor, "A").await;
    let course_b = seed_course(&pool, actor, "B").await;

    seed_unit(&pool, actor, course_a, "A1").await;
    seed_unit(&pool, actor, course_a, "A2").await;
    let b_first = UnitRepo::create(
        &pool,
        &CreateUnit {
            course_id: course_b,
            name: "B1".to_string(),
            description: None,
            is_active: None,
        },
        actor,
    )
    .await
    .unwrap();

    // B's first unit starts at 0 regardless of A's progress.
    assert_eq!(b_first.sequence, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_assigns_list_index(pool: PgPool) {
    let actor = seed_actor(&pool).await;
    let course = seed_course(&pool, actor, "Basics").await;
    let grammar = seed_unit(&pool, actor, course, "Grammar").await;
    let vocabulary = seed_unit(&pool, actor, course, "Vocabulary").await;

    let updated = UnitRepo::reorder(&pool, course, &[vocabulary, grammar], actor)
        .await
        .unwrap();
    assert_eq!(updated, 2);

    let units = UnitRepo::list_by_course(&pool, course, None).await.unwrap();
    assert_eq!(units[0].id, vocabulary);
    assert_eq!(units[0].sequence, 0);
    assert_eq!(units[1].id, grammar);
    assert_eq!(units[1].sequence, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_is_idempotent(pool: PgPool) {
    let actor = seed_actor(&pool).await;
    let course = seed_course(&pool, actor, "Basics").await;
    let a = seed_unit(&pool, actor, course, "A").await;
    let b = seed_unit(&pool, actor, course, "B").await;
    let c = seed_unit(&pool, actor, course, "C").await;

    let order = [c, a, b];
    UnitRepo::reorder(&pool, course, &order, actor).await.unwrap();
    let first_pass: Vec<(DbId, i32)> = UnitRepo::list_by_course(&pool, course, None)
        .await
        .unwrap()
        .iter()
        .map(|u| (u.id, u.sequence))
        .collect();

    UnitRepo::reorder(&pool, course, &order, actor).await.unwrap();
    let second_pass: Vec<(DbId, i32)> = UnitRepo::list_by_course(&pool, course, None)
        .await
        .unwrap()
        .iter()
        .map(|u| (u.id, u.sequence))
        .collect();

    assert_eq!(first_pass, second_pass);
    assert_eq!(first_pass, vec![(c, 0), (a, 1), (b, 2)]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_skips_ids_outside_the_parent(pool: PgPool) {
    let actor = seed_actor(&pool).await;
    let course_a = seed_course(&pool, actor, "A").await;
    let course_b = seed_course(&pool, actor, "B").await;
    let a1 = seed_unit(&pool, actor, course_a, "A1").await;
    let a2 = seed_unit(&pool, actor, course_a, "A2").await;
    let foreign = seed_unit(&pool, actor, course_b, "B1").await;

    // The foreign unit is listed first; it must be skipped, not moved.
    let updated = UnitRepo::reorder(&pool, course_a, &[foreign, a2, a1], actor)
        .await
        .unwrap();
    assert_eq!(updated, 2);

    let foreign_row = UnitRepo::find_by_id(&pool, foreign).await.unwrap().unwrap();
    assert_eq!(foreign_row.course_id, course_b);
    assert_eq!(foreign_row.sequence, 0, "foreign unit left unmodified");

    let a_units = UnitRepo::list_by_course(&pool, course_a, None).await.unwrap();
    assert_eq!(a_units[0].id, a2);
    assert_eq!(a_units[0].sequence, 1);
    assert_eq!(a_units[1].id, a1);
    assert_eq!(a_units[1].sequence, 2);
}
