//! Integration tests for the count aggregations.

use lingo_core::types::DbId;
use lingo_db::models::course::CreateCourse;
use lingo_db::models::session_template::CreateSessionTemplate;
use lingo_db::models::topic::CreateTopic;
use lingo_db::models::unit::CreateUnit;
use lingo_db::repositories::{CountsRepo, CourseRepo, SessionTemplateRepo, TopicRepo, UnitRepo, UserRepo};
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
async fn test_child_counts_default_to_zero(pool: PgPool) {
    let actor = seed_actor(&pool).await;
    let course_c = seed_course(&pool, actor, "C").await;
    let course_d = seed_course(&pool, actor, "D").await;

    seed_unit(&pool, actor, course_c, "U1").await;
    seed_unit(&pool, actor, course_c, "U2").await;
    seed_unit(&pool, actor, course_c, "U3").await;

    let counts = CountsRepo::units_per_course(&pool, &[course_c, course_d])
        .await
        .unwrap();
    assert_eq!(counts.get(&course_c), Some(&3));
    assert_eq!(counts.get(&course_d), Some(&0));
    assert_eq!(counts.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_child_counts_with_empty_parent_set(pool: PgPool) {
    let counts = CountsRepo::units_per_course(&pool, &[]).await.unwrap();
    assert!(counts.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_topics_per_unit_only_counts_requested_parents(pool: PgPool) {
    let actor = seed_actor(&pool).await;
    let course = seed_course(&pool, actor, "C").await;
    let unit_a = seed_unit(&pool, actor, course, "A").await;
    let unit_b = seed_unit(&pool, actor, course, "B").await;

    for name in ["T1", "T2"] {
        TopicRepo::create(
            &pool,
            &CreateTopic {
                unit_id: unit_a,
                name: name.to_string(),
                description: None,
                is_active: None,
            },
            actor,
        )
        .await
        .unwrap();
    }
    TopicRepo::create(
        &pool,
        &CreateTopic {
            unit_id: unit_b,
            name: "T3".to_string(),
            description: None,
            is_active: None,
        },
        actor,
    )
    .await
    .unwrap();

    let counts = CountsRepo::topics_per_unit(&pool, &[unit_a]).await.unwrap();
    assert_eq!(counts.get(&unit_a), Some(&2));
    assert!(!counts.contains_key(&unit_b));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_summary_counts_active_rows(pool: PgPool) {
    let actor = seed_actor(&pool).await;

    let live = seed_course(&pool, actor, "Live").await;
    let _ = live;
    CourseRepo::create(
        &pool,
        &CreateCourse {
            name: "Archived".to_string(),
            description: None,
            price: None,
            purchaseable: None,
            is_active: Some(false),
        },
        actor,
    )
    .await
    .unwrap();

    SessionTemplateRepo::create(
        &pool,
        &CreateSessionTemplate {
            name: "Standard lesson".to_string(),
            session_type: None,
            screens: None,
            is_active: None,
        },
        actor,
    )
    .await
    .unwrap();

    let summary = CountsRepo::dashboard_summary(&pool).await.unwrap();
    assert_eq!(summary.courses, 1, "inactive course excluded");
    assert_eq!(summary.templates, 1);
    assert_eq!(summary.topics, 0);
    assert_eq!(summary.session_groups, 0);
    assert_eq!(summary.sessions, 0);
    assert_eq!(summary.users, 1);
}
