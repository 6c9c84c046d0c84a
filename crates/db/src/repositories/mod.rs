//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Hierarchical repositories
//! additionally own the append-sequence and bulk-reorder operations for
//! their sibling group.

pub mod auth_session_repo;
pub mod counts_repo;
pub mod course_repo;
pub mod session_detail_repo;
pub mod session_group_repo;
pub mod session_template_repo;
pub mod topic_repo;
pub mod unit_repo;
pub mod user_repo;

pub use auth_session_repo::AuthSessionRepo;
pub use counts_repo::CountsRepo;
pub use course_repo::CourseRepo;
pub use session_detail_repo::SessionDetailRepo;
pub use session_group_repo::SessionGroupRepo;
pub use session_template_repo::SessionTemplateRepo;
pub use topic_repo::TopicRepo;
pub use unit_repo::UnitRepo;
pub use user_repo::UserRepo;
