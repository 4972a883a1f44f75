pub mod user_group_repo;

pub use user_group_repo::UserGroupRepository;
