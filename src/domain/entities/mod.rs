//! # 영속성 엔티티
//!
//! 각 테이블에 대응하는 sea-orm 엔티티입니다. 모든 집계 루트의 기본 키는
//! 서버에서 생성한 UUID v4 문자열이며, 연결 테이블(`coupon_user`, `group_user`)은
//! 복합 키를 사용합니다.
//!
//! 테이블은 [`crate::db::Database::create_tables`]가 이 정의로부터 생성합니다.

pub mod coupon;
pub mod coupon_user;
pub mod epic;
pub mod group_user;
pub mod issue;
pub mod milestone;
pub mod order;
pub mod order_detail;
pub mod product;
pub mod project;
pub mod subscription_member;
pub mod todo;
pub mod user;
pub mod user_group;
