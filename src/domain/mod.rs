//! 도메인 계층: 엔티티, 요청/응답 DTO, 값 객체

pub mod entities;
pub mod dto;
pub mod models;
