//! # User API Backend
//!
//! JWT Bearer 인증으로 보호되는 사용자 관리 REST API입니다.
//!
//! ## 구성
//!
//! - [`config`] - 실행 환경, 서명키, 토큰 정책 설정
//! - [`core`] - 에러 타입과 서비스 조립(`AppContainer`)
//! - [`db`] - MongoDB 연결과 스키마 마이그레이션
//! - [`domain`] - 엔티티, 모델, DTO
//! - [`mappings`] - DTO ↔ 모델 ↔ 엔티티 변환
//! - [`repositories`] - 데이터 접근 계층
//! - [`services`] - 비즈니스 로직
//! - [`middlewares`] - 인가 정책 미들웨어
//! - [`handlers`] / [`routes`] - HTTP 엔드포인트

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod mappings;
pub mod repositories;
pub mod services;
pub mod middlewares;
pub mod handlers;
pub mod routes;
