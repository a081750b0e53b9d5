//! Adaptive Assessment - resumable psychometric self-assessment sessions
//!
//! This crate drives a multi-step self-assessment (consent, demographics,
//! adaptive questionnaire, scoring) and keeps persisted progress, the session
//! record, and the committed answer set consistent whenever demographic
//! changes alter which questions are valid.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
