//! HTTP Request Handlers

pub mod compare;
pub mod download;
pub mod figma;
pub mod generate;
pub mod health;
pub mod index;
