// src/handlers/mod.rs

pub mod categories;
pub mod health;
pub mod questions;
pub mod quiz;
