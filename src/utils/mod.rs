// src/utils/mod.rs

pub mod deserializers;
