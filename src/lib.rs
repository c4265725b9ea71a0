// src/lib.rs

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod file;
pub mod net;
pub mod runner;
pub mod specs;
pub mod table;
pub mod workbook;
