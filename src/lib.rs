// gensen-extract - Gemini-backed 源泉徴収票 field extraction service

pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod gemini;
pub mod models;
pub mod server;
pub mod utils;
