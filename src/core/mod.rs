pub mod config;
pub mod controller;
pub mod conversation;
pub mod message;
pub mod session;
pub mod storage;
