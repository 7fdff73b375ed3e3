// Library for tests to access modules

pub mod agent_repo;
pub mod cli;
pub mod config;
pub mod models;
pub mod report;
pub mod table;
pub mod version;
pub mod view;
