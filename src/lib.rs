pub mod calculator;
pub mod commands;
pub mod console;
pub mod consts;
pub mod exceptions;
pub mod historystore;
pub mod logging;
pub mod models;
pub mod script;
