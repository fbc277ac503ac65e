mod config;
mod models;
mod logging;
