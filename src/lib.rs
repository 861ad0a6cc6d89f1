pub mod cli;
pub mod config;
pub mod crlset;
pub mod crx;
pub mod cursor;
pub mod export;
pub mod telemetry;
pub mod update;
