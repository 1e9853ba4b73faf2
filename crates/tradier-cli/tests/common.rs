//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const POSITIONS: &str = r#"{"positions":{"position":[
    {"cost_basis":207.01,"date_acquired":"2018-08-08T14:41:11.405Z","id":130089,"quantity":1.0,"symbol":"AAPL"},
    {"cost_basis":1870.13,"date_acquired":"2018-08-08T14:42:00.774Z","id":130090,"quantity":1.0,"symbol":"UNG260220P00014000"}
]}}"#;

pub const MULTILEG_ORDERS: &str = r#"{"orders":{"order":{
    "id":228749,"class":"multileg","symbol":"SPY","side":"buy","quantity":1.0,"type":"debit",
    "price":1.0,"status":"open","duration":"day","create_date":"2026-02-17T14:30:00.000Z",
    "leg":[
        {"option_symbol":"SPY240119C00470000","side":"buy_to_open"},
        {"option_symbol":"SPY240119C00475000","side":"sell_to_open"}
    ]
}}}"#;

pub const CLOCK: &str = r#"{"clock":{"date":"2026-02-17","description":"Market is open from 09:30 to 16:00","state":"open","next_change":"16:00","next_state":"postmarket"}}"#;

/// An isolated home for one test: its own config path and scratch files.
pub struct TestFixture {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("tradier").join("config.toml");
        Self {
            temp_dir,
            config_path,
        }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn write_config(&self, content: &str) {
        let parent = self.config_path.parent().expect("config path has a parent");
        fs::create_dir_all(parent).expect("Failed to create config dir");
        fs::write(&self.config_path, content).expect("Failed to write config");
    }

    pub fn write_response(&self, name: &str, body: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, body).expect("Failed to write response");
        path
    }

    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tradier").expect("Failed to find binary");
        cmd.env("TRADIER_CONFIG", &self.config_path)
            .env_remove("RUST_LOG");
        cmd
    }
}
