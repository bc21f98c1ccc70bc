use rand::Rng;
use std::fmt::Display;
use std::io::Error;

pub mod cases;
pub mod config;
pub mod mirror;
pub mod params;
pub mod sparse;
pub mod suite;
pub mod verify;

#[derive(Debug)]
pub enum ChkError {
    /// Test case name that no dispatch entry exists for
    InvalidTestCase(String),
    /// Parameter combination the test cases cannot operate on
    InvalidParams(String),
    FsError(std::io::Error),
    ConfigError(serde_yaml::Error),
}
impl From<std::io::Error> for ChkError {
    fn from(value: Error) -> Self {
        Self::FsError(value)
    }
}
impl From<serde_yaml::Error> for ChkError {
    fn from(value: serde_yaml::Error) -> Self {
        Self::ConfigError(value)
    }
}
impl Display for ChkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChkError::InvalidTestCase(name) => write!(f, "invalid test case: {}", name),
            ChkError::InvalidParams(msg) => write!(f, "invalid parameters: {}", msg),
            ChkError::FsError(e) => write!(f, "filesystem error: {}", e),
            ChkError::ConfigError(e) => write!(f, "config error: {}", e),
        }
    }
}
impl std::error::Error for ChkError {}

// just some helper functions for now
pub fn random_string() -> String {
    let mut rng = rand::thread_rng();
    let s: String = (0..14).map(|_| rng.gen_range(0..9).to_string()).collect();
    s
}

pub fn random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen_range(0..255)).collect()
}
