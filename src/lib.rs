#[macro_use]
extern crate napi_derive;

pub mod engine;
pub mod error;
pub mod format;
pub mod geometry;
pub mod input;
pub mod math;
pub mod state;
pub mod types;
pub mod widget;

#[napi]
pub fn health_check() -> String {
    "hsv-picker-native ok".to_string()
}
