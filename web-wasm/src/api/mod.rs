//! 外部との通信

pub mod submit;
