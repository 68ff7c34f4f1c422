//! Portfolio Site
//!
//! ビュー状態コントローラ（`portfolio-common`）をCLIから扱うためのモジュール群

pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod prompt;
pub mod replay;
pub mod submit;
