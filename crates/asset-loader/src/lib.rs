//! Decorative Asset Loading
//!
//! Fetches the dashboard's decorative assets (background image, Lottie
//! animations) once at startup. Every failure here is non-fatal: a
//! missing background warns and is skipped, a failed animation fetch is
//! silently dropped. Nothing in this crate may block or fail the
//! prediction path.

mod background;
mod lottie;

pub use background::load_background;
pub use lottie::{load_animations, AnimationConfig, AnimationSet, FETCH_TIMEOUT_SECS};

use thiserror::Error;

/// Internal asset acquisition errors; callers only ever see `Option`
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset file error: {0}")]
    File(#[from] std::io::Error),
    #[error("Asset fetch error: {0}")]
    Fetch(#[from] reqwest::Error),
}
