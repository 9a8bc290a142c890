pub mod analysis;
pub mod config;
pub mod error;
pub mod profiles;
pub mod render;
pub mod schemas;
pub mod server;
pub mod strategy;
pub mod tools;

pub use analysis::{AnalysisRequest, Envelope, PersonalityAnalyzer, analyze};
pub use error::AnalysisFailure;
pub use profiles::{Profile, resolve};
pub use strategy::{Strategy, derive};
