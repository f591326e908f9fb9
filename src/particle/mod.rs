//! 조사 규칙과 교정 엔진

mod engine;
pub mod rules;

pub use engine::ParticleEngine;
pub use rules::{ParticlePair, ParticleRules};
