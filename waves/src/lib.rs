//! Wave math shared between the viewer's CPU systems and its tests.
//!
//! The viewer's WGSL shader displaces the visible ocean surface with the
//! same big-wave band that [`field::sample_wave`] computes on the CPU, so
//! anything floating on the water can be oriented without reading back
//! from the GPU.

pub mod buoyancy;
pub mod field;

pub use buoyancy::{orient_body, BodyPose, FLOAT_HEIGHT, MAX_TILT};
pub use field::{sample_wave, WaveBand, WaveSample, GRADIENT_STEP};
