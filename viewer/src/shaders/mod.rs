//! Custom shader integration for the ocean surface.
//!
//! ## Ocean shader
//! The ocean shader (`data/shaders/ocean.wgsl`) displaces a tessellated
//! plane with a big sinusoidal wave band plus perlin-noise chop, and blends
//! a depth color toward a surface color with elevation. The big band is the
//! same height function the CPU samples in `waves::field`.
//!
//! The shader is embedded at compile time and registered by
//! [`water::WaterShaderPlugin`].

pub mod water;
