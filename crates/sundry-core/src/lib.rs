// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! sundry-core: a grab bag of small generic utilities.
//!
//! The centrepiece is [`RingQueue`], a FIFO ring buffer that grows and
//! shrinks with occupancy. Around it sit thin numeric helpers: bit and
//! little-endian byte packing, IEEE-754 decomposition, scalar math, angles,
//! 2D vectors, and deterministic pseudo-random generators.
#![forbid(unsafe_code)]

pub mod angle;
pub mod bits;
pub mod bytes;
pub mod config;
pub mod float;
pub mod prng;
pub mod queue;
pub mod scalar;
pub mod time;
pub mod vec2;

// Re-exports for stable public API
pub use angle::{Deg, Rad};
pub use crate::bytes::{BytesError, LeBytes};
pub use config::{ConfigError, ConfigService, ConfigStore, MemoryConfigStore, QueueConfig};
pub use prng::{Pcg32Fast, RandomSource, Xoroshiro128Plus};
pub use queue::{QueueError, RingQueue};
pub use vec2::{Vec2, Vec2I};
