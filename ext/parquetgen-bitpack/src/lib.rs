//! Fixed-width bit packing for Parquet level and dictionary-index streams
//!
//! A [`BitPacker`] packs groups of 8 unsigned integers, each `width` bits
//! wide, into exactly `width` bytes and back, using Parquet's LSB-first
//! bit-packed layout.
//!
//! # Key Components
//!
//! - **BitPacker**: per-width byte layouts computed once, then reused
//!   - [`BitPacker::pack`] / [`BitPacker::unpack`] for a single group
//!   - [`BitPacker::pack_all`] / [`BitPacker::unpack_all`] for runs of any length
//!
//! - **BitPackerConfig**: the widest table to build (3 unless configured)
//!
//! - [`bit_width`]: the width needed for a given maximum value

pub mod config;
pub mod error;
pub mod packer;

pub use config::{BitPackerConfig, DEFAULT_MAX_WIDTH};
pub use error::{BitPackError, Result};
pub use packer::{bit_width, BitPacker, GROUP_SIZE};
