//! An implementation of the SM3 cryptographic hash function, as published in
//! GM/T 0004-2012.
//!
//! SM3 produces a 256-bit digest from messages shorter than 2^64 bits. Input
//! is absorbed in 64-byte blocks and may be supplied in any number of chunks.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use sm3::{Digest, Sm3};
//!
//! // streaming, with the digest crate traits
//! let mut hasher = Sm3::new();
//! hasher.input(b"ab");
//! hasher.input(b"c");
//! let result = hasher.result();
//! assert_eq!(result[..], hex!("
//!     66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0
//! ")[..]);
//!
//! // one-shot
//! assert_eq!(sm3::hash(b"abc")[..], result[..]);
//! ```
//!
//! `Sm3::finalize` hands out the digest and leaves the hasher reset, ready
//! for the next message:
//!
//! ```rust
//! let mut hasher = sm3::Sm3::default();
//! hasher.write(b"abc");
//! let first = hasher.finalize();
//! hasher.write(b"abc");
//! assert_eq!(hasher.finalize(), first);
//! ```
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod consts;
mod error;
mod sm3;
mod utils;

pub use digest::Digest;

pub use crate::consts::{BLOCK_LEN, DIGEST_LEN};
pub use crate::error::Error;
pub use crate::sm3::{hash, Sm3};
#[cfg(feature = "compress")]
pub use crate::utils::compress256;
