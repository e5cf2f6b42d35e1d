#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![no_std]
#[cfg(feature = "std")]
extern crate std;

mod decode;
mod encode;
mod unlikely;

pub use decode::{decode, decoded_len};
pub use encode::encode;
pub use three2_core::{encoded_len, Base32Error, BASE32_PAD};
