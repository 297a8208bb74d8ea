//! Operating system entropy.
//!
//! One implementation per platform, selected at compile time. Each exposes
//! `fill_random(&mut [u8]) -> io::Result<()>`, which either fills the whole
//! buffer with cryptographically secure bytes or reports why it could not.

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::fill_random;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::fill_random;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::fill_random;
