// Compatibility module for std/no_std builds
// Provides the alloc types the evaluator needs in both environments

#[cfg(target_os = "none")]
extern crate alloc;

#[cfg(not(target_os = "none"))]
#[allow(unused_imports)]
pub use std::{
    fmt,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(target_os = "none")]
#[allow(unused_imports)]
pub use self::alloc::{
    string::{String, ToString},
    vec::Vec,
};

#[cfg(target_os = "none")]
pub use core::fmt;
