// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sample native-module bridge contract.
//!
//! This is the gallery's stand-in for a codegen'd native module: a small
//! typed surface with constants and a few call shapes (void, number echo,
//! string echo). It demonstrates the call/return contract only; the real
//! message-passing layer lives in the host framework.

use alloc::string::String;

use crate::NativeError;

/// Constants exported by the sample bridge module.
#[derive(Clone, Debug, PartialEq)]
pub struct BridgeConstants {
    /// A constant boolean.
    pub const_bool: bool,
    /// A constant number.
    pub const_number: f64,
    /// A constant string.
    pub const_string: String,
}

/// A minimal typed native-module surface.
///
/// Like [`NativeHost`](crate::NativeHost) methods, every call resolves
/// exactly once with one success or one failure outcome.
pub trait BridgeHost {
    /// Returns the module's exported constants.
    fn constants(&mut self) -> Result<BridgeConstants, NativeError>;

    /// A call with no arguments and no result.
    fn void_func(&mut self) -> Result<(), NativeError>;

    /// Echoes a number through the bridge.
    fn get_number(&mut self, arg: f64) -> Result<f64, NativeError>;

    /// Echoes a string through the bridge.
    fn get_string(&mut self, arg: &str) -> Result<String, NativeError>;
}
