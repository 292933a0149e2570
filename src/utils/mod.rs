// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Shared helpers

pub mod format;

pub use format::{Flag, Num, NumList};
