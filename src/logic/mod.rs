// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The notepack authors

//! Business logic: archive codec, reference resolution, export naming.

pub mod archive;
pub mod naming;
pub mod resolver;
