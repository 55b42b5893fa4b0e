// ABOUTME: Re-exports command modules for the flockfeed CLI
// ABOUTME: Provides access to catalog listing and flock planning commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Flockfeed Contributors

pub mod catalog;
pub mod plan;
