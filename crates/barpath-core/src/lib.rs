// ABOUTME: Core types and constants for the Barpath lift diagnostics engine
// ABOUTME: Foundation crate with error handling, constants, and diagnostic data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Barpath Core
//!
//! Foundation crate providing shared types and constants for the Barpath
//! strength diagnostics engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Engine-wide constants (e1RM clamp, signal versions, env var names)
//! - **models**: Engine input (`DiagnosticEngineInput`) and output (`DiagnosticSignals`) types

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Diagnostic input and output data models
pub mod models;
