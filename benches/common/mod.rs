// ABOUTME: Common benchmark utilities and fixtures for diagnostic engine performance tests
// ABOUTME: Provides deterministic input generators shared by Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and fixtures.

pub mod fixtures;
