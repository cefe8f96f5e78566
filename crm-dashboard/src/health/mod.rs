// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
mod checker;

pub use checker::BackendHealthChecker;
