// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
mod health;

pub use health::{health_live, health_ready, health_startup, HealthState};
