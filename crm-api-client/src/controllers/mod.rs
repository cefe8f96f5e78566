// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Controllers
//!
//! One module per business area. Each area is a borrowed handle over the
//! shared [`ApiClient`](crate::ApiClient); every method issues exactly one
//! request and returns `Result<T, ApiError>`.
//!
//! Reads are `GET`, writes are `POST`. Read failures are turned into empty
//! values by the caller through [`Fallback`](crate::Fallback).

pub mod attendance;
pub mod notifications;
pub mod opportunities;
pub mod orders;
pub mod permissions;
pub mod products;
pub mod prospects;
pub mod quotations;
pub mod settings;
pub mod social_posts;
pub mod withdrawals;

pub use attendance::{
    AttendanceApi, AttendanceFilter, AttendanceRecord, AttendanceSummary, CheckInRequest,
    CheckOutRequest, EffortScore, TodayAttendance,
};
pub use notifications::{NewNotice, Notice, Notification, NotificationsApi, UnreadCount};
pub use opportunities::{OpportunitiesApi, Opportunity, OpportunityInput};
pub use orders::{NewOrder, Order, OrderLine, OrdersApi};
pub use permissions::{NewRole, Permission, PermissionsApi, Role};
pub use products::{Attribute, AttributeInput, Category, Product, ProductInput, ProductsApi};
pub use prospects::{
    Address, FollowUp, FollowUpInput, Prospect, ProspectInput, ProspectsApi, StageChange,
    StageChangeRequest,
};
pub use quotations::{NewQuotation, Quotation, QuotationLine, QuotationsApi};
pub use settings::{Profile, ProfileInput, Settings, SettingsApi};
pub use social_posts::{NewSocialPost, SocialPost, SocialPostStats, SocialPostsApi};
pub use withdrawals::{WalletBalance, Withdrawal, WithdrawalRequest, WithdrawalsApi};
