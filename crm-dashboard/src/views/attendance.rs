// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
//! Attendance: today's check-in state, monthly summary, records and the
//! team effort scores.
//!
//! The employee is selected with `?user_id=`, the month with `?month=YYYY-MM`
//! (current month when absent) and the record range with `?from=`/`?to=`.

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use crm_api_client::{
    ApiClient, AttendanceFilter, AttendanceRecord, AttendanceSummary, CheckInRequest,
    CheckOutRequest, EffortScore, Fallback, TodayAttendance,
};

use super::{ActionError, FormData, Params, View};
use leptos::{view, IntoView};

use crate::widgets::{or_dash, stat_cards, DataTable, Form};

pub struct AttendanceView {
    user_id: Option<u64>,
    month: String,
    filter: AttendanceFilter,
    today: TodayAttendance,
    summary: AttendanceSummary,
    records: Vec<AttendanceRecord>,
    scores: Vec<EffortScore>,
}

fn parse_date(params: &Params, name: &str) -> Option<NaiveDate> {
    params
        .get(name)
        .and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
}

impl AttendanceView {
    pub fn create(params: &Params) -> Box<dyn View> {
        let month = params
            .get("month")
            .map(str::to_string)
            .unwrap_or_else(|| Local::now().format("%Y-%m").to_string());
        Box::new(Self::new(
            params.u64("user_id"),
            month,
            parse_date(params, "from"),
            parse_date(params, "to"),
        ))
    }

    fn new(
        user_id: Option<u64>,
        month: String,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Self {
        Self {
            user_id,
            month,
            filter: AttendanceFilter { user_id, from, to },
            today: TodayAttendance::default(),
            summary: AttendanceSummary::default(),
            records: Vec::new(),
            scores: Vec::new(),
        }
    }

    fn query(&self) -> String {
        match self.user_id {
            Some(id) => format!("?user_id={id}&month={}", self.month),
            None => format!("?month={}", self.month),
        }
    }

    fn user_section(&self) -> leptos::View {
        let user_value = self.user_id.map(|id| id.to_string()).unwrap_or_default();
        let picker = view! {
            <form class="form inline" method="get" action="/attendance">
                <label>"Employee ID"<input type="number" name="user_id" value=user_value/></label>
                <label>"Month"<input type="month" name="month" value=self.month.clone()/></label>
                <button type="submit">"Show"</button>
            </form>
        };

        let Some(user_id) = self.user_id else {
            return view! {
                <div>{picker}<p>"Select an employee to see today's attendance."</p></div>
            }
            .into_view();
        };

        let state = match (self.today.checked_in, self.today.checked_out) {
            (false, _) => "Not checked in",
            (true, false) => "Checked in",
            (true, true) => "Checked out",
        };

        let action = if !self.today.checked_in {
            Some(
                Form::new(format!("/attendance/check-in{}", self.query()), "Check in")
                    .hidden("user_id", &user_id.to_string())
                    .text("note", "Note", "")
                    .render(),
            )
        } else if !self.today.checked_out {
            Some(
                Form::new(format!("/attendance/check-out{}", self.query()), "Check out")
                    .hidden("user_id", &user_id.to_string())
                    .textarea("report", "Daily report", "")
                    .render(),
            )
        } else {
            None
        };

        let s = &self.summary;
        let cards = stat_cards(vec![
            ("Today", state.to_string()),
            ("Present", s.present_days.to_string()),
            ("Absent", s.absent_days.to_string()),
            ("Late", s.late_days.to_string()),
            ("Leave", s.leave_days.to_string()),
            ("Hours", format!("{:.1}", s.total_hours)),
        ]);

        view! { <div>{picker}{cards}{action}</div> }.into_view()
    }
}

#[async_trait]
impl View for AttendanceView {
    fn title(&self) -> &'static str {
        "Attendance"
    }

    async fn mount(&mut self, api: &ApiClient) {
        let attendance = api.attendance();
        if let Some(user_id) = self.user_id {
            self.today = attendance.today(user_id).await.or_empty("get_today_attendance");
            self.summary = attendance
                .summary(user_id, &self.month)
                .await
                .or_empty("get_attendance_summary");
        }
        self.records = attendance.list(&self.filter).await.or_empty("get_attendance");
        self.scores = attendance
            .effort_scores(&self.month)
            .await
            .or_empty("get_effort_score");
    }

    async fn handle(
        &mut self,
        api: &ApiClient,
        action: &str,
        form: &FormData,
    ) -> Result<String, ActionError> {
        match action {
            "check-in" => {
                let request = CheckInRequest {
                    user_id: form.id("user_id")?,
                    latitude: form.opt_number("latitude")?,
                    longitude: form.opt_number("longitude")?,
                    note: form.opt_text("note"),
                };
                let record = api.attendance().check_in(&request).await?;
                Ok(format!(
                    "Checked in at {}",
                    or_dash(record.check_in.as_deref())
                ))
            }
            "check-out" => {
                let request = CheckOutRequest {
                    user_id: form.id("user_id")?,
                    latitude: form.opt_number("latitude")?,
                    longitude: form.opt_number("longitude")?,
                    report: form.opt_text("report"),
                };
                let record = api.attendance().check_out(&request).await?;
                Ok(format!(
                    "Checked out at {}",
                    or_dash(record.check_out.as_deref())
                ))
            }
            _ => Err(ActionError::unknown(action)),
        }
    }

    fn render(&self) -> leptos::View {
        let mut records = DataTable::new(&["Date", "Employee", "In", "Out", "Hours", "Status"])
            .empty_message("No attendance records");
        for r in &self.records {
            records.row(vec![
                r.date.clone().into_view(),
                r.user_name.clone().into_view(),
                or_dash(r.check_in.as_deref()).into_view(),
                or_dash(r.check_out.as_deref()).into_view(),
                r.working_hours
                    .map(|h| format!("{h:.1}"))
                    .unwrap_or_else(|| "-".to_string())
                    .into_view(),
                r.status.clone().into_view(),
            ]);
        }

        let mut scores = DataTable::new(&["Employee", "Score", "Visits", "Calls", "Meetings"])
            .empty_message("No effort scores for this month");
        for s in &self.scores {
            scores.row(vec![
                s.user_name.clone().into_view(),
                format!("{:.1}", s.score).into_view(),
                s.visits.into_view(),
                s.calls.into_view(),
                s.meetings.into_view(),
            ]);
        }

        view! {
            <div class="page">
                {self.user_section()}
                <section><h2>"Records"</h2>{records.render()}</section>
                <section><h2>"Effort scores"</h2>{scores.render()}</section>
            </div>
        }
        .into_view()
    }
}
