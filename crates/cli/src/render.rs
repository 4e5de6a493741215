//! Plain-text rendering of a [`DashboardView`] for the terminal.

use std::fmt::Write;

use donezo_core::format::{format_currency, format_thousands};
use donezo_core::navigation::Route;
use donezo_core::view::DashboardView;
use donezo_core::weekly::WeeklyChart;

/// Width of a full (100%) bar in characters.
const BAR_WIDTH: usize = 30;

pub fn render(route: Route, view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", route.title());

    match route {
        Route::Dashboard => {
            overview(&mut out, view);
            weekly(&mut out, &view.weekly);
            let _ = writeln!(out, "\nProject progress: {}%", view.progress.percent);
            projects(&mut out, view);
            team(&mut out, view);
        }
        Route::Analytics => {
            let _ = writeln!(out, "Total views:  {}", format_thousands(view.totals.views));
            let _ = writeln!(out, "Total clicks: {}", format_thousands(view.totals.clicks));
            let _ = writeln!(out, "CTR:          {}%", view.totals.ctr);
            weekly(&mut out, &view.weekly);
        }
        Route::Tasks => projects(&mut out, view),
        Route::Team => team(&mut out, view),
        Route::Calendar | Route::Login => {}
    }

    out
}

fn overview(out: &mut String, view: &DashboardView) {
    let o = &view.overview;
    let _ = writeln!(out, "Total users:  {}", format_thousands(o.total_users));
    let _ = writeln!(out, "Active users: {}", format_thousands(o.active_users));
    let _ = writeln!(out, "Revenue:      {}", format_currency(o.revenue));
    let _ = writeln!(out, "Growth:       {}%", o.growth);
}

fn weekly(out: &mut String, chart: &WeeklyChart) {
    let _ = writeln!(
        out,
        "\nWeekly views · {} total",
        format_thousands(chart.total_views)
    );
    for slot in &chart.slots {
        let len = usize::from(slot.percent) * BAR_WIDTH / 100;
        let (fill, note) = if slot.has_data {
            ("#", format!("{} views", format_thousands(slot.views)))
        } else {
            (".", "No data".to_string())
        };
        let peak = if slot.is_peak { " (peak)" } else { "" };
        let _ = writeln!(
            out,
            "{} {:<width$} {note}{peak}",
            slot.label,
            fill.repeat(len),
            width = BAR_WIDTH
        );
    }
}

fn projects(out: &mut String, view: &DashboardView) {
    let _ = writeln!(out, "\nProjects");
    if view.projects.is_empty() {
        let _ = writeln!(out, "  No projects match your search.");
    }
    for row in &view.projects {
        let _ = writeln!(out, "  [{}] {}", row.status, row.title);
        let _ = writeln!(out, "      {}", row.meta);
        let _ = writeln!(out, "      Due date: {}", row.due);
    }
}

fn team(out: &mut String, view: &DashboardView) {
    let _ = writeln!(out, "\nTeam collaboration");
    if view.team.is_empty() {
        let _ = writeln!(out, "  No users match your search.");
    }
    for member in &view.team {
        let _ = writeln!(
            out,
            "  ({}) {} - {} [{}]",
            member.initials, member.name, member.role, member.chip
        );
    }
}
