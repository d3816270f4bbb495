use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::cli::commands::{Session, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::reactive::Readable;
use crate::ui::messages;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::utils::{describe_work_place, hours2readable};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Days { month, weekend } = &cli.command {
        let session = open_session(cli, cfg, month.as_deref())?;
        if *weekend {
            session.state.display_weekend.set(true);
        }

        let views = &session.views;
        messages::header(format!(
            "Days of {}",
            date::month_label(views.displayed_date_range.get().start_date)
        ));
        if views.is_grid_read_only.get() {
            messages::info("Past month: the grid is read-only.");
        }

        let mut table = Table::new(vec![
            Column::left("Date", 10),
            Column::left("Day", 3),
            Column::right("Hours", 7),
            Column::left("Place", 6),
            Column::left("Flags", 0),
        ]);

        for day in views.days_range.get() {
            let total = views.total_hours_for_day(day).get();
            let place = if total > 0.0 {
                describe_work_place(views.is_work_from_home(day).get())
            } else {
                "-"
            };

            table.add_row(vec![
                day.format("%Y-%m-%d").to_string(),
                day.format("%a").to_string(),
                hours2readable(total, false),
                place.to_string(),
                day_flags(&session, day).join(" "),
            ]);
        }

        print!("{}", table.render());
        println!(
            "Total: {} / {}",
            hours2readable(views.total_for_month.get(), false),
            hours2readable(views.total_for_month_needed.get(), false)
        );
    }
    Ok(())
}

/// `invalid:<task>`, `saving:<task>`, `<status>:<task>` for every touched cell of the day.
fn day_flags(session: &Session, day: NaiveDate) -> Vec<String> {
    let views = &session.views;

    let mut tasks: BTreeSet<i64> = session
        .state
        .log_entries
        .with(|entries| entries.iter().filter(|e| e.is_on(day)).map(|e| e.task_id).collect());
    session.state.selections.with(|selections| {
        tasks.extend(selections.iter().filter(|s| s.day == day).map(|s| s.task_id))
    });
    session.state.loading.with(|loading| {
        tasks.extend(loading.iter().filter(|l| l.day == day).map(|l| l.task_id))
    });

    let mut flags = Vec::new();
    for task in tasks {
        if views.is_log_invalid(task, day).get() {
            flags.push(format!("invalid:{task}"));
        }
        if views.is_log_loading(task, day).get() {
            flags.push(format!("saving:{task}"));
        }
        if views.is_log_selected(task, day).get() {
            flags.push(format!("selected:{task}"));
        }
        if views.is_log_imported(task, day).get() {
            flags.push(format!("imported:{task}"));
        }
        if views.is_log_updated(task, day).get() {
            flags.push(format!("updated:{task}"));
        }
    }
    flags
}
