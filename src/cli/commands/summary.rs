use std::collections::BTreeSet;

use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::reactive::Readable;
use crate::ui::messages;
use crate::utils::colors::{colorize, color_for_balance};
use crate::utils::date;
use crate::utils::formatting::yes_no;
use crate::utils::hours2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month } = &cli.command {
        let session = open_session(cli, cfg, month.as_deref())?;
        let views = &session.views;
        let summary = views.month_summary.get();

        messages::header(format!("Summary of {}", date::month_label(summary.month)));
        println!("Logged:    {}", hours2readable(summary.total_hours, false));
        println!("Required:  {}", hours2readable(summary.required_hours, false));
        println!(
            "Balance:   {}",
            colorize(
                &hours2readable(summary.balance, true),
                color_for_balance(summary.balance)
            )
        );
        println!("Read-only: {}", yes_no(summary.read_only));

        let tasks: BTreeSet<i64> = session
            .state
            .log_entries
            .with(|entries| entries.iter().map(|e| e.task_id).collect());
        if tasks.is_empty() {
            messages::info("No hours logged for this month.");
            return Ok(());
        }

        println!();
        let mut table = Table::new(vec![
            Column::right("Task", 8),
            Column::right("Hours", 8),
            Column::left("Favorite", 0),
        ]);
        for task in tasks {
            let favorite = views.is_task_favorite(task).get();
            table.add_row(vec![
                task.to_string(),
                hours2readable(views.total_hours_for_task(task).get(), false),
                if favorite { "*".to_string() } else { String::new() },
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
