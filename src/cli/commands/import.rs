use crate::cli::commands::open_session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::LogEntry;
use crate::reactive::Readable;
use crate::ui::messages;
use crate::utils::formatting::yes_no;
use crate::utils::hours2readable;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = open_session(cli, cfg, None)?;
    let views = &session.views;

    messages::header("Import");
    println!("Metadata ready:     {}", yes_no(views.is_import_metadata_ready.get()));
    println!("Type of work:       {}", views.selected_type_of_work_key.get());
    println!("Has imported data:  {}", yes_no(views.has_imported_data.get()));

    print_entries("Imported entries", &views.imported_entries.get());
    print_entries("Affected entries", &views.affected_entries_during_import.get());

    if !views.is_import_metadata_ready.get() {
        messages::warning("Choose the work place and type of work before importing.");
    }
    Ok(())
}

fn print_entries(title: &str, entries: &[LogEntry]) {
    println!("{title}: {}", entries.len());
    for e in entries {
        println!(
            "- {} | task {} | {} | {}",
            e.date,
            e.task_id,
            hours2readable(e.hours, false),
            if e.is_work_from_home { "home" } else { "office" }
        );
    }
}
