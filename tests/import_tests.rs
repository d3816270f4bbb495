use rtimegrid::core::GridViews;
use rtimegrid::core::import::{
    DEFAULT_TYPE_OF_WORK, entries_for_selections, is_import_metadata_ready,
    selected_type_of_work_key,
};
use rtimegrid::models::{ImportInfo, SelectionStatus, TypeOfWork};
use rtimegrid::reactive::Readable;

mod common;
use common::{d, entry, june_state, selection};

fn catalog() -> Vec<TypeOfWork> {
    vec![
        TypeOfWork::new("PROG", "Programming"),
        TypeOfWork::new("MEET", "Meetings"),
    ]
}

#[test]
fn work_from_home_needs_a_start_date() {
    let mut info = ImportInfo {
        is_work_from_home: Some(true),
        selected_type_of_work_index: Some(0),
        work_from_home_start: None,
    };
    assert!(!is_import_metadata_ready(&info));

    info.work_from_home_start = Some(d(2025, 6, 1));
    assert!(is_import_metadata_ready(&info));
}

#[test]
fn office_import_only_needs_both_choices() {
    let info = ImportInfo {
        is_work_from_home: Some(false),
        selected_type_of_work_index: Some(1),
        work_from_home_start: None,
    };
    assert!(is_import_metadata_ready(&info));

    assert!(!is_import_metadata_ready(&ImportInfo::default()));
    assert!(!is_import_metadata_ready(&ImportInfo {
        is_work_from_home: Some(false),
        ..ImportInfo::default()
    }));
    assert!(!is_import_metadata_ready(&ImportInfo {
        selected_type_of_work_index: Some(0),
        work_from_home_start: Some(d(2025, 6, 1)),
        ..ImportInfo::default()
    }));
}

#[test]
fn type_of_work_falls_back_to_default() {
    let with_index = |index| ImportInfo {
        selected_type_of_work_index: index,
        ..ImportInfo::default()
    };

    assert_eq!(selected_type_of_work_key(&with_index(Some(1)), &catalog()), "MEET");
    assert_eq!(selected_type_of_work_key(&with_index(Some(5)), &catalog()), DEFAULT_TYPE_OF_WORK);
    assert_eq!(selected_type_of_work_key(&with_index(Some(2)), &catalog()), DEFAULT_TYPE_OF_WORK);
    assert_eq!(selected_type_of_work_key(&with_index(None), &catalog()), DEFAULT_TYPE_OF_WORK);
    assert_eq!(selected_type_of_work_key(&with_index(Some(0)), &[]), DEFAULT_TYPE_OF_WORK);

    let keyless = vec![TypeOfWork::default()];
    assert_eq!(selected_type_of_work_key(&with_index(Some(0)), &keyless), DEFAULT_TYPE_OF_WORK);
}

#[test]
fn joins_selections_to_entries_by_cell() {
    let day = d(2025, 6, 2);
    let entries = vec![
        entry(101, day, 3.0, false),
        entry(102, day, 5.0, false),
        entry(101, day, 1.0, true),
        entry(101, d(2025, 6, 3), 8.0, false),
    ];
    let picked = vec![selection(101, day, SelectionStatus::Imported)];

    let joined = entries_for_selections(&entries, &picked);
    let hours: Vec<f64> = joined.iter().map(|e| e.hours).collect();
    assert_eq!(hours, vec![3.0, 1.0]);
}

#[test]
fn import_views_follow_selections_and_entries() {
    let state = june_state();
    let views = GridViews::new(&state);
    let day = d(2025, 6, 2);

    state.log_entries.set(vec![
        entry(101, day, 8.0, false),
        entry(102, day, 2.0, false),
        entry(103, day, 1.0, false),
    ]);
    state.selections.set(vec![
        selection(101, day, SelectionStatus::Imported),
        selection(102, day, SelectionStatus::Updated),
        selection(103, day, SelectionStatus::Selected),
    ]);

    let imported: Vec<i64> = views.imported_entries.get().iter().map(|e| e.task_id).collect();
    assert_eq!(imported, vec![101]);
    let affected: Vec<i64> = views
        .affected_entries_during_import
        .get()
        .iter()
        .map(|e| e.task_id)
        .collect();
    assert_eq!(affected, vec![101, 102]);

    assert!(!views.is_import_metadata_ready.get());
    assert_eq!(views.selected_type_of_work_key.get(), DEFAULT_TYPE_OF_WORK);

    state.types_of_work.set(catalog());
    state.import_info.set(ImportInfo {
        is_work_from_home: Some(false),
        selected_type_of_work_index: Some(1),
        work_from_home_start: None,
    });
    assert!(views.is_import_metadata_ready.get());
    assert_eq!(views.selected_type_of_work_key.get(), "MEET");
}
