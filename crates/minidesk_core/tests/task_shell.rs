use minidesk_core::{ShellError, TaskManager, TaskShell};
use std::io::Cursor;

fn shell(script: &str) -> TaskShell<Cursor<String>, Vec<u8>> {
    TaskShell::new(TaskManager::new(), Cursor::new(script.to_string()), Vec::new())
}

fn run_tasks(script: &str) -> (TaskManager, String) {
    let mut shell = shell(script);
    shell.run().expect("task shell should finish cleanly");
    let (manager, output) = shell.into_parts();
    (manager, String::from_utf8(output).expect("output should be UTF-8"))
}

#[test]
fn add_complete_and_view_flow() {
    let script = "1\nWrite report\nquarterly\n\
                  1\nCall bank\n\n\
                  2\n2\n\
                  5\n\
                  6\n\
                  7\n";
    let (manager, output) = run_tasks(script);

    assert_eq!(output.matches("Task added successfully!").count(), 2);
    assert!(output.contains("1. Write report"));
    assert!(output.contains("2. Call bank"));
    assert!(output.contains("Task marked as completed!"));
    assert!(output.contains("Completed tasks:\nTask: Call bank (Completed: true)"));
    assert!(output.contains("Pending tasks:\nTask: Write report (Completed: false)"));
    assert!(output.contains("Exiting the program. Goodbye!"));
    assert_eq!(manager.completed_tasks().len(), 1);
}

#[test]
fn remove_by_listing_number() {
    let (manager, output) = run_tasks("1\na\n\n1\nb\n\n3\n1\n4\n7\n");

    assert!(output.contains("Task removed successfully!"));
    assert!(output.contains("All tasks:\nTask: b (Completed: false)"));
    assert_eq!(manager.all_tasks().len(), 1);
}

#[test]
fn out_of_range_numbers_are_rejected() {
    let (manager, output) = run_tasks("1\na\n\n2\n0\n3\n5\n7\n");

    assert_eq!(output.matches("Invalid task number.").count(), 2);
    assert_eq!(manager.pending_tasks().len(), 1);
}

#[test]
fn empty_lists_report_nothing_to_do() {
    let (_, output) = run_tasks("2\n3\n4\n5\n6\n9\n7\n");

    assert!(output.contains("No pending tasks to mark as completed."));
    assert!(output.contains("No tasks to remove."));
    assert!(output.contains("No tasks found."));
    assert!(output.contains("No completed tasks found."));
    assert!(output.contains("No pending tasks found."));
    assert!(output.contains("Invalid choice. Please try again."));
}

#[test]
fn non_numeric_choice_stops_the_shell() {
    let mut shell = shell("1\nkeep me\n\nmenu\n");
    let err = shell.run().unwrap_err();

    assert!(matches!(err, ShellError::InvalidNumber(ref value) if value == "menu"));
    assert_eq!(shell.manager().all_tasks().len(), 1);
}

#[test]
fn end_of_input_exits_cleanly() {
    let (manager, output) = run_tasks("1\nonly\nlast\n");
    assert_eq!(manager.all_tasks().len(), 1);
    assert!(!output.contains("Goodbye"));
}
