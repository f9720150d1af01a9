mod common;

use anyhow::Result;
use common::{sample_store, Answer, ScriptedPrompt};
use outlay::cli::{Action, Session};
use outlay::storage::ExpenseStore;

fn index_of(action: Action) -> usize {
    Action::ALL.iter().position(|a| *a == action).unwrap()
}

fn run_script(store: ExpenseStore, answers: Vec<Answer>) -> Result<(Session, String)> {
    let mut session = Session::new(store, "$");
    let mut prompt = ScriptedPrompt::new(answers);
    let mut out = Vec::new();

    session.run(&mut prompt, &mut out)?;
    assert_eq!(prompt.remaining(), 0, "script not fully consumed");

    Ok((session, String::from_utf8(out)?))
}

#[test]
fn test_exit_immediately() -> Result<()> {
    let (session, out) = run_script(
        ExpenseStore::new(),
        vec![Answer::Pick(index_of(Action::Exit))],
    )?;

    assert!(session.store().is_empty());
    assert_eq!(out, "Exiting...\n");
    Ok(())
}

#[test]
fn test_add_then_view() -> Result<()> {
    let (session, out) = run_script(
        ExpenseStore::new(),
        vec![
            Answer::Pick(index_of(Action::AddExpense)),
            Answer::Text(" 2023-10-01 "),
            Answer::Text("12.5"),
            Answer::Text("food"),
            Answer::Text("Lunch"),
            Answer::Pick(index_of(Action::ViewAll)),
            Answer::Pick(index_of(Action::Exit)),
        ],
    )?;

    assert_eq!(session.store().len(), 1);
    assert!(out.contains("Added: Lunch ($12.50)"));
    assert!(out.contains("2023-10-01   | Food            | $12.50     | Lunch"));
    Ok(())
}

#[test]
fn test_rejected_add_keeps_the_loop_running() -> Result<()> {
    let (session, out) = run_script(
        ExpenseStore::new(),
        vec![
            Answer::Pick(index_of(Action::AddExpense)),
            Answer::Text("2023-13-01"),
            Answer::Text("10"),
            Answer::Text("Food"),
            Answer::Text("x"),
            Answer::Pick(index_of(Action::AddExpense)),
            Answer::Text("2023-10-01"),
            Answer::Text("abc"),
            Answer::Text("Food"),
            Answer::Text("x"),
            Answer::Pick(index_of(Action::Exit)),
        ],
    )?;

    assert!(session.store().is_empty());
    assert!(out.contains("Invalid date '2023-13-01'"));
    assert!(out.contains("Invalid amount 'abc'"));
    Ok(())
}

#[test]
fn test_filters_and_search() -> Result<()> {
    let (_, out) = run_script(
        sample_store()?,
        vec![
            Answer::Pick(index_of(Action::FilterCategory)),
            Answer::Text("FOOD"),
            Answer::Pick(index_of(Action::FilterDateRange)),
            Answer::Text("2023-10-03"),
            Answer::Text("2023-10-31"),
            Answer::Pick(index_of(Action::SearchDescription)),
            Answer::Text("gas"),
            Answer::Pick(index_of(Action::Exit)),
        ],
    )?;

    assert!(out.contains("Known categories: Food, Transport, Shopping"));
    assert!(out.contains("--- Category: FOOD ---"));
    assert!(out.contains("--- From 2023-10-03 to 2023-10-31 ---"));
    assert!(out.contains("--- Search: gas ---"));
    assert!(out.contains("| New shoes"));
    assert!(out.contains("| Gasoline"));
    Ok(())
}

#[test]
fn test_bad_range_bound_is_reported() -> Result<()> {
    let (_, out) = run_script(
        sample_store()?,
        vec![
            Answer::Pick(index_of(Action::FilterDateRange)),
            Answer::Text("2023-10-01"),
            Answer::Text("someday"),
            Answer::Pick(index_of(Action::Exit)),
        ],
    )?;

    assert!(out.contains("Invalid date 'someday'"));
    assert!(!out.contains("--- From"));
    Ok(())
}

#[test]
fn test_summary() -> Result<()> {
    let (_, out) = run_script(
        sample_store()?,
        vec![
            Answer::Pick(index_of(Action::Summary)),
            Answer::Pick(index_of(Action::Exit)),
        ],
    )?;

    assert!(out.contains("Total Expenses: $232.50"));
    assert!(out.contains(" - Food: $37.50"));
    assert!(out.contains(" - Shopping: $150.00"));
    assert!(out.contains(" - Transport: $45.00"));
    Ok(())
}

#[test]
fn test_export_summary_to_screen() -> Result<()> {
    let (_, out) = run_script(
        sample_store()?,
        vec![
            Answer::Pick(index_of(Action::Export)),
            Answer::Pick(1),
            Answer::Pick(0),
            Answer::Pick(index_of(Action::Exit)),
        ],
    )?;

    assert!(out.starts_with(
        "category,total\nFood,37.50\nShopping,150.00\nTransport,45.00\nTOTAL,232.50\n"
    ));
    Ok(())
}

#[test]
fn test_script_failure_is_propagated() {
    let mut session = Session::new(ExpenseStore::new(), "$");
    let mut prompt = ScriptedPrompt::new(vec![Answer::Pick(index_of(Action::ViewAll))]);
    let mut out = Vec::new();

    let result = session.run(&mut prompt, &mut out);

    assert!(result.is_err());
    assert!(String::from_utf8(out).unwrap().contains("No expenses found."));
}
