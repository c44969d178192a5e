//! Then steps for task board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;
use taskboard::board::domain::TaskStatus;
use taskboard::drag::DropOutcome;

#[then("the board holds {count:usize} tasks")]
fn board_holds_count(world: &mut BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.store.len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}

#[then(r#"the task "{title}" is in the "{list}" list"#)]
fn task_is_in_list(world: &mut BoardWorld, title: String, list: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(list.as_str())
        .map_err(|err| eyre::eyre!("unknown list in scenario: {err}"))?;
    let record = world.find_by_title(&title)?;
    if record.status() != expected {
        return Err(eyre::eyre!(
            "expected '{title}' in the {expected} list, found it in the {} list",
            record.status()
        ));
    }
    Ok(())
}

#[then("subscribers were notified {count:usize} times")]
fn subscribers_notified_count(world: &mut BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.notifications.borrow().len();
    if actual != count {
        return Err(eyre::eyre!(
            "expected {count} notifications, observed {actual}"
        ));
    }
    Ok(())
}

#[then("the submission is rejected")]
fn submission_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_submission {
        Some(Err(_)) => Ok(()),
        Some(Ok(record)) => Err(eyre::eyre!(
            "expected a validation failure, but '{}' was created",
            record.title()
        )),
        None => Err(eyre::eyre!("no submission attempted in scenario")),
    }
}

#[then("the drop changes nothing")]
fn drop_changed_nothing(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_drop {
        Some(DropOutcome::NoChange) => Ok(()),
        Some(other) => Err(eyre::eyre!("expected a no-op drop, got {other:?}")),
        None => Err(eyre::eyre!("no drop attempted in scenario")),
    }
}
