//! When steps for task board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::when;
use taskboard::drag::CardDrag;

#[when(r#"the user submits title "{title}", description "{description}", and assignees "{assignees}""#)]
fn submit_task(world: &mut BoardWorld, title: String, description: String, assignees: String) {
    let result = world
        .collector
        .submit(&mut world.store, &title, &description, &assignees);
    world.last_submission = Some(result);
}

#[when(r#"the user drags the "{title}" card onto the "{list}" list"#)]
fn drag_card_onto_list(
    world: &mut BoardWorld,
    title: String,
    list: String,
) -> Result<(), eyre::Report> {
    let record = world.find_by_title(&title)?;
    let mut card = CardDrag::new(record.id());
    let payload = card.drag_start();

    // DropTarget is Copy; work on a local and write the state back so the
    // store can be borrowed mutably during the drop.
    let mut target = *world.list_mut(&list)?;
    if !target.drag_over(Some(payload.kind())) {
        return Err(eyre::eyre!("list refused the drag payload kind"));
    }
    let outcome = target.drop_payload(&mut world.store, Some(&payload));
    card.drag_end();
    *world.list_mut(&list)? = target;

    world.last_drop = Some(outcome);
    Ok(())
}
