//! Given steps for task board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty task board")]
fn an_empty_task_board(world: &mut BoardWorld) {
    let _ = world;
}

#[given(r#"a board with an active task titled "{title}""#)]
fn a_board_with_an_active_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let created = world
        .collector
        .submit(&mut world.store, &title, "desc", "3")
        .wrap_err("seed task for scenario")?;
    world.last_submission = Some(Ok(created));
    Ok(())
}
