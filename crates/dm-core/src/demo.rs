//! Bundled demo scenarios.

use crate::error::ScenarioResult;
use crate::grid::Grid;
use crate::story::{Choice, Effect, StoryGraph, StoryNode};

const HOUSE_LAYOUT: &[&str] = &[
    "#######",
    "#@..!k#",
    "#.##..#",
    "#..b#.#",
    "#!#...#",
    "#f..!E#",
    "#######",
];

const HOUSE_ITEMS: &[(char, &str)] = &[('k', "key"), ('b', "book"), ('f', "flashlight")];

/// A 7x7 haunted house: find the key, reach the door.
pub fn haunted_house() -> ScenarioResult<Grid> {
    Grid::from_layout(HOUSE_LAYOUT, HOUSE_ITEMS)
}

/// A short narrative through a whispering manor.
///
/// Node 0 offers three choices; the second needs the `"key"` found in the study.
pub fn whispering_manor() -> ScenarioResult<StoryGraph> {
    let nodes = vec![
        StoryNode::new(
            0,
            "You wake on the cold floor of a manor foyer. Whispers drift up from the cellar stairs.",
        )
        .with_choice(Choice::new("Search the study", 1))
        .with_choice(Choice::new("Descend into the cellar", 4).with_requirement("key"))
        .with_choice(Choice::new("Open the front door", 2)),
        StoryNode::new(
            1,
            "Dust hangs over a desk buried in letters. Something glints beneath them.",
        )
        .with_choice(
            Choice::new("Take the glinting key", 3)
                .with_effect(Effect::new().with_item("key").with_sanity(-5)),
        )
        .with_choice(
            Choice::new("Read the letters", 5)
                .with_effect(Effect::new().with_item("letters").with_sanity(-20)),
        ),
        StoryNode::new(
            2,
            "The door swings open onto nothing at all. You step forward and keep falling.",
        )
        .dead_end(),
        StoryNode::new(
            3,
            "The key is colder than it should be. Behind you, the portrait's eyes have moved.",
        )
        .with_jump_scare()
        .with_choice(
            Choice::new("Run back to the foyer", 0).with_effect(Effect::new().with_sanity(-10)),
        ),
        StoryNode::new(
            4,
            "Candles gutter around a sealed well. The whispers are deafening down here.",
        )
        .with_choice(
            Choice::new("Climb down the well", 6)
                .with_effect(Effect::new().with_health(-30).with_sanity(-15)),
        )
        .with_choice(
            Choice::new("Drink from the well", 4).with_effect(Effect::new().with_health(-100)),
        ),
        StoryNode::new(
            5,
            "The letters describe a family that never left the house. Your hands will not stop shaking.",
        )
        .with_choice(Choice::new("Back to the foyer", 0))
        .with_choice(
            Choice::new("Burn the letters", 0).with_effect(Effect::new().with_health(-15)),
        ),
        StoryNode::new(
            6,
            "At the bottom of the well, daylight. A tunnel runs out beneath the manor walls. You are free.",
        )
        .win(),
    ];

    StoryGraph::new(0, nodes)
}
