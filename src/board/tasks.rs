//! The fixed task pool and the board shuffle

use rand::Rng;

use crate::consts::{BOARD_CELLS, FREE_INDEX, FREE_TASK};

/// Default board layout, row-major, free space in the centre
pub const DEFAULT_TASKS: [&str; BOARD_CELLS] = [
    "On TBR over 5 years",
    "Set in a country you've never visited",
    "You would normally judge",
    "Your boyfriend picks for you",
    "Published this year",
    "A trilogy/series",
    "5 books on your physical TBR",
    "With a title longer than 7 words",
    "The first book you touch on a shelf (TBR)",
    "People lie about reading",
    "A whole audiobook while knitting",
    "That was published the year you were born",
    FREE_TASK,
    "Non-fiction",
    "Poetry collection",
    "Sci-fi or dystopian",
    "With red cover",
    "Unread book",
    "You can't pronounce the author's name",
    "You can finish in a day",
    "Large one (over 700p)",
    "Because the cover is ridiculous",
    "Classic novel",
    "With a number in the title",
    "You saw on Instagram",
];

/// Default board as owned strings
pub fn default_tasks() -> [String; BOARD_CELLS] {
    let mut tasks = std::array::from_fn(|i| DEFAULT_TASKS[i].to_string());
    tasks[FREE_INDEX] = FREE_TASK.to_string();
    tasks
}

/// Shuffle the 24 playable tasks and put the free space back in the centre.
///
/// Fisher-Yates from the last index down to 1, swapping each slot with a
/// uniformly chosen index at or before it.
pub fn shuffle_pool<R: Rng + ?Sized>(rng: &mut R) -> [String; BOARD_CELLS] {
    let mut pool: Vec<&str> = DEFAULT_TASKS
        .iter()
        .copied()
        .filter(|t| *t != FREE_TASK)
        .collect();

    for i in (1..pool.len()).rev() {
        let j = rng.random_range(0..=i);
        pool.swap(i, j);
    }

    pool.insert(FREE_INDEX, FREE_TASK);
    std::array::from_fn(|i| pool[i].to_string())
}
