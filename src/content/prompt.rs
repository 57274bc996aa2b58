//! Daily unload prompts.

use rand::Rng;

pub const DAILY_PROMPTS: [&str; 7] = [
    "What's weighing on your soul today?",
    "If you could tell the world one thing without judgment, what would it be?",
    "What emotion are you tired of carrying?",
    "What small moment brought you peace today?",
    "What do you wish someone would ask you?",
    "What truth have you been avoiding?",
    "What would you tell your younger self right now?",
];

/// Return a prompt index different from `current`.
///
pub fn next_prompt<R: Rng + ?Sized>(rng: &mut R, current: usize) -> usize {
    let offset = rng.gen_range(1..DAILY_PROMPTS.len());
    (current + offset) % DAILY_PROMPTS.len()
}
