//! Code snippet pools, tiered by level
//!
//! Each tier pairs every correct snippet with a near-miss bug at the same
//! index, so `CORRECT[i]` and `BUGGY[i]` always differ by a single slip.

use rand::Rng;
use rand::seq::IndexedRandom;

/// A difficulty tier of snippets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetTier {
    /// Levels 1-2: plain statements and calls
    Basic,
    /// Levels 3-4: control flow, classes, context managers
    Intermediate,
    /// Level 5+: comprehensions, lambdas, async, generators
    Advanced,
}

impl SnippetTier {
    pub fn for_level(level: u32) -> Self {
        match level {
            0..=2 => SnippetTier::Basic,
            3..=4 => SnippetTier::Intermediate,
            _ => SnippetTier::Advanced,
        }
    }

    /// The paired (correct, buggy) pools for this tier
    pub fn pools(self) -> (&'static [&'static str; 5], &'static [&'static str; 5]) {
        match self {
            SnippetTier::Basic => (&BASIC_CORRECT, &BASIC_BUGGY),
            SnippetTier::Intermediate => (&INTERMEDIATE_CORRECT, &INTERMEDIATE_BUGGY),
            SnippetTier::Advanced => (&ADVANCED_CORRECT, &ADVANCED_BUGGY),
        }
    }
}

const BASIC_CORRECT: [&str; 5] = [
    "print('Hello')",
    "x = 5 + 3",
    "def func():",
    "for i in range(10):",
    "if x > 0:",
];
const BASIC_BUGGY: [&str; 5] = [
    "pront('Hello')",
    "x = 5 + ",
    "def func()",
    "for i in rage(10):",
    "if x > 0",
];

const INTERMEDIATE_CORRECT: [&str; 5] = [
    "while True: break",
    "try: except ValueError:",
    "class MyClass(object):",
    "with open('file.txt') as f:",
    "import random",
];
const INTERMEDIATE_BUGGY: [&str; 5] = [
    "while True, break",
    "try: except ValueError",
    "class MyClass(object)",
    "with open('file.txt') as f",
    "import randum",
];

const ADVANCED_CORRECT: [&str; 5] = [
    "lambda x: x * 2",
    "[x for x in range(10)]",
    "async def func(): await x",
    "assert condition, 'message'",
    "yield from generator()",
];
const ADVANCED_BUGGY: [&str; 5] = [
    "lambda x: x *",
    "[x for x in range 10]",
    "async def func(): wait x",
    "assert condition 'message'",
    "yield form generator()",
];

/// Pick a snippet uniformly from the pool matching `level` and `correct`
pub fn pick<R: Rng + ?Sized>(rng: &mut R, level: u32, correct: bool) -> &'static str {
    let (good, bad) = SnippetTier::for_level(level).pools();
    let pool = if correct { good } else { bad };
    // Pools are non-empty constants
    pool.choose(rng).copied().unwrap_or(pool[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(SnippetTier::for_level(1), SnippetTier::Basic);
        assert_eq!(SnippetTier::for_level(2), SnippetTier::Basic);
        assert_eq!(SnippetTier::for_level(3), SnippetTier::Intermediate);
        assert_eq!(SnippetTier::for_level(4), SnippetTier::Intermediate);
        assert_eq!(SnippetTier::for_level(5), SnippetTier::Advanced);
        assert_eq!(SnippetTier::for_level(42), SnippetTier::Advanced);
    }

    #[test]
    fn test_pools_are_paired_near_misses() {
        for tier in [
            SnippetTier::Basic,
            SnippetTier::Intermediate,
            SnippetTier::Advanced,
        ] {
            let (good, bad) = tier.pools();
            for (g, b) in good.iter().zip(bad.iter()) {
                assert_ne!(g, b);
                // A near miss shares most of its characters with the correct one
                let shared = g.chars().zip(b.chars()).take_while(|(x, y)| x == y).count();
                assert!(shared >= 2, "{g:?} vs {b:?} should share a prefix");
            }
        }
    }

    #[test]
    fn test_pick_matches_correctness() {
        let mut rng = Pcg32::seed_from_u64(7);
        for level in 1..8 {
            let (good, bad) = SnippetTier::for_level(level).pools();
            for _ in 0..20 {
                assert!(good.contains(&pick(&mut rng, level, true)));
                assert!(bad.contains(&pick(&mut rng, level, false)));
            }
        }
    }
}
