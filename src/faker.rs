//! Seedable synthetic-data provider.
//!
//! Produces company names, domains, person names and email addresses from
//! small built-in word lists. Two `Faker`s built from the same seed yield the
//! same sequence of values.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Adrian", "Alice", "Amara", "Andre", "Beatrice", "Bruno", "Camila", "Carlos",
    "Chloe", "Daniel", "Delia", "Elena", "Emmett", "Fatima", "Felix", "Gabriel", "Grace",
    "Hannah", "Hugo", "Ines", "Isaac", "Jasmine", "Jonas", "Kai", "Keira", "Leon", "Lucia",
    "Malik", "Maya", "Nadia", "Noah", "Olivia", "Oscar", "Priya", "Quentin", "Rosa", "Samuel",
    "Sofia", "Theo", "Uma", "Victor", "Wendy", "Xavier", "Yara", "Zane",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Alvarez", "Bauer", "Bergstrom", "Carter", "Chen", "Dawson", "Dietrich", "Ellis",
    "Ferreira", "Fischer", "Gibson", "Gutierrez", "Hansen", "Hayes", "Ibrahim", "Jensen",
    "Kowalski", "Kuhn", "Larsen", "Lindgren", "Marsh", "Moreno", "Nakamura", "Nolan", "O'Keefe",
    "Okafor", "Parker", "Quigley", "Ramirez", "Reilly", "Schmidt", "Sato", "Thompson", "Turner",
    "Underwood", "Vasquez", "Walsh", "Weber", "Young", "Zimmerman",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons"];

const DOMAIN_ADJECTIVES: &[&str] = &[
    "agile", "bright", "clever", "bold", "crisp", "eager", "fresh", "golden", "grand", "happy",
    "lucky", "nimble", "quiet", "rapid", "silver", "smart", "solid", "swift", "vivid", "wise",
];

const DOMAIN_NOUNS: &[&str] = &[
    "anchor", "beacon", "bridge", "canyon", "cloud", "field", "forge", "harbor", "horizon",
    "market", "meadow", "orbit", "pillar", "river", "signal", "summit", "thread", "tower",
    "valley", "works",
];

const TLDS: &[&str] = &["com", "net", "org", "io", "biz", "info"];

const FREE_EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com"];

/// Random-value source used by the generator.
pub struct Faker {
    seed: u64,
    rng: StdRng,
}

impl Faker {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a fresh seed so an unseeded run can still be replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn first_name(&mut self) -> String {
        self.word(FIRST_NAMES).to_string()
    }

    pub fn last_name(&mut self) -> String {
        self.word(LAST_NAMES).to_string()
    }

    /// Company name such as "Hansen LLC", "Chen - Parker" or "Walsh, Sato and Nolan".
    pub fn company_name(&mut self) -> String {
        match self.rng.gen_range(0..3) {
            0 => format!("{} {}", self.word(LAST_NAMES), self.word(COMPANY_SUFFIXES)),
            1 => format!("{} - {}", self.word(LAST_NAMES), self.word(LAST_NAMES)),
            _ => format!(
                "{}, {} and {}",
                self.word(LAST_NAMES),
                self.word(LAST_NAMES),
                self.word(LAST_NAMES)
            ),
        }
    }

    /// Domain such as "swift-harbor.io".
    pub fn domain_name(&mut self) -> String {
        format!(
            "{}-{}.{}",
            self.word(DOMAIN_ADJECTIVES),
            self.word(DOMAIN_NOUNS),
            self.word(TLDS)
        )
    }

    /// Email address derived from a person's names.
    pub fn email(&mut self, first_name: &str, last_name: &str) -> String {
        let first = sanitize(first_name);
        let last = sanitize(last_name);
        let local = match self.rng.gen_range(0..3) {
            0 => format!("{}.{}", first, last),
            1 => format!("{}_{}", first, last),
            _ => format!("{}{}", first, self.rng.gen_range(1..100)),
        };
        format!("{}@{}", local, self.word(FREE_EMAIL_DOMAINS))
    }

    /// `true` with the given probability (clamped to [0, 1]).
    pub fn boolean(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Uniformly pick one element, `None` when the slice is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Pick between `min` and `max` distinct elements without replacement.
    ///
    /// The count is capped at `items.len()`.
    pub fn sample<'a, T>(&mut self, items: &'a [T], min: usize, max: usize) -> Vec<&'a T> {
        let max = max.min(items.len());
        let min = min.min(max);
        let amount = self.rng.gen_range(min..=max);
        items.choose_multiple(&mut self.rng, amount).collect()
    }

    fn word(&mut self, list: &[&'static str]) -> &'static str {
        list.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

fn sanitize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}
