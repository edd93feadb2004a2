//! Release naming

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

const ADJECTIVES: &[&str] = &[
    "aged", "ancient", "autumn", "billowing", "bitter", "black", "blue", "bold", "broad",
    "broken", "calm", "cold", "cool", "crimson", "curly", "damp", "dark", "dawn", "delicate",
    "divine", "dry", "empty", "falling", "fancy", "flat", "floral", "fragrant", "frosty",
    "gentle", "green", "hidden", "holy", "icy", "jolly", "late", "lingering", "little",
    "lively", "long", "lucky", "misty", "morning", "muddy", "mute", "nameless", "noisy", "odd",
    "old", "orange", "patient", "plain", "polished", "proud", "purple", "quiet", "rapid",
    "raspy", "red", "restless", "rough", "round", "royal", "shiny", "shrill", "shy", "silent",
    "small", "snowy", "soft", "solitary", "sparkling", "spring", "square", "steep", "still",
    "summer", "super", "sweet", "throbbing", "tight", "tiny", "twilight", "wandering", "weathered",
    "white", "wild", "winter", "wispy", "withered", "yellow", "young",
];

const NOUNS: &[&str] = &[
    "art", "band", "bar", "base", "bird", "block", "boat", "bonus", "bread", "breeze", "brook",
    "bush", "butterfly", "cake", "cell", "cherry", "cloud", "credit", "darkness", "dawn", "dew",
    "disk", "dream", "dust", "feather", "field", "fire", "firefly", "flower", "fog", "forest",
    "frog", "frost", "glade", "glitter", "grass", "hall", "hat", "haze", "heart", "hill", "king",
    "lab", "lake", "leaf", "limit", "math", "meadow", "mode", "moon", "morning", "mountain",
    "mouse", "mud", "night", "paper", "pine", "poetry", "pond", "queen", "rain", "recipe",
    "resonance", "rice", "river", "salad", "scene", "sea", "shadow", "shape", "silence", "sky",
    "smoke", "snow", "snowflake", "sound", "star", "sun", "sunset", "surf", "term", "thunder",
    "tooth", "tree", "truth", "union", "unit", "violet", "voice", "water", "waterfall", "wave",
    "wildflower", "wind", "wood",
];

/// Produces display labels for release runs
#[derive(Debug, Clone)]
pub struct ReleaseNamer {
    token_length: usize,
}

impl ReleaseNamer {
    /// Create a namer appending a four-digit token
    pub fn new() -> Self {
        Self { token_length: 4 }
    }

    /// Set the number of digits in the trailing token (0 disables it)
    pub fn with_token_length(mut self, token_length: usize) -> Self {
        self.token_length = token_length;
        self
    }

    /// Return the override when it is non-empty, otherwise a generated name
    pub fn name<R: Rng + ?Sized>(&self, override_value: Option<&str>, rng: &mut R) -> String {
        match override_value.filter(|v| !v.is_empty()) {
            Some(value) => value.to_string(),
            None => self.generate(rng),
        }
    }

    /// Generate an adjective-noun-token name such as `silent-meadow-4821`
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("quiet");
        let noun = NOUNS.choose(rng).copied().unwrap_or("release");

        let mut name = format!("{}-{}", adjective, noun);
        if self.token_length > 0 {
            let token: String = (0..self.token_length)
                .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
                .collect();
            name.push('-');
            name.push_str(&token);
        }

        debug!(name = %name, "generated release name");
        name
    }
}

impl Default for ReleaseNamer {
    fn default() -> Self {
        Self::new()
    }
}

/// Name a release using the thread-local random generator
pub fn name_release(override_value: Option<&str>) -> String {
    ReleaseNamer::new().name(override_value, &mut rand::thread_rng())
}
