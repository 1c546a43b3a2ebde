//! Human-readable filler text for generated entities.

use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Alice", "Amelia", "Anders", "Astrid", "Beatrice", "Bjorn", "Carla", "Cedric",
    "Clara", "Dagny", "Daniel", "Edith", "Elias", "Emil", "Erik", "Eva", "Felix", "Freja",
    "Grace", "Gustav", "Hanna", "Hugo", "Ines", "Ingrid", "Isak", "Johan", "Julia", "Karin",
    "Klara", "Leo", "Linnea", "Lukas", "Maja", "Margaret", "Matilda", "Nils", "Nora", "Olof",
    "Oscar", "Petra", "Rosa", "Rune", "Saga", "Sigrid", "Sofia", "Theo", "Tove", "Vera",
    "Viktor", "Wilma",
];

const ADJECTIVES: &[&str] = &[
    "agile", "ancient", "bold", "brave", "bright", "calm", "clever", "cosmic", "crisp", "curious",
    "dapper", "eager", "electric", "elegant", "fancy", "fearless", "fluffy", "frozen", "gentle",
    "gigantic", "golden", "happy", "hidden", "humble", "icy", "jolly", "keen", "lively", "lucky",
    "mellow", "misty", "nimble", "noble", "quiet", "rapid", "restless", "rustic", "shiny", "silent",
    "sleepy", "smooth", "snappy", "solid", "steady", "sturdy", "swift", "tidy", "vivid", "wise",
    "witty", "zesty",
];

const WORDS: &[&str] = &[
    "account", "after", "answer", "around", "basket", "because", "before", "beneath", "between",
    "bridge", "build", "candle", "carried", "castle", "change", "circle", "country", "covered",
    "during", "early", "engine", "evening", "every", "feather", "field", "finally", "follow",
    "forest", "garden", "gather", "harbor", "heard", "island", "journey", "kitchen", "language",
    "letter", "light", "market", "morning", "mountain", "nearly", "notice", "number", "often",
    "paper", "people", "picture", "plain", "quickly", "reason", "river", "season", "second",
    "shadow", "signal", "simple", "station", "stone", "story", "street", "summer", "table",
    "through", "together", "toward", "travel", "under", "valley", "village", "water", "weather",
    "whole", "window", "winter", "without", "wonder", "yellow",
];

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, FIRST_NAMES).to_string()
}

pub fn adjective<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, ADJECTIVES).to_string()
}

/// One sentence of 6 to 14 words, capitalized and ending with a period.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(6..=14);
    let words: Vec<&str> = (0..len).map(|_| pick(rng, WORDS)).collect();
    let mut text = capitalize(&words.join(" "));
    text.push('.');
    text
}

/// Three to six sentences separated by single spaces.
pub fn paragraph<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(3..=6);
    (0..len)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

fn pick<R: Rng + ?Sized>(rng: &mut R, list: &'static [&'static str]) -> &'static str {
    // word lists are non-empty constants
    list.choose(rng).copied().unwrap_or_default()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
