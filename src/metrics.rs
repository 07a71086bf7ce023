/// Derived per-round metrics, recomputed from the counters on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Metrics {
    pub wpm: u32,
    pub max_wpm: u32,
    pub cpm: u32,
    pub accuracy: u32,
}

/// Words per minute over the elapsed portion of the round.
pub fn wpm(correct_words: usize, elapsed_secs: u32) -> u32 {
    per_minute(correct_words, elapsed_secs)
}

/// Characters per minute, counting only characters of correctly typed words.
pub fn cpm(correct_chars: usize, elapsed_secs: u32) -> u32 {
    per_minute(correct_chars, elapsed_secs)
}

fn per_minute(count: usize, elapsed_secs: u32) -> u32 {
    if elapsed_secs == 0 {
        return 0;
    }
    (count as f64 * 60.0 / elapsed_secs as f64).round() as u32
}

/// Share of submitted words that matched, in percent. 100 until the first
/// word has been checked.
pub fn accuracy(correct_words: usize, incorrect_words: usize) -> u32 {
    let checked = correct_words + incorrect_words;
    if checked == 0 {
        return 100;
    }
    (correct_words as f64 / checked as f64 * 100.0).round() as u32
}
