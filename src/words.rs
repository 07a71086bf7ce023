use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::Deserialize;

static WORDLIST_DIR: Dir = include_dir!("src/wordlists");

/// A flat word corpus embedded into the binary.
#[derive(Deserialize, Clone, Debug)]
pub struct Lexicon {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Lexicon {
    pub fn load() -> Self {
        let file = WORDLIST_DIR
            .get_file("english.json")
            .expect("wordlist file not found");

        let contents = file
            .contents_utf8()
            .expect("unable to interpret wordlist as a string");

        serde_json::from_str(contents).expect("unable to deserialize wordlist json")
    }

    /// Draws `count` words uniformly at random, with repetition.
    pub fn sample(&self, count: usize) -> Vec<String> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| {
                self.words
                    .choose(&mut rng)
                    .expect("wordlist is empty")
                    .clone()
            })
            .collect()
    }
}

/// Word list for one round.
pub fn generate(count: usize) -> Vec<String> {
    Lexicon::load().sample(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_loads_embedded_wordlist() {
        let lexicon = Lexicon::load();

        assert_eq!(lexicon.name, "english");
        assert!(!lexicon.words.is_empty());
        assert_eq!(lexicon.size as usize, lexicon.words.len());
    }

    #[test]
    fn lexicon_is_lowercase_alphabetic() {
        let lexicon = Lexicon::load();

        for word in &lexicon.words {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "unexpected word in lexicon: {word:?}"
            );
        }
    }

    #[test]
    fn sample_returns_requested_count() {
        let lexicon = Lexicon::load();

        assert_eq!(lexicon.sample(200).len(), 200);
        assert_eq!(lexicon.sample(0).len(), 0);
    }

    #[test]
    fn sample_draws_from_the_lexicon() {
        let lexicon = Lexicon::load();

        for word in lexicon.sample(50) {
            assert!(lexicon.words.contains(&word));
        }
    }

    #[test]
    fn generate_produces_a_round_list() {
        let words = generate(200);

        assert_eq!(words.len(), 200);
    }
}
