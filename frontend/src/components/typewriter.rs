use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::media::use_media_query;

const TYPE_DELAY_MS: u32 = 90;
const DELETE_DELAY_MS: u32 = 45;
const HOLD_DELAY_MS: u32 = 1600;
const REDUCED_MOTION: &str = "(prefers-reduced-motion: reduce)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Typing,
    Holding,
    Deleting,
}

/// Cursor over a list of words: types one out, holds it, deletes it, moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Typewriter {
    word: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    /// Advances one tick. Returns the next state and how long it stays on
    /// screen before the following tick.
    pub fn step(self, words: &[&str]) -> (Self, u32) {
        if words.is_empty() {
            return (self, HOLD_DELAY_MS);
        }
        let word = self.word % words.len();
        let len = words[word].chars().count();

        match self.phase {
            Phase::Typing => {
                let shown = (self.shown + 1).min(len);
                if shown == len {
                    (Self { word, shown, phase: Phase::Holding }, HOLD_DELAY_MS)
                } else {
                    (Self { word, shown, phase: Phase::Typing }, TYPE_DELAY_MS)
                }
            }
            Phase::Holding => (Self { word, shown: len, phase: Phase::Deleting }, DELETE_DELAY_MS),
            Phase::Deleting => {
                let shown = self.shown.saturating_sub(1);
                if shown == 0 {
                    let next = Self { word: (word + 1) % words.len(), shown: 0, phase: Phase::Typing };
                    (next, TYPE_DELAY_MS)
                } else {
                    (Self { word, shown, phase: Phase::Deleting }, DELETE_DELAY_MS)
                }
            }
        }
    }

    /// The visible prefix of the current word.
    pub fn text<'a>(&self, words: &[&'a str]) -> &'a str {
        let Some(word) = words.get(self.word % words.len().max(1)) else {
            return "";
        };
        match word.char_indices().nth(self.shown) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub words: Vec<&'static str>,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    // Current state and how long it stays on screen.
    let tick = use_state(|| (Typewriter::default(), TYPE_DELAY_MS));
    let reduced_motion = use_media_query(REDUCED_MOTION);

    {
        let setter = tick.setter();
        let words = props.words.clone();
        use_effect_with_deps(
            move |&((current, delay), reduced_motion): &((Typewriter, u32), bool)| {
                let timeout = (!reduced_motion)
                    .then(|| Timeout::new(delay, move || setter.set(current.step(&words))));
                move || drop(timeout)
            },
            (*tick, reduced_motion),
        );
    }

    let text = if reduced_motion {
        props.words.first().copied().unwrap_or_default()
    } else {
        tick.0.text(&props.words)
    };

    html! {
        <span class="typewriter" aria-live="polite">
            {text}
            <span class="typewriter-caret" aria-hidden="true">{"|"}</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 2] = ["ab", "xyz"];

    #[test]
    fn test_types_holds_deletes_and_moves_on() {
        let mut state = Typewriter::default();
        let mut seen = Vec::new();
        for _ in 0..12 {
            let (next, _) = state.step(&WORDS);
            state = next;
            seen.push(state.text(&WORDS));
        }
        assert_eq!(
            seen,
            vec!["a", "ab", "ab", "a", "", "x", "xy", "xyz", "xyz", "xy", "x", ""]
        );
    }

    #[test]
    fn test_delays_follow_phase() {
        let (state, delay) = Typewriter::default().step(&WORDS);
        assert_eq!(delay, TYPE_DELAY_MS);
        let (state, delay) = state.step(&WORDS);
        assert_eq!(state.phase(), Phase::Holding);
        assert_eq!(delay, HOLD_DELAY_MS);
        let (_, delay) = state.step(&WORDS);
        assert_eq!(delay, DELETE_DELAY_MS);
    }

    #[test]
    fn test_multibyte_words() {
        let words = ["héllo"];
        let (state, _) = Typewriter::default().step(&words);
        let (state, _) = state.step(&words);
        assert_eq!(state.text(&words), "hé");
    }

    #[test]
    fn test_no_words() {
        let (state, delay) = Typewriter::default().step(&[]);
        assert_eq!(state, Typewriter::default());
        assert_eq!(delay, HOLD_DELAY_MS);
        assert_eq!(state.text(&[]), "");
    }
}
