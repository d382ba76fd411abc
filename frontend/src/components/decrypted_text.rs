use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Math};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use crate::components::text_effect::{
    plain, CharPool, Glyph, RevealDirection, ScrambleBurst, SequentialReveal, TextEffect,
};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimateOn {
    /// Start once the element scrolls into the viewport.
    View,
    /// Start as soon as the element mounts.
    Mount,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Done,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecryptState {
    pub phase: Phase,
    pub frame: usize,
    pub total: usize,
}

pub enum DecryptAction {
    /// Begin animating over `total` frames.
    Start(usize),
    Tick,
    /// Forget any previous run, e.g. because the text changed.
    Reset,
}

impl Reducible for DecryptState {
    type Action = DecryptAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DecryptAction::Start(total) => {
                if self.phase != Phase::Idle {
                    return self;
                }
                let phase = if total == 0 { Phase::Done } else { Phase::Running };
                Rc::new(DecryptState { phase, frame: 0, total })
            }
            DecryptAction::Tick => {
                if self.phase != Phase::Running {
                    return self;
                }
                let frame = self.frame + 1;
                let phase = if frame >= self.total { Phase::Done } else { Phase::Running };
                Rc::new(DecryptState { phase, frame, total: self.total })
            }
            DecryptAction::Reset => {
                if self.phase == Phase::Idle {
                    return self;
                }
                Rc::new(DecryptState::default())
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DecryptedTextProps {
    pub text: AttrValue,
    #[prop_or(AnimateOn::View)]
    pub animate_on: AnimateOn,
    /// Milliseconds between frames.
    #[prop_or(config::DECRYPT_SPEED_MS)]
    pub speed: u32,
    #[prop_or(config::DECRYPT_MAX_ITERATIONS)]
    pub max_iterations: usize,
    #[prop_or_default]
    pub sequential: bool,
    #[prop_or_default]
    pub reveal_direction: RevealDirection,
    #[prop_or_default]
    pub use_original_chars_only: bool,
    #[prop_or_default]
    pub characters: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub encrypted_class: Classes,
}

impl DecryptedTextProps {
    fn effect(&self) -> Box<dyn TextEffect> {
        let pool = match (&self.characters, self.use_original_chars_only) {
            (_, true) => CharPool::OriginalOnly,
            (Some(characters), false) => CharPool::from_characters(characters),
            (None, false) => CharPool::default(),
        };
        if self.sequential {
            Box::new(SequentialReveal { direction: self.reveal_direction, pool })
        } else {
            Box::new(ScrambleBurst { iterations: self.max_iterations, pool })
        }
    }
}

type ObserverHandle = (IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>);

/// Calls `on_visible` the first time `node` intersects the viewport.
fn observe_once(node: &NodeRef, on_visible: impl Fn() + 'static) -> Option<ObserverHandle> {
    let element = node.cast::<Element>()?;
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if visible {
                on_visible();
                observer.disconnect();
            }
        },
    );
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    observer.observe(&element);
    Some((observer, callback))
}

#[function_component(DecryptedText)]
pub fn decrypted_text(props: &DecryptedTextProps) -> Html {
    let state = use_reducer(DecryptState::default);
    let node = use_node_ref();
    let effect = props.effect();
    let total = effect.frame_count(&props.text);

    // Trigger. Keyed on the text so a re-render with the same string never restarts.
    {
        let state = state.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |(text, animate_on)| {
                state.dispatch(DecryptAction::Reset);
                let start = {
                    let state = state.clone();
                    let text = text.clone();
                    move || {
                        debug!("Decrypting {:?}", text.as_str());
                        state.dispatch(DecryptAction::Start(total));
                    }
                };
                let observer = match animate_on {
                    AnimateOn::Mount => {
                        start();
                        None
                    }
                    AnimateOn::View => {
                        let start = Rc::new(start);
                        let handle = {
                            let start = start.clone();
                            observe_once(&node, move || start())
                        };
                        if handle.is_none() {
                            // No observer support; animate right away.
                            start();
                        }
                        handle
                    }
                };
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (props.text.clone(), props.animate_on),
        );
    }

    // Frame clock, alive only while running.
    {
        let running = state.phase == Phase::Running;
        let state = state.clone();
        use_effect_with_deps(
            move |(running, speed)| {
                let interval = running.then(|| {
                    Interval::new(*speed, move || state.dispatch(DecryptAction::Tick))
                });
                move || drop(interval)
            },
            (running, props.speed),
        );
    }

    let glyphs: Vec<Glyph> = match state.phase {
        Phase::Running => {
            let mut rng = Math::random;
            effect.frame(&props.text, state.frame, &mut rng)
        }
        Phase::Idle | Phase::Done => plain(&props.text),
    };

    html! {
        <span ref={node} class="decrypted-text">
            <span class="sr-only">{ props.text.clone() }</span>
            <span aria-hidden="true">
                { for glyphs.iter().map(|glyph| {
                    let class = if glyph.revealed {
                        props.class.clone()
                    } else {
                        props.encrypted_class.clone()
                    };
                    html! { <span class={class}>{ glyph.ch.to_string() }</span> }
                }) }
            </span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: DecryptState, actions: Vec<DecryptAction>) -> DecryptState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn runs_to_completion() {
        let state = run(
            DecryptState::default(),
            vec![DecryptAction::Start(3), DecryptAction::Tick, DecryptAction::Tick],
        );
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.frame, 2);

        let state = run(state, vec![DecryptAction::Tick]);
        assert_eq!(state.phase, Phase::Done);
    }

    #[test]
    fn second_start_does_not_restart() {
        let state = run(
            DecryptState::default(),
            vec![DecryptAction::Start(2), DecryptAction::Tick, DecryptAction::Tick],
        );
        assert_eq!(state.phase, Phase::Done);
        let again = run(state.clone(), vec![DecryptAction::Start(2)]);
        assert_eq!(again, state);

        let running = run(DecryptState::default(), vec![DecryptAction::Start(5), DecryptAction::Tick]);
        assert_eq!(run(running.clone(), vec![DecryptAction::Start(5)]), running);
    }

    #[test]
    fn reset_allows_a_new_run() {
        let state = run(
            DecryptState::default(),
            vec![
                DecryptAction::Start(1),
                DecryptAction::Tick,
                DecryptAction::Reset,
                DecryptAction::Start(4),
            ],
        );
        assert_eq!(state, DecryptState { phase: Phase::Running, frame: 0, total: 4 });
    }

    #[test]
    fn ticks_outside_a_run_are_ignored() {
        assert_eq!(run(DecryptState::default(), vec![DecryptAction::Tick]), DecryptState::default());
    }

    #[test]
    fn empty_text_finishes_immediately() {
        let state = run(DecryptState::default(), vec![DecryptAction::Start(0)]);
        assert_eq!(state.phase, Phase::Done);
    }
}
