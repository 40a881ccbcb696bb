use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    Jump(usize),
    /// Fired by the auto-advance timer.
    Tick,
}

/// Which slide is showing. `len == 0` makes every action a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn apply(self, action: CarouselAction) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = match action {
            CarouselAction::Next | CarouselAction::Tick => (self.index + 1) % self.len,
            CarouselAction::Prev => (self.index + self.len - 1) % self.len,
            CarouselAction::Jump(target) if target < self.len => target,
            CarouselAction::Jump(_) => self.index,
        };
        Self { index, ..self }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub fn key_action(key: &str) -> Option<CarouselAction> {
    match key {
        "ArrowLeft" => Some(CarouselAction::Prev),
        "ArrowRight" => Some(CarouselAction::Next),
        _ => None,
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub images: &'static [&'static str],
    #[prop_or(config::CAROUSEL_INTERVAL_MS)]
    pub interval_ms: u32,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let len = props.images.len();
    let state = use_reducer(move || CarouselState::new(len));

    // Manual navigation does not restart the timer.
    {
        let dispatcher = state.dispatcher();
        let interval_ms = props.interval_ms;
        use_effect_with_deps(
            move |_| {
                debug!("starting gallery auto-advance every {}ms", interval_ms);
                let interval = Interval::new(interval_ms, move || {
                    dispatcher.dispatch(CarouselAction::Tick);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let dispatch = |action: CarouselAction| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(action))
    };

    let onkeydown = {
        let state = state.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(action) = key_action(&e.key()) {
                e.prevent_default();
                state.dispatch(action);
            }
        })
    };

    let current = props.images.get(state.index).copied();

    html! {
        <div class="carousel">
            <style>
                {r#"
                    .carousel-frame {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(234, 179, 8, 0.2);
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                        background: rgba(255, 255, 255, 0.7);
                        aspect-ratio: 16 / 9;
                        outline: none;
                    }
                    .carousel-frame:focus-visible {
                        box-shadow: 0 0 0 3px rgba(202, 138, 4, 0.5);
                    }
                    .carousel-slide {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        animation: slide-enter 0.5s ease-out both;
                    }
                    @keyframes slide-enter {
                        from { opacity: 0; transform: scale(0.98); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .carousel-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.2), transparent 50%);
                        pointer-events: none;
                    }
                    .carousel-controls {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem;
                        pointer-events: none;
                    }
                    .carousel-arrow {
                        pointer-events: auto;
                        border: none;
                        cursor: pointer;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.8);
                        color: #111827;
                        padding: 0.5rem 1rem;
                        font-size: 1.25rem;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    }
                    .carousel-arrow:hover {
                        background: #ffffff;
                    }
                    .carousel-dots {
                        margin-top: 1rem;
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                    }
                    .carousel-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        padding: 0;
                        border: none;
                        cursor: pointer;
                        border-radius: 9999px;
                        background: #d1d5db;
                    }
                    .carousel-dot.active {
                        background: #ca8a04;
                    }
                "#}
            </style>
            <div
                class="carousel-frame"
                tabindex="0"
                aria-roledescription="carousel"
                aria-label="Temple photos"
                onkeydown={onkeydown}
            >
                {
                    if let Some(url) = current {
                        html! {
                            <div
                                key={state.index}
                                class="carousel-slide"
                                role="img"
                                aria-label={format!("Photo {} of {}", state.index + 1, state.len)}
                                style={format!("background-image: url({});", url)}
                            ></div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="carousel-shade"></div>
                <div class="carousel-controls">
                    <button class="carousel-arrow" aria-label="Previous photo" onclick={dispatch(CarouselAction::Prev)}>
                        {"‹"}
                    </button>
                    <button class="carousel-arrow" aria-label="Next photo" onclick={dispatch(CarouselAction::Next)}>
                        {"›"}
                    </button>
                </div>
            </div>
            <div class="carousel-dots">
                { for (0..state.len).map(|i| html! {
                    <button
                        key={i}
                        class={classes!("carousel-dot", (i == state.index).then(|| "active"))}
                        aria-label={format!("Show photo {}", i + 1)}
                        onclick={dispatch(CarouselAction::Jump(i))}
                    ></button>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_the_first_slide() {
        let mut state = CarouselState::new(3);
        state = state.apply(CarouselAction::Next);
        state = state.apply(CarouselAction::Next);
        assert_eq!(state.index, 2);
        assert_eq!(state.apply(CarouselAction::Next).index, 0);
    }

    #[test]
    fn prev_from_the_first_slide_goes_to_the_last() {
        let state = CarouselState::new(3);
        assert_eq!(state.apply(CarouselAction::Prev).index, 2);
        assert_eq!(state.apply(CarouselAction::Prev).apply(CarouselAction::Prev).index, 1);
    }

    #[test]
    fn tick_advances_like_next() {
        let state = CarouselState { index: 1, len: 3 };
        assert_eq!(state.apply(CarouselAction::Tick), state.apply(CarouselAction::Next));
    }

    #[test]
    fn jump_ignores_out_of_range_targets() {
        let state = CarouselState::new(3);
        assert_eq!(state.apply(CarouselAction::Jump(2)).index, 2);
        assert_eq!(state.apply(CarouselAction::Jump(3)).index, 0);
        assert_eq!(
            CarouselState { index: 1, len: 3 }.apply(CarouselAction::Jump(99)).index,
            1
        );
    }

    #[test]
    fn empty_carousel_never_moves() {
        let state = CarouselState::new(0);
        for action in [
            CarouselAction::Next,
            CarouselAction::Prev,
            CarouselAction::Tick,
            CarouselAction::Jump(0),
        ] {
            assert_eq!(state.apply(action), state);
        }
    }

    #[test]
    fn single_slide_stays_put() {
        let state = CarouselState::new(1);
        assert_eq!(state.apply(CarouselAction::Next).index, 0);
        assert_eq!(state.apply(CarouselAction::Prev).index, 0);
    }

    #[test]
    fn reducer_reuses_state_when_nothing_changes() {
        let state = Rc::new(CarouselState::new(0));
        let reduced = state.clone().reduce(CarouselAction::Next);
        assert!(Rc::ptr_eq(&state, &reduced));

        let moved = Rc::new(CarouselState::new(2)).reduce(CarouselAction::Next);
        assert_eq!(moved.index, 1);
    }

    #[test]
    fn arrow_keys_map_to_navigation() {
        assert_eq!(key_action("ArrowLeft"), Some(CarouselAction::Prev));
        assert_eq!(key_action("ArrowRight"), Some(CarouselAction::Next));
        assert_eq!(key_action("Enter"), None);
    }
}
