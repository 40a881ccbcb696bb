use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Delay for the `index`th card of a list that fades in one after another.
pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * config::STAGGER_STEP_SECS
}

/// Inline style for the wrapper. Hidden content sits `distance` px lower and
/// fully transparent; the stylesheet transition does the rest.
pub fn reveal_style(revealed: bool, distance: u32, delay: f64) -> String {
    if revealed {
        format!("opacity: 1; transform: none; transition-delay: {:.2}s;", delay)
    } else {
        format!(
            "opacity: 0; transform: translateY({}px); transition-delay: {:.2}s;",
            distance, delay
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(config::FADE_DISTANCE_PX)]
    pub distance: u32,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(AttrValue::Static(config::REVEAL_ROOT_MARGIN))]
    pub root_margin: AttrValue,
    #[prop_or(false)]
    pub hover_lift: bool,
}

/// Keeps the observer's JS callback alive for as long as the observer runs.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(
    element: &Element,
    root_margin: &str,
    on_reveal: UseStateSetter<bool>,
) -> Result<RevealObserver, JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if intersecting {
                on_reveal.set(true);
                // Reveal only once; the element stays visible after scrolling away.
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let root_margin = props.root_margin.clone();
        use_effect_with_deps(
            move |_| {
                let mut active = None;
                match node.cast::<Element>() {
                    Some(element) => match observe_once(&element, &root_margin, revealed.setter()) {
                        Ok(observer) => active = Some(observer),
                        Err(err) => {
                            warn!("IntersectionObserver unavailable, showing content right away");
                            gloo_console::error!(err);
                            revealed.set(true);
                        }
                    },
                    None => {
                        debug!("fade-in wrapper not mounted, showing content right away");
                        revealed.set(true);
                    }
                }
                move || drop(active)
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("fade-in", props.hover_lift.then(|| "lift"), props.class.clone())}
            style={reveal_style(*revealed, props.distance, props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_by_fixed_step() {
        assert_eq!(stagger_delay(0), 0.0);
        assert!((stagger_delay(3) - 0.15).abs() < 1e-9);
        assert!(stagger_delay(5) > stagger_delay(4));
    }

    #[test]
    fn hidden_content_is_transparent_and_offset() {
        assert_eq!(
            reveal_style(false, 20, 0.0),
            "opacity: 0; transform: translateY(20px); transition-delay: 0.00s;"
        );
    }

    #[test]
    fn revealed_content_drops_the_offset_but_keeps_the_delay() {
        assert_eq!(
            reveal_style(true, 10, stagger_delay(3)),
            "opacity: 1; transform: none; transition-delay: 0.15s;"
        );
    }
}
