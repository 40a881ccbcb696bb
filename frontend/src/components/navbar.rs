use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::content::{self, ids, NAV_LINKS};

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD
}

#[function_component(BrandMark)]
pub fn brand_mark() -> Html {
    html! {
        <span class="brand-mark">
            <span class="brand-mark-glow"></span>
            <span class="brand-mark-core"></span>
        </span>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let update = {
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    scrolled.set(is_scrolled(scroll_y));
                                }
                            }
                        }
                    };
                    update();

                    let callback = Closure::<dyn Fn()>::new(update);
                    if window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("could not attach scroll listener to window");
                    }
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    warn!("no window, navbar stays transparent");
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchors still navigate; the menu just gets out of the way.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        border-bottom: 1px solid transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease, border-color 0.3s ease;
                        animation: nav-enter 0.6s ease-out both;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.7);
                        backdrop-filter: blur(8px);
                        -webkit-backdrop-filter: blur(8px);
                        border-bottom-color: rgba(255, 255, 255, 0.4);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    @keyframes nav-enter {
                        from { transform: translateY(-40px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 4rem;
                    }
                    .nav-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-decoration: none;
                    }
                    .brand-mark {
                        position: relative;
                        display: inline-flex;
                        width: 2rem;
                        height: 2rem;
                        flex-shrink: 0;
                    }
                    .brand-mark-glow {
                        position: absolute;
                        inset: 0;
                        border-radius: 9999px;
                        background: #facc15;
                        opacity: 0.6;
                        filter: blur(4px);
                        transition: opacity 0.2s ease;
                    }
                    .nav-brand:hover .brand-mark-glow {
                        opacity: 0.8;
                    }
                    .brand-mark-core {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        border-radius: 9999px;
                        background: linear-gradient(to top right, #eab308, #f97316);
                    }
                    .nav-brand-locality {
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #a16207;
                        line-height: 1.1;
                    }
                    .nav-brand-name {
                        font-weight: 700;
                        color: #111827;
                        line-height: 1.1;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                    }
                    .nav-link {
                        color: #374151;
                        text-decoration: none;
                    }
                    .nav-link:hover {
                        color: #111827;
                    }
                    .nav-support {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        display: block;
                        width: 22px;
                        height: 2px;
                        background: #111827;
                    }
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 640px) {
                        .nav-links, .nav-support {
                            display: none;
                        }
                        .burger-menu {
                            display: flex;
                        }
                        .mobile-menu.open {
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                            padding: 1rem 1.5rem 1.5rem;
                            background: rgba(255, 255, 255, 0.95);
                            border-bottom: 1px solid rgba(234, 179, 8, 0.2);
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div class="nav-content">
                    <a href={content::anchor(ids::HOME)} class="nav-brand">
                        <BrandMark />
                        <div>
                            <div class="nav-brand-locality">{content::LOCALITY}</div>
                            <div class="nav-brand-name">{content::SHORT_NAME}</div>
                        </div>
                    </a>
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a key={link.target} href={content::anchor(link.target)} class="nav-link">
                                {link.label}
                            </a>
                        }) }
                    </div>
                    <a href={content::anchor(ids::DONATE)} class="button button-primary nav-support">
                        <Icon kind={IconKind::HeartHandshake} class="icon-sm" />
                        {"Support"}
                    </a>
                    <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { for NAV_LINKS.iter().map(|link| html! {
                    <a
                        key={link.target}
                        href={content::anchor(link.target)}
                        class="nav-link"
                        onclick={close_menu.clone()}
                    >
                        {link.label}
                    </a>
                }) }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_switches_style_just_past_the_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
        assert!(is_scrolled(1200.0));
    }
}
