use yew::prelude::*;

use crate::sections::{
    about::About, donate::Donate, events::Events, footer::Footer, gallery::Gallery, hero::Hero,
    seva::Sevas, timings::Timings, visit::Visit,
};

/// Rules shared by every section: layout container, cards, buttons, photo
/// layers and the fade-in transition driven by `FadeIn`.
const BASE_CSS: &str = r#"
    *, *::before, *::after {
        box-sizing: border-box;
    }
    body {
        margin: 0;
        font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        background: #ffffff;
        color: #111827;
        line-height: 1.5;
    }
    h1, h2, h3, p {
        margin: 0;
    }
    ::selection {
        background: #fef08a;
        color: #111827;
    }
    html {
        scroll-behavior: smooth;
    }
    .temple-page {
        min-height: 100vh;
        overflow-x: hidden;
    }
    .container {
        width: 100%;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .page-section {
        position: relative;
        padding: 5rem 0;
        scroll-margin-top: 4rem;
    }
    .page-section-backdrop {
        position: absolute;
        inset: 0;
        z-index: -1;
        background: linear-gradient(to bottom, transparent, transparent, rgba(255, 255, 255, 0.4));
    }
    .section-heading {
        max-width: 56rem;
        margin: 0 auto 3rem;
        text-align: center;
    }
    .section-heading h2 {
        font-size: clamp(1.875rem, 4vw, 2.25rem);
        font-weight: 800;
        letter-spacing: -0.025em;
        color: #111827;
    }
    .section-subtitle {
        margin-top: 0.75rem;
        font-size: 1.0625rem;
        color: #4b5563;
    }
    .fade-in {
        transition: opacity 0.6s ease-out, transform 0.6s ease-out, translate 0.2s ease, scale 0.2s ease, box-shadow 0.2s ease;
    }
    .fade-in.lift:hover {
        translate: 0 -4px;
        scale: 1.01;
        transition-delay: 0s;
    }
    .card {
        border-radius: 1rem;
        border: 1px solid rgba(234, 179, 8, 0.2);
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(8px);
        -webkit-backdrop-filter: blur(8px);
        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    }
    .body-copy {
        color: #374151;
        line-height: 1.625;
    }
    .button {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        border-radius: 9999px;
        padding: 0.5rem 1rem;
        font-weight: 500;
        text-decoration: none;
        transition: box-shadow 0.2s ease, background 0.2s ease;
    }
    .button-lg {
        padding: 0.75rem 1.5rem;
        font-weight: 600;
    }
    .button-primary {
        color: #ffffff;
        background: linear-gradient(to right, #eab308, #f97316);
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
    }
    .button-primary:hover {
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.15);
    }
    .button-outline {
        color: #1f2937;
        border: 1px solid #d1d5db;
    }
    .button-outline:hover {
        background: #f9fafb;
    }
    .icon {
        flex-shrink: 0;
    }
    .icon-xs {
        width: 0.875rem;
        height: 0.875rem;
    }
    .icon-sm {
        width: 1rem;
        height: 1rem;
    }
    .icon-md {
        width: 1.25rem;
        height: 1.25rem;
    }
    .icon.accent {
        color: #a16207;
    }
    .warm-gradient {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom right, #fef08a, #ffedd5, #d1fae5);
    }
    .photo-layer {
        position: absolute;
        inset: 0;
        background-size: cover;
        background-position: center;
    }
    .photo-layer.multiply {
        mix-blend-mode: multiply;
    }
    .photo-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.4), rgba(0, 0, 0, 0.1), transparent);
    }
    .photo-shade.light {
        background: linear-gradient(to top, rgba(0, 0, 0, 0.3), rgba(0, 0, 0, 0.1), transparent);
    }
    @media (min-width: 640px) {
        .page-section {
            padding: 6rem 0;
        }
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    // Start at the top on mount; hash links take over from there.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    if window.location().hash().map(|h| h.is_empty()).unwrap_or(true) {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="temple-page">
            <style>{BASE_CSS}</style>
            <Hero />
            <About />
            <Sevas />
            <Timings />
            <Events />
            <Gallery />
            <Visit />
            <Donate />
            <Footer />
        </div>
    }
}
