use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::components::fade_in::{stagger_delay, FadeIn};
use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::content::{self, ids, STATS};

/// A glowing dot in the hero backdrop. Positions are percentages of the hero box.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub size: f64,
    pub delay: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; opacity: {:.2}; animation-delay: {:.2}s;",
            self.left, self.top, self.size, self.size, self.opacity, self.delay
        )
    }
}

/// `random` must yield values in `[0, 1)`.
pub fn scatter_particles(count: usize, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left: random() * 100.0,
            top: random() * 100.0,
            size: random() * 6.0 + 2.0,
            delay: random() * 4.0,
            opacity: random() * 0.6 + 0.2,
        })
        .collect()
}

#[function_component(Hero)]
pub fn hero() -> Html {
    // Scattered once per mount so re-renders don't reshuffle the backdrop.
    let particles = use_state(|| scatter_particles(config::HERO_PARTICLE_COUNT, Math::random));

    html! {
        <div id={ids::HOME} class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        padding-top: 6rem;
                        overflow: hidden;
                    }
                    .hero-glow {
                        position: absolute;
                        inset: 0;
                        z-index: -1;
                        background:
                            radial-gradient(circle at 20% 10%, rgba(253, 224, 71, 0.25), transparent 35%),
                            radial-gradient(circle at 80% 20%, rgba(251, 146, 60, 0.25), transparent 35%),
                            radial-gradient(circle at 50% 80%, rgba(34, 197, 94, 0.2), transparent 35%);
                    }
                    .hero-wash {
                        position: absolute;
                        inset: 0;
                        z-index: -1;
                        background: linear-gradient(to bottom, rgba(255, 255, 255, 0), rgba(255, 255, 255, 0.3), #ffffff);
                    }
                    .hero-particles {
                        position: absolute;
                        inset: 0;
                        z-index: -1;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .hero-particle {
                        position: absolute;
                        border-radius: 9999px;
                        background: rgba(250, 204, 21, 0.7);
                        filter: blur(1px);
                        animation: particle-ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }
                    @keyframes particle-ping {
                        75%, 100% { transform: scale(2); opacity: 0; }
                    }
                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2.5rem;
                        align-items: center;
                        min-height: 70vh;
                        padding: 2.5rem 0;
                    }
                    .hero-intro {
                        text-align: center;
                        animation: hero-rise 0.7s ease-out both;
                    }
                    @keyframes hero-rise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-eyebrow {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(234, 179, 8, 0.3);
                        background: #fefce8;
                        padding: 0.25rem 0.75rem;
                        color: #a16207;
                    }
                    .hero h1 {
                        margin-top: 1rem;
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        font-weight: 800;
                        letter-spacing: -0.025em;
                        color: #111827;
                        line-height: 1.1;
                    }
                    .hero-lead {
                        margin-top: 1rem;
                        font-size: 1.125rem;
                        color: #374151;
                        max-width: 42rem;
                    }
                    .hero-ctas {
                        margin-top: 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        justify-content: center;
                    }
                    .hero-visual {
                        position: relative;
                        margin: 0 auto;
                        max-width: 28rem;
                        width: 100%;
                        animation: hero-float 6s ease-in-out infinite;
                    }
                    @keyframes hero-float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-8px); }
                    }
                    .hero-card {
                        position: relative;
                        aspect-ratio: 4 / 5;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .hero-card-caption {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        color: rgba(255, 255, 255, 0.9);
                    }
                    .hero-card-title {
                        color: #ffffff;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .hero-blob {
                        position: absolute;
                        width: 6rem;
                        height: 6rem;
                        border-radius: 9999px;
                        filter: blur(40px);
                    }
                    .hero-blob.gold {
                        top: -1.5rem;
                        left: -1.5rem;
                        background: rgba(250, 204, 21, 0.4);
                        animation: blob-pulse 4s ease-in-out infinite;
                    }
                    .hero-blob.amber {
                        bottom: -1.5rem;
                        right: -1.5rem;
                        background: rgba(251, 146, 60, 0.4);
                        animation: blob-pulse-inverse 4.5s ease-in-out infinite;
                    }
                    @keyframes blob-pulse {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.2); }
                    }
                    @keyframes blob-pulse-inverse {
                        0%, 100% { transform: scale(1.2); }
                        50% { transform: scale(1); }
                    }
                    .hero-stats {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1rem;
                        padding: 1.5rem 0;
                    }
                    .stat-tile {
                        text-align: center;
                        padding: 1rem;
                    }
                    .stat-value {
                        font-size: 1.5rem;
                        font-weight: 800;
                        color: #111827;
                    }
                    .stat-label {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: #6b7280;
                    }
                    @media (min-width: 640px) {
                        .hero-ctas {
                            flex-direction: row;
                        }
                        .hero-stats {
                            grid-template-columns: repeat(4, 1fr);
                            gap: 1.5rem;
                        }
                    }
                    @media (min-width: 1024px) {
                        .hero-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                        .hero-intro {
                            text-align: left;
                        }
                        .hero-ctas {
                            justify-content: flex-start;
                        }
                    }
                "#}
            </style>
            <div class="hero-glow"></div>
            <div class="hero-wash"></div>

            <div class="container" style="position: relative;">
                <div class="hero-particles">
                    { for particles.iter().enumerate().map(|(i, p)| html! {
                        <span key={i} class="hero-particle" style={p.style()}></span>
                    }) }
                </div>

                <div class="hero-grid">
                    <div class="hero-intro">
                        <div class="hero-eyebrow">
                            <Icon kind={IconKind::Sparkles} class="icon-sm" />
                            {content::HERO_EYEBROW}
                        </div>
                        <h1>{content::TEMPLE_NAME}</h1>
                        <p class="hero-lead">{content::HERO_INTRO}</p>
                        <div class="hero-ctas">
                            <a href={content::anchor(ids::VISIT)} class="button button-primary button-lg">
                                {"Plan Your Visit"}
                            </a>
                            <a href={content::anchor(ids::EVENTS)} class="button button-outline button-lg">
                                {"Upcoming Events"}
                            </a>
                        </div>
                    </div>

                    <div class="hero-visual">
                        <div class="hero-card">
                            <div class="warm-gradient"></div>
                            <div class="photo-layer multiply" style={format!("background-image: url('{}');", content::SHRINE_IMAGE)}></div>
                            <div class="photo-shade"></div>
                            <div class="hero-card-caption">
                                <div>{content::HERO_CARD_CAPTION}</div>
                                <div class="hero-card-title">{content::HERO_CARD_TITLE}</div>
                            </div>
                        </div>
                        <div class="hero-blob gold"></div>
                        <div class="hero-blob amber"></div>
                    </div>
                </div>

                <div class="hero-stats">
                    { for STATS.iter().enumerate().map(|(i, stat)| html! {
                        <FadeIn
                            key={stat.label}
                            class="card stat-tile"
                            distance={config::CARD_FADE_DISTANCE_PX}
                            delay={stagger_delay(i)}
                            root_margin="0px"
                        >
                            <div class="stat-value">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </FadeIn>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn particles_map_unit_randoms_into_their_ranges() {
        let particles = scatter_particles(2, sequence(&[0.0, 0.5, 0.5, 0.25, 0.5]));
        assert_eq!(particles.len(), 2);
        let first = &particles[0];
        assert_eq!(first.left, 0.0);
        assert_eq!(first.top, 50.0);
        assert_eq!(first.size, 5.0);
        assert_eq!(first.delay, 1.0);
        assert!((first.opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn particles_stay_within_bounds_at_the_extremes() {
        for p in scatter_particles(config::HERO_PARTICLE_COUNT, sequence(&[0.0, 0.999])) {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((2.0..8.0).contains(&p.size));
            assert!((0.0..4.0).contains(&p.delay));
            assert!((0.2..0.8).contains(&p.opacity));
        }
    }

    #[test]
    fn particle_style_renders_every_property() {
        let p = Particle {
            left: 12.5,
            top: 40.0,
            size: 3.0,
            delay: 1.25,
            opacity: 0.4,
        };
        assert_eq!(
            p.style(),
            "left: 12.50%; top: 40.00%; width: 3.00px; height: 3.00px; opacity: 0.40; animation-delay: 1.25s;"
        );
    }
}
