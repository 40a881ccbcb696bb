use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::icons::{Icon, IconKind};
use crate::components::section::Section;
use crate::content::{self, ids, ABOUT_PARAGRAPHS, HIGHLIGHTS};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <Section
            id={ids::ABOUT}
            title="About the Temple"
            subtitle={Some(AttrValue::from("A sacred kshetram rooted in devotion, protection, and prosperity"))}
        >
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        gap: 2rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .about-story {
                        overflow: hidden;
                        border-radius: 1.5rem;
                    }
                    .about-story .photo-layer {
                        position: static;
                        aspect-ratio: 16 / 9;
                    }
                    .about-story-body {
                        padding: 1.5rem;
                    }
                    .about-story-body p + p {
                        margin-top: 1rem;
                    }
                    .about-highlights {
                        border-radius: 1.5rem;
                        border: 1px solid rgba(234, 179, 8, 0.2);
                        background: linear-gradient(to bottom right, #fefce8, #fff7ed);
                        padding: 1.5rem;
                        box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.05);
                    }
                    .highlight-grid {
                        display: grid;
                        gap: 1.5rem;
                    }
                    .highlight-card {
                        padding: 1.25rem;
                    }
                    .highlight-title {
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: #111827;
                    }
                    .highlight-card p {
                        margin-top: 0.25rem;
                        font-size: 0.875rem;
                        color: #4b5563;
                    }
                    .blessing {
                        margin-top: 1.5rem;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(234, 179, 8, 0.3);
                        background: rgba(255, 255, 255, 0.8);
                        padding: 1.25rem;
                        color: #854d0e;
                    }
                    @media (min-width: 640px) {
                        .about-story-body, .about-highlights {
                            padding: 2rem;
                        }
                        .highlight-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    @media (min-width: 1024px) {
                        .about-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                "#}
            </style>
            <div class="about-grid">
                <FadeIn class="card about-story">
                    <div class="photo-layer" style={format!("background-image: url('{}');", content::SHRINE_IMAGE)}></div>
                    <div class="about-story-body">
                        { for ABOUT_PARAGRAPHS.iter().map(|p| html! { <p class="body-copy">{*p}</p> }) }
                    </div>
                </FadeIn>
                <FadeIn class="about-highlights">
                    <div class="highlight-grid">
                        { for HIGHLIGHTS.iter().map(|item| html! {
                            <div key={item.title} class="card highlight-card">
                                <div class="highlight-title">{item.title}</div>
                                <p>{item.desc}</p>
                            </div>
                        }) }
                    </div>
                    <div class="blessing">
                        <Icon kind={IconKind::Sparkles} class="icon-md" />
                        {content::BLESSING}
                    </div>
                </FadeIn>
            </div>
        </Section>
    }
}
