use yew::prelude::*;

use crate::components::fade_in::{stagger_delay, FadeIn};
use crate::components::section::Section;
use crate::config;
use crate::content::{self, ids, SEVAS};

#[function_component(Sevas)]
pub fn sevas() -> Html {
    html! {
        <Section
            id={ids::SEVA}
            title="Sevas & Offerings"
            subtitle={Some(AttrValue::from("Participate in sacred rituals and receive divine blessings"))}
        >
            <style>
                {r#"
                    .seva-grid {
                        display: grid;
                        gap: 1.5rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .seva-card {
                        padding: 1.5rem;
                    }
                    .seva-card:hover {
                        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                    }
                    .seva-head {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .seva-head h3 {
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: #111827;
                    }
                    .seva-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: linear-gradient(to right, #eab308, #f97316);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.1);
                    }
                    .seva-card p {
                        margin-top: 0.5rem;
                        font-size: 0.875rem;
                        color: #4b5563;
                    }
                    .seva-more {
                        margin-top: 1rem;
                        display: inline-flex;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #a16207;
                        text-decoration: none;
                    }
                    .seva-card:hover .seva-more {
                        color: #854d0e;
                    }
                    @media (min-width: 640px) {
                        .seva-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (min-width: 1024px) {
                        .seva-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                "#}
            </style>
            <div class="seva-grid">
                { for SEVAS.iter().enumerate().map(|(i, seva)| html! {
                    <FadeIn
                        key={seva.name}
                        class="card seva-card"
                        distance={config::CARD_FADE_DISTANCE_PX}
                        delay={stagger_delay(i)}
                        root_margin="0px"
                        hover_lift={true}
                    >
                        <div class="seva-head">
                            <h3>{seva.name}</h3>
                            <span class="seva-dot"></span>
                        </div>
                        <p>{seva.desc}</p>
                        <a href={content::anchor(ids::VISIT)} class="seva-more">{"Learn more →"}</a>
                    </FadeIn>
                }) }
            </div>
        </Section>
    }
}
