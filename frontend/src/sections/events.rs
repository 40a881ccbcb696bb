use yew::prelude::*;

use crate::components::fade_in::{stagger_delay, FadeIn};
use crate::components::icons::{Icon, IconKind};
use crate::components::section::Section;
use crate::config;
use crate::content::{ids, EVENTS};

#[function_component(Events)]
pub fn events() -> Html {
    html! {
        <Section
            id={ids::EVENTS}
            title="Announcements & Upcoming Events"
            subtitle={Some(AttrValue::from("Join us in prayer and celebration"))}
        >
            <style>
                {r#"
                    .events-grid {
                        display: grid;
                        gap: 1.5rem;
                        max-width: 64rem;
                        margin: 0 auto;
                    }
                    .event-card {
                        padding: 1.5rem;
                    }
                    .event-head {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .event-date {
                        font-size: 1.5rem;
                        font-weight: 800;
                        background: linear-gradient(to right, #ca8a04, #ea580c);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .event-badge {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #4b5563;
                    }
                    .event-title {
                        margin-top: 0.5rem;
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: #111827;
                    }
                    .event-card p {
                        margin-top: 0.25rem;
                        color: #4b5563;
                    }
                    @media (min-width: 768px) {
                        .events-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                "#}
            </style>
            <div class="events-grid">
                { for EVENTS.iter().enumerate().map(|(i, event)| html! {
                    <FadeIn
                        key={event.title}
                        class="card event-card"
                        distance={config::CARD_FADE_DISTANCE_PX}
                        delay={stagger_delay(i)}
                        root_margin="0px"
                    >
                        <div class="event-head">
                            <div class="event-date">{event.date}</div>
                            <div class="event-badge">
                                <Icon kind={IconKind::Calendar} class="icon-sm" />
                                {"Upcoming"}
                            </div>
                        </div>
                        <div class="event-title">{event.title}</div>
                        <p>{event.desc}</p>
                    </FadeIn>
                }) }
            </div>
        </Section>
    }
}
