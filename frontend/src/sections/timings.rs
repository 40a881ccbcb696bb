use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::icons::{Icon, IconKind};
use crate::components::section::Section;
use crate::content::{ids, FESTIVAL_NOTE, TIMINGS};

#[function_component(Timings)]
pub fn timings() -> Html {
    html! {
        <Section
            id={ids::TIMINGS}
            title="Darshan Timings"
            subtitle={Some(AttrValue::from("Timings may vary on special festival days"))}
        >
            <style>
                {r#"
                    .timings-grid {
                        display: grid;
                        gap: 1.5rem;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .timing-card {
                        padding: 1.5rem;
                    }
                    .timing-title {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-weight: 700;
                        color: #111827;
                    }
                    .timing-slots {
                        margin-top: 0.75rem;
                        list-style: none;
                        padding: 0;
                        color: #374151;
                    }
                    .timing-slots li {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.5rem;
                    }
                    .timing-slots li + li {
                        margin-top: 0.5rem;
                    }
                    .slot-bullet {
                        margin-top: 0.5rem;
                        width: 0.375rem;
                        height: 0.375rem;
                        flex-shrink: 0;
                        border-radius: 9999px;
                        background: #ca8a04;
                    }
                    .festival-note {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(234, 179, 8, 0.2);
                        background: rgba(254, 252, 232, 0.7);
                        padding: 1.5rem;
                        color: #713f12;
                    }
                    @media (min-width: 640px) {
                        .timings-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                        .festival-note-wrap {
                            grid-column: span 2;
                        }
                    }
                "#}
            </style>
            <div class="timings-grid">
                { for TIMINGS.iter().map(|block| html! {
                    <FadeIn key={block.title} class="card timing-card">
                        <div class="timing-title">
                            <Icon kind={IconKind::Clock} class="icon-md accent" />
                            {block.title}
                        </div>
                        <ul class="timing-slots">
                            { for block.slots.iter().map(|slot| html! {
                                <li key={*slot}>
                                    <span class="slot-bullet"></span>
                                    <span>{*slot}</span>
                                </li>
                            }) }
                        </ul>
                    </FadeIn>
                }) }
                <FadeIn class="festival-note-wrap">
                    <div class="festival-note">
                        <Icon kind={IconKind::Calendar} class="icon-md" />
                        <p>{FESTIVAL_NOTE}</p>
                    </div>
                </FadeIn>
            </div>
        </Section>
    }
}
