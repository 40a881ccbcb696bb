use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::icons::{Icon, IconKind};
use crate::components::section::Section;
use crate::content::{self, ids};

#[function_component(Visit)]
pub fn visit() -> Html {
    html! {
        <Section
            id={ids::VISIT}
            title="Plan Your Visit"
            subtitle={Some(AttrValue::from("We welcome you to seek the blessings of Sree Vishnumaya"))}
        >
            <style>
                {r#"
                    .visit-grid {
                        display: grid;
                        gap: 1.5rem;
                        max-width: 64rem;
                        margin: 0 auto;
                    }
                    .visit-card {
                        padding: 1.5rem;
                    }
                    .visit-heading {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-weight: 700;
                        color: #111827;
                    }
                    .visit-address {
                        margin-top: 0.5rem;
                        color: #374151;
                    }
                    .maps-link {
                        margin-top: 0.75rem;
                        display: inline-flex;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #a16207;
                        text-decoration: none;
                    }
                    .contact-grid {
                        margin-top: 1.5rem;
                        display: grid;
                        gap: 1rem;
                    }
                    .contact-tile {
                        border-radius: 0.75rem;
                        border: 1px solid rgba(234, 179, 8, 0.2);
                        padding: 1rem;
                    }
                    .contact-label {
                        display: flex;
                        align-items: center;
                        gap: 0.375rem;
                        font-size: 0.875rem;
                        color: #4b5563;
                    }
                    .contact-tile a {
                        font-weight: 600;
                        color: #111827;
                        text-decoration: none;
                        word-break: break-all;
                    }
                    .visit-photo {
                        overflow: hidden;
                        border-radius: 1rem;
                        border: 1px solid rgba(234, 179, 8, 0.2);
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    }
                    .visit-photo .photo-layer {
                        position: static;
                        aspect-ratio: 4 / 3;
                    }
                    @media (min-width: 640px) {
                        .contact-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    @media (min-width: 1024px) {
                        .visit-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                "#}
            </style>
            <div class="visit-grid">
                <FadeIn class="card visit-card">
                    <div class="visit-heading">
                        <Icon kind={IconKind::MapPin} class="icon-md accent" />
                        {"Location"}
                    </div>
                    <p class="visit-address">{content::LOCATION}</p>
                    <a href={content::MAPS_URL} target="_blank" rel="noreferrer" class="maps-link">
                        {"Open in Google Maps →"}
                    </a>
                    <div class="contact-grid">
                        <div class="contact-tile">
                            <div class="contact-label">
                                <Icon kind={IconKind::Phone} class="icon-xs" />
                                {"Temple Phone"}
                            </div>
                            <a href={content::PHONE_LINK}>{content::PHONE_DISPLAY}</a>
                        </div>
                        <div class="contact-tile">
                            <div class="contact-label">
                                <Icon kind={IconKind::Mail} class="icon-xs" />
                                {"Email"}
                            </div>
                            <a href={content::mailto()}>{content::EMAIL}</a>
                        </div>
                    </div>
                </FadeIn>
                <FadeIn class="visit-photo">
                    <div class="photo-layer" style={format!("background-image: url('{}');", content::VISIT_IMAGE)}></div>
                </FadeIn>
            </div>
        </Section>
    }
}
