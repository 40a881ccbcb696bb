use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::icons::{Icon, IconKind};
use crate::components::section::Section;
use crate::content::{self, ids};

#[function_component(Donate)]
pub fn donate() -> Html {
    html! {
        <Section
            id={ids::DONATE}
            title="Support the Temple"
            subtitle={Some(AttrValue::from("Your contribution helps maintain rituals, annadanam, and community service"))}
        >
            <style>
                {r#"
                    .donate-panel {
                        max-width: 64rem;
                        margin: 0 auto;
                        overflow: hidden;
                        border-radius: 1.5rem;
                    }
                    .donate-grid {
                        display: grid;
                    }
                    .donate-body {
                        padding: 2rem;
                    }
                    .donate-title {
                        font-size: 1.5rem;
                        font-weight: 800;
                        color: #111827;
                    }
                    .donate-intro {
                        margin-top: 0.5rem;
                        color: #4b5563;
                    }
                    .donate-methods {
                        margin-top: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .donate-method {
                        border-radius: 0.75rem;
                        border: 1px solid rgba(234, 179, 8, 0.3);
                        padding: 1rem;
                        font-size: 0.875rem;
                    }
                    .donate-method-label {
                        color: #4b5563;
                    }
                    .upi-id {
                        font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                        font-size: 1.125rem;
                    }
                    .donate-actions {
                        margin-top: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .donate-visual {
                        position: relative;
                        min-height: 280px;
                    }
                    @media (min-width: 640px) {
                        .donate-body {
                            padding: 2.5rem;
                        }
                        .donate-actions {
                            flex-direction: row;
                        }
                    }
                    @media (min-width: 1024px) {
                        .donate-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                        .donate-visual {
                            min-height: 100%;
                        }
                    }
                "#}
            </style>
            <FadeIn class="card donate-panel">
                <div class="donate-grid">
                    <div class="donate-body">
                        <div class="donate-title">{"Make a Donation"}</div>
                        <p class="donate-intro">{content::DONATE_INTRO}</p>
                        <div class="donate-methods">
                            <div class="donate-method">
                                <div class="donate-method-label">{"UPI ID"}</div>
                                <div class="upi-id">{content::UPI_ID}</div>
                            </div>
                            <div class="donate-method">
                                <div class="donate-method-label">{"Bank Transfer"}</div>
                                <div>{format!("Account Name: {}", content::BANK_ACCOUNT_NAME)}</div>
                                <div>{content::bank_details_line()}</div>
                            </div>
                        </div>
                        <div class="donate-actions">
                            <a href="#" class="button button-primary button-lg">{"Donate Now"}</a>
                            <a href={content::mailto()} class="button button-outline button-lg">
                                <Icon kind={IconKind::Mail} class="icon-sm" />
                                {"Get Receipt via Email"}
                            </a>
                        </div>
                    </div>
                    <div class="donate-visual">
                        <div class="warm-gradient"></div>
                        <div class="photo-layer multiply" style={format!("background-image: url('{}');", content::SHRINE_IMAGE)}></div>
                        <div class="photo-shade light"></div>
                    </div>
                </div>
            </FadeIn>
        </Section>
    }
}
