use yew::prelude::*;

use crate::components::fade_in::FadeIn;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Page block with a centered, fading heading above its content.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class="page-section">
            <div class="page-section-backdrop"></div>
            <div class="container">
                <FadeIn class="section-heading">
                    <h2>{&props.title}</h2>
                    {
                        if let Some(subtitle) = &props.subtitle {
                            html! { <p class="section-subtitle">{subtitle}</p> }
                        } else {
                            html! {}
                        }
                    }
                </FadeIn>
                { for props.children.iter() }
            </div>
        </section>
    }
}
