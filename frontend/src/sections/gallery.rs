use yew::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::section::Section;
use crate::content::{ids, GALLERY_IMAGES};

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <Section
            id={ids::GALLERY}
            title="Temple Gallery"
            subtitle={Some(AttrValue::from("Glimpses of devotion and tradition"))}
        >
            <div style="max-width: 64rem; margin: 0 auto;">
                <Carousel images={GALLERY_IMAGES} />
            </div>
        </Section>
    }
}
