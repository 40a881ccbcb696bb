use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::navbar::BrandMark;
use crate::content::{self, FOOTER_LINKS};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}", year, content::TEMPLE_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        margin-top: 4rem;
                        background: linear-gradient(to top, #fef9c3, #fff7ed, transparent);
                    }
                    .footer-grid {
                        display: grid;
                        gap: 2rem;
                        padding: 3rem 0;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-weight: 700;
                        color: #111827;
                    }
                    .footer-brand .brand-mark {
                        width: 2.25rem;
                        height: 2.25rem;
                    }
                    .footer-tagline {
                        margin-top: 1rem;
                        max-width: 20rem;
                        font-size: 0.875rem;
                        color: #4b5563;
                    }
                    .footer-column {
                        font-size: 0.875rem;
                    }
                    .footer-heading {
                        font-weight: 600;
                        color: #111827;
                    }
                    .footer-links {
                        margin-top: 0.5rem;
                        list-style: none;
                        padding: 0;
                    }
                    .footer-links li + li {
                        margin-top: 0.25rem;
                    }
                    .footer-column a {
                        color: #4b5563;
                        text-decoration: none;
                    }
                    .footer-column a:hover {
                        color: #111827;
                    }
                    .footer-social {
                        margin-top: 0.5rem;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .footer-social a {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #374151;
                    }
                    .copyright {
                        margin-top: 0.75rem;
                        color: #374151;
                    }
                    @media (min-width: 768px) {
                        .footer-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <BrandMark />
                            {content::SHORT_NAME}
                        </div>
                        <p class="footer-tagline">{content::TAGLINE}</p>
                    </div>
                    <div class="footer-column">
                        <div class="footer-heading">{"Quick Links"}</div>
                        <ul class="footer-links">
                            { for FOOTER_LINKS.iter().map(|link| html! {
                                <li key={link.target}>
                                    <a href={content::anchor(link.target)}>{link.label}</a>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div class="footer-column">
                        <div class="footer-heading">{"Connect"}</div>
                        <div class="footer-social">
                            <a href="#">
                                <Icon kind={IconKind::Facebook} class="icon-sm" />
                                {"Facebook"}
                            </a>
                            <a href="#">
                                <Icon kind={IconKind::Instagram} class="icon-sm" />
                                {"Instagram"}
                            </a>
                        </div>
                        <div class="copyright">{copyright_line(year)}</div>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_temple_and_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Vadakkumpuram Sree Vishnumaya Devasthanam"
        );
    }
}
