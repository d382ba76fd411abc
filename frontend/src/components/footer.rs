use chrono::Datelike;
use yew::prelude::*;

use crate::config;
use crate::content::{section, NavItem, FOOTER_QUICK_LINKS, FOOTER_RESOURCE_LINKS};

fn link_list(items: &[NavItem]) -> Html {
    html! {
        <ul>
            { for items.iter().map(|item| html! {
                <li key={item.href}><a href={item.href}>{item.label}</a></li>
            }) }
        </ul>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer id={section::CONTACT} class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #f7f7f5;
                        color: #475569;
                        padding: 3rem 1.5rem;
                        border-top: 1px solid #e2e8f0;
                    }
                    .site-footer .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .site-footer .footer-grid {
                        display: grid;
                        gap: 2rem;
                        margin-bottom: 2rem;
                    }
                    @media (min-width: 768px) {
                        .site-footer .footer-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }
                    .site-footer h4 {
                        color: #1e293b;
                        font-weight: 700;
                        margin: 0 0 1rem;
                    }
                    .site-footer ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: grid;
                        gap: 0.5rem;
                    }
                    .site-footer a {
                        color: inherit;
                        text-decoration: none;
                    }
                    .site-footer a:hover {
                        color: #0891b2;
                    }
                    .site-footer .footer-logo {
                        height: 7.5rem;
                        width: 7.5rem;
                    }
                    .site-footer .socials,
                    .site-footer .legal {
                        display: flex;
                        gap: 1rem;
                        margin-top: 1rem;
                    }
                    .site-footer .footer-bottom {
                        border-top: 1px solid #e2e8f0;
                        padding-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <a href="#home">
                            <img class="footer-logo" src={config::FOOTER_LOGO} alt="WHYTEHATTERS" />
                        </a>
                        <p>{"Securing Africa's digital future, one system at a time."}</p>
                    </div>

                    <div>
                        <h4>{"Quick Links"}</h4>
                        { link_list(&FOOTER_QUICK_LINKS) }
                    </div>

                    <div>
                        <h4>{"Resources"}</h4>
                        { link_list(&FOOTER_RESOURCE_LINKS) }
                    </div>

                    <div>
                        <h4>{"Contact"}</h4>
                        <ul>
                            <li>
                                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                            </li>
                        </ul>
                        <div class="socials">
                            <a href="#">{"LinkedIn"}</a>
                            <a href="#">{"Twitter"}</a>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} WHYTEHATTERS. All Rights Reserved.", year)}</p>
                    <div class="legal">
                        <a href="#">{"Terms of Use"}</a>
                        <a href="#">{"Privacy Policy"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
