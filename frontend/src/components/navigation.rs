use log::debug;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::config;
use crate::content::NAV_ITEMS;

/// Replacement source for a logo that failed to load, or `None` when the
/// fallback itself is what failed.
pub fn logo_fallback(current_src: &str) -> Option<&'static str> {
    if current_src.ends_with(config::FALLBACK_LOGO) {
        None
    } else {
        Some(config::FALLBACK_LOGO)
    }
}

pub fn menu_toggle_label(open: bool) -> &'static str {
    if open {
        "Close menu"
    } else {
        "Open menu"
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub mobile_menu_open: bool,
    pub on_mobile_menu_toggle: Callback<()>,
    pub on_nav_link_click: Callback<()>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let NavigationProps {
        mobile_menu_open,
        on_mobile_menu_toggle,
        on_nav_link_click,
    } = props;

    let link_click = {
        let on_nav_link_click = on_nav_link_click.clone();
        Callback::from(move |_: MouseEvent| on_nav_link_click.emit(()))
    };

    let toggle = {
        let on_mobile_menu_toggle = on_mobile_menu_toggle.clone();
        Callback::from(move |_: MouseEvent| on_mobile_menu_toggle.emit(()))
    };

    let logo_error = Callback::from(|e: Event| {
        let img: HtmlImageElement = e.target_unchecked_into();
        if let Some(next) = logo_fallback(&img.src()) {
            debug!("Logo failed to load, using {}", next);
            img.set_src(next);
        }
    });

    let links = |class: &'static str| -> Html {
        NAV_ITEMS
            .iter()
            .map(|item| {
                html! {
                    <a key={item.href} href={item.href} class={class} onclick={link_click.clone()}>
                        {item.label}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <nav class="site-nav">
            <style>
                {r#"
                    .site-nav {
                        position: fixed;
                        width: 100%;
                        top: 0;
                        z-index: 50;
                        background: rgba(247, 247, 245, 0.9);
                        backdrop-filter: blur(16px);
                        border-bottom: 1px solid #e2e8f0;
                    }
                    .site-nav .nav-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .site-nav .nav-logo {
                        height: 3rem;
                        width: 3rem;
                    }
                    .site-nav .nav-links,
                    .site-nav .nav-ctas {
                        display: none;
                        align-items: center;
                        gap: 2rem;
                    }
                    .site-nav .nav-ctas {
                        gap: 1rem;
                    }
                    .site-nav .nav-link {
                        color: #334155;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .site-nav .nav-link:hover {
                        color: #0891b2;
                    }
                    .site-nav .cta-primary,
                    .site-nav .cta-outline {
                        padding: 0.625rem 1.5rem;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        text-decoration: none;
                        text-align: center;
                        transition: transform 0.2s, background 0.2s;
                    }
                    .site-nav .cta-primary {
                        color: #fff;
                        background: linear-gradient(to right, #06b6d4, #2563eb);
                    }
                    .site-nav .cta-primary:hover {
                        transform: scale(1.05);
                    }
                    .site-nav .cta-outline {
                        color: #0891b2;
                        border: 2px solid #06b6d4;
                    }
                    .site-nav .cta-outline:hover {
                        background: rgba(6, 182, 212, 0.1);
                    }
                    .site-nav .menu-toggle {
                        padding: 0.5rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: transparent;
                        color: #0f172a;
                        cursor: pointer;
                    }
                    .site-nav .menu-toggle:hover {
                        background: #f1f5f9;
                    }
                    .site-nav .mobile-menu {
                        background: #f7f7f5;
                        border-top: 1px solid #e2e8f0;
                        padding: 1.5rem 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        animation: slideDown 0.2s ease-out;
                    }
                    .site-nav .mobile-menu .nav-ctas {
                        display: flex;
                        flex-direction: column;
                        align-items: stretch;
                        gap: 0.75rem;
                        padding-top: 1rem;
                        border-top: 1px solid #e2e8f0;
                    }
                    @keyframes slideDown {
                        from { transform: translateY(-0.5rem); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @media (min-width: 1024px) {
                        .site-nav .nav-inner > .nav-links,
                        .site-nav .nav-inner > .nav-ctas {
                            display: flex;
                        }
                        .site-nav .menu-toggle,
                        .site-nav .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="nav-inner">
                <img
                    class="nav-logo"
                    src={config::NAV_LOGO}
                    alt="WHYTEHATTERS Cybersecurity"
                    loading="lazy"
                    onerror={logo_error}
                />

                <div class="nav-links">
                    { links("nav-link") }
                </div>

                <div class="nav-ctas">
                    <a href="#contact" class="cta-primary" aria-label="Hire Security Consultants" onclick={link_click.clone()}>
                        {"Hire Security Consultants"}
                    </a>
                    <a href="#hacker-network" class="cta-outline" aria-label="Join Ethical Hackers Network" onclick={link_click.clone()}>
                        {"Join Ethical Hackers"}
                    </a>
                </div>

                <button
                    class="menu-toggle"
                    onclick={toggle}
                    aria-label={menu_toggle_label(*mobile_menu_open)}
                    aria-expanded={mobile_menu_open.to_string()}
                >
                    <IconView icon={if *mobile_menu_open { Icon::Close } else { Icon::Menu }} size={28} />
                </button>
            </div>

            if *mobile_menu_open {
                <div class="mobile-menu">
                    { links("nav-link") }
                    <div class="nav-ctas">
                        <a href="#contact" class="cta-primary" onclick={link_click.clone()}>
                            {"Hire Security Consultants"}
                        </a>
                        <a href="#hacker-network" class="cta-outline" onclick={link_click.clone()}>
                            {"Join Ethical Hackers"}
                        </a>
                    </div>
                </div>
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_logo_falls_back_once() {
        let next = logo_fallback("https://whytehatters.com/assets/whytehatter-logo1.png");
        assert_eq!(next, Some(config::FALLBACK_LOGO));
        let absolute = format!("https://whytehatters.com{}", config::FALLBACK_LOGO);
        assert_eq!(logo_fallback(&absolute), None);
    }

    #[test]
    fn toggle_label_follows_menu_state() {
        assert_eq!(menu_toggle_label(true), "Close menu");
        assert_eq!(menu_toggle_label(false), "Open menu");
    }
}
