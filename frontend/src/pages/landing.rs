use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::decrypted_text::{AnimateOn, DecryptedText};
use crate::components::text_effect::RevealDirection;
use crate::components::footer::Footer;
use crate::components::icons::{Icon, IconView};
use crate::components::letter_glitch::LetterGlitch;
use crate::components::navigation::Navigation;
use crate::components::newsletter::NewsletterSignup;
use crate::config;
use crate::content::{
    section, BREACH_COSTS, CASE_STUDIES, CLIENT_SEGMENTS, HACKER_NETWORK_PERKS, HERO_FEATURES,
    HERO_HEADLINES, OPENINGS, RESOURCE_CARDS, SERVICES,
};

/// Page-level transient state: the mobile drawer and the loading overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub mobile_menu_open: bool,
    pub is_loading: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            mobile_menu_open: false,
            is_loading: true,
        }
    }
}

pub enum UiAction {
    ToggleMobileMenu,
    CloseMobileMenu,
    /// One-way; the overlay never comes back.
    LoadingFinished,
}

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            UiAction::ToggleMobileMenu => UiState {
                mobile_menu_open: !self.mobile_menu_open,
                ..(*self).clone()
            },
            UiAction::CloseMobileMenu if self.mobile_menu_open => UiState {
                mobile_menu_open: false,
                ..(*self).clone()
            },
            UiAction::LoadingFinished if self.is_loading => UiState {
                is_loading: false,
                ..(*self).clone()
            },
            UiAction::CloseMobileMenu | UiAction::LoadingFinished => return self,
        };
        Rc::new(next)
    }
}

/// Runs `scroll` on the target when there is one.
fn scroll_into<T>(target: Option<T>, scroll: impl FnOnce(&T)) -> bool {
    match target {
        Some(target) => {
            scroll(&target);
            true
        }
        None => false,
    }
}

/// Smooth-scrolls the element with `id` into view. Missing targets are ignored.
pub fn scroll_to_section(id: &str) -> bool {
    let target = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    let found = scroll_into(target, |element| {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    });
    if !found {
        debug!("No section with id {:?}, not scrolling", id);
    }
    found
}

/// Starts the overlay timer. Dropping the returned `Timeout` cancels it.
pub fn schedule_loading_finish(on_done: impl FnOnce() + 'static) -> Timeout {
    Timeout::new(config::LOADING_DELAY_MS, move || {
        debug!("Loading overlay finished");
        on_done();
    })
}

fn scroll_callback(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        scroll_to_section(id);
    })
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    is_loading: bool,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    html! {
        <section id={section::HOME} class="hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <h1 class="hero-title">
                        // Headlines wait for the overlay so the animation isn't spent behind it.
                        if !props.is_loading {
                            { for HERO_HEADLINES.iter().enumerate().map(|(index, line)| html! {
                                <>
                                    <DecryptedText
                                        text={*line}
                                        animate_on={AnimateOn::View}
                                        speed={config::DECRYPT_SPEED_MS}
                                        sequential={true}
                                        class={classes!((index == 0).then_some("gradient-text"))}
                                        encrypted_class="encrypted"
                                    />
                                    <br />
                                </>
                            }) }
                        }
                    </h1>

                    <p class="lead">
                        {"At WHYTEHATTERS we don't just test — we partner with governments, companies, startups, and ethical hackers to proactively secure systems, remediate vulnerabilities, and prevent financial loss from data breaches."}
                    </p>

                    <div class="cost-alert" role="alert" aria-labelledby="cost-heading">
                        <IconView icon={Icon::AlertTriangle} class="alert-icon" />
                        <div>
                            <p id="cost-heading" class="cost-heading">{"The Cost of Inaction:"}</p>
                            { for BREACH_COSTS.iter().map(|cost| html! {
                                <p>
                                    {cost.region}{": "}
                                    <span class="cost-amount">{cost.amount}</span>
                                </p>
                            }) }
                        </div>
                    </div>

                    <div class="hero-ctas">
                        <button class="btn-primary" onclick={scroll_callback(section::CONSULTING)}>
                            {"Book a Security Assessment"}
                            <IconView icon={Icon::ChevronRight} class="chevron" />
                        </button>
                        <button class="btn-outline" onclick={scroll_callback(section::HACKER_NETWORK)}>
                            {"Become an Ethical Hacker Partner"}
                        </button>
                    </div>
                </div>

                <div class="hero-card-wrap">
                    <div class="hero-glow" aria-hidden="true"></div>
                    <div class="card hero-card">
                        <IconView icon={Icon::Lock} size={64} class="accent" />
                        <h3>{"Proactive Security, Proven Results"}</h3>
                        <div class="feature-list" role="list">
                            { for HERO_FEATURES.iter().map(|feature| html! {
                                <div class="feature" role="listitem">
                                    <IconView icon={Icon::CheckCircle} class="check" />
                                    <span>{*feature}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn client_segments() -> Html {
    html! {
        <section class="segments">
            <div class="container">
                <h2 class="section-title">{"Who We Serve"}</h2>
                <div class="grid grid-4">
                    { for CLIENT_SEGMENTS.iter().map(|segment| html! {
                        <div key={segment.title} class="card segment">
                            <img src={segment.image_url} alt={segment.title} loading="lazy" />
                            <h3>{segment.title}</h3>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn services() -> Html {
    html! {
        <section id={section::CONSULTING} class="services">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{"What We Do"}</h2>
                    <p class="lead">{"Comprehensive security services tailored to your needs"}</p>
                </div>
                <div class="grid grid-3">
                    { for SERVICES.iter().map(|service| html! {
                        <div key={service.title} class="card service">
                            <IconView icon={service.icon} size={40} class="accent service-icon" />
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <button class="text-link">
                                {"Learn More"}
                                <IconView icon={Icon::ChevronRight} size={20} />
                            </button>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn hacker_network() -> Html {
    html! {
        <section id={section::HACKER_NETWORK} class="hacker-network">
            <div class="container split">
                <div>
                    <h2 class="section-title">
                        <DecryptedText
                            text="Ethical Hacker Network"
                            animate_on={AnimateOn::View}
                            sequential={true}
                            reveal_direction={RevealDirection::End}
                            encrypted_class="encrypted"
                        />
                    </h2>
                    <p class="lead">
                        {"Join a vetted community of security researchers who work alongside our consultants on real engagements across the continent."}
                    </p>
                    <a href="#contact" class="btn-primary">{"Apply to Join"}</a>
                </div>
                <div class="card">
                    <IconView icon={Icon::Users} size={48} class="accent" />
                    <div class="feature-list" role="list">
                        { for HACKER_NETWORK_PERKS.iter().map(|perk| html! {
                            <div class="feature" role="listitem">
                                <IconView icon={Icon::CheckCircle} class="check" />
                                <span>{*perk}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn case_studies() -> Html {
    html! {
        <section id={section::CASE_STUDIES} class="case-studies">
            <div class="container">
                <h2 class="section-title">{"Case Studies"}</h2>
                <div class="grid grid-3">
                    { for CASE_STUDIES.iter().map(|study| html! {
                        <article key={study.headline} class="card">
                            <span class="tag">{study.sector}</span>
                            <h3>{study.headline}</h3>
                            <p>{study.summary}</p>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn resources() -> Html {
    html! {
        <section id={section::RESOURCES} class="resources">
            <div class="container">
                <h2 class="section-title">{"Resources & Insights"}</h2>
                <div class="grid grid-3">
                    { for RESOURCE_CARDS.iter().map(|card| html! {
                        <div key={card.title} class="card">
                            <h3>{card.title}</h3>
                            <p>{card.body}</p>
                            <button class="text-link">
                                {card.action}
                                <IconView icon={Icon::ChevronRight} size={20} />
                            </button>
                        </div>
                    }) }
                    <NewsletterSignup />
                </div>
            </div>
        </section>
    }
}

fn careers() -> Html {
    html! {
        <section id={section::CAREERS} class="careers">
            <div class="container">
                <h2 class="section-title">{"Careers"}</h2>
                <p class="lead centered">
                    {"Help us close Africa's security loopholes. Send your CV to "}
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                </p>
                <ul class="openings">
                    { for OPENINGS.iter().map(|opening| html! {
                        <li key={opening.role} class="card opening">
                            <span>{opening.role}</span>
                            <span class="tag">{opening.kind}</span>
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let ui = use_reducer(UiState::default);

    {
        let ui = ui.clone();
        use_effect_with_deps(
            move |_| {
                info!("Landing page mounted");
                let timer = schedule_loading_finish(move || ui.dispatch(UiAction::LoadingFinished));
                // Dropping the timeout cancels it if we unmount first.
                move || drop(timer)
            },
            (),
        );
    }

    let on_mobile_menu_toggle = {
        let ui = ui.clone();
        Callback::from(move |_| ui.dispatch(UiAction::ToggleMobileMenu))
    };

    let on_nav_link_click = {
        let ui = ui.clone();
        Callback::from(move |_| ui.dispatch(UiAction::CloseMobileMenu))
    };

    html! {
        <div class="landing">
            <style>
                {r#"
                    .landing {
                        min-height: 100vh;
                        position: relative;
                        color: #fff;
                        background: linear-gradient(to bottom right, #020617, #0f172a, #020617);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .landing .loading-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                    }
                    .landing .loading-mark {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: clamp(2rem, 6vw, 4rem);
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        pointer-events: none;
                    }
                    .landing main {
                        position: relative;
                        opacity: 0;
                        transition: opacity 1s;
                    }
                    .landing main.loaded {
                        opacity: 1;
                    }
                    .landing .container {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .landing section {
                        position: relative;
                        z-index: 10;
                        padding: 5rem 1.5rem;
                        scroll-margin-top: 5rem;
                    }
                    .landing .hero {
                        padding-top: 8rem;
                        overflow: hidden;
                    }
                    .landing .segments,
                    .landing .hacker-network,
                    .landing .careers {
                        background: rgba(15, 23, 42, 0.5);
                    }
                    .landing .grid,
                    .landing .hero-grid,
                    .landing .split {
                        display: grid;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .landing .grid-3 { grid-template-columns: repeat(2, 1fr); }
                        .landing .grid-4 { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .landing .grid-3 { grid-template-columns: repeat(3, 1fr); }
                        .landing .grid-4 { grid-template-columns: repeat(4, 1fr); }
                        .landing .hero-grid,
                        .landing .split {
                            grid-template-columns: repeat(2, 1fr);
                            align-items: center;
                        }
                    }
                    .landing .hero-title {
                        font-size: clamp(3rem, 6vw, 4.5rem);
                        font-weight: 700;
                        line-height: 1.15;
                        min-height: 330px;
                        margin: 0;
                    }
                    .landing .gradient-text {
                        background: linear-gradient(to right, #22d3ee, #3b82f6);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .landing .encrypted {
                        color: #22d3ee;
                        opacity: 0.7;
                    }
                    .landing .sr-only {
                        position: absolute;
                        width: 1px;
                        height: 1px;
                        overflow: hidden;
                        clip: rect(0, 0, 0, 0);
                        white-space: nowrap;
                    }
                    .landing .lead {
                        font-size: 1.25rem;
                        line-height: 1.7;
                        color: #cbd5e1;
                    }
                    .landing .centered,
                    .landing .section-header,
                    .landing .section-title {
                        text-align: center;
                    }
                    .landing .section-title {
                        font-size: 3rem;
                        font-weight: 700;
                        margin: 0 0 3rem;
                    }
                    .landing .section-header .section-title {
                        margin-bottom: 1rem;
                    }
                    .landing .section-header {
                        margin-bottom: 4rem;
                    }
                    .landing .cost-alert {
                        display: flex;
                        gap: 0.75rem;
                        align-items: flex-start;
                        padding: 1.5rem;
                        margin: 2rem 0;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(239, 68, 68, 0.3);
                        background: linear-gradient(to right, rgba(239, 68, 68, 0.2), rgba(249, 115, 22, 0.2));
                        color: #cbd5e1;
                    }
                    .landing .cost-alert p { margin: 0.25rem 0; }
                    .landing .alert-icon { color: #f87171; flex-shrink: 0; margin-top: 0.25rem; }
                    .landing .cost-heading { font-weight: 600; font-size: 1.125rem; color: #fff; }
                    .landing .cost-amount { font-weight: 700; color: #f87171; }
                    .landing .hero-ctas {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .landing .btn-primary,
                    .landing .btn-outline {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem 2rem;
                        border-radius: 0.5rem;
                        font-weight: 700;
                        font-size: 1.125rem;
                        color: #fff;
                        text-decoration: none;
                        cursor: pointer;
                        transition: transform 0.2s, background 0.2s;
                    }
                    .landing .btn-primary {
                        border: none;
                        background: linear-gradient(to right, #06b6d4, #2563eb);
                    }
                    .landing .btn-primary:hover { transform: scale(1.05); }
                    .landing .btn-primary .chevron { margin-left: 0.5rem; transition: transform 0.2s; }
                    .landing .btn-primary:hover .chevron { transform: translateX(0.25rem); }
                    .landing .btn-outline {
                        background: transparent;
                        border: 2px solid #06b6d4;
                    }
                    .landing .btn-outline:hover { background: rgba(6, 182, 212, 0.1); }
                    .landing .hero-card-wrap { position: relative; }
                    .landing .hero-glow {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, rgba(6, 182, 212, 0.3), rgba(59, 130, 246, 0.3));
                        filter: blur(64px);
                    }
                    .landing .card {
                        position: relative;
                        background: rgba(30, 41, 59, 0.5);
                        backdrop-filter: blur(4px);
                        border: 1px solid #334155;
                        border-radius: 0.75rem;
                        padding: 2rem;
                        transition: border-color 0.2s;
                    }
                    .landing .card:hover { border-color: #06b6d4; }
                    .landing .card h3 { font-size: 1.25rem; font-weight: 700; margin: 0 0 0.75rem; }
                    .landing .card p { color: #cbd5e1; margin: 0 0 1rem; }
                    .landing .hero-card { border-radius: 1rem; }
                    .landing .hero-card h3 { font-size: 1.5rem; margin: 1.5rem 0 1rem; }
                    .landing .accent { color: #22d3ee; }
                    .landing .service-icon { margin-bottom: 1rem; transition: transform 0.2s; }
                    .landing .service:hover .service-icon { transform: scale(1.1); }
                    .landing .feature-list { display: grid; gap: 1rem; margin-top: 1rem; }
                    .landing .feature { display: flex; align-items: center; gap: 0.75rem; }
                    .landing .check { color: #4ade80; flex-shrink: 0; }
                    .landing .segment { padding: 0; overflow: hidden; }
                    .landing .segment img {
                        width: 100%;
                        height: 10rem;
                        object-fit: cover;
                        transition: transform 0.3s;
                    }
                    .landing .segment:hover img { transform: scale(1.05); }
                    .landing .segment h3 { font-size: 1.125rem; font-weight: 600; padding: 1.5rem; text-align: center; margin: 0; }
                    .landing .text-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.25rem;
                        padding: 0;
                        border: none;
                        background: none;
                        color: #22d3ee;
                        font-weight: 600;
                        cursor: pointer;
                        transition: gap 0.2s;
                    }
                    .landing .text-link:hover { gap: 0.5rem; }
                    .landing .tag {
                        display: inline-block;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: #22d3ee;
                        margin-bottom: 0.75rem;
                    }
                    .landing .careers a { color: #22d3ee; }
                    .landing .openings {
                        list-style: none;
                        padding: 0;
                        margin: 2rem auto 0;
                        max-width: 40rem;
                        display: grid;
                        gap: 1rem;
                    }
                    .landing .opening {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.25rem 1.5rem;
                    }
                    .landing .opening .tag { margin: 0; }
                    .landing .newsletter input {
                        box-sizing: border-box;
                        width: 100%;
                        padding: 0.5rem 1rem;
                        margin-bottom: 0.75rem;
                        border-radius: 0.5rem;
                        border: 1px solid #475569;
                        background: #0f172a;
                        color: #fff;
                    }
                    .landing .newsletter input:focus { outline: none; border-color: #22d3ee; }
                    .landing .newsletter button {
                        width: 100%;
                        padding: 0.5rem 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: #06b6d4;
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .landing .newsletter button:hover { background: #22d3ee; }
                    .landing .newsletter button:disabled { opacity: 0.5; cursor: not-allowed; }
                    .landing .form-error { color: #f87171 !important; font-size: 0.875rem; margin-bottom: 0.75rem; }
                "#}
            </style>

            if ui.is_loading {
                <div class="loading-overlay">
                    <LetterGlitch />
                    <div class="loading-mark">
                        <DecryptedText
                            text="WHYTEHATTERS"
                            animate_on={AnimateOn::Mount}
                            sequential={true}
                            reveal_direction={RevealDirection::Center}
                            encrypted_class="encrypted"
                        />
                    </div>
                </div>
            }

            <Navigation
                mobile_menu_open={ui.mobile_menu_open}
                on_mobile_menu_toggle={on_mobile_menu_toggle}
                on_nav_link_click={on_nav_link_click}
            />

            <main class={classes!((!ui.is_loading).then_some("loaded"))}>
                <Hero is_loading={ui.is_loading} />
                { client_segments() }
                { services() }
                { hacker_network() }
                { case_studies() }
                { resources() }
                { careers() }
            </main>

            <Footer />
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod render_tests {
    use tokio::test;
    use yew::ServerRenderer;

    use super::Landing;
    use crate::content::{CLIENT_SEGMENTS, HERO_HEADLINES, NAV_ITEMS, SERVICES};

    async fn rendered_page() -> String {
        ServerRenderer::<Landing>::new().hydratable(false).render().await
    }

    fn escaped(text: &str) -> String {
        text.replace('&', "&amp;")
    }

    /// Asserts each needle occurs exactly once, in the given order.
    fn assert_in_order(html: &str, needles: &[String]) {
        let mut last = None;
        for needle in needles {
            assert_eq!(html.matches(needle.as_str()).count(), 1, "{}", needle);
            let at = html.find(needle.as_str());
            assert!(at > last, "{} is out of order", needle);
            last = at;
        }
    }

    #[test]
    async fn every_nav_anchor_has_one_target_in_menu_order() {
        let html = rendered_page().await;
        let ids: Vec<String> = NAV_ITEMS
            .iter()
            .map(|item| format!("id=\"{}\"", item.href.trim_start_matches('#')))
            .collect();
        assert_in_order(&html, &ids);
    }

    #[test]
    async fn services_render_in_declared_order() {
        let html = rendered_page().await;
        let titles: Vec<String> = SERVICES
            .iter()
            .map(|service| format!("<h3>{}</h3>", escaped(service.title)))
            .collect();
        assert_in_order(&html, &titles);
    }

    #[test]
    async fn client_segments_render_in_declared_order() {
        let html = rendered_page().await;
        let titles: Vec<String> = CLIENT_SEGMENTS
            .iter()
            .map(|segment| format!("<h3>{}</h3>", escaped(segment.title)))
            .collect();
        assert_in_order(&html, &titles);
    }

    #[test]
    async fn first_paint_shows_overlay_and_holds_headlines() {
        let html = rendered_page().await;
        assert!(html.contains("class=\"loading-overlay\""));
        assert!(html.contains("<span class=\"sr-only\">WHYTEHATTERS</span>"));
        assert!(!html.contains("class=\"loaded\""));
        for headline in HERO_HEADLINES {
            assert!(!html.contains(headline), "{}", headline);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;

    #[wasm_bindgen_test]
    fn scrolling_to_a_missing_section_reports_false() {
        assert!(!scroll_to_section("no-such-section"));
    }

    #[wasm_bindgen_test]
    async fn loading_timer_fires_once_elapsed() {
        let fired = Rc::new(Cell::new(false));
        let _timer = {
            let fired = fired.clone();
            schedule_loading_finish(move || fired.set(true))
        };
        TimeoutFuture::new(config::LOADING_DELAY_MS + 100).await;
        assert!(fired.get());
    }

    #[wasm_bindgen_test]
    async fn dropped_loading_timer_never_fires() {
        let fired = Rc::new(Cell::new(false));
        let timer = {
            let fired = fired.clone();
            schedule_loading_finish(move || fired.set(true))
        };
        drop(timer);
        TimeoutFuture::new(config::LOADING_DELAY_MS + 100).await;
        assert!(!fired.get());
    }
}
