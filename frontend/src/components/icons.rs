use yew::prelude::*;

/// Line icons drawn on a 24x24 grid, stroked with the current text colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Shield,
    Lock,
    Users,
    Search,
    AlertTriangle,
    Award,
    ChevronRight,
    Menu,
    Close,
    CheckCircle,
    Target,
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconProps) -> Html {
    let shapes = match props.icon {
        Icon::Shield => html! {
            <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" />
        },
        Icon::Lock => html! {
            <>
                <rect x="3" y="11" width="18" height="11" rx="2" ry="2" />
                <path d="M7 11V7a5 5 0 0 1 10 0v4" />
            </>
        },
        Icon::Users => html! {
            <>
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
                <circle cx="9" cy="7" r="4" />
                <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
                <path d="M16 3.13a4 4 0 0 1 0 7.75" />
            </>
        },
        Icon::Search => html! {
            <>
                <circle cx="11" cy="11" r="8" />
                <path d="m21 21-4.3-4.3" />
            </>
        },
        Icon::AlertTriangle => html! {
            <>
                <path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z" />
                <path d="M12 9v4" />
                <path d="M12 17h.01" />
            </>
        },
        Icon::Award => html! {
            <>
                <circle cx="12" cy="8" r="6" />
                <path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" />
            </>
        },
        Icon::ChevronRight => html! {
            <path d="m9 18 6-6-6-6" />
        },
        Icon::Menu => html! {
            <>
                <line x1="4" x2="20" y1="12" y2="12" />
                <line x1="4" x2="20" y1="6" y2="6" />
                <line x1="4" x2="20" y1="18" y2="18" />
            </>
        },
        Icon::Close => html! {
            <>
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </>
        },
        Icon::CheckCircle => html! {
            <>
                <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
                <path d="m9 11 3 3L22 4" />
            </>
        },
        Icon::Target => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <circle cx="12" cy="12" r="6" />
                <circle cx="12" cy="12" r="2" />
            </>
        },
    };

    let size = props.size.to_string();

    html! {
        <svg
            class={props.class.clone()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { shapes }
        </svg>
    }
}
