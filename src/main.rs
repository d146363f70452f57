use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod components {
    pub mod footer;
}
mod sections {
    pub mod hero;
    pub mod services;
    pub mod website;
    pub mod app;
    pub mod software;
    pub mod about;
    pub mod portfolio;
    pub mod contact;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod about;
    pub mod portfolio;
    pub mod contact;
}

use components::footer::Footer;
use content::NAV_LINKS;
use pages::{
    about::AboutPage,
    contact::ContactPage,
    home::HomePage,
    portfolio::PortfolioPage,
    services::ServicesPage,
};

#[derive(Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/about")]
    About,
    #[at("/portfolio")]
    Portfolio,
    #[at("/contact")]
    Contact,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <HomePage /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <AboutPage /> }
        }
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <PortfolioPage /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > config::NAV_SOLID_SCROLL_PX);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Route changes close the mobile menu and jump back to the top.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            route,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    // Transparent treatment only near the top of the home page.
    let on_home = matches!(route, Some(Route::Home));
    let solid = *is_scrolled || !on_home;

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", solid.then(|| "solid"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: background 0.3s ease, border-color 0.3s ease;
                        border-bottom: 1px solid transparent;
                    }
                    .top-nav.solid {
                        background: rgba(15, 23, 42, 0.9);
                        backdrop-filter: blur(12px);
                        border-bottom-color: rgba(148, 163, 184, 0.2);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1200px;
                        height: 5rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-decoration: none;
                        color: #f8fafc;
                        font-weight: 700;
                        font-size: 1.1rem;
                    }
                    .nav-logo img {
                        height: 3rem;
                        width: auto;
                        object-fit: contain;
                    }
                    .nav-logo span {
                        color: #2dd4bf;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .nav-link {
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        color: #cbd5e1;
                        text-decoration: none;
                        font-size: 0.9rem;
                        font-weight: 500;
                        transition: color 0.2s ease, background 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #f8fafc;
                        background: rgba(148, 163, 184, 0.15);
                    }
                    .nav-link.active {
                        color: #f8fafc;
                        background: rgba(148, 163, 184, 0.25);
                    }
                    .nav-cta {
                        margin-left: 0.75rem;
                        padding: 0.6rem 1.4rem;
                        border-radius: 999px;
                        background: linear-gradient(90deg, #14b8a6, #6366f1);
                        color: #fff;
                        font-weight: 600;
                        font-size: 0.9rem;
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        padding: 0.5rem;
                        border: none;
                        background: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #f8fafc;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            position: fixed;
                            inset: 5rem 0 auto 0;
                            flex-direction: column;
                            align-items: stretch;
                            padding: 1rem 1.5rem 2rem;
                            background: rgba(15, 23, 42, 0.98);
                            border-bottom: 1px solid rgba(148, 163, 184, 0.2);
                            transform: translateY(-120%);
                            transition: transform 0.3s ease;
                        }
                        .nav-right.mobile-menu-open {
                            transform: translateY(0);
                        }
                        .nav-link, .nav-cta {
                            margin: 0.25rem 0;
                            text-align: center;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src={config::LOGO_PATH} alt="LMK SoftTech" />
                    {"LMK"}<span>{"SoftTech"}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for NAV_LINKS.iter().map(|(label, target)| {
                            let active = route == Some(*target);
                            html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route>
                                        to={*target}
                                        classes={classes!("nav-link", active.then(|| "active"))}
                                    >
                                        {*label}
                                    </Link<Route>>
                                </div>
                            }
                        })
                    }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-cta">
                            {"Get Started"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>
                {r#"
                    * { box-sizing: border-box; }
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto,
                            Helvetica, Arial, sans-serif;
                        background: #0f172a;
                        color: #e2e8f0;
                    }
                    h1, h2, h3, h4 { margin: 0; }
                    p { margin: 0; }
                    .page-offset { padding-top: 5rem; }
                "#}
            </style>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Panic messages end up in the browser console instead of vanishing.
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
