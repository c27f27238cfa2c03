use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod carousel;
mod config;
mod gemini;
mod viewport;
mod pages {
    pub mod home;
}
mod components {
    pub mod consultant;
    pub mod faq;
    pub mod legal;
    pub mod pricing;
    pub mod process;
}

use pages::home::Home;
use viewport::NavVisibility;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
    }
}

/// Smooth-scrolls to a section anchor, offset for the fixed 90px header.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        let header_offset = 90.0;
        let top =
            element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0) - header_offset;
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let nav_visible = use_state(|| true);
    let visibility = use_mut_ref(NavVisibility::default);

    {
        let nav_visible = nav_visible.clone();
        let visibility = visibility.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let y = window_clone.scroll_y().unwrap_or(0.0);
                    let next = visibility.borrow().on_scroll(y);
                    *visibility.borrow_mut() = next;
                    nav_visible.set(next.visible());
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Nav links scroll within the single page rather than routing.
    let go_to_section = {
        let menu_open = menu_open.clone();
        Callback::from(move |(e, id): (MouseEvent, &'static str)| {
            e.prevent_default();
            scroll_to_section(id);
            menu_open.set(false);
        })
    };

    let section_link = |label: &'static str, id: &'static str| {
        let go_to_section = go_to_section.clone();
        html! {
            <a
                href={format!("#{}", id)}
                class="nav-link"
                onclick={Callback::from(move |e: MouseEvent| go_to_section.emit((e, id)))}
            >
                {label}
            </a>
        }
    };

    let cta = |mobile: bool| {
        let go_to_section = go_to_section.clone();
        html! {
            <button
                class={classes!("nav-cta", mobile.then_some("nav-cta-mobile"))}
                onclick={Callback::from(move |e: MouseEvent| go_to_section.emit((e, "programs")))}
            >
                {"Start Today"}
            </button>
        }
    };

    html! {
        <nav class={classes!("top-nav", (!*nav_visible).then_some("nav-hidden"))}>
            <div class="nav-content">
                <div class="nav-logo">
                    <span class="nav-logo-mark">{"🛡"}</span>
                    <span class="nav-logo-text">{"FLORIDA CREDIT FIRM"}</span>
                </div>

                <div class="nav-links">
                    { section_link("Home", "home") }
                    { section_link("Services", "services") }
                    { section_link("Pricing", "programs") }
                    { section_link("Reviews", "reviews") }
                    { cta(false) }
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { section_link("Home", "home") }
                            { section_link("Services", "services") }
                            { section_link("Pricing", "programs") }
                            { section_link("Reviews", "reviews") }
                            { cta(true) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(5, 10, 24, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    transition: transform 0.3s ease;
                }

                .top-nav.nav-hidden {
                    transform: translateY(-100%);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 80px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .nav-logo-mark {
                    width: 2rem;
                    height: 2rem;
                    background: #EAB308;
                    border-radius: 4px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.1rem;
                }

                .nav-logo-text {
                    color: #fff;
                    font-family: 'Playfair Display', serif;
                    font-weight: 700;
                    font-size: 1.2rem;
                    letter-spacing: 0.05em;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    color: #CBD5E1;
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: #FACC15;
                }

                .nav-cta {
                    background: #EAB308;
                    color: #050A18;
                    border: none;
                    padding: 0.5rem 1.5rem;
                    border-radius: 4px;
                    font-weight: 700;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .nav-cta:hover {
                    background: #CA8A04;
                }

                .nav-cta-mobile {
                    width: 100%;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }

                .mobile-menu {
                    display: none;
                }

                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }

                    .burger-menu {
                        display: flex;
                    }

                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem;
                        background: #0B1226;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
