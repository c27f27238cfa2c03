use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use gloo_timers::callback::Timeout;
use chrono::Datelike;

use crate::carousel::{CarouselMessage, CarouselState};
use crate::components::consultant::AiConsultant;
use crate::components::faq::Faq;
use crate::components::legal::{LegalDoc, LegalOverlay};
use crate::components::pricing::Pricing;
use crate::components::process::ProcessTimeline;
use crate::scroll_to_section;
use crate::viewport::Breakpoint;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    image: &'static str,
    headline: &'static str,
    text: &'static str,
    rating: u8,
}

const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Mollie H. Massey",
        role: "Business Owner",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&q=80&w=150&h=150",
        headline: "They are miracle workers!",
        text: "After struggling with bad credit due to a past mistake, Florida Credit Firm came to my rescue.",
        rating: 5,
    },
    Testimonial {
        name: "David Kelley",
        role: "Real Estate Investor",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=150&h=150",
        headline: "Superior customer service.",
        text: "Great service for an affordable price. The team was responsive and transparent throughout the entire process.",
        rating: 5,
    },
    Testimonial {
        name: "Jonathan Marshall",
        role: "Miami, FL",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&q=80&w=150&h=150",
        headline: "Just great results.",
        text: "Awesome experience. I didn't think it was possible to remove the bankruptcy from my record, but they did it.",
        rating: 5,
    },
    Testimonial {
        name: "Sarah Jenkins",
        role: "Medical Professional",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80&w=150&h=150",
        headline: "Professional and discreet.",
        text: "They handled my complex situation with ease and restored my good name. I can finally refinance my practice.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Ross",
        role: "Entrepreneur",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=150&h=150",
        headline: "+120 points in 4 months.",
        text: "My credit score jumped significantly. Highly recommend this team for rapid results if you are looking to secure funding.",
        rating: 5,
    },
    Testimonial {
        name: "Elena Rodriguez",
        role: "Homebuyer",
        image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&q=80&w=150&h=150",
        headline: "Bought my dream home!",
        text: "Finally able to buy my dream home thanks to their diligent work on my credit report. The mortgage approval was smooth.",
        rating: 5,
    },
];

// Rendered twice for a seamless marquee loop.
const PRESS_LOGOS: [&str; 6] = [
    "Bloomberg",
    "YAHOO! FINANCE",
    "DIGITAL JOURNAL",
    "TechBullion",
    "MarketWatch",
    "Business Insider",
];

struct Service {
    title: &'static str,
    icon: &'static str,
    description: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        title: "Precision Disputes",
        icon: "📋",
        description: "We identify and challenge every unverifiable item using FCRA & FDCPA \
                      statutes, ensuring only accurate data remains.",
    },
    Service {
        title: "Debt Negotiation",
        icon: "💵",
        description: "Our team negotiates directly with creditors and collection agencies to \
                      reduce outstanding balances and settle accounts for less.",
    },
    Service {
        title: "Legal Escalation",
        icon: "⚖️",
        description: "When bureaus refuse to comply, we leverage attorney-backed strategies to \
                      enforce your rights and compel deletion.",
    },
];

struct TeamMember {
    name: &'static str,
    role: &'static str,
    accent: &'static str,
}

const TEAM: [TeamMember; 4] = [
    TeamMember { name: "Anniel Manso", role: "Chief Director", accent: "#050A18" },
    TeamMember { name: "Sandy Martin", role: "Client Relations", accent: "#CA8A04" },
    TeamMember { name: "Dashell Quintana", role: "Financial Officer", accent: "#1E3A8A" },
    TeamMember { name: "Denys Orriaga", role: "Lead Operations", accent: "#15803D" },
];

// Adapter: lets the pure carousel record drive a use_reducer handle.
impl Reducible for CarouselState {
    type Action = CarouselMessage;

    fn reduce(self: Rc<Self>, action: CarouselMessage) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(crate::viewport::COMPACT_MAX_WIDTH)
}

fn star_row(rating: u8) -> String {
    "★".repeat(rating as usize)
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let carousel = use_reducer(|| {
        let items_visible = Breakpoint::from_width(viewport_width()).items_visible();
        CarouselState::new(TESTIMONIALS.len(), items_visible)
    });

    // Debounced resize listener; every breakpoint change routes through
    // SetItemsVisible so the index is re-clamped.
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let debounce = Rc::new(RefCell::new(None::<Timeout>));

                let resize_callback = Closure::wrap(Box::new(move || {
                    let carousel = carousel.clone();
                    // Replacing the pending timeout cancels it.
                    *debounce.borrow_mut() = Some(Timeout::new(150, move || {
                        let items_visible =
                            Breakpoint::from_width(viewport_width()).items_visible();
                        carousel.dispatch(CarouselMessage::SetItemsVisible(items_visible));
                    }));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselMessage::Previous))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselMessage::Next))
    };

    let track_style = format!("transform: translateX(-{}%);", carousel.offset_percent());

    html! {
        <section class="reviews-section" id="reviews">
            <div class="reviews-header">
                <h3>{"What Our Clients Say"}</h3>
                <div class="reviews-stars">{"★★★★★"}</div>
            </div>

            <div class="carousel">
                <div class="carousel-viewport">
                    <div class="carousel-track" style={track_style}>
                        {
                            TESTIMONIALS.iter().map(|testimonial| {
                                html! {
                                    <div class="testimonial-slide">
                                        <div class="testimonial-card">
                                            <div class="watermark">{"”"}</div>
                                            <div class="testimonial-head">
                                                <img src={testimonial.image} alt={testimonial.name} />
                                                <div>
                                                    <h4>{testimonial.name}</h4>
                                                    <p class="testimonial-role">{testimonial.role}</p>
                                                    <div class="testimonial-stars">
                                                        { star_row(testimonial.rating) }
                                                    </div>
                                                </div>
                                            </div>
                                            <h5>{testimonial.headline}</h5>
                                            <p class="testimonial-text">{format!("\"{}\"", testimonial.text)}</p>
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <button class="carousel-button prev" onclick={on_previous} aria-label="Previous testimonial">
                    {"‹"}
                </button>
                <button class="carousel-button next" onclick={on_next} aria-label="Next testimonial">
                    {"›"}
                </button>

                <div class="carousel-dots">
                    {
                        (0..carousel.dot_count()).map(|dot| {
                            let onclick = {
                                let carousel = carousel.clone();
                                Callback::from(move |_: MouseEvent| {
                                    carousel.dispatch(CarouselMessage::GoTo(dot))
                                })
                            };
                            html! {
                                <button
                                    class={classes!("carousel-dot", carousel.is_active_dot(dot).then_some("active"))}
                                    {onclick}
                                    aria-label={format!("Go to slide {}", dot + 1)}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let legal_doc = use_state(|| None::<LegalDoc>);

    // Scroll to top only on initial mount.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let close_legal = {
        let legal_doc = legal_doc.clone();
        Callback::from(move |_: ()| legal_doc.set(None))
    };

    let legal_link = |label: &'static str, doc: LegalDoc| {
        let legal_doc = legal_doc.clone();
        html! {
            <a
                href="#"
                onclick={Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    legal_doc.set(Some(doc));
                })}
            >
                {label}
            </a>
        }
    };

    let section_link = |label: &'static str, id: &'static str| {
        html! {
            <a
                href={format!("#{}", id)}
                onclick={Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    scroll_to_section(id);
                })}
            >
                {label}
            </a>
        }
    };

    let start_today = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("programs");
    });

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <header class="hero" id="home">
                <h1 class="hero-kicker">{"Florida Credit Firm"}</h1>
                <h2 class="hero-title">
                    {"EXPERT CREDIT &"}<br />{"CONSUMER LAW SOLUTIONS"}
                </h2>
                <div class="hero-portrait">
                    <img
                        src="https://images.unsplash.com/photo-1560250097-0b93528c311a?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=400&q=80"
                        alt="Expert Director"
                    />
                </div>
                <p class="hero-subtitle">
                    {"Stop letting bad credit control your life. We leverage consumer laws to remove \
                      inaccuracies and restore your financial freedom."}
                </p>
                <button class="hero-cta" onclick={start_today.clone()}>
                    {"Take Control - Start Today"}
                </button>

                <div class="press-marquee">
                    <div class="marquee-track">
                        { PRESS_LOGOS.iter().map(|logo| html! { <span>{*logo}</span> }).collect::<Html>() }
                        { PRESS_LOGOS.iter().map(|logo| html! { <span>{*logo}</span> }).collect::<Html>() }
                    </div>
                </div>
            </header>

            <section class="trust-banner">
                <h3>{"Trusted By Thousands For Credit Repair Excellence"}</h3>
                <div class="trust-underline"></div>
                <div class="trust-grid">
                    <div class="trust-card">
                        <div class="trust-number">{"7800"}<span>{"+"}</span></div>
                        <div class="trust-label">{"Satisfied Clients"}</div>
                        <p>{"Since 2015, helping clients take control of their financial future."}</p>
                    </div>
                    <div class="trust-card">
                        <div class="trust-number">{"25000"}<span>{"+"}</span></div>
                        <div class="trust-label">{"Items Removed"}</div>
                        <p>{"Successfully disputed items across all credit bureaus."}</p>
                    </div>
                    <div class="trust-card">
                        <div class="trust-number">{"50"}<span>{"+"}</span></div>
                        <div class="trust-label">{"States Served"}</div>
                        <p>{"Proudly serving clients locally and nationwide."}</p>
                    </div>
                </div>
            </section>

            <Testimonials />

            <section class="services-section" id="services">
                <div class="services-header">
                    <span class="services-kicker">{"Our Expertise"}</span>
                    <h2>{"Legal-First Credit Solutions"}</h2>
                    <p>
                        {"We go beyond basic disputes. Our team leverages advanced consumer protection \
                          laws to challenge inaccuracies, negotiate debts, and restore your financial power."}
                    </p>
                </div>
                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| {
                            html! {
                                <div class="service-card">
                                    <div class="service-icon">{service.icon}</div>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <ProcessTimeline />

            <section class="team-section">
                <div class="team-badge">{"Our Executive Team"}</div>
                <div class="team-grid">
                    {
                        TEAM.iter().enumerate().map(|(index, member)| {
                            html! {
                                <div class="team-card">
                                    <div class="team-portrait">
                                        <img
                                            src={format!("https://picsum.photos/200/200?random={}", index)}
                                            alt={member.name}
                                        />
                                    </div>
                                    <h4>{member.name}</h4>
                                    <p>{member.role}</p>
                                    <div class="team-connect" style={format!("background: {};", member.accent)}>
                                        {"Connect"}
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <div id="programs">
                <Pricing />
            </div>

            <AiConsultant />

            <Faq />

            <footer class="footer">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">{"FLORIDA CREDIT FIRM"}</div>
                        <p>
                            {"Empowering financial freedom through expert credit repair strategies and \
                              consumer law protection."}
                        </p>
                    </div>
                    <div>
                        <h5>{"Quick Links"}</h5>
                        <ul>
                            <li>{ section_link("Services", "services") }</li>
                            <li>{ section_link("Pricing", "programs") }</li>
                            <li>{ section_link("Reviews", "reviews") }</li>
                            <li>{ section_link("FAQ", "faq") }</li>
                        </ul>
                    </div>
                    <div>
                        <h5>{"Legal"}</h5>
                        <ul>
                            <li>{ legal_link("Privacy Policy", LegalDoc::Privacy) }</li>
                            <li>{ legal_link("Terms of Service", LegalDoc::Terms) }</li>
                            <li>{ legal_link("Disclaimer", LegalDoc::Disclaimer) }</li>
                        </ul>
                    </div>
                    <div>
                        <h5>{"Contact"}</h5>
                        <p>{"☎ (800) 123-4567"}</p>
                        <p>{"Miami, FL 33130"}</p>
                    </div>
                </div>
                <div class="footer-copyright">
                    { format!("© {} Florida Credit Firm. All rights reserved.", year) }
                </div>
            </footer>

            {
                if let Some(doc) = *legal_doc {
                    html! { <LegalOverlay {doc} on_close={close_legal} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .landing-page {
                    background: #050A18;
                    color: #fff;
                }

                .hero {
                    padding: 10rem 1rem 5rem;
                    text-align: center;
                    position: relative;
                    overflow: hidden;
                }

                .hero-kicker {
                    color: #FACC15;
                    font-size: 0.85rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    margin-bottom: 1.5rem;
                }

                .hero-title {
                    font-family: 'Playfair Display', serif;
                    font-size: 3.5rem;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }

                .hero-portrait {
                    width: 10rem;
                    height: 10rem;
                    margin: 0 auto 2rem;
                    border-radius: 50%;
                    border: 4px solid #334155;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }

                .hero-portrait img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }

                .hero-portrait:hover img {
                    transform: scale(1.1);
                }

                .hero-subtitle {
                    color: #94A3B8;
                    font-size: 1.1rem;
                    max-width: 36rem;
                    margin: 0 auto 2.5rem;
                }

                .hero-cta {
                    background: #EAB308;
                    color: #050A18;
                    font-size: 1.1rem;
                    font-weight: 700;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.75rem 2rem;
                    cursor: pointer;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }

                .hero-cta:hover {
                    background: #CA8A04;
                    box-shadow: 0 0 20px rgba(234, 179, 8, 0.4);
                }

                .press-marquee {
                    margin-top: 4rem;
                    padding-top: 3rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    overflow: hidden;
                }

                .marquee-track {
                    display: flex;
                    align-items: center;
                    gap: 4rem;
                    width: max-content;
                    animation: marquee 30s linear infinite;
                    opacity: 0.6;
                }

                .marquee-track span {
                    font-family: 'Playfair Display', serif;
                    font-weight: 700;
                    font-size: 1.4rem;
                    color: #64748B;
                    white-space: nowrap;
                }

                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }

                .trust-banner {
                    background: #0B1226;
                    padding: 3rem 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    text-align: center;
                }

                .trust-banner h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.25rem;
                }

                .trust-underline {
                    height: 4px;
                    width: 5rem;
                    background: #EAB308;
                    border-radius: 9999px;
                    margin: 1rem auto 2rem;
                }

                .trust-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 1000px;
                    margin: 0 auto;
                }

                .trust-card {
                    background: #050A18;
                    border: 1px solid #1E293B;
                    border-radius: 8px;
                    padding: 2rem;
                    transition: border-color 0.3s ease;
                }

                .trust-card:hover {
                    border-color: rgba(234, 179, 8, 0.5);
                }

                .trust-number {
                    font-size: 2.25rem;
                    font-weight: 700;
                }

                .trust-number span {
                    color: #EAB308;
                }

                .trust-label {
                    font-size: 0.85rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #CBD5E1;
                    margin: 0.5rem 0;
                }

                .trust-card p {
                    font-size: 0.75rem;
                    color: #64748B;
                }

                .reviews-section {
                    padding: 5rem 1rem;
                }

                .reviews-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .reviews-header h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.9rem;
                    margin-bottom: 0.5rem;
                }

                .reviews-stars {
                    color: #EAB308;
                    font-size: 1.25rem;
                    letter-spacing: 0.25rem;
                }

                .carousel {
                    position: relative;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .carousel-viewport {
                    overflow: hidden;
                }

                .carousel-track {
                    display: flex;
                    transition: transform 0.5s ease-out;
                }

                .testimonial-slide {
                    flex: 0 0 100%;
                    padding: 0 0.75rem;
                    box-sizing: border-box;
                }

                @media (min-width: 768px) {
                    .testimonial-slide {
                        flex: 0 0 33.3333%;
                    }
                }

                .testimonial-card {
                    position: relative;
                    background: #0F172A;
                    border: 1px solid #1E293B;
                    border-radius: 12px;
                    padding: 2rem;
                    height: 100%;
                    box-sizing: border-box;
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }

                .testimonial-card:hover {
                    border-color: rgba(234, 179, 8, 0.3);
                }

                .watermark {
                    position: absolute;
                    top: 0.5rem;
                    right: 1.25rem;
                    font-family: 'Playfair Display', serif;
                    font-size: 5rem;
                    color: rgba(30, 41, 59, 0.5);
                    line-height: 1;
                    user-select: none;
                    pointer-events: none;
                }

                .testimonial-head {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .testimonial-head img {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    object-fit: cover;
                    border: 2px solid #334155;
                }

                .testimonial-head h4 {
                    font-size: 1.1rem;
                    line-height: 1.2;
                }

                .testimonial-role {
                    color: #64748B;
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .testimonial-stars {
                    color: #EAB308;
                    font-size: 0.75rem;
                }

                .testimonial-card h5 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.1rem;
                    margin-bottom: 0.75rem;
                }

                .testimonial-text {
                    color: #94A3B8;
                    font-style: italic;
                    font-size: 0.9rem;
                    line-height: 1.6;
                    flex-grow: 1;
                }

                .carousel-button {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 3.5rem;
                    height: 3.5rem;
                    background: rgba(11, 18, 38, 0.9);
                    border: 1px solid #EAB308;
                    color: #EAB308;
                    border-radius: 50%;
                    font-size: 1.75rem;
                    line-height: 1;
                    cursor: pointer;
                    z-index: 20;
                    transition: background 0.3s ease, color 0.3s ease;
                }

                .carousel-button:hover {
                    background: #EAB308;
                    color: #050A18;
                }

                .carousel-button.prev {
                    left: -1rem;
                }

                .carousel-button.next {
                    right: -1rem;
                }

                @media (min-width: 968px) {
                    .carousel-button.prev { left: -4rem; }
                    .carousel-button.next { right: -4rem; }
                }

                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                }

                .carousel-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    padding: 0;
                    border: none;
                    border-radius: 9999px;
                    background: #334155;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .carousel-dot:hover {
                    background: #475569;
                }

                .carousel-dot.active {
                    background: #EAB308;
                    width: 1.5rem;
                }

                .services-section {
                    background: #fff;
                    color: #0F172A;
                    padding: 6rem 1rem;
                }

                .services-header {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 4rem;
                }

                .services-kicker {
                    color: #EAB308;
                    font-size: 0.85rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }

                .services-header h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: 2.75rem;
                    margin: 0.75rem 0 1.5rem;
                }

                .services-header p {
                    color: #475569;
                    font-size: 1.1rem;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .service-card {
                    background: #F8FAFC;
                    border: 1px solid #F1F5F9;
                    border-radius: 16px;
                    padding: 2rem;
                    transition: box-shadow 0.3s ease, border-color 0.3s ease;
                }

                .service-card:hover {
                    border-color: rgba(234, 179, 8, 0.3);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }

                .service-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    background: #050A18;
                    border-radius: 12px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    margin-bottom: 1.5rem;
                }

                .service-card h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.25rem;
                    margin-bottom: 0.75rem;
                }

                .service-card p {
                    color: #475569;
                    line-height: 1.6;
                }

                .team-section {
                    background: #fff;
                    color: #0F172A;
                    padding: 5rem 1rem;
                    border-top: 1px solid #F1F5F9;
                }

                .team-badge {
                    display: table;
                    margin: 0 auto 3rem;
                    background: #EAB308;
                    color: #050A18;
                    padding: 0.5rem 2rem;
                    font-weight: 700;
                    font-size: 1.1rem;
                    text-transform: uppercase;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .team-card {
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 10px 40px -15px rgba(0, 0, 0, 0.1);
                    padding: 1.5rem;
                    text-align: center;
                    transition: transform 0.3s ease;
                }

                .team-card:hover {
                    transform: translateY(-8px);
                }

                .team-portrait {
                    width: 8rem;
                    height: 8rem;
                    margin: 0 auto 1.5rem;
                    border: 2px solid #EAB308;
                    border-radius: 50%;
                    padding: 4px;
                    box-sizing: border-box;
                }

                .team-portrait img {
                    width: 100%;
                    height: 100%;
                    border-radius: 50%;
                    object-fit: cover;
                    filter: grayscale(1);
                    transition: filter 0.3s ease;
                }

                .team-card:hover .team-portrait img {
                    filter: grayscale(0);
                }

                .team-card h4 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.1rem;
                }

                .team-card p {
                    color: #64748B;
                    font-size: 0.85rem;
                    margin-bottom: 1.5rem;
                }

                .team-connect {
                    height: 3rem;
                    border-radius: 8px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .footer {
                    background: #050A18;
                    border-top: 1px solid #0F172A;
                    padding: 3rem 1rem 0;
                    color: #94A3B8;
                    font-size: 0.9rem;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto 2rem;
                }

                .footer-brand {
                    font-family: 'Playfair Display', serif;
                    font-weight: 700;
                    font-size: 1.25rem;
                    color: #fff;
                    margin-bottom: 1rem;
                }

                .footer h5 {
                    color: #fff;
                    margin-bottom: 1rem;
                }

                .footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .footer li {
                    margin-bottom: 0.5rem;
                }

                .footer a {
                    color: #94A3B8;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer a:hover {
                    color: #EAB308;
                }

                .footer-copyright {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem 0;
                    border-top: 1px solid #0F172A;
                    text-align: center;
                }

                @media (max-width: 968px) {
                    .team-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .footer-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 2.25rem;
                    }

                    .trust-grid,
                    .services-grid,
                    .team-grid,
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }

                    .carousel-button.prev { left: 0; }
                    .carousel-button.next { right: 0; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_row_matches_the_rating() {
        assert_eq!(star_row(5), "★★★★★");
        assert_eq!(star_row(1), "★");
        assert_eq!(star_row(0), "");
    }

    #[test]
    fn every_testimonial_renders_a_full_row() {
        for testimonial in &TESTIMONIALS {
            assert_eq!(
                star_row(testimonial.rating).chars().count(),
                testimonial.rating as usize
            );
        }
    }
}
