use yew::prelude::*;

struct Feature {
    text: &'static str,
    detail: &'static str,
}

/// The eight feature rows shared by every tier; each tier flags which ones it
/// includes.
const FEATURES: [Feature; 8] = [
    Feature {
        text: "Challenge All Discrepancies",
        detail: "We aggressively dispute inaccurate negative items with all three major \
                 credit bureaus (Equifax, Experian, TransUnion).",
    },
    Feature {
        text: "Ongoing Credit Monitoring",
        detail: "24/7 surveillance of your credit profile to detect new inquiries and \
                 score changes instantly.",
    },
    Feature {
        text: "Identity and Fraud Protection",
        detail: "$1M Identity Theft Insurance and proactive dark web monitoring to \
                 safeguard your personal data.",
    },
    Feature {
        text: "Flexible Service Options",
        detail: "Month-to-month service with no binding long-term contracts or \
                 cancellation fees.",
    },
    Feature {
        text: "Priority Support",
        detail: "Direct access to senior credit consultants via dedicated priority \
                 channels.",
    },
    Feature {
        text: "Annual Credit Audit",
        detail: "Comprehensive yearly deep-dive analysis to strategize your long-term \
                 financial health.",
    },
    Feature {
        text: "Unlimited disputes",
        detail: "We send unlimited dispute letters per round, maximizing the speed of \
                 your results.",
    },
    Feature {
        text: "Credit Optimization Tools",
        detail: "Access to advanced score simulators and debt payoff planning \
                 calculators.",
    },
];

struct Tier {
    name: &'static str,
    price: &'static str,
    included: [bool; 8],
    highlight: bool,
}

const TIERS: [Tier; 3] = [
    Tier {
        name: "Individual",
        price: "124",
        included: [true, true, true, true, false, false, false, false],
        highlight: false,
    },
    Tier {
        name: "Couple's",
        price: "199",
        included: [true, true, true, true, false, false, false, false],
        highlight: true,
    },
    Tier {
        name: "Individual+",
        price: "249",
        included: [true, true, true, true, true, true, true, true],
        highlight: false,
    },
];

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section class="pricing-section">
            <div class="pricing-inner">
                <div class="pricing-header">
                    <h2>{"Our Programs"}</h2>
                    <p class="pricing-tagline">{"(No Hidden Fees)"}</p>
                    <div class="pricing-divider"></div>
                    <p class="pricing-subtitle">
                        {"We believe in full transparency – delivering honesty and clarity every step of the way."}
                    </p>
                </div>

                <div class="pricing-grid">
                    {
                        TIERS.iter().map(|tier| {
                            html! {
                                <div class={classes!("pricing-card", tier.highlight.then_some("highlight"))}>
                                    {
                                        if tier.highlight {
                                            html! { <div class="popular-tag">{"Most Popular"}</div> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <div class="card-header">
                                        <h3>{tier.name}</h3>
                                        <div class="price">
                                            <span class="currency">{"$"}</span>
                                            <span class="amount">{tier.price}</span>
                                        </div>
                                        <p class="period">{"Monthly*"}</p>
                                    </div>
                                    <ul class="feature-list">
                                        {
                                            FEATURES.iter().zip(tier.included.iter()).map(|(feature, included)| {
                                                html! {
                                                    <li class="feature-row">
                                                        <span class={classes!("feature-flag", if *included { "included" } else { "excluded" })}>
                                                            { if *included { "✓" } else { "✕" } }
                                                        </span>
                                                        <span class="feature-text">{feature.text}</span>
                                                        {
                                                            if *included {
                                                                html! {
                                                                    <span class="feature-info">
                                                                        {"ⓘ"}
                                                                        <span class="feature-tooltip">{feature.detail}</span>
                                                                    </span>
                                                                }
                                                            } else {
                                                                html! {}
                                                            }
                                                        }
                                                    </li>
                                                }
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                    <button class="tier-cta">{"GET STARTED"}</button>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .pricing-section {
                    padding: 5rem 1rem;
                    background: #050A18;
                }

                .pricing-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .pricing-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .pricing-header h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: 2.5rem;
                    color: #fff;
                    margin-bottom: 0.5rem;
                }

                .pricing-tagline {
                    color: #EAB308;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }

                .pricing-divider {
                    height: 1px;
                    width: 6rem;
                    background: #EAB308;
                    margin: 0 auto 1.5rem;
                }

                .pricing-subtitle {
                    color: #CBD5E1;
                    max-width: 600px;
                    margin: 0 auto;
                }

                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .pricing-card {
                    position: relative;
                    background: #fff;
                    border: 1px solid #E2E8F0;
                    border-radius: 8px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    transition: transform 0.3s ease;
                }

                .pricing-card:hover {
                    transform: translateY(-10px);
                }

                .pricing-card.highlight {
                    background: #1E293B;
                    border: 2px solid #475569;
                    transform: scale(1.05);
                    z-index: 10;
                }

                .pricing-card.highlight:hover {
                    transform: scale(1.05) translateY(-10px);
                }

                .popular-tag {
                    position: absolute;
                    top: -0.75rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #EAB308;
                    color: #050A18;
                    padding: 0.25rem 1rem;
                    border-radius: 20px;
                    font-size: 0.8rem;
                    font-weight: 700;
                }

                .card-header {
                    text-align: center;
                    padding-bottom: 1.5rem;
                    border-bottom: 1px solid rgba(148, 163, 184, 0.3);
                    margin-bottom: 1.5rem;
                }

                .card-header h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.25rem;
                    color: #334155;
                }

                .pricing-card.highlight .card-header h3 {
                    color: #fff;
                }

                .price {
                    display: flex;
                    align-items: flex-start;
                    justify-content: center;
                    margin-top: 1rem;
                    color: #0F172A;
                }

                .pricing-card.highlight .price {
                    color: #fff;
                }

                .price .currency {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-top: 0.5rem;
                }

                .price .amount {
                    font-family: 'Playfair Display', serif;
                    font-size: 3.75rem;
                    font-weight: 700;
                }

                .period {
                    color: #64748B;
                    font-size: 0.9rem;
                    margin-top: 0.5rem;
                }

                .feature-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    flex-grow: 1;
                }

                .feature-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.5rem 0;
                }

                .feature-flag.included {
                    color: #22C55E;
                    font-weight: 700;
                }

                .feature-flag.excluded {
                    background: #1E293B;
                    color: #fff;
                    border-radius: 4px;
                    font-size: 0.7rem;
                    padding: 0.1rem 0.3rem;
                }

                .pricing-card.highlight .feature-flag.excluded {
                    background: #0F172A;
                }

                .feature-text {
                    flex: 1;
                    font-size: 0.9rem;
                    color: #475569;
                }

                .pricing-card.highlight .feature-text {
                    color: #CBD5E1;
                }

                .feature-info {
                    position: relative;
                    color: #94A3B8;
                    cursor: help;
                }

                .feature-info:hover {
                    color: #EAB308;
                }

                .feature-tooltip {
                    position: absolute;
                    bottom: 125%;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 14rem;
                    padding: 0.75rem;
                    background: rgba(11, 18, 38, 0.95);
                    border: 1px solid #334155;
                    border-radius: 8px;
                    color: #E2E8F0;
                    font-size: 0.75rem;
                    line-height: 1.5;
                    opacity: 0;
                    visibility: hidden;
                    transition: opacity 0.2s ease;
                    z-index: 50;
                    pointer-events: none;
                }

                .feature-info:hover .feature-tooltip {
                    opacity: 1;
                    visibility: visible;
                }

                .tier-cta {
                    width: 100%;
                    margin-top: 2rem;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 4px;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                    background: #1E293B;
                    color: #fff;
                    transition: background 0.3s ease, color 0.3s ease;
                }

                .tier-cta:hover {
                    background: #334155;
                }

                .pricing-card.highlight .tier-cta {
                    background: #fff;
                    color: #0F172A;
                }

                .pricing-card.highlight .tier-cta:hover {
                    background: #EAB308;
                    color: #fff;
                }

                @media (max-width: 968px) {
                    .pricing-grid {
                        grid-template-columns: 1fr;
                        max-width: 420px;
                        margin: 0 auto;
                    }

                    .pricing-card.highlight {
                        transform: none;
                    }

                    .pricing-card.highlight:hover {
                        transform: translateY(-10px);
                    }
                }
                "#}
            </style>
        </section>
    }
}
