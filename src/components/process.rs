use yew::prelude::*;

struct Step {
    number: &'static str,
    title: &'static str,
    points: [&'static str; 3],
}

const STEPS: [Step; 4] = [
    Step {
        number: "01",
        title: "Analysis & Audit",
        points: [
            "Complete 3-Bureau Credit Audit",
            "Error & Violation Detection",
            "Custom Dispute Strategy",
        ],
    },
    Step {
        number: "02",
        title: "Strategic Disputes",
        points: [
            "Aggressive Legal Challenges",
            "Direct Furnisher Contact",
            "Debt Validation Demands",
        ],
    },
    Step {
        number: "03",
        title: "Creditor Liaison",
        points: [
            "Full Correspondence Management",
            "Cease & Desist Protocols",
            "Settlement Negotiations",
        ],
    },
    Step {
        number: "04",
        title: "Score Restoration",
        points: [
            "24/7 Score Monitoring",
            "Utilization Optimization",
            "Financial Health Planning",
        ],
    },
];

/// Four-step methodology timeline: zigzag around a center line on desktop,
/// a left-rail stack on mobile. The track line renders statically.
#[function_component(ProcessTimeline)]
pub fn process_timeline() -> Html {
    html! {
        <section class="process-section">
            <div class="process-inner">
                <div class="process-header">
                    <span class="process-kicker">{"How We Work"}</span>
                    <h2>{"The Path to Restoration"}</h2>
                    <p>{"Our proven four-step methodology combines legal expertise with aggressive dispute tactics."}</p>
                </div>

                <div class="process-desktop">
                    <div class="process-line"></div>
                    {
                        STEPS.iter().enumerate().map(|(index, step)| {
                            let left_side = index % 2 == 0;
                            html! {
                                <div class={classes!("process-row", if left_side { "row-left" } else { "row-right" })}>
                                    <div class="process-content">
                                        <div class="step-label">{format!("STEP {}", step.number)}</div>
                                        <h3>{step.title}</h3>
                                        <ul>
                                            { step.points.iter().map(|point| html! {
                                                <li><span class="bullet"></span><span>{*point}</span></li>
                                            }).collect::<Html>() }
                                        </ul>
                                    </div>
                                    <div class="process-node">{step.number}</div>
                                    <div class="process-spacer"></div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="process-mobile">
                    <div class="process-line-mobile"></div>
                    {
                        STEPS.iter().map(|step| {
                            html! {
                                <div class="process-mobile-item">
                                    <div class="process-mobile-node">{step.number}</div>
                                    <div class="process-mobile-card">
                                        <h3>{step.title}</h3>
                                        <ul>
                                            { step.points.iter().map(|point| html! {
                                                <li><span class="bullet"></span><span>{*point}</span></li>
                                            }).collect::<Html>() }
                                        </ul>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .process-section {
                    padding: 6rem 1rem;
                    background: #050A18;
                }

                .process-inner {
                    max-width: 1000px;
                    margin: 0 auto;
                }

                .process-header {
                    text-align: center;
                    margin-bottom: 6rem;
                }

                .process-kicker {
                    color: #EAB308;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    border: 1px solid rgba(234, 179, 8, 0.2);
                    padding: 0.25rem 1rem;
                    border-radius: 20px;
                }

                .process-header h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: 2.5rem;
                    color: #fff;
                    margin: 1.5rem 0 1rem;
                }

                .process-header p {
                    color: #94A3B8;
                    max-width: 600px;
                    margin: 0 auto;
                    font-size: 1.1rem;
                }

                .process-desktop {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 6rem;
                }

                .process-line {
                    position: absolute;
                    left: 50%;
                    top: 0;
                    bottom: 0;
                    width: 2px;
                    transform: translateX(-50%);
                    background: #1E293B;
                }

                .process-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    position: relative;
                    z-index: 1;
                }

                .process-row.row-right {
                    flex-direction: row-reverse;
                }

                .process-content {
                    width: 42%;
                }

                .row-left .process-content {
                    text-align: right;
                }

                .row-right .process-content {
                    text-align: left;
                }

                .step-label {
                    color: #EAB308;
                    font-size: 0.8rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    margin-bottom: 0.5rem;
                }

                .process-content h3 {
                    font-family: 'Playfair Display', serif;
                    font-size: 1.5rem;
                    color: #fff;
                    margin-bottom: 1rem;
                }

                .process-content ul,
                .process-mobile-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .process-content li,
                .process-mobile-card li {
                    color: #CBD5E1;
                    font-size: 0.9rem;
                    padding: 0.25rem 0;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .row-left .process-content li {
                    flex-direction: row-reverse;
                }

                .bullet {
                    width: 6px;
                    height: 6px;
                    background: #EAB308;
                    border-radius: 50%;
                    flex-shrink: 0;
                }

                .process-node {
                    width: 4rem;
                    height: 4rem;
                    background: #050A18;
                    border: 2px solid #EAB308;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #EAB308;
                    font-weight: 700;
                    box-shadow: 0 0 20px rgba(234, 179, 8, 0.3);
                }

                .process-spacer {
                    width: 42%;
                }

                .process-mobile {
                    display: none;
                }

                @media (max-width: 768px) {
                    .process-desktop {
                        display: none;
                    }

                    .process-mobile {
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                        position: relative;
                        padding-left: 2.5rem;
                    }

                    .process-line-mobile {
                        position: absolute;
                        left: 1rem;
                        top: 0;
                        bottom: 0;
                        width: 2px;
                        background: #1E293B;
                    }

                    .process-mobile-item {
                        position: relative;
                    }

                    .process-mobile-node {
                        position: absolute;
                        left: -2.5rem;
                        top: 0.25rem;
                        width: 2rem;
                        height: 2rem;
                        background: #050A18;
                        border: 1px solid #EAB308;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #EAB308;
                        font-size: 0.7rem;
                        font-weight: 700;
                        transform: translateX(-50%);
                        margin-left: 1rem;
                    }

                    .process-mobile-card {
                        background: rgba(11, 18, 38, 0.5);
                        border: 1px solid #1E293B;
                        border-radius: 12px;
                        padding: 1.5rem;
                    }

                    .process-mobile-card h3 {
                        font-family: 'Playfair Display', serif;
                        font-size: 1.25rem;
                        color: #fff;
                        margin-bottom: 0.75rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
