use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", is_open.then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section class="faq-section" id="faq">
            <div class="faq-inner">
                <h2>{"Frequently Asked Questions"}</h2>
                <p class="faq-subtitle">{"Straight answers about credit repair, our process, and your rights."}</p>

                <FaqItem question="Is credit repair legal?">
                    <p>
                        {"Absolutely. The Fair Credit Reporting Act (FCRA) gives you the legal right to \
                          dispute any item on your credit report that is inaccurate, unverifiable, or \
                          incomplete. We exercise those rights on your behalf, professionally and in writing."}
                    </p>
                </FaqItem>

                <FaqItem question="How long does the process take?">
                    <p>
                        {"Most clients see their first deletions within 35 to 45 days, since bureaus must \
                          respond to disputes within 30 days. Full programs typically run three to six \
                          months depending on how many items need to be challenged."}
                    </p>
                </FaqItem>

                <FaqItem question="What items can you remove?">
                    <p>
                        {"We challenge late payments, collections, charge-offs, repossessions, \
                          bankruptcies, and hard inquiries. No one can guarantee a specific deletion, but \
                          any item that cannot be verified as accurate must be removed by law."}
                    </p>
                </FaqItem>

                <FaqItem question="Do I have to sign a long-term contract?">
                    <p>
                        {"No. Every program is month-to-month with no cancellation fees. You can pause or \
                          stop your service at any time."}
                    </p>
                </FaqItem>

                <FaqItem question="Will disputing hurt my credit score?">
                    <p>
                        {"Filing disputes does not lower your score. Removing inaccurate negative items \
                          generally helps it, though results depend on the rest of your credit profile."}
                    </p>
                </FaqItem>
            </div>

            <style>
                {r#"
                .faq-section {
                    padding: 5rem 1rem;
                    background: #0B1226;
                }

                .faq-inner {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .faq-section h2 {
                    text-align: center;
                    font-family: 'Playfair Display', serif;
                    font-size: 2.25rem;
                    color: #fff;
                    margin-bottom: 0.75rem;
                }

                .faq-subtitle {
                    text-align: center;
                    color: #94A3B8;
                    margin-bottom: 3rem;
                }

                .faq-item {
                    background: rgba(15, 23, 42, 0.85);
                    border: 1px solid #1E293B;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(234, 179, 8, 0.4);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .faq-question:hover {
                    color: #FACC15;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #EAB308;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #94A3B8;
                    line-height: 1.6;
                }

                @media (max-width: 768px) {
                    .faq-question {
                        font-size: 1rem;
                        padding: 1rem;
                    }

                    .faq-answer {
                        padding: 0 1rem;
                    }

                    .faq-item.open .faq-answer {
                        padding: 0 1rem 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
