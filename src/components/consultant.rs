use yew::prelude::*;
use web_sys::{HtmlTextAreaElement, InputEvent, MouseEvent};
use wasm_bindgen_futures::spawn_local;

use crate::gemini;

/// Free-text intake for the AI case analysis: forwards the description to the
/// model and renders the returned strategy verbatim, with static fallback copy
/// on failure. Shares no state with the rest of the page.
#[function_component(AiConsultant)]
pub fn ai_consultant() -> Html {
    let input = use_state(String::new);
    let response = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            input.set(textarea.value());
        })
    };

    let on_analyze = {
        let input = input.clone();
        let response = response.clone();
        let loading = loading.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let issue = input.trim().to_string();
            if issue.is_empty() || *loading {
                return;
            }
            loading.set(true);
            response.set(None);

            let response = response.clone();
            let loading = loading.clone();
            spawn_local(async move {
                let strategy = gemini::analyze_credit_issue(&issue).await;
                response.set(Some(strategy));
                loading.set(false);
            });
        })
    };

    let disabled = *loading || input.trim().is_empty();

    html! {
        <section class="consultant-section">
            <div class="consultant-inner">
                <div class="consultant-header">
                    <span class="consultant-badge">{"✦ AI Strategic Intelligence"}</span>
                    <h2>{"Instant Case Analysis"}</h2>
                    <p>
                        {"Not sure if you have a case? Describe your negative item below, and our AI \
                          will generate a preliminary dispute strategy based on consumer law."}
                    </p>
                </div>

                <div class="consultant-card">
                    <label class="consultant-label">
                        {"Describe the negative item (e.g., \"Late payment on Capital One from 2021\", \"Medical collection of $500\")"}
                    </label>
                    <div class="consultant-input-wrap">
                        <textarea
                            value={(*input).clone()}
                            oninput={oninput}
                            placeholder="Type your situation here..."
                        />
                        <button class="analyze-button" onclick={on_analyze} {disabled}>
                            { if *loading { "Analyzing..." } else { "Analyze Case" } }
                        </button>
                    </div>

                    {
                        if let Some(strategy) = (*response).as_ref() {
                            html! {
                                <div class="consultant-response">
                                    <h4>{"Preliminary Strategy"}</h4>
                                    <div class="response-text">{strategy.clone()}</div>
                                    <div class="response-disclaimer">
                                        {"This is an AI-generated assessment and does not constitute legal advice. Results vary."}
                                    </div>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>

            <style>
                {r#"
                .consultant-section {
                    padding: 5rem 1rem;
                    background: #0B1226;
                    border-top: 1px solid rgba(234, 179, 8, 0.15);
                }

                .consultant-inner {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .consultant-header {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }

                .consultant-badge {
                    display: inline-block;
                    padding: 0.25rem 0.9rem;
                    border-radius: 20px;
                    background: #1E293B;
                    border: 1px solid #334155;
                    color: #FACC15;
                    font-size: 0.85rem;
                    margin-bottom: 1rem;
                }

                .consultant-header h2 {
                    font-family: 'Playfair Display', serif;
                    font-size: 2.25rem;
                    color: #fff;
                    margin-bottom: 1rem;
                }

                .consultant-header p {
                    color: #94A3B8;
                }

                .consultant-card {
                    background: rgba(30, 41, 59, 0.5);
                    border: 1px solid #334155;
                    border-radius: 16px;
                    padding: 2rem;
                }

                .consultant-label {
                    display: block;
                    color: #CBD5E1;
                    font-size: 0.9rem;
                    margin-bottom: 1rem;
                }

                .consultant-input-wrap {
                    position: relative;
                }

                .consultant-input-wrap textarea {
                    width: 100%;
                    height: 8rem;
                    background: rgba(15, 23, 42, 0.8);
                    border: 1px solid #475569;
                    border-radius: 12px;
                    padding: 1rem;
                    color: #fff;
                    font-family: inherit;
                    font-size: 1rem;
                    resize: none;
                    box-sizing: border-box;
                    outline: none;
                }

                .consultant-input-wrap textarea:focus {
                    border-color: #EAB308;
                }

                .consultant-input-wrap textarea::placeholder {
                    color: #64748B;
                }

                .analyze-button {
                    position: absolute;
                    bottom: 0.75rem;
                    right: 0.75rem;
                    background: #EAB308;
                    color: #050A18;
                    border: none;
                    border-radius: 8px;
                    padding: 0.5rem 1rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .analyze-button:hover {
                    background: #CA8A04;
                }

                .analyze-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }

                .consultant-response {
                    margin-top: 2rem;
                    padding: 1.5rem;
                    background: rgba(15, 23, 42, 0.5);
                    border: 1px solid rgba(234, 179, 8, 0.2);
                    border-radius: 12px;
                }

                .consultant-response h4 {
                    font-family: 'Playfair Display', serif;
                    color: #FACC15;
                    margin-bottom: 0.75rem;
                }

                .response-text {
                    color: #CBD5E1;
                    line-height: 1.7;
                    white-space: pre-line;
                }

                .response-disclaimer {
                    margin-top: 1rem;
                    padding-top: 1rem;
                    border-top: 1px solid #334155;
                    color: #64748B;
                    font-size: 0.75rem;
                }
                "#}
            </style>
        </section>
    }
}
