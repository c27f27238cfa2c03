use yew::prelude::*;
use web_sys::MouseEvent;

/// The three legal documents reachable from the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalDoc {
    Privacy,
    Terms,
    Disclaimer,
}

impl LegalDoc {
    pub fn title(self) -> &'static str {
        match self {
            LegalDoc::Privacy => "Privacy Policy",
            LegalDoc::Terms => "Terms of Service",
            LegalDoc::Disclaimer => "Disclaimer",
        }
    }

    fn paragraphs(self) -> &'static [&'static str] {
        match self {
            LegalDoc::Privacy => &[
                "We collect only the information you provide directly to us: your name, \
                 contact details, and the credit report data needed to perform dispute \
                 services on your behalf. We never sell your personal information.",
                "Credit report data is transmitted over encrypted channels and retained \
                 only for the duration of your service agreement. You may request deletion \
                 of your records at any time by contacting our office.",
                "Our website uses no third-party advertising trackers. Anonymous usage \
                 statistics may be collected to improve the site experience.",
            ],
            LegalDoc::Terms => &[
                "Florida Credit Firm provides credit education and dispute services under \
                 the Credit Repair Organizations Act (CROA). All programs are month-to-month \
                 and may be cancelled at any time without penalty.",
                "You have the right to dispute inaccurate information on your own, without \
                 paying for our services. Our fee covers professional preparation, tracking, \
                 and escalation of disputes on your behalf.",
                "No specific deletion or score outcome is guaranteed. Results depend on the \
                 accuracy and verifiability of the items on your credit reports.",
            ],
            LegalDoc::Disclaimer => &[
                "The content of this website is provided for informational purposes only \
                 and does not constitute legal or financial advice.",
                "AI-generated case analyses are preliminary assessments produced by an \
                 automated system. They are not reviewed by an attorney and should not be \
                 relied upon as a substitute for a professional consultation.",
                "Testimonials reflect individual experiences; your results may differ.",
            ],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalOverlayProps {
    pub doc: LegalDoc,
    pub on_close: Callback<()>,
}

/// Modal overlay for a legal document: closed by the button or a backdrop
/// click, but not by clicks inside the panel.
#[function_component(LegalOverlay)]
pub fn legal_overlay(props: &LegalOverlayProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let stop_bubble = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="modal-content" onclick={stop_bubble}>
                <h2>{props.doc.title()}</h2>
                {
                    props.doc.paragraphs().iter().map(|paragraph| {
                        html! { <p>{*paragraph}</p> }
                    }).collect::<Html>()
                }
                <button class="modal-close" onclick={close}>{"Close"}</button>
            </div>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    background: rgba(0, 0, 0, 0.85);
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    z-index: 1000;
                    padding: 1rem;
                }

                .modal-content {
                    background: #0B1226;
                    border: 1px solid #334155;
                    border-radius: 12px;
                    max-width: 640px;
                    max-height: 80vh;
                    overflow-y: auto;
                    padding: 2rem;
                }

                .modal-content h2 {
                    font-family: 'Playfair Display', serif;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }

                .modal-content p {
                    color: #94A3B8;
                    line-height: 1.7;
                    margin-bottom: 1rem;
                }

                .modal-close {
                    margin-top: 1rem;
                    background: #EAB308;
                    color: #050A18;
                    border: none;
                    border-radius: 4px;
                    padding: 0.5rem 1.5rem;
                    font-weight: 700;
                    cursor: pointer;
                }

                .modal-close:hover {
                    background: #CA8A04;
                }
                "#}
            </style>
        </div>
    }
}
