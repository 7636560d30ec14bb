use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::random::BrowserRandom;
use crate::state::decision::DecisionWidgetState;

#[derive(Properties, PartialEq)]
pub struct ProposalProps {
    pub question: AttrValue,
    pub success_title: AttrValue,
    pub success_body: AttrValue,
    pub success_photo: AttrValue,
}

/// CSS for the fleeing "No" button. Position, tilt and size all follow the state.
fn no_button_style(state: &DecisionWidgetState) -> String {
    format!(
        "transform: translate({:.1}px, {:.1}px) rotate({:.0}deg) scale({:.2}); opacity: {:.2};",
        state.negative_offset.x,
        state.negative_offset.y,
        state.negative_rotation_deg(),
        state.negative_visibility,
        state.negative_visibility,
    )
}

#[derive(Debug, Clone, Copy)]
pub enum DecisionEvent {
    Affirmative,
    /// Pointer-enter or click on the "No" button.
    NegativeEngaged,
}

impl Reducible for DecisionWidgetState {
    type Action = DecisionEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            DecisionEvent::Affirmative => self.on_affirmative_chosen(),
            DecisionEvent::NegativeEngaged => self.on_negative_engaged(&mut BrowserRandom),
        };
        if next == *self {
            log::debug!("Ignored {:?}", action);
            return self;
        }
        match action {
            DecisionEvent::Affirmative => {
                log::info!("Said yes after {} rejections", next.rejection_count);
            }
            DecisionEvent::NegativeEngaged => {
                log::debug!(
                    "No engaged {} times, visibility {:.2}",
                    next.rejection_count,
                    next.negative_visibility
                );
                if !next.negative_available() {
                    log::info!("No button exhausted");
                }
            }
        }
        Rc::new(next)
    }
}

#[function_component(Proposal)]
pub fn proposal(props: &ProposalProps) -> Html {
    let decision = use_reducer(DecisionWidgetState::initial);

    let on_yes = {
        let decision = decision.dispatcher();
        Callback::from(move |_: MouseEvent| decision.dispatch(DecisionEvent::Affirmative))
    };

    // Hovering and clicking both count, so the button runs before it can be pressed.
    let on_no = {
        let decision = decision.dispatcher();
        Callback::from(move |_: MouseEvent| decision.dispatch(DecisionEvent::NegativeEngaged))
    };

    html! {
        <div class="proposal">
            <style>
                {r#"
                    .proposal {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        width: 100%;
                        max-width: 896px;
                        margin: 0 auto;
                        animation: proposalIn 0.5s ease-out;
                    }
                    .proposal-star {
                        margin-bottom: 32px;
                        font-size: 56px;
                        color: #d4af37;
                        animation: wobble 4s infinite;
                    }
                    .proposal-question {
                        margin-bottom: 48px;
                        font-family: 'Great Vibes', cursive;
                        font-size: 48px;
                        line-height: 1.15;
                        color: #d23369;
                        text-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                    }
                    .proposal-buttons {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 32px;
                        width: 100%;
                    }
                    .yes-button {
                        position: relative;
                        z-index: 10;
                        border: none;
                        border-radius: 9999px;
                        background: #d23369;
                        padding: 20px 48px;
                        font-family: 'Lora', serif;
                        font-size: 24px;
                        font-weight: 700;
                        color: #fff;
                        cursor: pointer;
                        box-shadow: 0 20px 25px rgba(210, 51, 105, 0.3);
                        transition: transform 0.2s, background 0.2s;
                    }
                    .yes-button:hover {
                        transform: scale(1.1);
                        background: #e11d48;
                    }
                    .yes-button:active {
                        transform: scale(0.95);
                    }
                    .no-button {
                        border: 2px solid #d23369;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(4px);
                        padding: 12px 32px;
                        font-family: 'Lora', serif;
                        font-size: 18px;
                        color: #d23369;
                        cursor: pointer;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: transform 0.3s ease-out, opacity 0.3s ease-out;
                    }
                    .plea {
                        margin-top: 32px;
                        font-style: italic;
                        color: #6b7280;
                        animation: fadeIn 0.4s ease-in;
                    }
                    .success {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        padding: 0 16px;
                        animation: successIn 0.6s ease-out;
                    }
                    .success-icons {
                        display: flex;
                        justify-content: center;
                        gap: 16px;
                        margin-bottom: 32px;
                        font-size: 64px;
                    }
                    .success-icons span {
                        opacity: 0;
                        animation: riseIn 0.5s ease-out forwards;
                    }
                    .success-title {
                        margin-bottom: 24px;
                        font-family: 'Great Vibes', cursive;
                        font-size: 64px;
                        color: #d23369;
                    }
                    .success-body {
                        max-width: 768px;
                        font-size: 20px;
                    }
                    .success-photo {
                        position: relative;
                        margin: 48px auto 0;
                        width: 192px;
                        height: 192px;
                        animation: breathe 2s infinite;
                    }
                    .success-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        border-radius: 50%;
                        border: 4px solid #fff;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    @media (min-width: 640px) {
                        .proposal-question { font-size: 72px; }
                        .proposal-buttons { flex-direction: row; gap: 48px; }
                        .yes-button { padding: 24px 64px; font-size: 30px; }
                        .no-button { padding: 16px 40px; font-size: 20px; }
                        .success-title { font-size: 96px; }
                        .success-body { font-size: 30px; }
                        .success-photo { width: 256px; height: 256px; }
                    }
                    @keyframes wobble {
                        0%, 100% { transform: rotate(0deg); }
                        33% { transform: rotate(5deg); }
                        66% { transform: rotate(-5deg); }
                    }
                    @keyframes proposalIn {
                        from { opacity: 0; transform: scale(0.9); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @keyframes successIn {
                        from { opacity: 0; transform: scale(0.5); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @keyframes riseIn {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes breathe {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.1); }
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
            {
                if decision.affirmative_chosen {
                    html! {
                        <div class="success">
                            <div class="success-icons">
                                <span style="animation-delay: 0.2s;">{"🔥"}</span>
                                <span style="animation-delay: 0.4s;">{"💖"}</span>
                                <span style="animation-delay: 0.6s;">{"✨"}</span>
                            </div>
                            <h2 class="success-title">{ props.success_title.clone() }</h2>
                            <p class="success-body">{ props.success_body.clone() }</p>
                            <div class="success-photo">
                                <img src={props.success_photo.clone()} alt="Us" />
                            </div>
                        </div>
                    }
                } else {
                    html! {
                        <>
                            <div class="proposal-star">{"★"}</div>
                            <h2 class="proposal-question">{ props.question.clone() }</h2>
                            <div class="proposal-buttons">
                                <button class="yes-button" onclick={on_yes}>
                                    {"YES ♥"}
                                </button>
                                {
                                    if decision.negative_available() {
                                        html! {
                                            <button
                                                class="no-button"
                                                style={no_button_style(&decision)}
                                                onmouseenter={on_no.clone()}
                                                onclick={on_no}
                                            >
                                                { decision.label_for() }
                                            </button>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                            {
                                if decision.auxiliary_prompt_visible() {
                                    html! { <p class="plea">{"(Please say yes... 🥺)"}</p> }
                                } else {
                                    html! {}
                                }
                            }
                        </>
                    }
                }
            }
        </div>
    }
}
