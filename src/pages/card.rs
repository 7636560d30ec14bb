use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::{
    floating_hearts::FloatingHearts,
    gallery::Gallery,
    loading_screen::LoadingScreen,
    playlist::Playlist,
    progress_bar::ProgressBar,
    proposal::Proposal,
    section::Section,
};
use crate::config::CardConfig;
use crate::state::narrative::{NarrativePhase, LOADING_DELAY_MS};

#[derive(Properties, PartialEq)]
pub struct GateProps {
    pub config: CardConfig,
    pub on_open: Callback<MouseEvent>,
}

#[function_component(Gate)]
pub fn gate(props: &GateProps) -> Html {
    html! {
        <div class="gate">
            <FloatingHearts />
            <div class="gate-card">
                <div class="gate-heart">
                    <span class="gate-heart-beat">{"♥"}</span>
                    <span class="gate-sparkle">{"✨"}</span>
                </div>
                <h1 class="gate-title">{ props.config.gate_title.clone() }</h1>
                <p class="gate-tagline">{ props.config.gate_tagline.clone() }</p>
                <button class="gate-button" onclick={props.on_open.clone()}>
                    <span>{ format!("{} ♥", props.config.gate_button) }</span>
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StoryProps {
    pub config: CardConfig,
}

#[function_component(Story)]
pub fn story(props: &StoryProps) -> Html {
    let config = &props.config;

    html! {
        <div class="story">
            <ProgressBar />
            <FloatingHearts />

            <Section>
                <div class="intro-badge">
                    <span class="intro-heart">{"♥"}</span>
                </div>
                <h1 class="story-title">{ config.intro_title.clone() }</h1>
                <p class="story-body">{ config.intro_body.clone() }</p>
                <span class="sparkle-pulse">{"✨"}</span>
            </Section>

            {
                if config.photos.is_empty() {
                    html! {}
                } else {
                    html! {
                        <Section class={classes!("gallery-section")}>
                            <Gallery title={config.gallery_title.clone()} photos={config.photos.clone()} />
                        </Section>
                    }
                }
            }

            <Section>
                <Playlist title={config.playlist_title.clone()} embed_url={config.playlist_url.clone()} />
            </Section>

            <Section class={classes!("question-section")}>
                <Proposal
                    question={config.question.clone()}
                    success_title={config.success_title.clone()}
                    success_body={config.success_body.clone()}
                    success_photo={config.success_photo.clone()}
                />
            </Section>

            <footer class="card-footer">
                <p>{"Made with "}<span class="footer-heart">{"♥"}</span>{" for you."}</p>
            </footer>
        </div>
    }
}

#[derive(Debug, Clone, Copy)]
pub enum PhaseEvent {
    TimerElapsed,
    UserAdvance,
}

impl Reducible for NarrativePhase {
    type Action = PhaseEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            PhaseEvent::TimerElapsed => self.on_timer_elapsed(),
            PhaseEvent::UserAdvance => self.on_user_advance(),
        };
        if next == *self {
            log::debug!("Ignored {:?} while in {:?}", action, *self);
            return self;
        }
        log::info!("Narrative phase {:?} -> {:?}", *self, next);
        Rc::new(next)
    }
}

#[function_component(Card)]
pub fn card() -> Html {
    let config = use_state(CardConfig::load);
    let phase = use_reducer(NarrativePhase::initialize);

    // Minimum loading time. Dropping the timeout on unmount cancels it.
    {
        let phase = phase.dispatcher();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(LOADING_DELAY_MS, move || {
                    phase.dispatch(PhaseEvent::TimerElapsed);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let on_open = {
        let phase = phase.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            phase.dispatch(PhaseEvent::UserAdvance);
        })
    };

    html! {
        <>
            <style>
                {r#"
                    html, body {
                        margin: 0;
                        padding: 0;
                        background: #f7e7ce;
                        color: #4a1e2c;
                        font-family: 'Lora', serif;
                    }
                    ::selection {
                        background: #f4c2c2;
                        color: #d23369;
                    }
                    .gate {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        padding: 16px;
                        box-sizing: border-box;
                    }
                    .gate-card {
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 24px;
                        width: 100%;
                        max-width: 512px;
                        padding: 32px;
                        box-sizing: border-box;
                        border-radius: 24px;
                        background: rgba(255, 255, 255, 0.4);
                        border: 1px solid rgba(255, 255, 255, 0.5);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        animation: gateIn 0.8s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    .gate-heart {
                        position: relative;
                        font-size: 72px;
                        color: #d23369;
                    }
                    .gate-heart-beat {
                        display: inline-block;
                        animation: heartbeat 2s infinite;
                    }
                    .gate-sparkle {
                        position: absolute;
                        top: -16px;
                        right: -16px;
                        font-size: 30px;
                        animation: pulse 2s infinite;
                    }
                    .gate-title, .story-title {
                        margin: 0;
                        font-family: 'Great Vibes', cursive;
                        font-size: 48px;
                        font-weight: 400;
                        color: #d23369;
                    }
                    .gate-tagline {
                        margin: 0;
                        font-size: 18px;
                        font-style: italic;
                        opacity: 0.8;
                    }
                    .gate-button {
                        width: 100%;
                        border: none;
                        border-radius: 9999px;
                        background: linear-gradient(to right, #d23369, #fb7185);
                        padding: 16px 32px;
                        font-family: 'Lora', serif;
                        font-size: 18px;
                        font-weight: 700;
                        color: #fff;
                        cursor: pointer;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                        transition: transform 0.2s;
                    }
                    .gate-button:hover {
                        transform: scale(1.05);
                    }
                    .story {
                        position: relative;
                        min-height: 100vh;
                        overflow-x: hidden;
                    }
                    .story-section {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        min-height: 100vh;
                        width: 100%;
                        box-sizing: border-box;
                        align-items: center;
                        justify-content: center;
                        padding: 64px 16px;
                        text-align: center;
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.8s, transform 0.8s;
                    }
                    .story-section.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .story-section-inner {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        width: 100%;
                        max-width: 1152px;
                        margin: 0 auto;
                    }
                    .gallery-section {
                        padding-left: 16px;
                        padding-right: 16px;
                    }
                    .question-section {
                        padding-top: 80px;
                        padding-bottom: 80px;
                    }
                    .chapter-heading {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 16px;
                        margin-bottom: 48px;
                        color: #d23369;
                    }
                    .chapter-heading h2 {
                        margin: 0;
                        font-family: 'Great Vibes', cursive;
                        font-size: 40px;
                        font-weight: 400;
                    }
                    .chapter-icon {
                        font-size: 40px;
                    }
                    .intro-badge {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 128px;
                        height: 128px;
                        margin-bottom: 32px;
                        border-radius: 50%;
                        background: #fff;
                        box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.06);
                    }
                    .intro-heart {
                        font-size: 64px;
                        color: #d23369;
                        animation: heartbeat 1.5s ease-in-out infinite;
                    }
                    .story-title {
                        margin-bottom: 24px;
                    }
                    .story-body {
                        max-width: 672px;
                        margin: 0 auto;
                        font-size: 20px;
                        line-height: 1.6;
                        opacity: 0.9;
                    }
                    .sparkle-pulse {
                        margin-top: 32px;
                        font-size: 30px;
                        animation: pulse 2s infinite;
                    }
                    .card-footer {
                        position: relative;
                        z-index: 10;
                        padding: 32px 0;
                        text-align: center;
                        font-size: 14px;
                        color: rgba(210, 51, 105, 0.8);
                        background: rgba(255, 255, 255, 0.4);
                        backdrop-filter: blur(12px);
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                    }
                    .footer-heart {
                        color: #ef4444;
                    }
                    @media (min-width: 640px) {
                        .gate-card { padding: 48px; }
                        .gate-heart { font-size: 128px; }
                        .gate-title, .story-title { font-size: 72px; }
                        .gate-tagline { font-size: 20px; }
                        .gate-button { width: auto; padding: 20px 48px; font-size: 20px; }
                        .story-section { padding: 96px 24px; }
                        .question-section { padding-top: 128px; padding-bottom: 128px; }
                        .chapter-heading { flex-direction: row; }
                        .chapter-heading h2 { font-size: 48px; }
                        .intro-badge { width: 160px; height: 160px; }
                        .story-body { font-size: 24px; }
                        .card-footer { font-size: 16px; }
                    }
                    @keyframes gateIn {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @keyframes heartbeat {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.15); }
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }
                "#}
            </style>
            <LoadingScreen leaving={!phase.shows_loading_overlay()} />
            {
                if phase.has_started() {
                    html! { <Story config={(*config).clone()} /> }
                } else {
                    html! { <Gate config={(*config).clone()} on_open={on_open} /> }
                }
            }
        </>
    }
}
