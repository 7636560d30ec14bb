use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    /// Set once loading is over; the overlay fades out instead of vanishing.
    pub leaving: bool,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    html! {
        <div class={classes!("loading-screen", props.leaving.then(|| "leaving"))}>
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: #f7e7ce;
                        transition: opacity 0.6s ease-out;
                    }
                    .loading-screen.leaving {
                        opacity: 0;
                        pointer-events: none;
                    }
                    .loading-heart {
                        position: relative;
                        font-size: 80px;
                        color: #d23369;
                        animation: loaderPulse 1.5s ease-in-out infinite, loaderSpin 3s linear infinite;
                    }
                    .loading-heart-inner {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 30px;
                        color: #fff;
                        animation: loaderBlink 1.5s ease-in-out infinite;
                    }
                    .loading-text {
                        margin-top: 24px;
                        font-family: 'Great Vibes', cursive;
                        font-size: 30px;
                        color: #d23369;
                        opacity: 0;
                        animation: loaderText 0.6s ease-out 0.5s forwards;
                    }
                    @keyframes loaderPulse {
                        0%, 100% { scale: 1; }
                        50% { scale: 1.2; }
                    }
                    @keyframes loaderSpin {
                        from { rotate: 0deg; }
                        to { rotate: 360deg; }
                    }
                    @keyframes loaderBlink {
                        0%, 100% { opacity: 0; }
                        50% { opacity: 1; }
                    }
                    @keyframes loaderText {
                        from { opacity: 0; transform: translateY(10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
            <div class="loading-heart">
                {"♥"}
                <div class="loading-heart-inner">{"♡"}</div>
            </div>
            <p class="loading-text">{"Preparing something special..."}</p>
        </div>
    }
}
