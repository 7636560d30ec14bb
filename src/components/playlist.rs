use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlaylistProps {
    pub title: AttrValue,
    pub embed_url: AttrValue,
}

#[function_component(Playlist)]
pub fn playlist(props: &PlaylistProps) -> Html {
    html! {
        <>
            <style>
                {r#"
                    .playlist-wrapper {
                        position: relative;
                        width: 100%;
                        max-width: 768px;
                        margin: 0 auto;
                        padding: 0 8px;
                    }
                    .playlist-glow {
                        position: absolute;
                        inset: -4px;
                        background: linear-gradient(to right, #d23369, #d4af37, #d23369);
                        border-radius: 24px;
                        filter: blur(8px);
                        opacity: 0.2;
                    }
                    .playlist-frame {
                        position: relative;
                        overflow: hidden;
                        border-radius: 24px;
                        background: #000;
                        border: 4px solid rgba(255, 255, 255, 0.1);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .playlist-frame iframe {
                        display: block;
                        border: 0;
                        border-radius: 12px;
                        opacity: 0.95;
                    }
                    .bouncing {
                        animation: bounce 1s infinite;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); }
                        50% { transform: translateY(0); }
                    }
                "#}
            </style>
            <div class="chapter-heading">
                <span class="chapter-icon bouncing">{"🎵"}</span>
                <h2>{ props.title.clone() }</h2>
            </div>
            <div class="playlist-wrapper">
                <div class="playlist-glow"></div>
                <div class="playlist-frame">
                    <iframe
                        data-testid="embed-iframe"
                        src={props.embed_url.clone()}
                        width="100%"
                        height="352"
                        allowfullscreen=true
                        allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture"
                        loading="lazy"
                    ></iframe>
                </div>
            </div>
        </>
    }
}
