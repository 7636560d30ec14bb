use yew::prelude::*;

/// Seconds between the reveal of consecutive photos.
const STAGGER_S: f64 = 0.1;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub title: AttrValue,
    pub photos: Vec<String>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    html! {
        <div class="gallery">
            <style>
                {r#"
                    .gallery {
                        width: 100%;
                        background: rgba(255, 255, 255, 0.3);
                        backdrop-filter: blur(4px);
                        border: 1px solid rgba(255, 255, 255, 0.6);
                        border-radius: 24px;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                        padding: 48px 16px;
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 24px;
                    }
                    @media (min-width: 640px) {
                        .gallery { padding: 48px 40px; }
                        .gallery-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .gallery-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .gallery-card {
                        overflow: hidden;
                        border-radius: 16px;
                        background: #fff;
                        padding: 12px;
                        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
                        opacity: 0;
                        transform: scale(0.9);
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .revealed .gallery-card {
                        animation: photoIn 0.5s ease-out forwards;
                    }
                    .gallery-card:hover {
                        transform: translateY(-10px);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2);
                    }
                    .gallery-frame {
                        position: relative;
                        aspect-ratio: 4 / 5;
                        overflow: hidden;
                        border-radius: 12px;
                        background: rgba(244, 194, 194, 0.2);
                    }
                    .gallery-frame img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s;
                    }
                    .gallery-frame img:hover {
                        transform: scale(1.1);
                    }
                    @keyframes photoIn {
                        to { opacity: 1; transform: scale(1); }
                    }
                "#}
            </style>
            <div class="chapter-heading">
                <span class="chapter-icon">{"📷"}</span>
                <h2>{ props.title.clone() }</h2>
            </div>
            <div class="gallery-grid">
                { for props.photos.iter().enumerate().map(|(index, src)| html! {
                    <div
                        key={index}
                        class="gallery-card"
                        style={format!("animation-delay: {:.1}s;", index as f64 * STAGGER_S)}
                    >
                        <div class="gallery-frame">
                            <img src={src.clone()} alt={format!("Memory {}", index + 1)} loading="lazy" />
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}
