use yew::prelude::*;

use crate::random::{between, BrowserRandom, UnitSource};

const HEART_COUNT: usize = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    pub id: usize,
    /// Percent of the viewport width.
    pub left: f64,
    pub delay_s: f64,
    pub scale: f64,
    pub duration_s: f64,
}

impl Heart {
    fn scatter(id: usize, source: &mut impl UnitSource) -> Self {
        Self {
            id,
            left: between(source, 0.0, 100.0),
            delay_s: between(source, 0.0, 5.0),
            scale: between(source, 0.3, 0.8),
            duration_s: between(source, 7.0, 12.0),
        }
    }
}

pub fn scatter_hearts(count: usize, source: &mut impl UnitSource) -> Vec<Heart> {
    (0..count).map(|id| Heart::scatter(id, source)).collect()
}

/// Decorative hearts drifting up behind the content. Positions are rolled once per mount.
#[function_component(FloatingHearts)]
pub fn floating_hearts() -> Html {
    let hearts = use_state(|| scatter_hearts(HEART_COUNT, &mut BrowserRandom));

    html! {
        <div class="floating-hearts">
            <style>
                {r#"
                    .floating-hearts {
                        pointer-events: none;
                        position: fixed;
                        inset: 0;
                        z-index: 0;
                        overflow: hidden;
                    }
                    .floating-heart {
                        position: absolute;
                        bottom: 0;
                        font-size: 40px;
                        color: rgba(210, 51, 105, 0.2);
                        opacity: 0;
                        animation-name: floatUp;
                        animation-timing-function: linear;
                        animation-iteration-count: infinite;
                    }
                    @keyframes floatUp {
                        0% { transform: translateY(110vh) scale(var(--heart-scale)); opacity: 0; }
                        50% { opacity: 0.8; }
                        100% { transform: translateY(-110vh) scale(var(--heart-scale)); opacity: 0; }
                    }
                "#}
            </style>
            { for hearts.iter().map(|heart| html! {
                <span
                    key={heart.id}
                    class="floating-heart"
                    style={format!(
                        "left: {:.2}%; --heart-scale: {:.2}; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                        heart.left, heart.scale, heart.delay_s, heart.duration_s
                    )}
                >
                    {"♥"}
                </span>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::Sequence;

    #[test]
    fn hearts_stay_in_their_ranges() {
        let mut source = Sequence::new(&[0.0, 0.37, 0.5, 0.91, 0.999]);
        let hearts = scatter_hearts(HEART_COUNT, &mut source);
        assert_eq!(hearts.len(), HEART_COUNT);
        for (i, heart) in hearts.iter().enumerate() {
            assert_eq!(heart.id, i);
            assert!((0.0..100.0).contains(&heart.left));
            assert!((0.0..5.0).contains(&heart.delay_s));
            assert!((0.3..0.8).contains(&heart.scale));
            assert!((7.0..12.0).contains(&heart.duration_s));
        }
    }

    #[test]
    fn each_heart_draws_four_samples() {
        let mut source = Sequence::new(&[0.5, 0.0, 0.0, 0.0, 0.0]);
        let hearts = scatter_hearts(2, &mut source);
        assert_eq!(hearts[0].left, 50.0);
        assert_eq!(hearts[1].left, 0.0);
        assert_eq!(hearts[1].duration_s, 7.0);
    }
}
