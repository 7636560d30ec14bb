use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Share of a section that has to be on screen before it reveals itself.
const REVEAL_AMOUNT: f64 = 0.2;

/// Whether at least `amount` of an element spanning `top..top + height`
/// (viewport coordinates) overlaps a viewport of `viewport_height`.
pub fn is_in_view(top: f64, height: f64, viewport_height: f64, amount: f64) -> bool {
    if height <= 0.0 {
        return false;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    visible >= height.min(viewport_height) * amount
}

fn element_in_view(element: &Element) -> bool {
    let viewport_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    is_in_view(rect.top(), rect.height(), viewport_height, REVEAL_AMOUNT)
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Full-height chapter that fades in the first time it scrolls into view and
/// then stays revealed.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let reveal = revealed.clone();
        use_effect_with_deps(
            move |already_revealed| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) if !*already_revealed => {
                        let check = {
                            let node = node.clone();
                            let reveal = reveal.clone();
                            move || {
                                if let Some(element) = node.cast::<Element>() {
                                    if element_in_view(&element) {
                                        reveal.set(true);
                                    }
                                }
                            }
                        };
                        // Sections already on screen at mount never see a scroll event.
                        check();
                        let callback = Closure::<dyn Fn()>::new(check);
                        if let Err(e) = window
                            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        {
                            log::error!("Failed to watch scroll for section reveal: {:?}", e);
                        }
                        Box::new(move || {
                            if let Err(e) = window
                                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                            {
                                log::error!("Failed to stop watching scroll for section reveal: {:?}", e);
                            }
                        })
                    }
                    _ => Box::new(|| ()),
                };
                destructor
            },
            *revealed,
        );
    }

    html! {
        <section ref={node} class={classes!("story-section", (*revealed).then(|| "revealed"), props.class.clone())}>
            <div class="story-section-inner">
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_the_fold_is_hidden() {
        assert!(!is_in_view(1200.0, 900.0, 1000.0, REVEAL_AMOUNT));
        assert!(!is_in_view(1000.0, 900.0, 1000.0, REVEAL_AMOUNT));
    }

    #[test]
    fn reveals_at_twenty_percent() {
        // 180px of a 900px section showing.
        assert!(is_in_view(820.0, 900.0, 1000.0, REVEAL_AMOUNT));
        assert!(!is_in_view(830.0, 900.0, 1000.0, REVEAL_AMOUNT));
    }

    #[test]
    fn scrolled_past_top_still_counts() {
        assert!(is_in_view(-600.0, 900.0, 1000.0, REVEAL_AMOUNT));
        assert!(!is_in_view(-890.0, 900.0, 1000.0, REVEAL_AMOUNT));
    }

    #[test]
    fn tall_sections_measure_against_the_viewport() {
        // A 3000px section can never be 20% visible in a 1000px window by its own height.
        assert!(is_in_view(800.0, 3000.0, 1000.0, REVEAL_AMOUNT));
    }

    #[test]
    fn collapsed_element_is_never_in_view() {
        assert!(!is_in_view(100.0, 0.0, 1000.0, REVEAL_AMOUNT));
    }
}
