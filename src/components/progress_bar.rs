use yew::prelude::*;
use yew_hooks::prelude::*;

/// Fraction of the page scrolled, clamped to `[0, 1]`. A page that fits the
/// viewport counts as fully read.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 1.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

fn document_height() -> Option<f64> {
    let element = web_sys::window()?.document()?.document_element()?;
    Some(f64::from(element.scroll_height()))
}

#[function_component(ProgressBar)]
pub fn progress_bar() -> Html {
    // Both hooks re-render on scroll/resize, so the document height read below stays fresh.
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();

    let progress = document_height()
        .map(|height| scroll_progress(scroll_y, height, viewport_height))
        .unwrap_or(0.0);

    html! {
        <>
            <style>
                {r#"
                    .progress-bar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 6px;
                        background: #d23369;
                        transform-origin: left;
                        z-index: 50;
                    }
                    @media (min-width: 640px) {
                        .progress-bar { height: 8px; }
                    }
                "#}
            </style>
            <div class="progress-bar" style={format!("transform: scaleX({:.4});", progress)} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_fraction_of_scrollable_height() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn progress_is_clamped() {
        // Overscroll on touch devices can report values outside the page.
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2300.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn short_page_counts_as_read() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 1.0);
    }
}
