use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 16px;
                        height: 100vh;
                        background: #f7e7ce;
                        color: #d23369;
                        font-family: 'Lora', serif;
                        text-align: center;
                    }
                    .not-found h1 {
                        margin: 0;
                        font-family: 'Great Vibes', cursive;
                        font-size: 56px;
                        font-weight: 400;
                    }
                    .not-found a {
                        color: #d23369;
                    }
                "#}
            </style>
            <h1>{"Lost your way?"}</h1>
            <p>
                <Link<Route> to={Route::Card}>
                    {"Back to the card ♥"}
                </Link<Route>>
            </p>
        </div>
    }
}
