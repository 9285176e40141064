use yew::prelude::*;
use crate::pages::games::FrontendRouletteGame;
use crate::styles;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class={styles::CONTAINER}>
            <main class="flex flex-col items-center justify-center py-8">
                <FrontendRouletteGame />
            </main>
        </div>
    }
}
