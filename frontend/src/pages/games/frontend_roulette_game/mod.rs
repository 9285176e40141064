mod roulette_canvas;
mod roulette_utils;

use yew::prelude::*;
use gloo::net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use shared::constants::ROULETTE_API_ENDPOINT;
use shared::shared_roulette_game::*;
use web_sys::{window, HtmlInputElement};
use std::rc::Rc;
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use uuid::Uuid;
use crate::config::get_api_base_url;
use crate::styles;

use roulette_canvas::RouletteCanvas;
use roulette_utils::{
    load_bet_history, save_bet_history, selected_color_to_text,
    BetHistoryTable, ColorBetButton, RouletteGameHistoryEntry,
};

// Keep the ball at full speed for at least this long, so a fast server
// response still shows some animation before the settle kicks in
const MIN_ROLL_SHOWCASE_MS: u32 = 500;

// Ask the server where the ball lands
async fn fetch_roulette_roll() -> Result<RouletteValue, String> {
    match Request::post(&format!("{}{}", get_api_base_url(), ROULETTE_API_ENDPOINT))
        .send()
        .await
    {
        Ok(response) => {
            if response.ok() {
                match response.json::<RouletteRollResponse>().await {
                    Ok(data) => Ok(data.value),
                    Err(e) => Err(format!("Error parsing roll response: {:?}", e)),
                }
            } else {
                Err(format!("Error status: {}", response.status()))
            }
        }
        Err(e) => Err(format!("Network error: {:?}", e)),
    }
}

#[function_component(FrontendRouletteGame)]
pub fn frontend_roulette_game() -> Html {
    // Game state
    let game = use_mut_ref(RouletteGame::new);
    let ball_rotation = use_state_eq(|| 0.0_f64);
    let selected_color = use_state(|| None::<RouletteColor>);
    let stake_value = use_state(|| 0.0_f64);
    let is_submitting = use_state(|| false);
    let bet_history = use_state(load_bet_history);

    // Persist the bet history whenever it changes
    use_effect_with((*bet_history).clone(), |history| {
        save_bet_history(history);
        || ()
    });

    // Drive the animation with requestAnimationFrame for the life of the
    // component. The loop advances the state machine once per frame and
    // mirrors the ball angle into component state for the canvas to draw.
    {
        let game = game.clone();
        let ball_rotation = ball_rotation.clone();

        use_effect_with((), move |_| {
            let raf_id = Rc::new(RefCell::new(0));
            let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            let g = f.clone();

            let raf_id_inner = raf_id.clone();
            let mut last_tick = js_sys::Date::now();

            *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let now = js_sys::Date::now();
                let diff = now - last_tick;
                last_tick = now;

                game.borrow_mut().advance(diff);
                ball_rotation.set(game.borrow().ball_rotation());

                // Request next frame
                if let Some(window) = window() {
                    if let Ok(id) = window.request_animation_frame(
                        f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    ) {
                        *raf_id_inner.borrow_mut() = id;
                    }
                }
            }) as Box<dyn FnMut()>));

            // Start the loop
            if let Some(window) = window() {
                if let Ok(id) = window.request_animation_frame(
                    g.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                ) {
                    *raf_id.borrow_mut() = id;
                }
            }

            move || {
                if let Some(window) = window() {
                    let _ = window.cancel_animation_frame(*raf_id.borrow());
                }
                g.borrow_mut().take();
            }
        });
    }

    let is_form_invalid = !(*stake_value > 0.0 && selected_color.is_some());

    let on_pick_black = {
        let selected_color = selected_color.clone();
        Callback::from(move |_: MouseEvent| selected_color.set(Some(RouletteColor::Black)))
    };

    let on_pick_red = {
        let selected_color = selected_color.clone();
        Callback::from(move |_: MouseEvent| selected_color.set(Some(RouletteColor::Red)))
    };

    let on_stake_input = {
        let stake_value = stake_value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            stake_value.set(input.value().parse::<f64>().unwrap_or(0.0));
        })
    };

    // The submit button doubles as the validation nag, the form handler
    // below only accepts complete bets
    let on_go_click = Callback::from(move |_: MouseEvent| {
        if is_form_invalid {
            if let Some(window) = window() {
                let _ =
                    window.alert_with_message("Please select a color and enter a bet value > 0$!");
            }
        }
    });

    let on_submit = {
        let game = game.clone();
        let selected_color = selected_color.clone();
        let stake_value = stake_value.clone();
        let is_submitting = is_submitting.clone();
        let bet_history = bet_history.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting || is_form_invalid {
                return;
            }

            let game = game.clone();
            let selected_color = selected_color.clone();
            let stake_value = stake_value.clone();
            let is_submitting = is_submitting.clone();
            let bet_history = bet_history.clone();

            let picked_color = *selected_color;
            let stake = *stake_value;

            is_submitting.set(true);
            game.borrow_mut().start_rolling();

            spawn_local(async move {
                let (_, roll) = futures::join!(
                    TimeoutFuture::new(MIN_ROLL_SHOWCASE_MS),
                    fetch_roulette_roll()
                );

                match roll {
                    Ok(settled_on) => {
                        let cool_off = game.borrow_mut().settle_roll(settled_on);
                        let won = picked_color == Some(settled_on.color());

                        // Wait out the deceleration before recording the bet
                        TimeoutFuture::new(cool_off).await;

                        let mut history = (*bet_history).clone();
                        history.push(RouletteGameHistoryEntry {
                            uuid: Uuid::new_v4(),
                            color: picked_color,
                            bet_stake_value: stake,
                            won,
                        });
                        bet_history.set(history);
                    }
                    Err(message) => {
                        log::error!("Roulette roll failed: {}", message);
                    }
                }

                is_submitting.set(false);
                stake_value.set(0.0);
                selected_color.set(None);
            });
        })
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white">
                <span class="bg-clip-text text-transparent bg-gradient-to-r from-red-500 to-amber-500">{"Roulette"}</span>
            </h1>

            <div class={classes!(styles::CARD, "max-w-2xl", "mx-auto")}>
                <div class="relative mx-auto mb-6 flex justify-center items-center">
                    <RouletteCanvas ball_rotation={*ball_rotation} />
                </div>

                <form onsubmit={on_submit} class="space-y-4">
                    <div class="text-center font-semibold text-gray-900 dark:text-white">
                        {"COLOR BET "}
                        <i class="font-normal text-gray-500 dark:text-gray-400">
                            {format!("(picked {})", selected_color_to_text(*selected_color))}
                        </i>
                    </div>
                    <div class="flex flex-wrap justify-center items-center gap-4">
                        <ColorBetButton
                            color={RouletteColor::Black}
                            selected={*selected_color == Some(RouletteColor::Black)}
                            onclick={on_pick_black}
                        />
                        <ColorBetButton
                            color={RouletteColor::Red}
                            selected={*selected_color == Some(RouletteColor::Red)}
                            onclick={on_pick_red}
                        />
                        <input
                            type="number"
                            min="0"
                            step="any"
                            value={stake_value.to_string()}
                            oninput={on_stake_input}
                            placeholder="bet value"
                            class="w-32 rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 focus:ring-2 focus:ring-blue-600"
                        />
                    </div>
                    <div class="flex justify-center">
                        <button
                            type="submit"
                            onclick={on_go_click}
                            disabled={*is_submitting}
                            class={classes!(
                                styles::BUTTON_PRIMARY,
                                "px-10",
                                "py-3",
                                "text-lg",
                                if *is_submitting { "opacity-75 cursor-not-allowed" } else { "" }
                            )}
                        >
                            { if *is_submitting { "Rolling..." } else { "GO!" } }
                        </button>
                    </div>
                </form>

                <BetHistoryTable history={(*bet_history).clone()} />
            </div>
        </div>
    }
}
