use yew::prelude::*;
use web_sys::window;
use serde::{Serialize, Deserialize};
use uuid::Uuid;
use shared::constants::GAME_HISTORY_LS_KEY;
use shared::shared_roulette_game::RouletteColor;

// One finished bet as it lands in the history table and local storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouletteGameHistoryEntry {
    pub uuid: Uuid,
    pub color: Option<RouletteColor>,
    pub bet_stake_value: f64,
    pub won: bool,
}

// Read the saved bet history from local storage
pub fn load_bet_history() -> Vec<RouletteGameHistoryEntry> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(GAME_HISTORY_LS_KEY).ok().flatten())
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

// Overwrite the saved bet history with a pretty-printed blob
pub fn save_bet_history(history: &[RouletteGameHistoryEntry]) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Ok(raw) = serde_json::to_string_pretty(history) {
            let _ = storage.set_item(GAME_HISTORY_LS_KEY, &raw);
        }
    }
}

pub fn selected_color_to_text(color: Option<RouletteColor>) -> &'static str {
    match color {
        None => "none",
        Some(color) => color.label(),
    }
}

// Color pick button component
#[derive(Properties, PartialEq)]
pub struct ColorBetButtonProps {
    pub color: RouletteColor,
    pub selected: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(ColorBetButton)]
pub fn color_bet_button(props: &ColorBetButtonProps) -> Html {
    let color_class = match props.color {
        RouletteColor::Black => "bg-gray-900 hover:bg-gray-700 text-white",
        RouletteColor::Red => "bg-red-700 hover:bg-red-600 text-white",
    };
    let selected_class = if props.selected {
        "ring-4 ring-yellow-400"
    } else {
        "ring-0"
    };

    html! {
        <button
            type="button"
            onclick={props.onclick.clone()}
            class={classes!(
                "px-6",
                "py-2",
                "rounded-lg",
                "font-bold",
                "uppercase",
                "transition-all",
                "duration-200",
                color_class,
                selected_class
            )}
        >
            {props.color.label()}
        </button>
    }
}

// Bet history table component
#[derive(Properties, PartialEq)]
pub struct BetHistoryTableProps {
    pub history: Vec<RouletteGameHistoryEntry>,
}

#[function_component(BetHistoryTable)]
pub fn bet_history_table(props: &BetHistoryTableProps) -> Html {
    html! {
        <div class="mt-8">
            <h2 class="text-lg font-semibold mb-2 text-gray-900 dark:text-white">{"History"}</h2>
            if props.history.is_empty() {
                <p class="text-sm text-gray-500 dark:text-gray-400">{"No bets placed yet."}</p>
            } else {
                <table class="w-full text-left text-sm text-gray-700 dark:text-gray-300">
                    <thead>
                        <tr class="border-b border-gray-200 dark:border-gray-700 uppercase text-xs">
                            <th class="py-2">{"won?"}</th>
                            <th class="py-2">{"stake"}</th>
                            <th class="py-2">{"color"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for props.history.iter().map(|entry| {
                                html! {
                                    <tr key={entry.uuid.to_string()} class="border-b border-gray-100 dark:border-gray-800">
                                        <td class="py-2">
                                            if entry.won {
                                                <span class="font-bold text-green-600 dark:text-green-400">{"WON"}</span>
                                            } else {
                                                <span class="font-bold text-red-600 dark:text-red-400">{"LOST"}</span>
                                            }
                                        </td>
                                        <td class="py-2">{format!("${}", entry.bet_stake_value)}</td>
                                        <td class="py-2">{selected_color_to_text(entry.color)}</td>
                                    </tr>
                                }
                            })
                        }
                    </tbody>
                </table>
            }
        </div>
    }
}
