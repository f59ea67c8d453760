#![cfg(target_arch = "wasm32")]

use hex_reversi::wasm::{WasmGame, adjacent};
use js_sys::{Array, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn ready_probe() {
    assert!(hex_reversi::wasm_ready());
}

#[wasm_bindgen_test]
fn new_game_exposes_opening_state() {
    let game = WasmGame::new(2).unwrap();

    assert_eq!(game.width(), 8);
    assert_eq!(game.height(), 4);
    assert_eq!(game.board().len(), 32);
    assert_eq!(game.cell_at(7, 0), 2);
    assert_eq!(game.cell_at(0, 0), 0);
    assert_eq!(game.current_player(), 2);
    assert_eq!(game.count_of(3).unwrap(), 4);

    let origins = Array::from(&game.legal_origins(2).unwrap());
    assert_eq!(origins.length(), 4);

    let state = game.state().unwrap();
    assert_eq!(get(&state, "turn_count").as_f64(), Some(0.0));
    assert_eq!(get(&state, "is_game_over").as_bool(), Some(false));
    assert!(game.result().unwrap().is_null());
}

#[wasm_bindgen_test]
fn attempt_move_reports_captures_and_rejects_replay() {
    let mut game = WasmGame::new(2).unwrap();

    let preview = Array::from(&game.preview(5, 0).unwrap());
    assert_eq!(preview.length(), 2);

    let outcome = game.attempt_move(5, 0).unwrap();
    let captured = Array::from(&get(&outcome, "captured"));
    assert_eq!(captured.length(), 2);
    assert_eq!(game.current_player(), 3);

    assert!(game.attempt_move(5, 0).is_err());
    assert_eq!(game.current_player(), 3);
}

#[wasm_bindgen_test]
fn unknown_codes_are_rejected() {
    let game = WasmGame::new(3).unwrap();

    assert!(game.count_of(1).is_err());
    assert!(game.legal_origins(7).is_err());
    assert!(adjacent(4, 3, 6).is_err());

    let step = adjacent(4, 3, 0).unwrap();
    assert_eq!(get(&step, "x").as_f64(), Some(5.0));
    assert_eq!(get(&step, "y").as_f64(), Some(2.0));
}

#[wasm_bindgen_test]
fn from_hash_and_reset_resize_the_board() {
    let mut game = WasmGame::from_hash("#3").unwrap();
    assert_eq!(game.width(), 12);

    game.reset(5).unwrap();
    assert_eq!(game.width(), 20);
    assert!(game.reset(1).is_err());
    assert_eq!(game.width(), 20);

    let clamped = WasmGame::from_hash("#20000").unwrap();
    assert_eq!(clamped.width(), 256);
    assert!(WasmGame::new(65).is_err());
}
