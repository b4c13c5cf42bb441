// Browser smoke tests; run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use matchstick_patterns::MatchstickGame;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn renders_into_element() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let host = doc.create_element("div").unwrap();
    host.set_id("figure");
    doc.body().unwrap().append_child(&host).unwrap();

    let mut game = MatchstickGame::new();
    game.start();
    game.render_into("figure").unwrap();
    assert!(host.inner_html().starts_with("<svg"));
}

#[wasm_bindgen_test]
fn missing_element_is_an_error() {
    let game = MatchstickGame::new();
    assert!(game.render_into("does-not-exist").is_err());
}
