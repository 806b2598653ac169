// Browser-only checks. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use encode_terminal::components::{App, AppProps};
use encode_terminal::grading::{GradeFuture, GradeRequest, GradeResponse, Grader, GraderHandle};
use encode_terminal::storage::{BrowserStorage, KeyValueStore, MemoryStore, StorageHandle};
use encode_terminal::util::random_index;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

struct OfflineGrader;

impl Grader for OfflineGrader {
    fn grade(&self, _request: GradeRequest) -> GradeFuture {
        Box::pin(async { GradeResponse::connection_failure() })
    }
}

#[wasm_bindgen_test]
fn random_index_stays_in_range() {
    for len in [1usize, 2, 19] {
        for _ in 0..200 {
            assert!(random_index(len) < len);
        }
    }
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let store = BrowserStorage;
    store.set("encode_test_key", "value").expect("localStorage writable");
    assert_eq!(store.get("encode_test_key").as_deref(), Some("value"));
}

#[wasm_bindgen_test(async)]
async fn app_mounts_on_menu_with_theme_applied() {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document available");
    let root = document.create_element("div").expect("create test root");
    document.body().expect("body available").append_child(&root).expect("append test root");

    let props = AppProps {
        storage: StorageHandle::new(MemoryStore::new()),
        grader: GraderHandle::new(OfflineGrader),
    };
    let _handle = yew::Renderer::<App>::with_root_and_props(root.clone(), props).render();
    TimeoutFuture::new(20).await;

    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("ENCODE_OS"));
    assert!(text.contains("MENU"));
    let theme = document.document_element().and_then(|el| el.get_attribute("data-theme"));
    assert_eq!(theme.as_deref(), Some("TERMINAL"));
}
