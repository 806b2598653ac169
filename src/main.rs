use encode_terminal::components::{App, AppProps};
use encode_terminal::config::GraderConfig;
use encode_terminal::grading::{GeminiGrader, GraderHandle};
use encode_terminal::storage::{BrowserStorage, StorageHandle};
use encode_terminal::util;
use log::LevelFilter;

fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    util::init_console_logging(LevelFilter::Info);

    let config = GraderConfig::from_build_env();
    if config.api_key.is_none() {
        log::warn!("GEMINI_API_KEY was not set at build time; every submission will score 0");
    }
    log::info!("grading with model {}", config.model);

    let props = AppProps {
        storage: StorageHandle::new(BrowserStorage),
        grader: GraderHandle::new(GeminiGrader::new(config)),
    };
    yew::Renderer::<App>::with_props(props).render();
}
