mod country_code_tests;

static ONCE: std::sync::Once = std::sync::Once::new();

pub(super) fn init_logger() {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}
