/// Install the log backend
///
/// With `esp32-log` enabled records go to the ESP console, otherwise the
/// application is expected to install its own `log` implementation.
pub fn init() {
    #[cfg(feature = "esp32-log")]
    esp_println::logger::init_logger_from_env();
}
